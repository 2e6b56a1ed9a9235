//! The two run drivers. Each asset is resolved and written before the next
//! one starts; a failing asset is reported and the run moves on. Only a
//! missing or unreadable source aborts a run.
use crate::fanout::{self, IconSource, OutputPair};
use crate::resolve::first_number;
use crate::{Density, Error, Filter, Result, Scaler, SizeMapping, Strategy};
use std::path::{Path, PathBuf};

/// Copies pre-sized pngs from `source` into the density folders of `res`.
#[derive(Clone, Debug)]
pub struct Distribute {
    pub source: PathBuf,
    pub res: PathBuf,
    pub mapping: SizeMapping,
    pub strategy: Strategy,
}

/// Resizes `icon` to every size of `mapping` and writes it into `res`.
#[derive(Clone, Debug)]
pub struct Generate {
    pub icon: PathBuf,
    pub res: PathBuf,
    pub mapping: SizeMapping,
    pub filter: Filter,
    pub optimize: bool,
}

#[derive(Debug)]
pub enum Outcome {
    Written {
        file_name: String,
        key: u32,
        density: Density,
        pair: OutputPair,
    },
    Skipped {
        file_name: String,
        reason: Error,
    },
    Failed {
        file_name: String,
        error: Error,
    },
}

impl Outcome {
    pub fn file_name(&self) -> &str {
        match self {
            Self::Written { file_name, .. }
            | Self::Skipped { file_name, .. }
            | Self::Failed { file_name, .. } => file_name,
        }
    }
}

/// Gets told about every asset as soon as it is done.
pub trait Observer {
    fn start(&mut self, _total: usize) {}

    fn outcome(&mut self, index: usize, outcome: &Outcome);
}

impl Observer for () {
    fn outcome(&mut self, _index: usize, _outcome: &Outcome) {}
}

#[derive(Debug, Default)]
pub struct Report {
    pub outcomes: Vec<Outcome>,
}

impl Report {
    fn push(&mut self, observer: &mut impl Observer, outcome: Outcome) {
        observer.outcome(self.outcomes.len(), &outcome);
        self.outcomes.push(outcome);
    }

    pub fn written(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Written { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed { .. }))
    }

    fn count(&self, f: impl Fn(&Outcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| f(o)).count()
    }

    /// Skipped assets don't count as failures.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

pub fn distribute(config: &Distribute, observer: &mut impl Observer) -> Result<Report> {
    let files = list_pngs(&config.source)?;
    tracing::info!(
        "found {} png files in {}: {:?}",
        files.len(),
        config.source.display(),
        files
    );
    observer.start(files.len());
    let mut report = Report::default();
    for path in files {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let outcome = match config.strategy.resolve(&config.mapping, &file_name) {
            Some(m) => match copy(&path, &config.res, m.density) {
                Ok(pair) => Outcome::Written {
                    file_name,
                    key: m.key,
                    density: m.density,
                    pair,
                },
                Err(error) => Outcome::Failed { file_name, error },
            },
            None => Outcome::Skipped {
                reason: unresolved(config.strategy, &file_name),
                file_name,
            },
        };
        tracing::debug!("{:?}", outcome);
        report.push(observer, outcome);
    }
    Ok(report)
}

/// Exact matching tells a name without digits apart from a size missing in
/// the table.
fn unresolved(strategy: Strategy, file_name: &str) -> Error {
    match strategy {
        Strategy::Exact => match first_number(file_name) {
            Some(size) => Error::Unmapped {
                size,
                file_name: file_name.to_string(),
            },
            None => Error::Unresolved(file_name.to_string()),
        },
        Strategy::Substring | Strategy::Longest => Error::Unresolved(file_name.to_string()),
    }
}

fn copy(path: &Path, res: &Path, density: Density) -> Result<OutputPair> {
    let bytes = std::fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    fanout::place(res, density, IconSource::Bytes(&bytes))
}

/// Paths of the regular `*.png` files in `dir`, sorted by file name.
fn list_pngs(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(Error::MissingSource(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    let read_err = |source: std::io::Error| Error::Read {
        path: dir.to_path_buf(),
        source,
    };
    let mut files = vec![];
    for entry in std::fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if !path.is_file() || path.extension().map_or(true, |ext| ext != "png") {
            continue;
        }
        files.push(path);
    }
    files.sort();
    Ok(files)
}

pub fn generate(config: &Generate, observer: &mut impl Observer) -> Result<Report> {
    let mut scaler = Scaler::open(&config.icon)?.with_filter(config.filter);
    let (width, height) = scaler.dimensions();
    tracing::info!(
        "loaded {} ({}x{})",
        config.icon.display(),
        width,
        height
    );
    if config.optimize {
        scaler.optimize();
    }
    let file_name = config
        .icon
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    observer.start(config.mapping.len());
    let mut report = Report::default();
    for (size, density) in config.mapping.iter() {
        let source = IconSource::Scaled {
            scaler: &scaler,
            size,
        };
        let outcome = match fanout::place(&config.res, density, source) {
            Ok(pair) => Outcome::Written {
                file_name: file_name.clone(),
                key: size,
                density,
                pair,
            },
            Err(error) => Outcome::Failed {
                file_name: file_name.clone(),
                error,
            },
        };
        tracing::debug!("{:?}", outcome);
        report.push(observer, outcome);
    }
    Ok(report)
}
