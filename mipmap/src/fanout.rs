//! Writing one icon into a density folder under both launcher names.
use crate::{Density, Error, Result, Scaler};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

pub const LAUNCHER: &str = "ic_launcher.png";

/// Round launcher variant. Holds the same bytes as [`LAUNCHER`], no mask is
/// applied.
pub const LAUNCHER_ROUND: &str = "ic_launcher_round.png";

/// Where the bytes of a placed icon come from.
pub enum IconSource<'a> {
    /// An already sized png, copied verbatim.
    Bytes(&'a [u8]),
    /// A decoded image, encoded at `size`x`size`.
    Scaled { scaler: &'a Scaler, size: u32 },
}

/// The two files written for a density.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OutputPair {
    dir: PathBuf,
    square: PathBuf,
    round: PathBuf,
}

impl OutputPair {
    pub fn new(res: &Path, density: Density) -> Self {
        let dir = res.join(density.dir_name());
        Self {
            square: dir.join(LAUNCHER),
            round: dir.join(LAUNCHER_ROUND),
            dir,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn square(&self) -> &Path {
        &self.square
    }

    pub fn round(&self) -> &Path {
        &self.round
    }

    pub fn paths(&self) -> [&Path; 2] {
        [&self.square, &self.round]
    }
}

/// Writes `source` to `<res>/mipmap-<density>/` as both launcher names,
/// creating the folder if needed. Existing files are overwritten.
pub fn place(res: &Path, density: Density, source: IconSource) -> Result<OutputPair> {
    let bytes = match source {
        IconSource::Bytes(bytes) => Cow::Borrowed(bytes),
        IconSource::Scaled { scaler, size } => Cow::Owned(scaler.encode(size)?),
    };
    let pair = OutputPair::new(res, density);
    std::fs::create_dir_all(pair.dir()).map_err(|source| Error::Write {
        path: pair.dir().to_path_buf(),
        source,
    })?;
    for path in pair.paths() {
        std::fs::write(path, &bytes).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("wrote {}", path.display());
    }
    Ok(pair)
}
