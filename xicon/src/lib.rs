use clap::Parser;
use mipmap::{Filter, MappingEntry, Strategy};
use std::path::PathBuf;

pub mod command;
mod config;
mod task;

pub use config::Config;

#[derive(Parser, Debug, Default)]
pub struct CommonArgs {
    /// Path to the yaml configuration. Defaults to `xicon.yaml` in the
    /// current directory, missing files are ignored.
    #[clap(long)]
    config: Option<PathBuf>,
    /// Android `res` directory the `mipmap-*` folders are written to.
    #[clap(long)]
    res: Option<PathBuf>,
}

impl CommonArgs {
    pub fn config(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG))
    }
}

#[derive(Parser, Debug, Default)]
pub struct DistributeArgs {
    #[clap(flatten)]
    common: CommonArgs,
    /// Directory containing the pre-sized pngs.
    #[clap(long)]
    source: Option<PathBuf>,
    /// How file names are matched against the size table. Can be one of
    /// `exact`, `substring` or `longest`.
    #[clap(long)]
    strategy: Option<Strategy>,
    /// Size table entry as `SIZE=DENSITY`, e.g. `196=xxxhdpi`. Can be
    /// repeated, replaces the configured table.
    #[clap(long = "map")]
    mapping: Vec<MappingEntry>,
}

#[derive(Parser, Debug, Default)]
pub struct GenerateArgs {
    #[clap(flatten)]
    common: CommonArgs,
    /// Source icon to resize.
    #[clap(long)]
    icon: Option<PathBuf>,
    /// Resampling filter. Can be one of `nearest`, `triangle`,
    /// `catmull-rom`, `gaussian` or `lanczos3`.
    #[clap(long)]
    filter: Option<Filter>,
    /// Write pngs with the smallest color type the icon fits in.
    #[clap(long)]
    optimize: bool,
    /// Size table entry as `SIZE=DENSITY`. Can be repeated, replaces the
    /// configured table.
    #[clap(long = "map")]
    mapping: Vec<MappingEntry>,
}
