//! Places launcher icons into the `mipmap-<density>` folders of an android
//! resource directory.
//!
//! Two modes share one primitive, [`fanout::place`]:
//!
//! - [`run::distribute`] copies already sized pngs, picking each file's
//!   density from its name with a [`Strategy`].
//! - [`run::generate`] resizes a single source icon to every size in a
//!   [`SizeMapping`].
//!
//! Every placed icon is written as both `ic_launcher.png` and
//! `ic_launcher_round.png` with identical bytes.
use serde::{Deserialize, Serialize};

mod error;
pub mod fanout;
mod mapping;
mod resolve;
pub mod run;
mod scaler;

pub use error::{Error, Result};
pub use fanout::{IconSource, OutputPair, LAUNCHER, LAUNCHER_ROUND};
pub use mapping::{MappingEntry, SizeMapping};
pub use resolve::{Match, Strategy};
pub use run::{Distribute, Generate, Observer, Outcome, Report};
pub use scaler::{Filter, Scaler};

pub const DPI_LABEL: [&str; 5] = ["mdpi", "hdpi", "xhdpi", "xxhdpi", "xxxhdpi"];

pub const DPI_SIZE: [u32; 5] = [48, 72, 96, 144, 192];

/// Android screen density qualifier of a `mipmap` resource folder.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl Density {
    pub const ALL: [Density; 5] = [
        Self::Mdpi,
        Self::Hdpi,
        Self::Xhdpi,
        Self::Xxhdpi,
        Self::Xxxhdpi,
    ];

    fn index(self) -> usize {
        match self {
            Self::Mdpi => 0,
            Self::Hdpi => 1,
            Self::Xhdpi => 2,
            Self::Xxhdpi => 3,
            Self::Xxxhdpi => 4,
        }
    }

    pub fn label(self) -> &'static str {
        DPI_LABEL[self.index()]
    }

    /// Launcher icon edge length in px.
    pub fn size(self) -> u32 {
        DPI_SIZE[self.index()]
    }

    pub fn dir_name(self) -> String {
        format!("mipmap-{}", self.label())
    }
}

impl std::fmt::Display for Density {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Density {
    type Err = anyhow::Error;

    fn from_str(density: &str) -> anyhow::Result<Self> {
        let label = density.strip_prefix("mipmap-").unwrap_or(density);
        Ok(match label {
            "mdpi" => Self::Mdpi,
            "hdpi" => Self::Hdpi,
            "xhdpi" => Self::Xhdpi,
            "xxhdpi" => Self::Xxhdpi,
            "xxxhdpi" => Self::Xxxhdpi,
            _ => anyhow::bail!("unsupported density {}", density),
        })
    }
}
