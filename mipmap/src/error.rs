use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("source not found at {}", .0.display())]
    MissingSource(PathBuf),
    #[error("expected a directory at {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("could not match a size in {0}")]
    Unresolved(String),
    #[error("no mapping found for size {size} in {file_name}")]
    Unmapped { size: u32, file_name: String },
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to encode {size}x{size} png: {source}")]
    Encode {
        size: u32,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether the error aborts a whole run rather than a single asset.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::MissingSource(_) | Self::NotADirectory(_) | Self::Decode { .. }
        )
    }
}
