//! Error types for loading attributes and rendering them.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors surfaced to the caller of a command.
///
/// Malformed CSV lines are not errors: they are reported as
/// [`RejectedLine`](crate::RejectedLine)s and skipped.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading the CSV or writing an output failed.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The host renderer rejected an operation.
    #[error("renderer: {0}")]
    Renderer(#[source] io::Error),

    /// No valid row survived parsing; there is no range to map.
    #[error("no data: the attribute table has no valid rows")]
    NoData,

    /// The colormap name is not in the registry.
    #[error("unknown colormap '{0}' (supported: {list})",
            list = crate::colormap::Colormap::names().join(", "))]
    UnknownColormap(String),

    /// The chain is not present in the attribute table.
    #[error("unknown chain '{0}'")]
    UnknownChain(String),

    /// The output path does not name a supported image format.
    #[error("unsupported image format for '{}' (supported: {list})",
            .path.display(),
            list = crate::legend::LegendFormat::EXTENSIONS.join(", "))]
    UnsupportedFormat { path: PathBuf },

    /// The image encoder failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// A configuration file could not be parsed.
    #[error("invalid configuration in {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}
