//! Configuration error type.

use std::io;
use std::path::PathBuf;

/// Failure while reading, writing, or decoding the config file.
///
/// Each filesystem variant names the path involved so the startup
/// diagnostic points at the actual file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("could not write config file {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("config file {} is not valid RON: {source}", path.display())]
    Malformed {
        path: PathBuf,
        source: ron::error::SpannedError,
    },

    #[error("could not encode config as RON: {0}")]
    Encode(#[from] ron::Error),
}
