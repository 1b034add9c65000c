use core::result::Result as CoreResult;
use std::io::Error as IoError;

use thiserror::Error;
use toml::de::Error as TomlDeError;
use toml::ser::Error as TomlSerError;

/// Result type for core operations.
pub type Result<T> = CoreResult<T, Error>;

/// Errors raised by the layers around the analyzer.
///
/// Analysis itself never fails; these cover configuration and input parsing.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] IoError),

    /// TOML deserialization failed.
    #[error("TOML deserialization error: {0}")]
    Toml(#[from] TomlDeError),

    /// TOML serialization failed.
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] TomlSerError),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A reference timestamp could not be parsed.
    #[error("Invalid timestamp '{input}': {reason}")]
    InvalidTimestamp {
        /// The text that failed to parse
        input: String,
        /// Why it was rejected
        reason: String,
    },

    /// A textual value did not name a known variant.
    #[error("Unknown {kind}: {value}")]
    UnknownVariant {
        /// Which enum was being parsed
        kind: &'static str,
        /// The rejected text
        value: String,
    },
}
