//! Error types for the fallible edges of the crate.
//!
//! The layout core never fails: malformed sessions are excluded and
//! overflow is counted. Errors only arise when reading tabular input
//! or loading a layout configuration.

use thiserror::Error;

/// Result type for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by ingestion and configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// The CSV source could not be read or tokenized.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration text is not valid TOML for [`LayoutConfig`](crate::config::LayoutConfig).
    #[error("Invalid configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration parsed but holds unusable values.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
