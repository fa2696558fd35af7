//! Errors reported at the boundary of the engine.
//!
//! The numeric core is infallible. Errors only arise when text is turned into
//! typed values (hex strings, shade keys, configuration files).

/// Any error produced by this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The string is not a 3 or 6 digit hex color, with or without a leading
    /// `#`.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    /// The string does not name one of the 11 shades (50, 100, ..., 950).
    #[error("invalid shade: {0:?}")]
    InvalidShade(String),

    /// Reading a configuration file failed.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
