use std::io;

use collog_color::ColorError;
use thiserror::Error;

/// Custom result type for collog operations
pub type CollogResult<T> = Result<T, CollogError>;

/// Errors from the fallible, non-logging surfaces (configuration loading
/// and validation). Logging calls themselves never return errors.
#[derive(Debug, Error)]
pub enum CollogError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Color error: {0}")]
    Color(#[from] ColorError),
}

impl CollogError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        CollogError::Config(msg.into())
    }
}

impl From<toml::de::Error> for CollogError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for CollogError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<io::Error> for CollogError {
    fn from(err: io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_conversion() {
        let err: CollogError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, CollogError::Io(ref msg) if msg == "missing"));
    }

    #[test]
    fn test_color_conversion() {
        let err: CollogError = ColorError::unknown_color("teal").into();
        assert_eq!(err.to_string(), "Color error: Unknown color name: teal");
    }
}
