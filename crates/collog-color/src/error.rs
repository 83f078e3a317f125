use thiserror::Error;

/// Result type for color formatting operations
pub type ColorResult<T> = Result<T, ColorError>;

/// Errors raised while parsing tag-annotated text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Unknown color name: {0}")]
    UnknownColor(String),

    #[error("Unterminated tag starting at byte {0}")]
    UnterminatedTag(usize),
}

impl ColorError {
    /// Create a new unknown color error
    pub fn unknown_color<S: Into<String>>(name: S) -> Self {
        ColorError::UnknownColor(name.into())
    }
}
