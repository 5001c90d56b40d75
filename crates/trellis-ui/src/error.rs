use thiserror::Error;

/// Errors raised while loading or parsing a [`Theme`](crate::Theme).
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to read theme file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse theme: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid hex color: {0}")]
    InvalidColor(String),
}

pub type ThemeResult<T> = Result<T, ThemeError>;
