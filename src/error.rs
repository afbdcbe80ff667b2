use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to load font: {0}")]
    FontLoad(String),

    #[error("Failed to create drawing surface ({width}x{height})")]
    Surface { width: u32, height: u32 },

    #[error("Failed to encode page image: {0}")]
    Encode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum StrokeError {
    #[error("No stroke data for '{0}'")]
    NotFound(char),

    #[error("Malformed stroke data for '{ch}': {message}")]
    Malformed { ch: char, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid color specification: {0}")]
    InvalidColor(String),

    #[error("Invalid margin specification: {0}")]
    InvalidMargins(String),

    #[error("Invalid font specification: {0} (expected FAMILY=PATH)")]
    InvalidFontSpec(String),
}
