use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherLabError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid Base64 input: {0}")]
    InvalidEncoding(String),

    #[error("Invalid shift: {0}. Must be between 1 and 25")]
    InvalidShift(i64),

    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

impl CipherLabError {
    /// True for the one failure a cipher transform can produce
    pub fn is_invalid_encoding(&self) -> bool {
        matches!(self, Self::InvalidEncoding(_))
    }
}

pub type Result<T> = std::result::Result<T, CipherLabError>;
