use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("network error: {0}")]
    Network(String),

    #[error("image decode error: {0}")]
    Decode(String),

    #[error("background task failed: {0}")]
    Task(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
