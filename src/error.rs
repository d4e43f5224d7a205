use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolveError {
    #[error("Failed to initialize OCR engine: {0}")]
    InitializationError(String),

    #[error("Failed to classify image: {0}")]
    ClassificationError(String),

    #[error("Preprocessing failed: {0}")]
    PreprocessingError(String),

    #[error("Failed to read image: {0}")]
    FileReadError(String),
}
