#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown crop type: '{0}'")]
    UnknownCrop(String),

    #[error("Unknown soil type: '{0}'")]
    UnknownSoil(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}
