use thiserror::Error;

/// Main error type for the Rusty Letter crate.
/// Aggregates errors from dependencies and internal modules.
#[derive(Error, Debug)]
pub enum RustyLetterError {
    #[error("{0}")]
    WithContextError(String),

    #[error("{0}")]
    AnyhowError(#[from] anyhow::Error),

    // Helper module errors
    #[error("{0}")]
    DecodeError(#[from] crate::helpers::decoder::DecodeError),

    // Generator module errors
    #[error("{0}")]
    OptionsError(#[from] crate::generator::options::OptionsError),

    #[error("{0}")]
    GeneratorError(#[from] crate::generator::GeneratorError),
}

pub(crate) trait ResultMessage {
    fn with_prefix(self, message: &str) -> Self;
}

impl<T> ResultMessage for Result<T, RustyLetterError> {
    fn with_prefix(self, message: &str) -> Self {
        self.map_err(|e| RustyLetterError::WithContextError(format!("{}: {}", message, e)))
    }
}
