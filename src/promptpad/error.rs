use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    /// A create/update/capture rejected before any state changed.
    #[error("Validation: {0}")]
    Validation(String),

    /// The file's first row does not carry the expected column names.
    /// On load this triggers reinitialization; on import it rejects the
    /// whole file.
    #[error("File header does not match the expected prompt columns")]
    HeaderMismatch,

    #[error("Prompt not found: {0}")]
    RecordNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PromptError>;
