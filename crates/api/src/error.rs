#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("Malformed type signature: {0}")]
    MalformedTypeSignature(String),
    #[error("Invalid construction: {0}")]
    InvalidConstruction(String),
    #[error("Invalid class state: {0}")]
    InvalidClassState(String),
}

impl ModelError {
    /// Short, stable name of the error kind, suitable for logs and exit reports.
    pub fn kind(&self) -> &'static str {
        match self {
            ModelError::MalformedTypeSignature(_) => "malformed-type-signature",
            ModelError::InvalidConstruction(_) => "invalid-construction",
            ModelError::InvalidClassState(_) => "invalid-class-state",
        }
    }
}

pub type ModelResult<T> = std::result::Result<T, ModelError>;
