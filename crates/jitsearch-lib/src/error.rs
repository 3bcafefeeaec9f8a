use jitsearch_asm::{Label, LinkError};
use jitsearch_compiler::EmitError;
use jitsearch_vm::MemoryError;

/// Errors from compiling a lookup.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Empty, unsorted, repeated, NaN, or too many keys.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A table entry maps to 0, the miss value.
    #[error("invalid payload for key {key}: 0 is reserved for a miss")]
    InvalidPayload { key: i32 },

    /// A label was used but never defined. Indicates a code generator defect.
    #[error("internal error: label {} used but never defined", .0.0)]
    MissingLabelDefinition(Label),

    /// Any other link failure. Indicates a code generator defect.
    #[error("internal error: {0}")]
    Link(LinkError),

    #[error("emitted code is {size} bytes, limit is {limit}")]
    CodeTooLarge { size: usize, limit: usize },

    #[error("failed to map executable memory: {0}")]
    MemoryMapFailure(#[from] MemoryError),
}

impl From<EmitError> for Error {
    fn from(err: EmitError) -> Self {
        match err {
            EmitError::NullPayload { key } => Self::InvalidPayload { key },
            EmitError::CodeTooLarge { size, limit } => Self::CodeTooLarge { size, limit },
            EmitError::Link(LinkError::MissingLabel(label)) => Self::MissingLabelDefinition(label),
            EmitError::Link(err) => Self::Link(err),
            EmitError::Empty
            | EmitError::Unsorted { .. }
            | EmitError::NotANumber { .. }
            | EmitError::DuplicateKey { .. }
            | EmitError::TooManyKeys { .. }
            | EmitError::Tree(_) => Self::InvalidInput(err.to_string()),
        }
    }
}

/// Result type for compile operations.
pub type Result<T> = std::result::Result<T, Error>;
