use jitsearch_asm::LinkError;
use jitsearch_core::TreeError;

/// Errors from validating input and emitting code.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EmitError {
    #[error("no keys to compile")]
    Empty,

    #[error("breakpoint {index} is not greater than the one before it")]
    Unsorted { index: usize },

    #[error("breakpoint {index} is NaN")]
    NotANumber { index: usize },

    #[error("key {key} appears more than once")]
    DuplicateKey { key: i32 },

    #[error("key {key} maps to 0, which is reserved for a miss")]
    NullPayload { key: i32 },

    #[error("{count} keys exceed the limit of {limit}")]
    TooManyKeys { count: usize, limit: usize },

    #[error("emitted {size} bytes, limit is {limit}")]
    CodeTooLarge { size: usize, limit: usize },

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Link(#[from] LinkError),
}
