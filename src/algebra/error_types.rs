use thiserror::Error;

/// Error type returned by vector and matrix operations.
#[derive(Error, Debug)]
pub enum AlgebraError {
    /// Construction parameters violate `start_index <= size <= max_size`
    #[error("invalid shape: size {size} with start index {start_index} (maximum size {max_size})")]
    InvalidArgument {
        size: usize,
        start_index: usize,
        max_size: usize,
    },
    /// Element access outside of `[start_index, size)`
    #[error("index {index} out of range [{start_index}, {size})")]
    IndexOutOfRange {
        index: usize,
        start_index: usize,
        size: usize,
    },
    /// Operands of a binary operation have incompatible `(size, start_index)`
    #[error("incompatible operand shapes {lhs:?} and {rhs:?}")]
    ShapeMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    /// Text input ran out of tokens
    #[error("expected {expected} values but input ended after {found}")]
    UnexpectedEndOfInput { expected: usize, found: usize },
    /// A token could not be parsed as the element type
    #[error("unable to parse \"{token}\"")]
    Parse { token: String },
    /// Underlying reader or writer failure
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}
