use thiserror::Error;

/// Which of the two operands an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::First => f.write_str("first"),
            Side::Second => f.write_str("second"),
        }
    }
}

/// Failures reported at the call boundary of a measure.
///
/// Empty sequences are never an error for the alignment measures; they have
/// well-defined scores.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// An input sequence was not provided.
    #[error("Missing input: the {arg} sequence was not provided")]
    MissingInput { arg: Side },

    /// A fixed-length comparison was given sequences of different length.
    #[error("Length mismatch: {left} != {right}")]
    LengthMismatch { left: usize, right: usize },

    /// A token bag that must be non-empty was empty.
    #[error("Empty bag: the {side} token bag is empty")]
    EmptyBag { side: Side },

    /// The measure configuration cannot be used.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
}
