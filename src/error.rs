use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, NetError>;

/// The crate's error type.
#[derive(Debug)]
pub enum NetError {
    /// A vector length disagrees with the matrix dimension it feeds.
    DimensionMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },

    /// A pick referenced a neuron or connection that does not exist.
    IndexOutOfBounds {
        layer: &'static str,
        index: usize,
        len: usize,
    },
}

impl Display for NetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetError::DimensionMismatch {
                a,
                b,
                got,
                expected,
            } => {
                write!(
                    f,
                    "dimension mismatch between {a} and {b}: got {got}, expected {expected}"
                )
            }
            NetError::IndexOutOfBounds { layer, index, len } => {
                write!(f, "the {layer} layer has no entry {index} (len {len})")
            }
        }
    }
}

impl Error for NetError {}
