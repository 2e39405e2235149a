use thiserror::Error;

/// Error type for the perceptron crate
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// Indicates some dimension is incorrect in a Matrix operation.
    #[error("dimension mismatch in {op}: {lhs:?} vs {rhs:?}")]
    DimensionMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    /// Rows of unequal length were given to a matrix constructor.
    #[error("rows of a matrix must all have the same length")]
    Ragged,

    #[error("invalid initialization distribution: {0}")]
    Init(#[from] rand_distr::NormalError),
}

pub type Result<T> = std::result::Result<T, Error>;
