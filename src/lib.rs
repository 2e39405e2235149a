pub mod matrix;
pub mod neural;
pub mod prelude;

pub use matrix::{Matrix2, MatrixView};
pub use neural::{dataset::Dataset, optimizer::Optimizer, Perceptron};
pub use prelude::{Error, Result};
