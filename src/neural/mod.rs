pub mod activations;
pub mod dataset;
pub mod optimizer;

use crate::prelude::*;
use rand::Rng;

use crate::matrix::{init::kaiming, ops::Dot, Matrix2};

use self::activations::{Activation, Sigmoid};

/// A single layer of weights without bias: `activation(inputs . weights)`.
#[derive(Debug, Clone)]
pub struct Perceptron<A = Sigmoid> {
    weights: Matrix2<f64>,
    activation: A,
}

impl Perceptron<Sigmoid> {
    /// Creates a perceptron accepting `n_inputs` features with one output,
    /// weights Kaiming-initialized from `rng`.
    pub fn new<R: Rng + ?Sized>(n_inputs: usize, rng: &mut R) -> Result<Self> {
        Ok(Self::from_weights(kaiming(n_inputs, 1, rng)?))
    }

    pub fn from_weights(weights: Matrix2<f64>) -> Self {
        Self {
            weights,
            activation: Sigmoid,
        }
    }
}

impl<A: Activation> Perceptron<A> {
    pub fn weights(&self) -> &Matrix2<f64> {
        &self.weights
    }

    pub fn activation(&self) -> &A {
        &self.activation
    }

    /// Returns the amount of inputs this perceptron accepts
    pub fn input_amount(&self) -> usize {
        self.weights.rows()
    }

    pub(crate) fn set_weights(&mut self, weights: Matrix2<f64>) {
        self.weights = weights;
    }

    /// Propogates a batch of inputs, one sample per row.
    pub fn run_batch(&self, inputs: &Matrix2<f64>) -> Result<Matrix2<f64>> {
        let weighted = inputs.dot(&self.weights)?;
        Ok(weighted.map(|_, _, z| self.activation.call(z)))
    }

    /// Mean-squared error
    pub fn mean_squared_error(&self, inputs: &Matrix2<f64>, targets: &Matrix2<f64>) -> Result<f64> {
        let outputs = self.run_batch(inputs)?;
        let diff = (&outputs - targets)?;
        let n = diff.as_slice().len().max(1) as f64;

        Ok(diff.as_slice().iter().map(|d| d * d).sum::<f64>() / n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn new_perceptron_shape() {
        let net = Perceptron::new(3, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(net.weights().dim(), (3, 1));
        assert_eq!(net.input_amount(), 3);
    }

    #[test]
    fn run_batch_applies_sigmoid() {
        let net = Perceptron::from_weights(Matrix2::from_col(vec![1.0, -1.0]));
        let inputs: Matrix2<f64> = Matrix2::from_array([[0, 0], [1, 0], [0, 1], [1, 1]]).into();

        let out = net.run_batch(&inputs).unwrap();
        assert_eq!(out.dim(), (4, 1));
        assert_eq!(out[(0, 0)], 0.5);
        assert!(out[(1, 0)] > 0.5);
        assert!(out[(2, 0)] < 0.5);
        assert_eq!(out[(3, 0)], 0.5);
    }

    #[test]
    fn run_batch_rejects_wrong_width() {
        let net = Perceptron::from_weights(Matrix2::from_col(vec![1.0, -1.0, 0.5]));
        let inputs = Matrix2::ones(4, 2);

        assert!(matches!(
            net.run_batch(&inputs),
            Err(Error::DimensionMismatch { op: "dot", .. })
        ));
    }

    #[test]
    fn mse_of_zero_weights() {
        let net = Perceptron::from_weights(Matrix2::new(2, 1));
        let inputs = Matrix2::ones(2, 2);
        let targets = Matrix2::from_col(vec![0.0, 1.0]);

        assert_eq!(net.mean_squared_error(&inputs, &targets).unwrap(), 0.25);
    }
}
