use tracing::{debug, info};

use crate::{
    matrix::{
        ops::{Dot, Hadamard, Transpose},
        Matrix2,
    },
    neural::{activations::Activation, Perceptron},
    prelude::*,
};

/// Full-batch gradient descent with an implicit learning rate of 1.
pub struct Optimizer {
    iterations: usize,
    iterations_per_log: Option<usize>,
}

impl Optimizer {
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            iterations_per_log: None,
        }
    }

    pub fn with_log(mut self, iterations_per_log: Option<usize>) -> Self {
        self.iterations_per_log = iterations_per_log.filter(|&ipl| ipl > 0);
        self
    }

    /// Runs every iteration and returns the activations of the last one.
    ///
    /// Those activations were computed with the weights as they were at the
    /// start of the last iteration, before its update. With zero iterations
    /// this is just the forward pass of the current weights.
    pub fn train<A: Activation>(
        &self,
        net: &mut Perceptron<A>,
        inputs: &Matrix2<f64>,
        targets: &Matrix2<f64>,
    ) -> Result<Matrix2<f64>> {
        debug!(
            iterations = self.iterations,
            samples = inputs.rows(),
            features = inputs.cols(),
            "starting training"
        );

        if self.iterations == 0 {
            return net.run_batch(inputs);
        }

        let mut activations = None;
        for i in 0..self.iterations {
            activations = Some(self.backprop_once(net, inputs, targets)?);

            if self.iterations_per_log.is_some_and(|ipl| i % ipl == 0) {
                let mse = net.mean_squared_error(inputs, targets)?;
                info!(iteration = i, mse, "training progress");
            }
        }

        match activations {
            Some(activations) => Ok(activations),
            None => net.run_batch(inputs),
        }
    }

    /// One forward and backward pass over the whole batch.
    ///
    /// The error is `targets - activations`, so the gradient is added to the
    /// weights rather than subtracted.
    fn backprop_once<A: Activation>(
        &self,
        net: &mut Perceptron<A>,
        inputs: &Matrix2<f64>,
        targets: &Matrix2<f64>,
    ) -> Result<Matrix2<f64>> {
        let weighted = inputs.dot(net.weights())?;
        let activations = weighted.map(|_, _, z| net.activation().call(z));

        let error = (targets - &activations)?;
        // derivative takes the sigmoid output, not the weighted sum
        let slope = activations.map(|_, _, a| net.activation().derivative(a));
        let delta = error.hadamard(&slope)?;

        let grad = inputs.t().dot(&delta)?;
        let weights = (net.weights() + &grad)?;
        net.set_weights(weights);

        Ok(activations)
    }
}
