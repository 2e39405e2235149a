pub trait Activation {
    /// Returns activation function at x
    fn call(&self, x: f64) -> f64;
    /// Returns derivative of activation function with respect to the function at x.
    /// For example, if our activation is sigmoid, then we would express the
    /// derivative as `a_x * (1-a_x)` instead of `sigmoid(a_x)(1-sigmoid(a_x))`.
    fn derivative(&self, a_x: f64) -> f64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Sigmoid;

pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Derivative of the sigmoid expressed through its output.
///
/// `a_x` must already be `sigmoid(x)`. Passing a raw weighted sum gives a
/// wrong value and cannot be detected here.
pub fn sigmoid_derivative(a_x: f64) -> f64 {
    a_x * (1.0 - a_x)
}

impl Activation for Sigmoid {
    fn call(&self, x: f64) -> f64 {
        sigmoid(x)
    }

    fn derivative(&self, a_x: f64) -> f64 {
        sigmoid_derivative(a_x)
    }
}
