use std::f64::consts::E;

use crate::math::matrix::Matrix;

/// Activations used by the two layers: `Tanh` on the hidden layer and
/// `Sigmoid` on the output unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationFunction {
    Sigmoid,
    Tanh,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::Tanh => x.tanh(),
        }
    }

    /// Derivative expressed in terms of the activation output `a = f(z)`.
    ///
    /// Backprop keeps the post-activation values in the cache, so this form
    /// avoids re-evaluating `f` on the pre-activation.
    pub fn derivative_from_output(&self, a: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => a * (1.0 - a),
            ActivationFunction::Tanh => 1.0 - a * a,
        }
    }

    pub fn apply(&self, z: &Matrix) -> Matrix {
        z.map(|x| self.function(x))
    }
}
