use crate::network::parameters::{Gradients, Parameters};

/// Learning rate used when none is configured.
pub const DEFAULT_LEARNING_RATE: f64 = 1.2;

/// Plain full-batch gradient descent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Returns `parameters - learning_rate * grads`, parameter by parameter.
    pub fn step(&self, parameters: &Parameters, grads: &Gradients) -> Parameters {
        let lr = self.learning_rate;
        let updated = Parameters {
            w1: parameters.w1.zip_with(&grads.dw1, |p, g| p - lr * g),
            b1: parameters.b1.zip_with(&grads.db1, |p, g| p - lr * g),
            w2: parameters.w2.zip_with(&grads.dw2, |p, g| p - lr * g),
            b2: parameters.b2.zip_with(&grads.db2, |p, g| p - lr * g),
        };
        updated.assert_shapes();
        updated
    }
}

impl Default for Sgd {
    fn default() -> Self {
        Sgd::new(DEFAULT_LEARNING_RATE)
    }
}

/// One gradient-descent update with an explicit learning rate.
pub fn update_parameters(parameters: &Parameters, grads: &Gradients, learning_rate: f64) -> Parameters {
    Sgd::new(learning_rate).step(parameters, grads)
}
