use rand::Rng;

use crate::loss::bce::BceLoss;
use crate::math::matrix::Matrix;
use crate::network::network::{backward_propagation, forward_propagation};
use crate::network::parameters::{initialize_parameters, layer_sizes, Parameters};
use crate::optim::sgd::Sgd;
use crate::train::train_config::TrainConfig;

/// Outcome of a `train_loop` run.
#[derive(Debug, Clone)]
pub struct TrainResult {
    /// Parameters after the last update.
    pub parameters: Parameters,
    /// `costs[i]` is the cost measured by the forward pass of iteration `i`,
    /// before that iteration's update.
    pub costs: Vec<f64>,
}

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains a fresh `n_x -> hidden_size -> 1` network on the whole batch for
/// exactly `config.num_iterations` steps.
///
/// Every iteration runs forward, cost, backward and update in that order.
/// When `config.print_cost` is set the cost of every `config.log_every`-th
/// iteration is emitted at `info` level.
///
/// # Panics
/// Panics if `x` and `y` disagree on the sample count, if `y` is not a single
/// row, or if `config.log_every == 0`.
pub fn train_loop<R: Rng + ?Sized>(
    x: &Matrix,
    y: &Matrix,
    config: &TrainConfig,
    rng: &mut R,
) -> TrainResult {
    assert_eq!(x.cols, y.cols, "x and y must have the same number of samples");
    assert_eq!(y.rows, 1, "y must be a single row of labels");
    assert!(config.log_every > 0, "log_every must be at least 1");

    let sizes = layer_sizes(x, y);
    let n_h = config.hidden_size;
    log::debug!(
        "training {}-{}-{} network on {} samples for {} iterations (lr = {})",
        sizes.n_x, n_h, sizes.n_y, x.cols, config.num_iterations, config.learning_rate
    );

    let mut parameters = initialize_parameters(sizes.n_x, n_h, sizes.n_y, rng);
    let optimizer = Sgd::new(config.learning_rate);
    let mut costs = Vec::with_capacity(config.num_iterations);

    for i in 0..config.num_iterations {
        let (a2, cache) = forward_propagation(x, &parameters);

        let cost = BceLoss::cost(&a2, y);
        if config.print_cost && i % config.log_every == 0 {
            log::info!("Cost after iteration {i}: {cost:.6}");
        }
        costs.push(cost);

        let grads = backward_propagation(&parameters, &cache, x, y);

        parameters = optimizer.step(&parameters, &grads);
    }

    TrainResult { parameters, costs }
}
