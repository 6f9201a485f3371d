use rand::Rng;

use crate::math::matrix::Matrix;
use crate::network::parameters::Parameters;
use crate::train::loop_fn::train_loop;
use crate::train::train_config::TrainConfig;

/// Trains a one-hidden-layer classifier with `n_h` tanh units and the default
/// learning rate, returning the final parameters.
///
/// `x` is `(n_x, m)` and `y` is `(1, m)` with labels in {0, 1}. With
/// `print_cost` the cost is logged every 1000 iterations.
pub fn nn_model<R: Rng + ?Sized>(
    x: &Matrix,
    y: &Matrix,
    n_h: usize,
    num_iterations: usize,
    print_cost: bool,
    rng: &mut R,
) -> Parameters {
    let config = TrainConfig::new()
        .hidden_size(n_h)
        .num_iterations(num_iterations)
        .print_cost(print_cost);
    train_loop(x, y, &config, rng).parameters
}
