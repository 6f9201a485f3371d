pub mod math;
pub mod activation;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use network::network::{backward_propagation, forward_propagation, predict, Cache};
pub use network::parameters::{initialize_parameters, layer_sizes, Gradients, LayerSizes, Parameters};
pub use loss::bce::BceLoss;
pub use optim::sgd::{update_parameters, Sgd};
pub use train::{accuracy, nn_model, train_loop, TrainConfig, TrainResult};
