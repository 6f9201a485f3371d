pub mod network;
pub mod parameters;

pub use network::{backward_propagation, forward_propagation, predict, Cache};
pub use parameters::{initialize_parameters, layer_sizes, Gradients, LayerSizes, Parameters};
