pub mod trainer;
pub mod train_config;
pub mod loop_fn;
pub mod metrics;

pub use trainer::nn_model;
pub use train_config::TrainConfig;
pub use loop_fn::{train_loop, TrainResult};
pub use metrics::accuracy;
