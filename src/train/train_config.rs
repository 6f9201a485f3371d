use serde::{Serialize, Deserialize};

use crate::network::parameters::HIDDEN_SIZE;
use crate::optim::sgd::DEFAULT_LEARNING_RATE;

/// Hyperparameters for a `train_loop` run.
///
/// # Fields
/// - `hidden_size`    — units in the tanh hidden layer
/// - `num_iterations` — full-batch gradient steps; there is no early stopping
/// - `learning_rate`  — gradient-descent step size
/// - `print_cost`     — log the cost every `log_every` iterations
/// - `log_every`      — logging period in iterations, must be at least 1
///
/// Missing fields in a JSON file fall back to [`TrainConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub hidden_size: usize,
    pub num_iterations: usize,
    pub learning_rate: f64,
    pub print_cost: bool,
    pub log_every: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            hidden_size: HIDDEN_SIZE,
            num_iterations: 10_000,
            learning_rate: DEFAULT_LEARNING_RATE,
            print_cost: false,
            log_every: 1000,
        }
    }
}

impl TrainConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hidden_size(mut self, hidden_size: usize) -> Self {
        self.hidden_size = hidden_size;
        self
    }

    pub fn num_iterations(mut self, num_iterations: usize) -> Self {
        self.num_iterations = num_iterations;
        self
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn print_cost(mut self, print_cost: bool) -> Self {
        self.print_cost = print_cost;
        self
    }

    pub fn log_every(mut self, log_every: usize) -> Self {
        self.log_every = log_every;
        self
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `TrainConfig` from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
