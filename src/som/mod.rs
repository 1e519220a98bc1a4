//! Self-Organizing Map (SOM) module.
//!
//! - **Grid**: prototype vectors on a rectangular grid (map.rs, neuron.rs)
//! - **Schedule**: exponential radius decay and Gaussian neighborhood (schedule.rs)
//! - **Online Training**: one sample per iteration, every neuron updated (training.rs)

pub mod distance;
mod map;
mod neuron;
pub mod schedule;
pub mod training;

pub use distance::{checked_distance, euclidean_distance};
pub use map::Som;
pub use neuron::Neuron;
pub use schedule::{neighborhood, radius};
pub use training::SomTrainer;
