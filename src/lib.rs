//! # Kohonen - Self-Organizing Map training
//!
//! A Self-Organizing Map (SOM) is a 2D grid of prototype vectors that learns a
//! topology-preserving, low-dimensional picture of a set of high-dimensional
//! samples through competitive and cooperative unsupervised updates.
//!
//! ## Overview
//!
//! Training is strictly online. Every iteration draws one sample, finds its
//! best matching unit (the winner), and moves every neuron towards the sample
//! weighted by a Gaussian of its grid distance from the winner. The Gaussian's
//! radius decays exponentially, so training moves from coarse global ordering
//! to fine local refinement.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use kohonen::{render, Som, SomConfig, SomTrainer};
//!
//! let config = SomConfig { input_dimension: 3, seed: Some(42), ..Default::default() };
//! let mut som = Som::from_config(&config)?;
//!
//! let mut trainer = SomTrainer::new(config);
//! trainer.train(&mut som, &samples)?;
//!
//! render(&som, 5)?.save("som.png")?;
//! ```
//!
//! ## Architecture
//!
//! - [`som`] - Grid, winner search, schedule and training loop
//! - [`dataset`] - Sample loading and validation
//! - [`render`] - Grid to RGB image
//! - [`config`] - Training and rendering parameters
//! - [`error`] - Error types

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod dataset;
pub mod error;
pub mod render;
pub mod som;

// Re-export commonly used types
pub use config::{Config, RenderConfig, SomConfig};
pub use error::{Result, SomError};
pub use render::render;
pub use som::{Neuron, Som, SomTrainer};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
