//! Configuration for SOM training and rendering.

use crate::error::{Result, SomError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration: training parameters plus rendering options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// SOM (Self-Organizing Map) configuration.
    pub som: SomConfig,

    /// Image rendering configuration.
    pub render: RenderConfig,
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.som.validate()?;
        Ok(config)
    }
}

/// Self-Organizing Map training configuration.
///
/// Fixed before training starts and read-only for the whole run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SomConfig {
    /// Grid width (number of columns, `x` axis).
    /// Default: 60.
    pub width: usize,

    /// Grid height (number of rows, `y` axis).
    /// Default: 60.
    pub height: usize,

    /// Dimensionality of the weight vectors and of every training sample.
    /// Default: 9.
    pub input_dimension: usize,

    /// Number of training iterations. Zero leaves the grid untouched.
    /// Default: 10,000.
    pub iterations: usize,

    /// Constant learning rate.
    /// Default: 0.1.
    pub learning_rate: f64,

    /// Initial neighborhood radius.
    /// Default: None (half the grid width).
    pub initial_radius: Option<f64>,

    /// Time constant of the exponential radius decay.
    /// Default: None (one fifth of the iteration count).
    pub time_constant: Option<f64>,

    /// Random seed for reproducibility.
    /// Default: None (random).
    pub seed: Option<u64>,

    /// Update neurons in parallel within each iteration.
    /// Default: false.
    pub parallel: bool,
}

impl Default for SomConfig {
    fn default() -> Self {
        Self {
            width: 60,
            height: 60,
            input_dimension: 9,
            iterations: 10_000,
            learning_rate: 0.1,
            initial_radius: None,
            time_constant: None,
            seed: None,
            parallel: false,
        }
    }
}

impl SomConfig {
    /// Returns the total number of neurons in the SOM.
    #[inline]
    pub fn total_neurons(&self) -> usize {
        self.width * self.height
    }

    /// Effective initial radius.
    pub fn initial_radius(&self) -> f64 {
        self.initial_radius.unwrap_or_else(|| self.width as f64 / 2.0)
    }

    /// Effective time constant.
    pub fn time_constant(&self) -> f64 {
        self.time_constant.unwrap_or_else(|| self.iterations as f64 / 5.0)
    }

    /// Checks the parameters that must hold before any training run.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SomError::Config(format!(
                "Grid dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.input_dimension == 0 {
            return Err(SomError::Config("Input dimension must be positive".to_string()));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(SomError::Config(format!(
                "Learning rate must be a positive number, got {}",
                self.learning_rate
            )));
        }

        let radius = self.initial_radius();
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SomError::Config(format!(
                "Initial radius must be positive, got {}", radius
            )));
        }

        // With zero iterations the schedule is never evaluated.
        if self.iterations > 0 {
            let tau = self.time_constant();
            if !tau.is_finite() || tau <= 0.0 {
                return Err(SomError::Config(format!(
                    "Time constant must be positive, got {}", tau
                )));
            }
        }

        Ok(())
    }
}

/// Rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Edge length in pixels of the square tile drawn for each neuron.
    /// Default: 5.
    pub tile_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { tile_size: 5 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.som.width, 60);
        assert_eq!(config.som.total_neurons(), 3600);
        assert_eq!(config.render.tile_size, 5);
    }

    #[test]
    fn test_derived_schedule_parameters() {
        let config = SomConfig::default();
        assert!((config.initial_radius() - 30.0).abs() < 1e-10);
        assert!((config.time_constant() - 2000.0).abs() < 1e-10);

        let config = SomConfig {
            initial_radius: Some(4.0),
            time_constant: Some(12.5),
            ..Default::default()
        };
        assert!((config.initial_radius() - 4.0).abs() < 1e-10);
        assert!((config.time_constant() - 12.5).abs() < 1e-10);
    }

    #[test]
    fn test_odd_width_radius_is_not_truncated() {
        let config = SomConfig {
            width: 5,
            ..Default::default()
        };
        assert!((config.initial_radius() - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_validate_rejects_empty_grid() {
        let config = SomConfig {
            width: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SomError::Config(_))));

        let config = SomConfig {
            height: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SomError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_learning_rate() {
        for lr in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let config = SomConfig {
                learning_rate: lr,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "learning rate {} accepted", lr);
        }
    }

    #[test]
    fn test_validate_allows_zero_iterations() {
        let config = SomConfig {
            iterations: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_time_constant() {
        let config = SomConfig {
            time_constant: Some(0.0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"som": {"width": 8, "seed": 7}}"#).unwrap();
        assert_eq!(config.som.width, 8);
        assert_eq!(config.som.height, 60);
        assert_eq!(config.som.seed, Some(7));
        assert_eq!(config.render.tile_size, 5);
    }
}
