//! Online SOM training.
//!
//! Each iteration draws one sample uniformly with replacement, locates its
//! winner against the current grid, and pulls every neuron towards the sample
//! in proportion to a Gaussian of its grid distance from the winner. The
//! neighborhood radius decays exponentially while the learning rate stays
//! fixed. Training always runs the configured number of iterations.

use crate::config::SomConfig;
use crate::dataset::validate_samples;
use crate::error::{Result, SomError};
use crate::som::schedule::radius;
use crate::som::Som;
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// ChaCha stream used for sample selection.
const SAMPLE_STREAM: u64 = 1;

/// SOM trainer with a fixed configuration and its own random source.
pub struct SomTrainer {
    config: SomConfig,
    rng: ChaCha8Rng,
}

impl SomTrainer {
    /// Creates a new trainer, seeding from `config.seed`.
    ///
    /// Sample selection reads stream 1 of the seeded generator, so it never
    /// replays the stream [`Som::from_config`] initialized the weights from.
    pub fn new(config: SomConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        rng.set_stream(SAMPLE_STREAM);

        Self::with_rng(config, rng)
    }

    /// Creates a trainer drawing samples from the given generator.
    pub fn with_rng(config: SomConfig, rng: ChaCha8Rng) -> Self {
        Self { config, rng }
    }

    /// The training configuration.
    pub fn config(&self) -> &SomConfig {
        &self.config
    }

    /// Neighborhood radius at a given iteration.
    #[inline]
    pub fn radius(&self, iteration: usize) -> f64 {
        radius(
            self.config.initial_radius(),
            iteration,
            self.config.time_constant(),
        )
    }

    /// Trains `som` on `samples` for the configured number of iterations.
    pub fn train(&mut self, som: &mut Som, samples: &[Vec<f64>]) -> Result<()> {
        self.train_with_progress(som, samples, |_, _| {})
    }

    /// Like [`SomTrainer::train`], calling `on_iteration(iteration, radius)`
    /// after each completed step.
    pub fn train_with_progress<F>(
        &mut self,
        som: &mut Som,
        samples: &[Vec<f64>],
        mut on_iteration: F,
    ) -> Result<()>
    where
        F: FnMut(usize, f64),
    {
        self.check(som, samples)?;

        let iterations = self.config.iterations;
        let learning_rate = self.config.learning_rate;
        let log_every = (iterations / 10).max(1);

        info!(
            "Starting SOM training with {} iterations on {} samples ({}x{} grid, {}-dim)",
            iterations,
            samples.len(),
            som.width(),
            som.height(),
            som.input_dim()
        );

        for iteration in 0..iterations {
            let input = &samples[self.rng.gen_range(0..samples.len())];
            let winner = som.winner_unchecked(input);
            let r = self.radius(iteration);

            // The winner is fixed before any weight changes.
            if self.config.parallel {
                som.update_parallel(input, winner, learning_rate, r);
            } else {
                som.update(input, winner, learning_rate, r);
            }

            if iteration % log_every == 0 || iteration + 1 == iterations {
                debug!(
                    "Iteration {}/{}: winner=({}, {}), radius={:.4}",
                    iteration, iterations, winner.0, winner.1, r
                );
            }
            on_iteration(iteration, r);
        }

        info!("SOM training completed");
        Ok(())
    }

    fn check(&self, som: &Som, samples: &[Vec<f64>]) -> Result<()> {
        self.config.validate()?;

        if som.width() != self.config.width
            || som.height() != self.config.height
            || som.input_dim() != self.config.input_dimension
        {
            return Err(SomError::Config(format!(
                "Grid is {}x{} with {}-dim weights but the configuration expects {}x{} with {}",
                som.width(),
                som.height(),
                som.input_dim(),
                self.config.width,
                self.config.height,
                self.config.input_dimension
            )));
        }

        validate_samples(samples, self.config.input_dimension)
    }
}
