//! Self-Organizing Map grid.

use crate::config::SomConfig;
use crate::error::{Result, SomError};
use crate::som::distance::checked_distance;
use crate::som::schedule::neighborhood;
use crate::som::Neuron;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

/// A Self-Organizing Map: a `width x height` grid of prototype vectors.
///
/// Neurons are stored contiguously in x-major order (`index = x * height + y`),
/// so iterating the storage visits `x` ascending, then `y` ascending. Winner
/// search relies on that order for its tie-break.
#[derive(Debug, Clone)]
pub struct Som {
    width: usize,
    height: usize,
    input_dim: usize,
    neurons: Vec<Neuron>,
}

impl Som {
    /// Creates a new SOM with weights drawn uniformly from `[0, 1)`.
    pub fn new<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        input_dim: usize,
        rng: &mut R,
    ) -> Result<Self> {
        check_shape(width, height, input_dim)?;

        let neurons: Vec<Neuron> = (0..width * height)
            .map(|i| {
                let x = i / height;
                let y = i % height;
                Neuron::new_random(x, y, input_dim, &mut *rng)
            })
            .collect();

        Ok(Self {
            width,
            height,
            input_dim,
            neurons,
        })
    }

    /// Creates a new SOM from a configuration, seeding from `config.seed`.
    pub fn from_config(config: &SomConfig) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::new(config.width, config.height, config.input_dimension, &mut rng)
    }

    /// Creates a SOM from explicit weight vectors given in x-major order.
    pub fn from_weights(width: usize, height: usize, weights: Vec<Vec<f64>>) -> Result<Self> {
        let input_dim = weights.first().map(Vec::len).unwrap_or(0);
        check_shape(width, height, input_dim)?;

        if weights.len() != width * height {
            return Err(SomError::Config(format!(
                "Expected {} weight vectors for a {}x{} grid, got {}",
                width * height,
                width,
                height,
                weights.len()
            )));
        }
        if let Some(bad) = weights.iter().find(|w| w.len() != input_dim) {
            return Err(SomError::DimensionMismatch {
                expected: input_dim,
                found: bad.len(),
            });
        }

        let neurons = weights
            .into_iter()
            .enumerate()
            .map(|(i, w)| Neuron::new_with_weights(i / height, i % height, w))
            .collect();

        Ok(Self {
            width,
            height,
            input_dim,
            neurons,
        })
    }

    /// Grid width.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Weight vector dimensionality.
    #[inline]
    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    /// Returns the total number of neurons.
    #[inline]
    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    /// Always false: a grid has at least one neuron.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    /// All neurons in traversal order.
    #[inline]
    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    /// Gets a neuron by its grid position.
    #[inline]
    pub fn get_at(&self, x: usize, y: usize) -> Option<&Neuron> {
        if x < self.width && y < self.height {
            Some(&self.neurons[self.coords_to_index(x, y)])
        } else {
            None
        }
    }

    /// Visits every neuron, `x` ascending then `y` ascending.
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(usize, usize, &Neuron),
    {
        for neuron in &self.neurons {
            visit(neuron.x, neuron.y, neuron);
        }
    }

    /// Converts a storage index to grid coordinates.
    #[inline]
    pub fn index_to_coords(&self, index: usize) -> (usize, usize) {
        (index / self.height, index % self.height)
    }

    /// Converts grid coordinates to a storage index.
    #[inline]
    pub fn coords_to_index(&self, x: usize, y: usize) -> usize {
        x * self.height + y
    }

    /// Finds the Best Matching Unit (BMU) for an input vector.
    ///
    /// Only a strictly smaller distance replaces the running minimum, so among
    /// equally close neurons the lowest `x`, then lowest `y`, wins.
    pub fn find_winner(&self, input: &[f64]) -> Result<(usize, usize)> {
        self.check_input(input)?;
        Ok(self.winner_unchecked(input))
    }

    pub(crate) fn winner_unchecked(&self, input: &[f64]) -> (usize, usize) {
        let mut min_dist = f64::INFINITY;
        let mut winner = 0;

        for (i, neuron) in self.neurons.iter().enumerate() {
            let dist = neuron.distance(input);
            if dist < min_dist {
                min_dist = dist;
                winner = i;
            }
        }
        self.index_to_coords(winner)
    }

    /// Updates all neurons towards `input` around the winner at `(wx, wy)`.
    ///
    /// Every neuron is visited regardless of its distance from the winner.
    pub fn update(
        &mut self,
        input: &[f64],
        winner: (usize, usize),
        learning_rate: f64,
        radius: f64,
    ) {
        let (wx, wy) = winner;
        for neuron in &mut self.neurons {
            let h = neighborhood(neuron.grid_distance_to(wx, wy), radius);
            neuron.update_weights(input, learning_rate, h);
        }
    }

    /// Parallel variant of [`Som::update`]. Produces identical weights.
    pub fn update_parallel(
        &mut self,
        input: &[f64],
        winner: (usize, usize),
        learning_rate: f64,
        radius: f64,
    ) {
        let (wx, wy) = winner;
        self.neurons.par_iter_mut().for_each(|neuron| {
            let h = neighborhood(neuron.grid_distance_to(wx, wy), radius);
            neuron.update_weights(input, learning_rate, h);
        });
    }

    /// Mean distance from each sample to its best matching unit.
    pub fn quantization_error(&self, samples: &[Vec<f64>]) -> Result<f64> {
        if samples.is_empty() {
            return Err(SomError::EmptyInput("No samples to evaluate".to_string()));
        }

        let mut total = 0.0;
        for sample in samples {
            let (x, y) = self.find_winner(sample)?;
            let bmu = &self.neurons[self.coords_to_index(x, y)];
            total += checked_distance(&bmu.weights, sample)?;
        }
        Ok(total / samples.len() as f64)
    }

    fn check_input(&self, input: &[f64]) -> Result<()> {
        if input.len() != self.input_dim {
            return Err(SomError::DimensionMismatch {
                expected: self.input_dim,
                found: input.len(),
            });
        }
        Ok(())
    }
}

fn check_shape(width: usize, height: usize, input_dim: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(SomError::Config(format!(
            "Grid dimensions must be positive, got {}x{}",
            width, height
        )));
    }
    if input_dim == 0 {
        return Err(SomError::Config("Input dimension must be positive".to_string()));
    }
    Ok(())
}
