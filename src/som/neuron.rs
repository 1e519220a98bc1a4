//! Neuron representation for the Self-Organizing Map.

use crate::som::distance::euclidean_distance;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// A neuron in the Self-Organizing Map.
///
/// Each neuron has a position on the 2D grid and a prototype vector
/// in input space.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    /// Column position on the grid.
    pub x: usize,
    /// Row position on the grid.
    pub y: usize,
    /// Prototype vector.
    pub weights: Vec<f64>,
}

impl Neuron {
    /// Creates a new neuron with weights drawn uniformly from `[0, 1)`.
    pub fn new_random<R: Rng + ?Sized>(x: usize, y: usize, weight_dim: usize, rng: &mut R) -> Self {
        let unit = Uniform::new(0.0, 1.0);
        let weights: Vec<f64> = (0..weight_dim).map(|_| unit.sample(rng)).collect();

        Self { x, y, weights }
    }

    /// Creates a new neuron with the given weights.
    pub fn new_with_weights(x: usize, y: usize, weights: Vec<f64>) -> Self {
        Self { x, y, weights }
    }

    /// Euclidean distance between this neuron's weights and an input vector.
    #[inline]
    pub fn distance(&self, input: &[f64]) -> f64 {
        euclidean_distance(&self.weights, input)
    }

    /// Distance between this neuron and the grid position `(x, y)`.
    #[inline]
    pub fn grid_distance_to(&self, x: usize, y: usize) -> f64 {
        let dx = self.x as f64 - x as f64;
        let dy = self.y as f64 - y as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// Moves the weights towards `input`.
    ///
    /// `neighborhood` is the kernel value for this neuron (0.0 to 1.0).
    pub fn update_weights(&mut self, input: &[f64], learning_rate: f64, neighborhood: f64) {
        let influence = learning_rate * neighborhood;

        for (w, i) in self.weights.iter_mut().zip(input.iter()) {
            *w += influence * (i - *w);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_random_initialization_in_unit_interval() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let neuron = Neuron::new_random(3, 4, 100, &mut rng);
        assert_eq!((neuron.x, neuron.y), (3, 4));
        assert_eq!(neuron.weights.len(), 100);
        assert!(neuron.weights.iter().all(|&w| (0.0..1.0).contains(&w)));
        assert!(neuron.weights.iter().any(|&w| w != neuron.weights[0]));
    }

    #[test]
    fn test_grid_distance() {
        let neuron = Neuron::new_with_weights(0, 0, vec![]);
        assert!((neuron.grid_distance_to(3, 4) - 5.0).abs() < 1e-10);
        assert_eq!(neuron.grid_distance_to(0, 0), 0.0);
    }

    #[test]
    fn test_update_weights() {
        let mut neuron = Neuron::new_with_weights(0, 0, vec![0.0, 0.0, 0.0]);
        neuron.update_weights(&[1.0, 1.0, 1.0], 0.5, 1.0);
        assert!((neuron.weights[0] - 0.5).abs() < 1e-10);

        neuron.update_weights(&[1.0, 1.0, 1.0], 0.5, 0.5);
        assert!((neuron.weights[1] - 0.625).abs() < 1e-10);
    }

    #[test]
    fn test_zero_neighborhood_leaves_weights() {
        let mut neuron = Neuron::new_with_weights(1, 1, vec![0.3, 0.6]);
        neuron.update_weights(&[1.0, 0.0], 0.1, 0.0);
        assert_eq!(neuron.weights, vec![0.3, 0.6]);
    }
}
