//! Radius decay and Gaussian neighborhood kernel.

/// Neighborhood radius at `iteration`: `initial_radius * exp(-iteration / time_constant)`.
#[inline]
pub fn radius(initial_radius: f64, iteration: usize, time_constant: f64) -> f64 {
    initial_radius * (-(iteration as f64) / time_constant).exp()
}

/// Gaussian neighborhood weight for a neuron `grid_distance` cells from the winner.
///
/// Exactly 1.0 at the winner, even once the radius has underflowed to zero.
#[inline]
pub fn neighborhood(grid_distance: f64, radius: f64) -> f64 {
    if grid_distance == 0.0 {
        return 1.0;
    }
    let sigma_sq = radius * radius;
    (-grid_distance * grid_distance / (2.0 * sigma_sq)).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_starts_at_initial() {
        assert_eq!(radius(30.0, 0, 2000.0), 30.0);
        assert_eq!(radius(1.0, 0, 0.5), 1.0);
    }

    #[test]
    fn test_radius_strictly_decreasing() {
        let mut prev = radius(30.0, 0, 2000.0);
        for i in 1..10_000 {
            let r = radius(30.0, i, 2000.0);
            assert!(r < prev, "radius did not decrease at iteration {}", i);
            assert!(r > 0.0);
            prev = r;
        }
    }

    #[test]
    fn test_radius_after_one_time_constant() {
        let r = radius(10.0, 100, 100.0);
        assert!((r - 10.0 / std::f64::consts::E).abs() < 1e-10);
    }

    #[test]
    fn test_neighborhood_at_winner() {
        for r in [0.001, 0.5, 1.0, 30.0] {
            assert_eq!(neighborhood(0.0, r), 1.0);
        }
        assert_eq!(neighborhood(0.0, 0.0), 1.0);
    }

    #[test]
    fn test_neighborhood_strictly_decreasing() {
        let mut prev = neighborhood(0.0, 3.0);
        for step in 1..40 {
            let h = neighborhood(step as f64 * 0.25, 3.0);
            assert!(h < prev);
            assert!(h > 0.0);
            prev = h;
        }
    }

    #[test]
    fn test_neighborhood_narrows_with_radius() {
        assert!(neighborhood(2.0, 1.0) < neighborhood(2.0, 4.0));
        assert!(neighborhood(5.0, 1e-3) >= 0.0);
    }

    #[test]
    fn test_neighborhood_value() {
        // One sigma away.
        let h = neighborhood(2.0, 2.0);
        assert!((h - (-0.5f64).exp()).abs() < 1e-12);
    }
}
