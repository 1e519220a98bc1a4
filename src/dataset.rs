//! Training sample loading and validation.

use crate::error::{Result, SomError};
use std::path::Path;

/// Loads samples from a JSON file holding an array of numeric arrays.
pub fn load_samples(path: &Path) -> Result<Vec<Vec<f64>>> {
    let content = std::fs::read_to_string(path)?;
    let samples: Vec<Vec<f64>> = serde_json::from_str(&content)?;
    Ok(samples)
}

/// Checks that `samples` is non-empty and every sample has `dimension` finite components.
pub fn validate_samples(samples: &[Vec<f64>], dimension: usize) -> Result<()> {
    if samples.is_empty() {
        return Err(SomError::EmptyInput("No training samples provided".to_string()));
    }
    if let Some(bad) = samples.iter().find(|s| s.len() != dimension) {
        return Err(SomError::DimensionMismatch {
            expected: dimension,
            found: bad.len(),
        });
    }
    if let Some(index) = samples.iter().position(|s| s.iter().any(|v| !v.is_finite())) {
        return Err(SomError::Config(format!(
            "Sample {} has a non-finite component", index
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_validate_samples() {
        assert!(validate_samples(&[vec![0.0, 1.0], vec![0.5, 0.5]], 2).is_ok());
        assert!(matches!(
            validate_samples(&[], 2),
            Err(SomError::EmptyInput(_))
        ));
        assert!(matches!(
            validate_samples(&[vec![0.0, 1.0], vec![0.5]], 2),
            Err(SomError::DimensionMismatch { expected: 2, found: 1 })
        ));
    }

    #[test]
    fn test_validate_samples_rejects_non_finite() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let samples = vec![vec![0.0, 1.0], vec![0.5, bad]];
            assert!(matches!(validate_samples(&samples, 2), Err(SomError::Config(_))));
        }
    }

    #[test]
    fn test_load_samples() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("samples.json");
        std::fs::write(&path, "[[0, 0.5, 1], [1, 0.25, 0]]").unwrap();

        let samples = load_samples(&path).unwrap();
        assert_eq!(samples, vec![vec![0.0, 0.5, 1.0], vec![1.0, 0.25, 0.0]]);
    }

    #[test]
    fn test_load_samples_rejects_bad_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("samples.json");
        std::fs::write(&path, "[[0, \"a\"]]").unwrap();

        assert!(matches!(load_samples(&path), Err(SomError::Json(_))));
        assert!(matches!(
            load_samples(&dir.path().join("missing.json")),
            Err(SomError::Io(_))
        ));
    }
}
