use crate::Vector;
use crate::error::{Error, Result};

/// A two-column numeric dataset of (x, y) observations.
///
/// Both columns always have the same nonzero length; construction enforces
/// the invariant so downstream code can rely on it.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub x: Vector,
    pub y: Vector,
}

impl Dataset {
    pub fn new(x: Vector, y: Vector) -> Result<Self> {
        if x.len() != y.len() {
            return Err(Error::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if x.is_empty() {
            return Err(Error::EmptyDataset);
        }

        Ok(Self { x, y })
    }

    pub fn n_samples(&self) -> usize {
        self.x.len()
    }
}

/// A [`Dataset`] extended per row with the model's prediction and residual.
///
/// Rows correspond 1:1 with the source dataset, in the same order, with
/// `residual = y - y_pred`.
#[derive(Clone, Debug, PartialEq)]
pub struct EvaluatedDataset {
    pub x: Vector,
    pub y: Vector,
    pub y_pred: Vector,
    pub residual: Vector,
}

impl EvaluatedDataset {
    pub fn n_samples(&self) -> usize {
        self.x.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_dataset_creation() {
        let x = array![1.0, 2.0, 3.0];
        let y = array![2.0, 4.0, 6.0];

        let dataset = Dataset::new(x, y).unwrap();
        assert_eq!(dataset.n_samples(), 3);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let x = array![1.0, 2.0];
        let y = array![1.0, 2.0, 3.0];

        assert!(matches!(
            Dataset::new(x, y),
            Err(Error::LengthMismatch { x_len: 2, y_len: 3 })
        ));
    }

    #[test]
    fn test_empty_dataset_rejected() {
        let x = Vector::zeros(0);
        let y = Vector::zeros(0);

        assert!(matches!(Dataset::new(x, y), Err(Error::EmptyDataset)));
    }
}
