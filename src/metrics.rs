//! Aggregate error metrics over observed and predicted values.

use crate::Vector;
use crate::dataset::EvaluatedDataset;
use crate::error::{Error, Result};

fn check_lengths(y_true: &Vector, y_pred: &Vector) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(Error::LengthMismatch {
            x_len: y_true.len(),
            y_len: y_pred.len(),
        });
    }
    if y_true.is_empty() {
        return Err(Error::EmptyDataset);
    }
    Ok(())
}

pub fn mean_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;

    let diff = y_true - y_pred;
    let mse = diff.mapv(|v| v * v).mean().unwrap();
    Ok(mse)
}

pub fn root_mean_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    Ok(mean_squared_error(y_true, y_pred)?.sqrt())
}

/// Fraction of the response variance explained by the predictions.
///
/// When the total variance of `y_true` is zero (all responses identical), R²
/// is undefined; by convention this returns 1.0 if the predictions are also
/// exact and `f64::NAN` otherwise.
pub fn r2_score(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;

    let y_mean = y_true.mean().unwrap();
    let ss_res = (y_true - y_pred).mapv(|v| v * v).sum();
    let ss_tot = y_true.mapv(|v| (v - y_mean) * (v - y_mean)).sum();

    if ss_tot == 0.0 {
        return Ok(if ss_res == 0.0 { 1.0 } else { f64::NAN });
    }

    Ok(1.0 - ss_res / ss_tot)
}

/// The three aggregate metrics derived from an [`EvaluatedDataset`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metrics {
    pub mse: f64,
    pub rmse: f64,
    pub r2: f64,
}

impl Metrics {
    pub fn compute(evaluated: &EvaluatedDataset) -> Result<Self> {
        let mse = mean_squared_error(&evaluated.y, &evaluated.y_pred)?;
        let r2 = r2_score(&evaluated.y, &evaluated.y_pred)?;

        Ok(Self {
            mse,
            rmse: mse.sqrt(),
            r2,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_mean_squared_error() {
        let y_true = array![1.0, 2.0, 3.0];
        let y_pred = array![1.0, 2.0, 3.0];

        let mse = mean_squared_error(&y_true, &y_pred).unwrap();
        assert!((mse - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_mean_squared_error_simple_case() {
        // squared diffs = [1, 0, 1], mean = 2/3
        let y_true = array![1.0, 2.0, 3.0];
        let y_pred = array![2.0, 2.0, 2.0];

        let mse = mean_squared_error(&y_true, &y_pred).unwrap();
        assert!((mse - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_rmse_is_sqrt_of_mse() {
        let y_true = array![0.0, 0.0];
        let y_pred = array![3.0, 3.0];

        let rmse = root_mean_squared_error(&y_true, &y_pred).unwrap();
        assert!((rmse - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_r2_score() {
        let y_true = array![1.0, 2.0, 3.0, 4.0];
        let y_pred = array![1.0, 2.0, 3.0, 4.0];

        let r2 = r2_score(&y_true, &y_pred).unwrap();
        assert!((r2 - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_r2_score_mean_predictor() {
        // Predicting the mean explains none of the variance.
        let y_true = array![1.0, 2.0, 3.0];
        let y_pred = array![2.0, 2.0, 2.0];

        let r2 = r2_score(&y_true, &y_pred).unwrap();
        assert!(r2.abs() < 1e-12);
    }

    #[test]
    fn test_r2_score_zero_variance_response() {
        let y_true = array![2.0, 2.0, 2.0];

        let exact = r2_score(&y_true, &array![2.0, 2.0, 2.0]).unwrap();
        assert_eq!(exact, 1.0);

        let inexact = r2_score(&y_true, &array![2.0, 2.5, 2.0]).unwrap();
        assert!(inexact.is_nan());
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let y_true = array![1.0, 2.0];
        let y_pred = array![1.0, 2.0, 3.0];

        assert!(mean_squared_error(&y_true, &y_pred).is_err());
        assert!(r2_score(&y_true, &y_pred).is_err());
    }

    #[test]
    fn test_metrics_compute() {
        let evaluated = EvaluatedDataset {
            x: array![0.0, 1.0, 2.0],
            y: array![1.0, 2.0, 3.0],
            y_pred: array![1.0, 2.0, 3.0],
            residual: array![0.0, 0.0, 0.0],
        };

        let metrics = Metrics::compute(&evaluated).unwrap();
        assert!(metrics.mse < 1e-12);
        assert!(metrics.rmse < 1e-12);
        assert!((metrics.r2 - 1.0).abs() < 1e-12);
    }
}
