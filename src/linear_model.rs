//! Ordinary least-squares fit of a single-feature line.
//!
//! ```rust
//! use linefit::{Dataset, LinearRegression};
//! use ndarray::array;
//!
//! let data = Dataset::new(array![1.0, 2.0, 3.0], array![5.0, 7.0, 9.0]).unwrap();
//!
//! let mut model = LinearRegression::new();
//! model.fit(&data).unwrap();
//! assert!((model.slope.unwrap() - 2.0).abs() < 1e-9);
//! assert!((model.intercept.unwrap() - 3.0).abs() < 1e-9);
//! ```

use crate::Vector;
use crate::dataset::{Dataset, EvaluatedDataset};
use crate::error::{Error, Result};
use crate::metrics;

/// Closed-form least-squares line y = slope * x + intercept.
///
/// Coefficients are `None` until [`fit`](LinearRegression::fit) has run.
#[derive(Clone, Debug, Default)]
pub struct LinearRegression {
    pub slope: Option<f64>,
    pub intercept: Option<f64>,
}

impl LinearRegression {
    pub fn new() -> Self {
        Self {
            slope: None,
            intercept: None,
        }
    }

    /// Fits the line by ordinary least squares:
    /// slope = Σ((xᵢ-x̄)(yᵢ-ȳ)) / Σ((xᵢ-x̄)²), intercept = ȳ - slope * x̄.
    ///
    /// A zero-variance predictor (all x identical, including a single-point
    /// dataset) yields slope = 0 and intercept = ȳ by convention instead of
    /// dividing by zero.
    pub fn fit(&mut self, data: &Dataset) -> Result<()> {
        // Dataset construction guarantees at least one row.
        let x_mean = data.x.mean().unwrap();
        let y_mean = data.y.mean().unwrap();

        let x_centered = &data.x - x_mean;
        let y_centered = &data.y - y_mean;

        let sxx = x_centered.mapv(|v| v * v).sum();
        let sxy = (&x_centered * &y_centered).sum();

        let slope = if sxx == 0.0 { 0.0 } else { sxy / sxx };

        self.slope = Some(slope);
        self.intercept = Some(y_mean - slope * x_mean);
        Ok(())
    }

    /// Predicts y for each x value.
    pub fn predict(&self, x: &Vector) -> Result<Vector> {
        let slope = self.slope.ok_or(Error::NotFitted)?;
        let intercept = self.intercept.ok_or(Error::NotFitted)?;

        Ok(x * slope + intercept)
    }

    /// Extends `data` with predictions and residuals, preserving row order.
    pub fn evaluate(&self, data: &Dataset) -> Result<EvaluatedDataset> {
        let y_pred = self.predict(&data.x)?;
        let residual = &data.y - &y_pred;

        Ok(EvaluatedDataset {
            x: data.x.clone(),
            y: data.y.clone(),
            y_pred,
            residual,
        })
    }

    /// R² of the fitted line against `data`.
    pub fn score(&self, data: &Dataset) -> Result<f64> {
        let y_pred = self.predict(&data.x)?;
        metrics::r2_score(&data.y, &y_pred)
    }
}
