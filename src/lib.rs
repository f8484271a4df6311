//! Numerical core for a single-feature linear regression demo.
//!
//! The crate covers the full pipeline the demo needs: generate a synthetic
//! two-column dataset (or read one from CSV), fit an ordinary least-squares
//! line, produce per-point predictions and residuals, and compute aggregate
//! error metrics.
//!
//! ```rust
//! use linefit::{generate, GenerationParams, LinearRegression, Metrics};
//!
//! let params = GenerationParams {
//!     slope: 1.5,
//!     intercept: 0.5,
//!     noise_std: 0.0,
//!     num_points: 5,
//!     random_seed: 42,
//! };
//! let data = generate(&params).unwrap();
//!
//! let mut model = LinearRegression::new();
//! model.fit(&data).unwrap();
//!
//! let evaluated = model.evaluate(&data).unwrap();
//! let metrics = Metrics::compute(&evaluated).unwrap();
//! assert!((metrics.r2 - 1.0).abs() < 1e-9);
//! ```

pub use ndarray::Array1;

pub mod dataset;
pub mod error;
pub mod io;
pub mod linear_model;
pub mod metrics;
pub mod synthetic;

pub type Vector = Array1<f64>;

pub use dataset::{Dataset, EvaluatedDataset};
pub use error::{Error, Result};
pub use linear_model::LinearRegression;
pub use metrics::Metrics;
pub use synthetic::{GenerationParams, generate};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noiseless_pipeline_recovers_parameters() {
        let params = GenerationParams {
            slope: 1.5,
            intercept: 0.5,
            noise_std: 0.0,
            num_points: 5,
            random_seed: 42,
        };
        let data = generate(&params).unwrap();

        let expected_x = [-10.0, -5.0, 0.0, 5.0, 10.0];
        let expected_y = [-14.5, -7.0, 0.5, 8.0, 15.5];
        for i in 0..5 {
            assert!((data.x[i] - expected_x[i]).abs() < 1e-9);
            assert!((data.y[i] - expected_y[i]).abs() < 1e-9);
        }

        let mut model = LinearRegression::new();
        model.fit(&data).unwrap();
        assert!((model.slope.unwrap() - 1.5).abs() < 1e-9);
        assert!((model.intercept.unwrap() - 0.5).abs() < 1e-9);

        let evaluated = model.evaluate(&data).unwrap();
        let metrics = Metrics::compute(&evaluated).unwrap();
        assert!(metrics.mse < 1e-18);
        assert!(metrics.rmse < 1e-9);
        assert!((metrics.r2 - 1.0).abs() < 1e-9);
    }
}
