//! Synthetic dataset generation.
//!
//! Produces a two-column dataset y = slope * x + intercept + noise, with x
//! evenly spaced over [`X_MIN`, `X_MAX`] and Gaussian noise drawn from a
//! seeded generator, so identical parameters always reproduce the same data.

use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Normal;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::Vector;
use crate::dataset::Dataset;
use crate::error::{Error, Result};

/// Lower bound of the sampled x interval.
pub const X_MIN: f64 = -10.0;
/// Upper bound of the sampled x interval.
pub const X_MAX: f64 = 10.0;

/// Parameters fully determining a synthetic dataset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationParams {
    pub slope: f64,
    pub intercept: f64,
    /// Standard deviation of the Gaussian noise added to y. Must be >= 0.
    pub noise_std: f64,
    /// Number of rows to generate. Must be >= 1.
    pub num_points: usize,
    pub random_seed: u64,
}

/// Generates a synthetic dataset from `params`.
///
/// The x column is `num_points` evenly spaced samples over the closed
/// interval [-10, 10] (a single point sits at -10). The y column is
/// `slope * x + intercept` plus per-point noise from N(0, noise_std²),
/// drawn from an RNG seeded with `random_seed`.
///
/// # Errors
/// Returns [`Error::InvalidParameter`] if `num_points` is zero or
/// `noise_std` is negative or not finite.
pub fn generate(params: &GenerationParams) -> Result<Dataset> {
    if params.num_points == 0 {
        return Err(Error::InvalidParameter("num_points must be >= 1"));
    }
    if !params.noise_std.is_finite() || params.noise_std < 0.0 {
        return Err(Error::InvalidParameter("noise_std must be >= 0"));
    }

    let x = Vector::linspace(X_MIN, X_MAX, params.num_points);

    let normal = Normal::new(0.0, params.noise_std)
        .map_err(|_| Error::InvalidParameter("noise_std must be >= 0"))?;
    let mut rng = StdRng::seed_from_u64(params.random_seed);
    let noise = Vector::random_using(params.num_points, normal, &mut rng);

    let y = &x * params.slope + params.intercept + noise;
    Dataset::new(x, y)
}
