//! Bivariate normal probability density bound to one mean

use crate::math::covariance::CovarianceMatrix;
use ndarray::Array2;
use std::f64::consts::PI;

/// Bivariate normal density with a fixed mean and covariance
#[derive(Clone, Copy, Debug)]
pub struct DensityField {
    mean: [f64; 2],
    covariance: CovarianceMatrix,
    normalization: f64,
}

impl DensityField {
    /// Bind a mean to a validated covariance
    pub fn new(mean: [f64; 2], covariance: &CovarianceMatrix) -> Self {
        Self {
            mean,
            covariance: *covariance,
            normalization: 1.0 / (2.0 * PI * covariance.determinant().sqrt()),
        }
    }

    /// Mean of the distribution
    pub const fn mean(&self) -> [f64; 2] {
        self.mean
    }

    /// Probability density at `(x, y)`
    pub fn density(&self, x: f64, y: f64) -> f64 {
        let [mx, my] = self.mean;
        self.normalization * (-0.5 * self.covariance.mahalanobis_squared(x - mx, y - my)).exp()
    }

    /// Evaluate the density on a regular grid starting at the origin
    ///
    /// Samples `x = i * step < width` and `y = j * step < height`. Returns the
    /// axis coordinates and the values indexed `[i, j]`.
    pub fn sample_grid(
        &self,
        width: f64,
        height: f64,
        step: f64,
    ) -> (Vec<f64>, Vec<f64>, Array2<f64>) {
        let xs = grid_axis(width, step);
        let ys = grid_axis(height, step);
        let values = Array2::from_shape_fn((xs.len(), ys.len()), |(i, j)| {
            let x = xs.get(i).copied().unwrap_or(0.0);
            let y = ys.get(j).copied().unwrap_or(0.0);
            self.density(x, y)
        });
        (xs, ys, values)
    }
}

/// Number of samples `sample_grid` takes along an axis of the given extent
///
/// Saturates at `usize::MAX` when the step is vanishingly small.
pub fn grid_len(extent: f64, step: f64) -> usize {
    (extent / step).ceil().max(0.0) as usize
}

// Half-open range [0, extent) with the given step, counted the way mgrid counts
fn grid_axis(extent: f64, step: f64) -> Vec<f64> {
    (0..grid_len(extent, step)).map(|i| i as f64 * step).collect()
}
