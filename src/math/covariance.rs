//! Validated 2x2 covariance matrices
//!
//! A matrix only exists in validated form, so every density built from it
//! has a finite normalization constant and an invertible quadratic form.

use crate::io::error::{Result, invalid_covariance};

// Relative tolerance for the symmetry check
const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// Symmetric positive-definite 2x2 matrix with cached determinant and inverse
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CovarianceMatrix {
    entries: [[f64; 2]; 2],
    determinant: f64,
    inverse: [[f64; 2]; 2],
}

impl CovarianceMatrix {
    /// Validate a row-major matrix as a bivariate normal covariance
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any entry is NaN or infinite
    /// - The off-diagonal entries differ
    /// - The matrix is not positive-definite
    pub fn new(entries: [[f64; 2]; 2]) -> Result<Self> {
        let [[a, b], [c, d]] = entries;

        if entries.iter().flatten().any(|v| !v.is_finite()) {
            return Err(invalid_covariance(&format!(
                "entries must be finite, got {entries:?}"
            )));
        }

        let scale = a.abs().max(d.abs()).max(1.0);
        if (b - c).abs() > SYMMETRY_TOLERANCE * scale {
            return Err(invalid_covariance(&format!(
                "matrix must be symmetric, got off-diagonal {b} and {c}"
            )));
        }

        // Sylvester's criterion for 2x2
        let determinant = a.mul_add(d, -(b * c));
        if a <= 0.0 || determinant <= 0.0 {
            return Err(invalid_covariance(&format!(
                "matrix must be positive-definite, got {entries:?} with determinant {determinant}"
            )));
        }

        let inverse = [
            [d / determinant, -b / determinant],
            [-c / determinant, a / determinant],
        ];

        Ok(Self {
            entries,
            determinant,
            inverse,
        })
    }

    /// Build from a flat row-major slice of four entries
    ///
    /// # Errors
    ///
    /// Returns an error if the slice does not hold exactly four values or the
    /// resulting matrix fails validation
    pub fn from_row_major(values: &[f64]) -> Result<Self> {
        match values {
            &[a, b, c, d] => Self::new([[a, b], [c, d]]),
            _ => Err(invalid_covariance(&format!(
                "expected 4 entries, got {}",
                values.len()
            ))),
        }
    }

    /// Row-major entries
    pub const fn entries(&self) -> [[f64; 2]; 2] {
        self.entries
    }

    /// Determinant, always positive
    pub const fn determinant(&self) -> f64 {
        self.determinant
    }

    /// Precision matrix
    pub const fn inverse(&self) -> [[f64; 2]; 2] {
        self.inverse
    }

    /// Quadratic form `dᵀ Σ⁻¹ d` for an offset from the mean
    pub fn mahalanobis_squared(&self, dx: f64, dy: f64) -> f64 {
        let [[p00, p01], [p10, p11]] = self.inverse;
        let row_x = p00.mul_add(dx, p01 * dy);
        let row_y = p10.mul_add(dx, p11 * dy);
        dx.mul_add(row_x, dy * row_y)
    }
}
