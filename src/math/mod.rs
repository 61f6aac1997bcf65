//! Mathematical utilities for the noise model

/// Validated covariance matrices
pub mod covariance;
/// Bivariate normal probability densities
pub mod density;
