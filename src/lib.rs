//! Bivariate normal noise masks for image dataset augmentation
//!
//! A mask is a bivariate normal density evaluated over the pixel grid around a
//! randomly drawn mean, with an independent random sign on every pixel. Masks
//! are added to images read from a directory tree, and can be inspected as a
//! density contour plot or a heatmap.

#![forbid(unsafe_code)]

/// Coordinating dataset owning the seeded generator
pub mod dataset;
/// Input/output operations, configuration and error handling
pub mod io;
/// Covariance validation and bivariate normal densities
pub mod math;
/// Random sources, mean sampling and mask generation
pub mod sampling;

pub use dataset::MaskedDataset;
pub use io::configuration::{DatasetConfig, GridBounds, Size};
pub use io::error::{NoiseError, Result};
pub use math::covariance::CovarianceMatrix;
pub use sampling::mask::{Mask, MaskGenerator};
