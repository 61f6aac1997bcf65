//! Dataset configuration, validation and runtime defaults

use crate::io::error::{Result, invalid_parameter};
use crate::math::covariance::CovarianceMatrix;
use std::path::{Path, PathBuf};

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 12345;

/// Default target size (width, height) in pixels
pub const DEFAULT_SIZE: (usize, usize) = (200, 200);

/// Default covariance entries in row-major order
pub const DEFAULT_COVARIANCE: [[f64; 2]; 2] = [[100.0, 30.0], [30.0, 100.0]];

// Plot settings
/// Figure size (width, height) in inches
pub const DEFAULT_FIGSIZE: (f64, f64) = (10.0, 5.0);
/// Pixels per figure inch
pub const FIGURE_DPI: f64 = 100.0;
/// Sub-pixel step for density contour sampling
pub const DEFAULT_GRANULARITY: f64 = 0.1;
/// Upper bound on density samples taken for one contour plot
pub const MAX_DENSITY_SAMPLES: usize = 1 << 24;
/// Number of filled bands in the density contour plot
pub const CONTOUR_LEVELS: usize = 8;
/// Margin around the plotting area in pixels
pub const PLOT_MARGIN: u32 = 20;
/// Width of the heatmap colorbar strip in pixels
pub const COLORBAR_WIDTH: u32 = 24;

// Output settings
/// Default file name for the density contour plot
pub const DENSITY_OUTPUT: &str = "example_mvn.png";
/// Default file name for the mask heatmap
pub const MASK_OUTPUT: &str = "example_mask.png";

/// Target image size, also the extent of the mask grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    /// Width in pixels, the first mask axis
    pub width: usize,
    /// Height in pixels, the second mask axis
    pub height: usize,
}

impl Size {
    /// Create a size, rejecting zero extents
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(invalid_parameter(
                "size",
                &format!("{width}x{height}"),
                &"both dimensions must be positive",
            ));
        }
        Ok(Self { width, height })
    }

    /// Whether width and height agree
    pub const fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Mask array shape `(width, height)`
    pub const fn shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }
}

/// Extent of the sampled mean and of the mask fill loop
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GridBounds {
    /// Both axes are bounded by the width
    ///
    /// Columns at or beyond the width are left at zero when the height is larger,
    /// and filling fails with a shape error when the height is smaller.
    #[default]
    FirstAxis,
    /// The x axis is bounded by the width and the y axis by the height
    Full,
}

impl GridBounds {
    /// Exclusive upper bound for the y axis under these bounds
    pub const fn y_extent(self, size: Size) -> usize {
        match self {
            Self::FirstAxis => size.width,
            Self::Full => size.height,
        }
    }
}

/// Everything the dataset needs, fixed for its lifetime
#[derive(Clone, Debug)]
pub struct DatasetConfig {
    /// Covariance of the bivariate normal density
    pub covariance: CovarianceMatrix,
    /// Target image size and mask extent
    pub size: Size,
    /// Root directory of the source images
    pub path: PathBuf,
    /// Seed for the random generator
    pub seed: u64,
    /// Figure size (width, height) in inches
    pub figsize: (f64, f64),
    /// Mask grid extent
    pub bounds: GridBounds,
}

impl DatasetConfig {
    /// Create a configuration with the default seed, figure size and bounds
    pub fn new(covariance: CovarianceMatrix, size: Size, path: impl AsRef<Path>) -> Self {
        Self {
            covariance,
            size,
            path: path.as_ref().to_path_buf(),
            seed: DEFAULT_SEED,
            figsize: DEFAULT_FIGSIZE,
            bounds: GridBounds::default(),
        }
    }

    /// Replace the random seed
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the figure size
    #[must_use]
    pub const fn with_figsize(mut self, width: f64, height: f64) -> Self {
        self.figsize = (width, height);
        self
    }

    /// Replace the mask grid extent
    #[must_use]
    pub const fn with_bounds(mut self, bounds: GridBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Figure size converted to output pixels
    ///
    /// # Errors
    ///
    /// Returns an error if the figure is smaller than one pixel in either
    /// direction or not finite
    pub fn figure_pixels(&self) -> Result<(u32, u32)> {
        let (width, height) = self.figsize;
        let to_pixels = |inches: f64| {
            let pixels = (inches * FIGURE_DPI).round();
            (pixels.is_finite() && pixels >= 1.0 && pixels <= f64::from(u32::MAX))
                .then_some(pixels as u32)
        };
        match (to_pixels(width), to_pixels(height)) {
            (Some(w), Some(h)) => Ok((w, h)),
            _ => Err(invalid_parameter(
                "figsize",
                &format!("({width}, {height})"),
                &"figure must span at least one pixel in each direction",
            )),
        }
    }
}
