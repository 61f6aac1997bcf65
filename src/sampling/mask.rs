//! Signed density masks over the pixel grid

use crate::io::configuration::{GridBounds, Size};
use crate::io::error::{Result, shape_error};
use crate::math::covariance::CovarianceMatrix;
use crate::math::density::DensityField;
use crate::sampling::mean::{MeanDraw, MeanSampler};
use crate::sampling::random::RandomSource;
use ndarray::Array2;

/// Noise field indexed `[x, y]` with shape `(width, height)`
pub type Mask = Array2<f64>;

/// Generates masks from a fresh mean on every call
///
/// Each mask consumes one mean draw plus one sign draw per visited pixel,
/// so consecutive masks from the same generator differ.
#[derive(Clone, Copy, Debug)]
pub struct MaskGenerator {
    size: Size,
    covariance: CovarianceMatrix,
    bounds: GridBounds,
    means: MeanSampler,
}

impl MaskGenerator {
    /// Create a generator for a fixed size and covariance
    pub const fn new(size: Size, covariance: CovarianceMatrix, bounds: GridBounds) -> Self {
        Self {
            size,
            covariance,
            bounds,
            means: MeanSampler::new(size, bounds),
        }
    }

    /// Grid size of generated masks
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Extent of the mean and the fill loop
    pub const fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// Covariance shared by every density this generator builds
    pub const fn covariance(&self) -> &CovarianceMatrix {
        &self.covariance
    }

    /// Draw a mean and bind it to the covariance
    ///
    /// # Errors
    ///
    /// Returns an error if mean sampling fails
    pub fn density_field(&self, rng: &mut RandomSource) -> Result<(MeanDraw, DensityField)> {
        let mean = self.means.sample(rng)?;
        Ok((mean, DensityField::new(mean.coordinates(), &self.covariance)))
    }

    /// Generate a mask
    ///
    /// # Errors
    ///
    /// Returns an error if mean sampling fails or the fill loop leaves the
    /// array, which first-axis bounds do whenever the height is below the width
    pub fn generate(&self, rng: &mut RandomSource) -> Result<Mask> {
        self.generate_with_mean(rng).map(|(_, mask)| mask)
    }

    /// Generate a mask and report the mean it was centred on
    ///
    /// # Errors
    ///
    /// Returns an error if mean sampling fails or a visited pixel lies
    /// outside the mask
    pub fn generate_with_mean(&self, rng: &mut RandomSource) -> Result<(MeanDraw, Mask)> {
        let (mean, field) = self.density_field(rng)?;
        log::debug!("Generating {:?} mask around mean {:?}", self.size, mean);

        let mut mask = Mask::zeros(self.size.shape());
        let y_extent = self.bounds.y_extent(self.size);

        for x in 0..self.size.width {
            for y in 0..y_extent {
                let value = rng.sign() * field.density(x as f64, y as f64);
                let cell = mask.get_mut([x, y]).ok_or_else(|| {
                    shape_error("mask fill", &[self.size.width, self.size.height], &[x, y])
                })?;
                *cell = value;
            }
        }

        Ok((mean, mask))
    }
}
