//! Seeded dataset that owns the generator and exposes overlays and figures

use crate::io::configuration::DatasetConfig;
use crate::io::error::Result;
use crate::io::overlay::Overlays;
use crate::io::visualization;
use crate::sampling::mask::{Mask, MaskGenerator};
use crate::sampling::random::RandomSource;
use std::path::Path;

/// Images from a directory tree with freshly generated masks added
///
/// Every sampling call advances the owned generator, so two datasets with the
/// same configuration produce the same sequence of masks.
///
/// ```no_run
/// use gaussmask::{CovarianceMatrix, DatasetConfig, MaskedDataset, Size};
///
/// # fn main() -> gaussmask::Result<()> {
/// let covariance = CovarianceMatrix::new([[100.0, 30.0], [30.0, 100.0]])?;
/// let config = DatasetConfig::new(covariance, Size::new(200, 200)?, "images");
/// let mut dataset = MaskedDataset::new(config);
/// for picture in &mut dataset {
///     let picture = picture?;
///     assert_eq!(&picture.shape()[..2], &[200, 200]);
/// }
/// # Ok(())
/// # }
/// ```
pub struct MaskedDataset {
    config: DatasetConfig,
    masks: MaskGenerator,
    rng: RandomSource,
}

impl MaskedDataset {
    /// Seed the generator from the configuration
    pub fn new(config: DatasetConfig) -> Self {
        let masks = MaskGenerator::new(config.size, config.covariance, config.bounds);
        let rng = RandomSource::new(config.seed);
        Self { config, masks, rng }
    }

    /// Configuration this dataset was built from
    pub const fn config(&self) -> &DatasetConfig {
        &self.config
    }

    /// Generator state, for inspecting how many draws have been made
    pub const fn random_source(&self) -> &RandomSource {
        &self.rng
    }

    /// Generate a fresh mask
    ///
    /// # Errors
    ///
    /// Returns an error if mean sampling fails or the fill loop leaves the mask
    pub fn generate_mask(&mut self) -> Result<Mask> {
        self.masks.generate(&mut self.rng)
    }

    /// Start a fresh walk over the image directory
    pub fn iter(&mut self) -> Overlays<'_> {
        Overlays::new(&self.config.path, &self.masks, &mut self.rng)
    }

    /// Render the density of a freshly drawn mean as a filled contour plot
    ///
    /// # Errors
    ///
    /// Returns an error if the granularity or figure size is invalid, or the
    /// figure cannot be drawn or written
    pub fn render_density(&mut self, path: impl AsRef<Path>, granularity: f64) -> Result<()> {
        let figure = self.config.figure_pixels()?;
        let (_, field) = self.masks.density_field(&mut self.rng)?;
        visualization::render_density(
            &field,
            self.config.size,
            granularity,
            figure,
            path.as_ref(),
        )
    }

    /// Render a freshly generated mask as a heatmap
    ///
    /// # Errors
    ///
    /// Returns an error if mask generation fails, the figure size is invalid,
    /// or the figure cannot be drawn or written
    pub fn render_mask(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let figure = self.config.figure_pixels()?;
        let mask = self.generate_mask()?;
        visualization::render_mask(&mask, figure, path.as_ref())
    }
}

impl<'a> IntoIterator for &'a mut MaskedDataset {
    type Item = Result<ndarray::ArrayD<f64>>;
    type IntoIter = Overlays<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
