//! Command-line driver rendering example figures and streaming overlays

use crate::dataset::MaskedDataset;
use crate::io::configuration::{
    DEFAULT_COVARIANCE, DEFAULT_FIGSIZE, DEFAULT_GRANULARITY, DEFAULT_SEED, DEFAULT_SIZE,
    DENSITY_OUTPUT, DatasetConfig, GridBounds, MASK_OUTPUT, Size,
};
use crate::io::error::Result;
use crate::io::progress::ProgressReporter;
use crate::math::covariance::CovarianceMatrix;
use clap::Parser;
use ndarray::ArrayD;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gaussmask")]
#[command(
    author,
    version,
    about = "Overlay bivariate normal noise masks onto a directory of images"
)]
/// Command-line arguments for the mask driver
pub struct Cli {
    /// Directory searched recursively for source images
    #[arg(value_name = "DIR")]
    pub target: PathBuf,

    /// Target width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_SIZE.0)]
    pub width: usize,

    /// Target height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_SIZE.1)]
    pub height: usize,

    /// Covariance matrix entries in row-major order
    #[arg(
        short,
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_values_t = DEFAULT_COVARIANCE.concat()
    )]
    pub covariance: Vec<f64>,

    /// Random seed for reproducible masks
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Sub-pixel step of the density contour plot
    #[arg(short, long, default_value_t = DEFAULT_GRANULARITY)]
    pub granularity: f64,

    /// Figure width in inches
    #[arg(long, default_value_t = DEFAULT_FIGSIZE.0)]
    pub fig_width: f64,

    /// Figure height in inches
    #[arg(long, default_value_t = DEFAULT_FIGSIZE.1)]
    pub fig_height: f64,

    /// Output path of the density contour plot
    #[arg(long, default_value = DENSITY_OUTPUT)]
    pub density_output: PathBuf,

    /// Output path of the mask heatmap
    #[arg(long, default_value = MASK_OUTPUT)]
    pub mask_output: PathBuf,

    /// Bound the y axis by the height instead of the width
    #[arg(short, long)]
    pub full_bounds: bool,

    /// Overlay masks onto every image under the target directory
    #[arg(short, long)]
    pub overlays: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Mask grid extent selected by the flags
    pub const fn bounds(&self) -> GridBounds {
        if self.full_bounds {
            GridBounds::Full
        } else {
            GridBounds::FirstAxis
        }
    }

    /// Build and validate the dataset configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the size or covariance is invalid
    pub fn config(&self) -> Result<DatasetConfig> {
        let covariance = CovarianceMatrix::from_row_major(&self.covariance)?;
        let size = Size::new(self.width, self.height)?;
        Ok(DatasetConfig::new(covariance, size, &self.target)
            .with_seed(self.seed)
            .with_figsize(self.fig_width, self.fig_height)
            .with_bounds(self.bounds()))
    }
}

/// Runs the driver steps in order: density plot, mask heatmap, overlays
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Render both figures and optionally stream overlays
    ///
    /// # Errors
    ///
    /// Returns the first configuration, rendering or overlay error
    pub fn run(&self) -> Result<()> {
        let mut dataset = MaskedDataset::new(self.cli.config()?);

        dataset.render_density(&self.cli.density_output, self.cli.granularity)?;
        log::info!("Density plot written to {}", self.cli.density_output.display());

        dataset.render_mask(&self.cli.mask_output)?;
        log::info!("Mask heatmap written to {}", self.cli.mask_output.display());

        if self.cli.overlays {
            self.stream_overlays(&mut dataset)?;
        }
        Ok(())
    }

    fn stream_overlays(&self, dataset: &mut MaskedDataset) -> Result<()> {
        let progress = if self.cli.should_show_progress() {
            ProgressReporter::new()
        } else {
            ProgressReporter::hidden()
        };

        for picture in dataset.iter() {
            let picture = picture?;
            let summary = summarize(&picture);
            log::info!("Overlay {}: {summary}", progress.count() + 1);
            progress.advance(summary);
        }

        progress.finish();
        log::info!(
            "Overlaid {} images using {} sign draws",
            progress.count(),
            dataset.random_source().sign_draws()
        );
        Ok(())
    }
}

/// Shape and value range of an overlaid image
pub fn summarize(picture: &ArrayD<f64>) -> String {
    let (low, high) = picture
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    format!("shape {:?}, range {low:.3}..{high:.3}", picture.shape())
}
