//! Random mean selection inside the mask grid

use crate::io::configuration::{GridBounds, Size};
use crate::io::error::{Result, shape_error};
use crate::sampling::random::RandomSource;

/// A sampled mean, tagged with how the generator produced it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeanDraw {
    /// Both coordinates came from a single categorical call
    Joint([usize; 2]),
    /// Each coordinate came from its own categorical call
    Independent {
        /// First coordinate
        x: usize,
        /// Second coordinate
        y: usize,
    },
}

impl MeanDraw {
    /// Integer pixel coordinates `[x, y]`
    pub const fn pixel(&self) -> [usize; 2] {
        match *self {
            Self::Joint(pixel) => pixel,
            Self::Independent { x, y } => [x, y],
        }
    }

    /// Coordinates as a density mean
    pub fn coordinates(&self) -> [f64; 2] {
        let [x, y] = self.pixel();
        [x as f64, y as f64]
    }
}

/// Draws density means for a fixed grid size
#[derive(Clone, Copy, Debug)]
pub struct MeanSampler {
    size: Size,
    bounds: GridBounds,
}

impl MeanSampler {
    /// Create a sampler for the given grid
    pub const fn new(size: Size, bounds: GridBounds) -> Self {
        Self { size, bounds }
    }

    /// Draw a mean from the generator
    ///
    /// Square grids take both coordinates from one categorical call over the
    /// width; other grids make two independent calls. The x range is always
    /// the width, the y range follows the grid bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if the categorical range is empty
    pub fn sample(&self, rng: &mut RandomSource) -> Result<MeanDraw> {
        let x_range = self.size.width;
        let y_range = self.bounds.y_extent(self.size);

        if self.size.is_square() {
            match rng.choose_many(x_range, 2)?.as_slice() {
                &[x, y] => Ok(MeanDraw::Joint([x, y])),
                other => Err(shape_error("mean sampling", &[2], &[other.len()])),
            }
        } else {
            let x = rng.choose(x_range)?;
            let y = rng.choose(y_range)?;
            Ok(MeanDraw::Independent { x, y })
        }
    }
}
