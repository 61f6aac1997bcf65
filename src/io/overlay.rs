//! Lazy directory walk that adds a fresh mask to every image

use crate::io::configuration::{GridBounds, Size};
use crate::io::error::{NoiseError, Result, shape_error};
use crate::io::image::{load_resized, to_pixel_array};
use crate::sampling::mask::{Mask, MaskGenerator};
use crate::sampling::random::RandomSource;
use ndarray::{ArrayD, Axis};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Add a mask to a pixel array without clipping
///
/// A `(rows, cols)` image needs a mask of the same shape. A
/// `(rows, cols, channels)` image gets the mask added to every channel.
///
/// # Errors
///
/// Returns an error if the mask shape does not match the image's leading axes
pub fn overlay(image: ArrayD<f64>, mask: &Mask) -> Result<ArrayD<f64>> {
    let image_shape = image.shape().to_vec();
    let mask_shape = mask.shape();

    match image_shape.as_slice() {
        [rows, cols] if [*rows, *cols] == mask_shape => Ok(image + &mask.view().into_dyn()),
        [rows, cols, _] if [*rows, *cols] == mask_shape => {
            Ok(image + &mask.view().insert_axis(Axis(2)).into_dyn())
        }
        _ => Err(shape_error("overlay", mask_shape, &image_shape)),
    }
}

/// Sequence of overlaid images from one directory walk
///
/// Under first-axis bounds the `(width, height)` mask is added to the
/// `(height, width)` image as is, so only square sizes overlay. Full bounds
/// transpose the mask onto image rows and columns first.
///
/// Yields the first error it meets and then stops.
pub struct Overlays<'a> {
    root: PathBuf,
    walker: walkdir::IntoIter,
    size: Size,
    masks: &'a MaskGenerator,
    rng: &'a mut RandomSource,
    finished: bool,
}

impl<'a> Overlays<'a> {
    /// Start a fresh recursive walk below `root`
    pub fn new(root: &Path, masks: &'a MaskGenerator, rng: &'a mut RandomSource) -> Self {
        log::info!("Walking {} for source images", root.display());
        Self {
            root: root.to_path_buf(),
            walker: WalkDir::new(root).sort_by_file_name().into_iter(),
            size: masks.size(),
            masks,
            rng,
            finished: false,
        }
    }

    fn next_file(&mut self) -> Option<Result<PathBuf>> {
        for entry in self.walker.by_ref() {
            match entry {
                Ok(entry) if entry.file_type().is_file() => return Some(Ok(entry.into_path())),
                Ok(_) => {}
                Err(e) => {
                    return Some(Err(NoiseError::DirectoryWalk {
                        path: self.root.clone(),
                        source: e,
                    }));
                }
            }
        }
        None
    }

    fn process(&mut self, path: &Path) -> Result<ArrayD<f64>> {
        // Mask comes first so generator consumption does not depend on decoding
        let mask = match self.masks.bounds() {
            GridBounds::FirstAxis => self.masks.generate(self.rng)?,
            // Index [x, y] becomes row y, column x of the image
            GridBounds::Full => self.masks.generate(self.rng)?.reversed_axes(),
        };
        let image = load_resized(path, self.size)?;
        let pixels = to_pixel_array(&image)?;
        log::debug!("Overlaying {} with shape {:?}", path.display(), pixels.shape());
        overlay(pixels, &mask)
    }
}

impl Iterator for Overlays<'_> {
    type Item = Result<ArrayD<f64>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let Some(file) = self.next_file() else {
            self.finished = true;
            return None;
        };

        let result = file.and_then(|path| self.process(&path));

        if result.is_err() {
            self.finished = true;
        }
        Some(result)
    }
}

impl std::iter::FusedIterator for Overlays<'_> {}
