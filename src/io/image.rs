//! Image decoding, resizing and conversion to numeric pixel arrays

use crate::io::configuration::Size;
use crate::io::error::{NoiseError, Result, invalid_parameter, shape_error};
use image::imageops::FilterType;
use image::{DynamicImage, ImageBuffer, Pixel};
use ndarray::{ArrayD, IxDyn};
use num_traits::ToPrimitive;
use std::path::Path;

// Bicubic resampling
const RESIZE_FILTER: FilterType = FilterType::CatmullRom;

/// Open an image and resize it exactly to the target size
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded
/// - The target size does not fit image dimensions
pub fn load_resized(path: &Path, size: Size) -> Result<DynamicImage> {
    let image = image::open(path).map_err(|e| NoiseError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    resize_to(&image, size)
}

/// Resize an image exactly to the target size
///
/// # Errors
///
/// Returns an error if a dimension exceeds `u32::MAX`
pub fn resize_to(image: &DynamicImage, size: Size) -> Result<DynamicImage> {
    let width = u32::try_from(size.width)
        .map_err(|e| invalid_parameter("width", &size.width, &e))?;
    let height = u32::try_from(size.height)
        .map_err(|e| invalid_parameter("height", &size.height, &e))?;
    Ok(image.resize_exact(width, height, RESIZE_FILTER))
}

/// Convert an image to raw `f64` sample values
///
/// Single-channel images become `(height, width)` arrays, all others
/// `(height, width, channels)`. Samples keep their native range.
///
/// # Errors
///
/// Returns an error if the pixel buffer does not match its declared dimensions
pub fn to_pixel_array(image: &DynamicImage) -> Result<ArrayD<f64>> {
    match image {
        DynamicImage::ImageLuma8(buffer) => buffer_to_array(buffer),
        DynamicImage::ImageLumaA8(buffer) => buffer_to_array(buffer),
        DynamicImage::ImageRgb8(buffer) => buffer_to_array(buffer),
        DynamicImage::ImageRgba8(buffer) => buffer_to_array(buffer),
        DynamicImage::ImageLuma16(buffer) => buffer_to_array(buffer),
        DynamicImage::ImageLumaA16(buffer) => buffer_to_array(buffer),
        DynamicImage::ImageRgb16(buffer) => buffer_to_array(buffer),
        DynamicImage::ImageRgba16(buffer) => buffer_to_array(buffer),
        DynamicImage::ImageRgb32F(buffer) => buffer_to_array(buffer),
        DynamicImage::ImageRgba32F(buffer) => buffer_to_array(buffer),
        other => buffer_to_array(&other.to_rgba32f()),
    }
}

fn buffer_to_array<P>(buffer: &ImageBuffer<P, Vec<P::Subpixel>>) -> Result<ArrayD<f64>>
where
    P: Pixel,
    P::Subpixel: ToPrimitive,
{
    let (width, height) = buffer.dimensions();
    let channels = usize::from(P::CHANNEL_COUNT);
    let shape = if channels == 1 {
        vec![height as usize, width as usize]
    } else {
        vec![height as usize, width as usize, channels]
    };

    let samples: Vec<f64> = buffer
        .as_raw()
        .iter()
        .map(|sample| sample.to_f64().unwrap_or(f64::NAN))
        .collect();
    let found = samples.len();

    ArrayD::from_shape_vec(IxDyn(&shape), samples)
        .map_err(|_shape_mismatch| shape_error("pixel conversion", &shape, &[found]))
}
