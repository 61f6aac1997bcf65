//! Density contour plots and mask heatmaps
//!
//! Figures are rasterized through the plotters bitmap backend, which picks the
//! encoder from the output extension and flushes the file when presented.

use crate::io::configuration::{
    COLORBAR_WIDTH, CONTOUR_LEVELS, MAX_DENSITY_SAMPLES, PLOT_MARGIN, Size,
};
use crate::io::error::{NoiseError, Result, invalid_parameter};
use crate::math::density::{DensityField, grid_len};
use crate::sampling::mask::Mask;
use ndarray::{Array2, ArrayView2, Axis};
use plotters::coord::Shift;
use plotters::prelude::{
    BLACK, BitMapBackend, Color, DrawingArea, IntoDrawingArea, RGBColor, Rectangle, WHITE,
};
use std::path::Path;

type Canvas<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

// Perceptually ordered stops, dark to light
const CONTOUR_PALETTE: [RGBColor; 5] = [
    RGBColor(68, 1, 84),
    RGBColor(59, 82, 139),
    RGBColor(33, 145, 140),
    RGBColor(94, 201, 98),
    RGBColor(253, 231, 37),
];

const HEATMAP_PALETTE: [RGBColor; 5] = [
    RGBColor(3, 5, 26),
    RGBColor(112, 31, 87),
    RGBColor(203, 27, 79),
    RGBColor(245, 117, 71),
    RGBColor(250, 235, 221),
];

// Space between the heatmap and its colorbar
const COLORBAR_GAP: u32 = 12;

/// Render a filled contour plot of the density over `[0, width) x [0, height)`
///
/// The density is sampled every `granularity` pixels. The vertical axis is
/// inverted so that `y = 0` sits at the top, as in image row order.
///
/// # Errors
///
/// Returns an error if:
/// - `granularity` is not a positive finite number
/// - `granularity` would take more than `MAX_DENSITY_SAMPLES` samples
/// - The figure is too small to hold the plot margins
/// - The output directory cannot be created
/// - The backend fails to draw or encode the figure
pub fn render_density(
    field: &DensityField,
    size: Size,
    granularity: f64,
    figure: (u32, u32),
    path: &Path,
) -> Result<()> {
    if !granularity.is_finite() || granularity <= 0.0 {
        return Err(invalid_parameter(
            "granularity",
            &granularity,
            &"must be a positive finite step",
        ));
    }

    let width = size.width as f64;
    let height = size.height as f64;
    let (columns, rows) = (grid_len(width, granularity), grid_len(height, granularity));
    if columns
        .checked_mul(rows)
        .is_none_or(|samples| samples > MAX_DENSITY_SAMPLES)
    {
        return Err(invalid_parameter(
            "granularity",
            &granularity,
            &format!("a {columns}x{rows} grid exceeds {MAX_DENSITY_SAMPLES} samples"),
        ));
    }

    let (xs, ys, values) = field.sample_grid(width, height, granularity);
    let bands = contour_bands(&values, CONTOUR_LEVELS);
    log::info!(
        "Rendering {}x{} density samples around {:?} to {}",
        xs.len(),
        ys.len(),
        field.mean(),
        path.display()
    );

    draw_figure(path, figure, 0, |plot| {
        let (plot_width, plot_height) = plot.dim_in_pixel();
        for py in 0..plot_height {
            let y = (f64::from(py) + 0.5) / f64::from(plot_height) * height;
            let j = ((y / granularity) as usize).min(ys.len().saturating_sub(1));
            for px in 0..plot_width {
                let x = (f64::from(px) + 0.5) / f64::from(plot_width) * width;
                let i = ((x / granularity) as usize).min(xs.len().saturating_sub(1));
                if let Some(&band) = bands.get([i, j]) {
                    let level = band as f64 / (CONTOUR_LEVELS - 1).max(1) as f64;
                    plot.draw_pixel(
                        (px as i32, py as i32),
                        &palette_color(&CONTOUR_PALETTE, level),
                    )
                    .map_err(render_error(path))?;
                }
            }
        }
        Ok(())
    })
}

/// Render a mask as a heatmap with a colorbar
///
/// The mask is flipped along its second axis, then drawn with its first axis
/// as rows from the top and its second axis as columns from the left.
///
/// # Errors
///
/// Returns an error if:
/// - The figure is too small to hold the plot margins and colorbar
/// - The output directory cannot be created
/// - The backend fails to draw or encode the figure
pub fn render_mask(mask: &Mask, figure: (u32, u32), path: &Path) -> Result<()> {
    let mut flipped = mask.view();
    flipped.invert_axis(Axis(1));
    let (low, high) = value_range(flipped.iter().copied());
    log::info!(
        "Rendering {:?} mask heatmap (range {low:.3e}..{high:.3e}) to {}",
        mask.shape(),
        path.display()
    );

    let reserved = COLORBAR_WIDTH + COLORBAR_GAP;
    draw_figure(path, figure, reserved, |plot| {
        let (plot_width, _) = plot.dim_in_pixel();
        let (heat, bar) = plot.split_horizontally(plot_width.saturating_sub(reserved));
        draw_heat_cells(&heat, flipped, (low, high), path)?;
        draw_colorbar(&bar.margin(0, 0, COLORBAR_GAP, 0), path)
    })
}

fn draw_heat_cells(
    area: &Canvas<'_>,
    data: ArrayView2<'_, f64>,
    (low, high): (f64, f64),
    path: &Path,
) -> Result<()> {
    let (width, height) = area.dim_in_pixel();
    let (rows, cols) = data.dim();
    let span = high - low;

    for py in 0..height {
        let row = (py as usize * rows) / height as usize;
        for px in 0..width {
            let col = (px as usize * cols) / width as usize;
            if let Some(&value) = data.get([row, col]) {
                let level = if span > 0.0 { (value - low) / span } else { 0.5 };
                area.draw_pixel(
                    (px as i32, py as i32),
                    &palette_color(&HEATMAP_PALETTE, level),
                )
                .map_err(render_error(path))?;
            }
        }
    }
    Ok(())
}

fn draw_colorbar(area: &Canvas<'_>, path: &Path) -> Result<()> {
    let (width, height) = area.dim_in_pixel();
    let last = height.saturating_sub(1).max(1);

    // Highest value at the top
    for py in 0..height {
        let level = 1.0 - f64::from(py) / f64::from(last);
        let color = palette_color(&HEATMAP_PALETTE, level);
        area.draw(&Rectangle::new(
            [(0, py as i32), (width as i32, py as i32 + 1)],
            color.filled(),
        ))
        .map_err(render_error(path))?;
    }

    area.draw(&Rectangle::new(
        [(0, 0), (width as i32 - 1, height as i32 - 1)],
        BLACK.stroke_width(1),
    ))
    .map_err(render_error(path))
}

// Shared figure lifecycle: directory, background, margins and final flush
fn draw_figure<F>(path: &Path, figure: (u32, u32), reserved: u32, draw: F) -> Result<()>
where
    F: FnOnce(&Canvas<'_>) -> Result<()>,
{
    let (width, height) = figure;
    let minimum = 2 * PLOT_MARGIN + 1;
    if width < minimum + reserved || height < minimum {
        return Err(invalid_parameter(
            "figsize",
            &format!("{width}x{height} pixels"),
            &format!("figure must exceed {}x{minimum} pixels", minimum + reserved),
        ));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| NoiseError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let root = BitMapBackend::new(path, figure).into_drawing_area();
    root.fill(&WHITE).map_err(render_error(path))?;
    draw(&root.margin(PLOT_MARGIN, PLOT_MARGIN, PLOT_MARGIN, PLOT_MARGIN))?;
    root.present().map_err(render_error(path))?;

    log::debug!("Wrote {}", path.display());
    Ok(())
}

/// Quantize values into `levels` equal-width bands between their minimum and maximum
pub fn contour_bands(values: &Array2<f64>, levels: usize) -> Array2<usize> {
    let (low, high) = value_range(values.iter().copied());
    let span = high - low;
    let top = levels.saturating_sub(1);

    values.mapv(|value| {
        if span > 0.0 {
            (((value - low) / span * levels as f64) as usize).min(top)
        } else {
            0
        }
    })
}

fn value_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (low, high) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if low <= high { (low, high) } else { (0.0, 0.0) }
}

/// Linearly interpolate a palette at `level` in `[0, 1]`
pub fn palette_color(stops: &[RGBColor], level: f64) -> RGBColor {
    let segments = stops.len().saturating_sub(1);
    let position = level.clamp(0.0, 1.0) * segments as f64;
    let index = (position as usize).min(segments.saturating_sub(1));
    let fraction = position - index as f64;

    match (stops.get(index), stops.get(index + 1)) {
        (Some(from), Some(to)) => RGBColor(
            lerp_channel(from.0, to.0, fraction),
            lerp_channel(from.1, to.1, fraction),
            lerp_channel(from.2, to.2, fraction),
        ),
        (Some(only), None) => *only,
        _ => BLACK,
    }
}

fn lerp_channel(from: u8, to: u8, fraction: f64) -> u8 {
    (f64::from(to) - f64::from(from))
        .mul_add(fraction, f64::from(from))
        .round()
        .clamp(0.0, 255.0) as u8
}

fn render_error<E: std::fmt::Display>(path: &Path) -> impl Fn(E) -> NoiseError + '_ {
    move |e| NoiseError::Render {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}
