//! Image decoding, mask merging and PNG export
//!
//! Images are reduced to grayscale with the average method and normalized to
//! `[0, 1]`. Mask pixels darker than `MASK_THRESHOLD` mark the hole.

use std::path::Path;

use image::{GrayImage, Luma, RgbImage};
use log::{debug, warn};
use ndarray::Array2;

use crate::io::configuration::MASK_THRESHOLD;
use crate::io::error::{HoleFillError, Result};
use crate::spatial::{Grid, HOLE_SENTINEL};

/// Convert an RGB image to a normalized grayscale grid
pub fn normalize_grayscale(image: &RgbImage) -> Grid {
    let (width, height) = image.dimensions();
    let mut grid = Array2::zeros((height as usize, width as usize));

    for (x, y, pixel) in image.enumerate_pixels() {
        let [red, green, blue] = pixel.0;
        let sum = f32::from(red) + f32::from(green) + f32::from(blue);
        if let Some(cell) = grid.get_mut((y as usize, x as usize)) {
            *cell = sum / (3.0 * 255.0);
        }
    }

    grid
}

/// Punch the hole described by `mask` into `image`
///
/// Returns the number of cells set to the sentinel.
///
/// # Errors
///
/// Returns an error if the mask and image dimensions differ
pub fn merge_with_mask(image: &mut Grid, mask: &Grid) -> Result<usize> {
    if image.dim() != mask.dim() {
        return Err(HoleFillError::DimensionMismatch {
            image: image.dim(),
            mask: mask.dim(),
        });
    }

    let mut marked = 0;
    for (cell, &mask_value) in image.iter_mut().zip(mask.iter()) {
        if mask_value < MASK_THRESHOLD {
            *cell = HOLE_SENTINEL;
            marked += 1;
        }
    }
    Ok(marked)
}

fn load_rgb(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|e| HoleFillError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgb8())
}

/// Load an image and its mask into a single grid with sentinel-marked holes
///
/// # Errors
///
/// Returns an error if:
/// - Either file cannot be opened or decoded
/// - The mask and image dimensions differ
pub fn load_masked_grid(image_path: &Path, mask_path: &Path) -> Result<Grid> {
    let mut grid = normalize_grayscale(&load_rgb(image_path)?);
    let mask = normalize_grayscale(&load_rgb(mask_path)?);
    let marked = merge_with_mask(&mut grid, &mask)?;
    debug!(
        "loaded {}x{} grid with {marked} masked pixels",
        grid.nrows(),
        grid.ncols()
    );
    Ok(grid)
}

/// Scale a normalized grid back to 8-bit grayscale
///
/// Values are rounded and clamped to `[0, 255]`. Non-finite cells become 0.
pub fn denormalize(grid: &Grid) -> GrayImage {
    let mut non_finite = 0_usize;
    let image = GrayImage::from_fn(grid.ncols() as u32, grid.nrows() as u32, |x, y| {
        let value = grid.get((y as usize, x as usize)).copied().unwrap_or(0.0);
        if value.is_finite() {
            Luma([(value * 255.0).round().clamp(0.0, 255.0) as u8])
        } else {
            non_finite += 1;
            Luma([0])
        }
    });

    if non_finite > 0 {
        warn!("{non_finite} non-finite pixels exported as black");
    }
    image
}

/// Export the grid as an 8-bit grayscale PNG
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &Grid, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| HoleFillError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    denormalize(grid)
        .save(output_path)
        .map_err(|e| HoleFillError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
