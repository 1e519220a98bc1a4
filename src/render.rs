//! Rendering a trained grid as an RGB image.
//!
//! The first three weight components of each neuron become the red, green
//! and blue channels. Each neuron is drawn as a square tile.

use crate::error::{Result, SomError};
use crate::som::Som;
use image::{ImageBuffer, Rgb, RgbImage};

/// Maps a component in `[0, 1]` to an 8-bit channel, clamping outliers.
#[inline]
pub fn channel(component: f64) -> u8 {
    (component * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Color of a neuron from its first three weights. Missing components are 0.
pub fn neuron_color(weights: &[f64]) -> Rgb<u8> {
    let c = |k: usize| weights.get(k).copied().map(channel).unwrap_or(0);
    Rgb([c(0), c(1), c(2)])
}

/// Largest image, in pixels, that [`render`] will allocate.
pub const MAX_PIXELS: u64 = 1 << 28;

/// Renders `som` with each neuron as a `tile_size x tile_size` block.
///
/// Pixel `(x * tile_size + i, y * tile_size + j)` takes neuron `(x, y)`'s color.
/// Fails with [`SomError::Config`] when the image would exceed [`MAX_PIXELS`].
pub fn render(som: &Som, tile_size: u32) -> Result<RgbImage> {
    let tile = tile_size.max(1);
    let (img_width, img_height) = image_dimensions(som.width(), som.height(), tile_size)?;

    let colors: Vec<Rgb<u8>> = som
        .neurons()
        .iter()
        .map(|n| neuron_color(&n.weights))
        .collect();
    let height = som.height();

    Ok(ImageBuffer::from_fn(img_width, img_height, |px, py| {
        let x = (px / tile) as usize;
        let y = (py / tile) as usize;
        colors[x * height + y]
    }))
}

/// Pixel dimensions of the image [`render`] would produce for a `width x height` grid.
pub fn image_dimensions(width: usize, height: usize, tile_size: u32) -> Result<(u32, u32)> {
    let tile = tile_size.max(1);
    let scaled = |cells: usize| u32::try_from(cells).ok().and_then(|c| c.checked_mul(tile));

    match (scaled(width), scaled(height)) {
        (Some(w), Some(h)) if u64::from(w) * u64::from(h) <= MAX_PIXELS => Ok((w, h)),
        _ => Err(SomError::Config(format!(
            "A {}x{} grid with {}px tiles exceeds the {} pixel image limit",
            width, height, tile, MAX_PIXELS
        ))),
    }
}
