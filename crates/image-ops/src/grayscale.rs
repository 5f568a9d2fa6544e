//! RGB to luminance conversion.

use nalgebra::Vector3;

use crate::image::{GrayMap, ImageView};

/// ITU-R BT.601 luma weights, <https://en.wikipedia.org/wiki/Grayscale>.
fn luma_weights() -> Vector3<f32> {
    Vector3::new(0.299, 0.587, 0.114)
}

/// Errors returned by [`to_grayscale`].
#[derive(thiserror::Error, Debug)]
pub enum GrayscaleError {
    #[error("image must have at least 3 channels, got {channels}")]
    TooFewChannels { channels: usize },
}

/// Collapse an RGB image to a single luminance plane.
///
/// Every pixel's first three channels are weighted as
/// `0.299 R + 0.587 G + 0.114 B`; any further channels (alpha, extra bands)
/// are ignored. The output matches the input's height and width and carries
/// one `f32` per pixel. Input elements may be any type convertible to `f32`
/// without loss (`u8`, `u16`, `i8`, `i16`, `f32`); integer inputs are
/// promoted by the floating-point weights, never clamped or rescaled.
pub fn to_grayscale<T>(src: &ImageView<'_, T>) -> Result<GrayMap, GrayscaleError>
where
    T: Copy + Into<f32>,
{
    if src.channels < 3 {
        return Err(GrayscaleError::TooFewChannels {
            channels: src.channels,
        });
    }

    log::debug!(
        "grayscale: {}x{} image, {} channels",
        src.height,
        src.width,
        src.channels
    );

    let weights = luma_weights();
    let mut data = Vec::with_capacity(src.height * src.width);
    for row in 0..src.height {
        for col in 0..src.width {
            let px = src.pixel(row, col);
            let rgb = Vector3::new(px[0].into(), px[1].into(), px[2].into());
            data.push(weights.dot(&rgb));
        }
    }

    Ok(GrayMap {
        height: src.height,
        width: src.width,
        data,
    })
}
