//! Axis-aligned rectangular cropping.

use crate::coords::{BoundingBox, PixelCoord};
use crate::image::{ImageBuf, ImageView};

/// Errors returned by [`crop`].
#[derive(thiserror::Error, Debug)]
pub enum CropError {
    /// The normalized box falls outside the image or has zero area on an
    /// axis. Deliberately carries no detail about which check failed.
    #[error("invalid cropping parameters specified")]
    InvalidRegion,
}

/// Extract the rectangle spanned by two opposite corners, given in any order.
///
/// Corners are `(row, col)` pairs naming either diagonal of the rectangle.
/// The result covers rows `[min_row, max_row)` and columns
/// `[min_col, max_col)` with all channels carried over unchanged, copied
/// into a freshly allocated buffer with no aliasing of `src` (an interleaved
/// row range is not contiguous, so a borrowed sub-slice could not represent
/// it). Out-of-range values are rejected rather than clamped to the image
/// edge: clamping would silently rewrite the caller's choice.
pub fn crop<T>(
    src: &ImageView<'_, T>,
    start: PixelCoord,
    end: PixelCoord,
) -> Result<ImageBuf<T>, CropError>
where
    T: Copy,
{
    let bb = BoundingBox::from_corners(start, end);

    if bb.min_row < 0
        || bb.min_col < 0
        || bb.max_row > src.height as i32
        || bb.max_col > src.width as i32
        || bb.min_row == bb.max_row
        || bb.min_col == bb.max_col
    {
        return Err(CropError::InvalidRegion);
    }

    log::debug!(
        "crop: rows {}..{} cols {}..{} of {}x{} image",
        bb.min_row,
        bb.max_row,
        bb.min_col,
        bb.max_col,
        src.height,
        src.width
    );

    let (min_row, max_row) = (bb.min_row as usize, bb.max_row as usize);
    let (min_col, max_col) = (bb.min_col as usize, bb.max_col as usize);

    let out_h = max_row - min_row;
    let out_w = max_col - min_col;
    let mut data = Vec::with_capacity(out_h * out_w * src.channels);
    for row in min_row..max_row {
        let from = (row * src.width + min_col) * src.channels;
        let to = (row * src.width + max_col) * src.channels;
        data.extend_from_slice(&src.data[from..to]);
    }

    Ok(ImageBuf {
        height: out_h,
        width: out_w,
        channels: src.channels,
        data,
    })
}
