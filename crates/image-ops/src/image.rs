//! Interleaved row-major image buffers.
//!
//! Pixels are stored as `(height, width, channels)` with channels interleaved:
//! the element at `(row, col, ch)` lives at `(row * width + col) * channels + ch`.

/// Borrowed view over an interleaved multi-channel image.
#[derive(Clone, Copy, Debug)]
pub struct ImageView<'a, T> {
    pub height: usize,
    pub width: usize,
    pub channels: usize,
    pub data: &'a [T], // row-major interleaved, len = h*w*c
}

impl<'a, T> ImageView<'a, T> {
    /// Wrap a flat slice as an image view. Returns `None` if the slice length
    /// does not match `height * width * channels`.
    pub fn from_slice(height: usize, width: usize, channels: usize, data: &'a [T]) -> Option<Self> {
        if data.len() != height * width * channels {
            return None;
        }
        Some(Self {
            height,
            width,
            channels,
            data,
        })
    }

    /// All channel values of one pixel.
    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> &'a [T] {
        let base = (row * self.width + col) * self.channels;
        &self.data[base..base + self.channels]
    }
}

/// Owned interleaved multi-channel image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageBuf<T> {
    pub height: usize,
    pub width: usize,
    pub channels: usize,
    pub data: Vec<T>,
}

impl<T> ImageBuf<T> {
    /// Take ownership of a flat buffer. Returns `None` if the buffer length
    /// does not match `height * width * channels`.
    pub fn from_vec(height: usize, width: usize, channels: usize, data: Vec<T>) -> Option<Self> {
        if data.len() != height * width * channels {
            return None;
        }
        Some(Self {
            height,
            width,
            channels,
            data,
        })
    }

    pub fn as_view(&self) -> ImageView<'_, T> {
        ImageView {
            height: self.height,
            width: self.width,
            channels: self.channels,
            data: &self.data,
        }
    }

    /// All channel values of one pixel.
    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> &[T] {
        let base = (row * self.width + col) * self.channels;
        &self.data[base..base + self.channels]
    }
}

/// Owned single-channel luminance plane, one `f32` per pixel.
#[derive(Clone, Debug, PartialEq)]
pub struct GrayMap {
    pub height: usize,
    pub width: usize,
    pub data: Vec<f32>,
}

impl GrayMap {
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.width + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vec_rejects_length_mismatch() {
        assert!(ImageBuf::from_vec(2, 2, 3, vec![0u8; 11]).is_none());
        assert!(ImageBuf::from_vec(2, 2, 3, vec![0u8; 12]).is_some());
    }

    #[test]
    fn from_slice_rejects_length_mismatch() {
        let data = [0u8; 12];
        assert!(ImageView::from_slice(2, 2, 3, &data).is_some());
        assert!(ImageView::from_slice(2, 3, 3, &data).is_none());
    }

    #[test]
    fn pixel_indexing_is_interleaved_row_major() {
        // 2x2 RGB, each pixel tagged by its linear index.
        let data: Vec<u8> = (0..12).collect();
        let img = ImageBuf::from_vec(2, 2, 3, data).unwrap();
        assert_eq!(img.pixel(0, 0), &[0, 1, 2]);
        assert_eq!(img.pixel(0, 1), &[3, 4, 5]);
        assert_eq!(img.pixel(1, 0), &[6, 7, 8]);
        assert_eq!(img.as_view().pixel(1, 1), &[9, 10, 11]);
    }
}
