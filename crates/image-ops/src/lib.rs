//! Elementary image transforms over in-memory `(height, width, channels)`
//! buffers: RGB-to-luminance conversion and axis-aligned cropping.
//!
//! This crate is intentionally small and purely arithmetic. It does *not*
//! read, write, or render images; callers bring their own decoded pixel
//! buffer and wrap it in an [`ImageView`].
//!
//! Both operations are stateless and synchronous, so calling them from
//! multiple threads on independent buffers is safe. Coordinates are
//! `(row, col)`, not `(x, y)` — see [`PixelCoord`].
//!
//! ```
//! use image_ops::{crop, to_grayscale, ImageBuf, PixelCoord};
//!
//! // 2x2 RGB checker: white, black / black, white.
//! let img = ImageBuf::from_vec(
//!     2,
//!     2,
//!     3,
//!     vec![255u8, 255, 255, 0, 0, 0, 0, 0, 0, 255, 255, 255],
//! )
//! .unwrap();
//!
//! let gray = to_grayscale(&img.as_view()).unwrap();
//! assert!((gray.at(0, 0) - 255.0).abs() < 1e-3);
//! assert_eq!(gray.at(0, 1), 0.0);
//!
//! let top_left = crop(&img.as_view(), PixelCoord::new(0, 0), PixelCoord::new(1, 1)).unwrap();
//! assert_eq!(top_left.pixel(0, 0), &[255, 255, 255]);
//! ```

mod coords;
mod crop;
mod grayscale;
mod image;
mod logger;

pub use coords::{BoundingBox, PixelCoord};
pub use crop::{crop, CropError};
pub use grayscale::{to_grayscale, GrayscaleError};
pub use image::{GrayMap, ImageBuf, ImageView};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
