//! Pixel coordinates and rectangle normalization.
//!
//! Coordinates are `(row, col)`, *not* `(x, y)`: the first component walks
//! down the image, the second walks right. Field names keep that explicit.

use serde::{Deserialize, Serialize};

/// Integer pixel position in `(row, col)` order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PixelCoord {
    pub row: i32,
    pub col: i32,
}

impl PixelCoord {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl From<(i32, i32)> for PixelCoord {
    /// Tuples are read in `(row, col)` order.
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

/// Normalized rectangle extent: `min_row <= max_row`, `min_col <= max_col`.
///
/// Ephemeral value computed per crop call; equality on an axis (a degenerate
/// box) is representable here and rejected by the cropper, not by this type.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_row: i32,
    pub min_col: i32,
    pub max_row: i32,
    pub max_col: i32,
}

impl BoundingBox {
    /// Normalize two opposite corners of a rectangle, given in any order.
    ///
    /// The axes are normalized independently, so any diagonal works: top-left
    /// with bottom-right, or bottom-left with top-right.
    pub fn from_corners(start: PixelCoord, end: PixelCoord) -> Self {
        Self {
            min_row: start.row.min(end.row),
            min_col: start.col.min(end.col),
            max_row: start.row.max(end.row),
            max_col: start.col.max(end.col),
        }
    }

    /// Row extent, `max_row - min_row`.
    pub fn height(&self) -> i32 {
        self.max_row - self.min_row
    }

    /// Column extent, `max_col - min_col`.
    pub fn width(&self) -> i32 {
        self.max_col - self.min_col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_order_does_not_matter() {
        let p = PixelCoord::new(7, 1);
        let q = PixelCoord::new(2, 9);
        assert_eq!(
            BoundingBox::from_corners(p, q),
            BoundingBox::from_corners(q, p)
        );
    }

    #[test]
    fn axes_normalize_independently() {
        // bottom-left / top-right diagonal
        let bb = BoundingBox::from_corners(PixelCoord::new(8, 2), PixelCoord::new(3, 6));
        assert_eq!(
            bb,
            BoundingBox {
                min_row: 3,
                min_col: 2,
                max_row: 8,
                max_col: 6,
            }
        );
        assert_eq!(bb.height(), 5);
        assert_eq!(bb.width(), 4);
    }

    #[test]
    fn coincident_corners_give_zero_extent() {
        let p = PixelCoord::new(4, 4);
        let bb = BoundingBox::from_corners(p, p);
        assert_eq!(bb.height(), 0);
        assert_eq!(bb.width(), 0);
    }

    #[test]
    fn negative_coordinates_pass_through() {
        // Normalization is total; bounds checking happens in the cropper.
        let bb = BoundingBox::from_corners(PixelCoord::new(-1, 0), PixelCoord::new(5, 5));
        assert_eq!(bb.min_row, -1);
    }

    #[test]
    fn serde_round_trip() {
        let bb = BoundingBox::from_corners(PixelCoord::new(1, 2), PixelCoord::new(3, 4));
        let json = serde_json::to_string(&bb).unwrap();
        let back: BoundingBox = serde_json::from_str(&json).unwrap();
        assert_eq!(bb, back);
    }
}
