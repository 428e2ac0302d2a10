//! Image-to-tile mapping geometry.
//!
//! The engine never touches pixels; a front-end that renders tiles from a
//! user-supplied picture only needs to know which square of the picture each
//! tile label shows. This module computes that mapping as plain rectangles:
//! center-crop the source to a square, scale it to a fixed working size, and
//! slice the result into a 4x4 sprite grid keyed by tile label.

use crate::config::{GRID_SIDE, TILE_COUNT};
use crate::grid;

/// Side length of the scaled working image.
pub const SHEET_SIZE: u32 = 400;
/// Side length of one tile sprite within the working image.
pub const SPRITE_SIZE: u32 = SHEET_SIZE / GRID_SIDE as u32;

/// Square region of the original image to keep, centered on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub size: u32,
}

/// Largest centered square of a `width` x `height` image.
pub fn center_crop(width: u32, height: u32) -> CropRect {
    let size = width.min(height);
    CropRect {
        x: (width - size) / 2,
        y: (height - size) / 2,
        size,
    }
}

/// One tile's square within the scaled working image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SpriteRegion {
    pub x: u32,
    pub y: u32,
    pub size: u32,
}

/// Geometry for rendering tiles from one source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SpriteSheet {
    crop: CropRect,
}

impl SpriteSheet {
    /// Build the mapping for a source image of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            crop: center_crop(width, height),
        }
    }

    /// The source-image square to scale down to [`SHEET_SIZE`].
    pub fn crop(&self) -> CropRect {
        self.crop
    }

    /// Sprite shown by the tile with `label`, taken from the label's home
    /// slot in the solved arrangement. `None` for labels outside 1..=15.
    pub fn region_for(&self, label: u8) -> Option<SpriteRegion> {
        if label == 0 || label as usize > TILE_COUNT {
            return None;
        }
        let (row, col) = grid::row_col(label as usize - 1);
        Some(SpriteRegion {
            x: col as u32 * SPRITE_SIZE,
            y: row as u32 * SPRITE_SIZE,
            size: SPRITE_SIZE,
        })
    }
}
