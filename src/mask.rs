//! Opaque-pixel bitmasks and pixel-accurate overlap testing.
//!
//! Each mask row is a `u128` whose bit `i` is the pixel at column `i`, so two
//! masks are compared one row at a time by shifting one row into the other's
//! frame and AND-ing.

use crate::config::{PLAYER_FRAMES, PTERODACTYL_FRAMES};
use crate::sprites::{Frame, SpriteSheet};

/// Widest mask a single `u128` row can hold.
pub const MAX_MASK_WIDTH: u32 = 128;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    rows: Vec<u128>,
}

impl Mask {
    /// Build a mask by sampling `opaque(x, y)` over the whole rectangle.
    /// Columns at or past `MAX_MASK_WIDTH` are dropped.
    pub fn from_fn(width: u32, height: u32, opaque: impl Fn(u32, u32) -> bool) -> Self {
        let width = width.min(MAX_MASK_WIDTH);
        let rows = (0..height)
            .map(|y| {
                (0..width)
                    .filter(|&x| opaque(x, y))
                    .fold(0u128, |row, x| row | (1u128 << x))
            })
            .collect();
        Mask { width, height, rows }
    }

    pub fn from_frame(sheet: &SpriteSheet, frame: Frame) -> Self {
        let size = frame.screen_size();
        Mask::from_fn(size, size, |x, y| sheet.frame_pixel(frame, x, y))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.rows[y as usize] & (1u128 << x) != 0
    }

    pub fn count(&self) -> u32 {
        self.rows.iter().map(|row| row.count_ones()).sum()
    }
}

/// True if `a` placed at `a_pos` and `b` placed at `b_pos` share at least one
/// opaque pixel.
pub fn overlaps(a: &Mask, a_pos: (i32, i32), b: &Mask, b_pos: (i32, i32)) -> bool {
    let dx = b_pos.0 - a_pos.0;
    let dy = b_pos.1 - a_pos.1;

    // Bounding boxes first.
    if dx >= a.width as i32 || -dx >= b.width as i32 {
        return false;
    }
    if dy >= a.height as i32 || -dy >= b.height as i32 {
        return false;
    }

    // Rows shared by both masks, in `a`'s local coordinates.
    let top = dy.max(0);
    let bottom = (a.height as i32).min(dy + b.height as i32);

    (top..bottom).any(|ay| {
        let row_a = a.rows[ay as usize];
        let row_b = b.rows[(ay - dy) as usize];
        // Move b's row into a's column frame.
        let shifted = if dx >= 0 {
            row_b.checked_shl(dx as u32).unwrap_or(0)
        } else {
            row_b.checked_shr((-dx) as u32).unwrap_or(0)
        };
        row_a & shifted != 0
    })
}

// ── Precomputed set ───────────────────────────────────────────────────────────

/// Masks for every frame, built once when the sheet is loaded.
#[derive(Clone, Debug)]
pub struct Masks {
    dino: Vec<Mask>,
    pterodactyl: Vec<Mask>,
    cactus: Mask,
    ground: Mask,
    cloud: Mask,
}

impl Masks {
    pub fn from_sheet(sheet: &SpriteSheet) -> Self {
        Masks {
            dino: (0..PLAYER_FRAMES)
                .map(|i| Mask::from_frame(sheet, Frame::Dino(i)))
                .collect(),
            pterodactyl: (0..PTERODACTYL_FRAMES)
                .map(|i| Mask::from_frame(sheet, Frame::Pterodactyl(i)))
                .collect(),
            cactus: Mask::from_frame(sheet, Frame::Cactus),
            ground: Mask::from_frame(sheet, Frame::Ground),
            cloud: Mask::from_frame(sheet, Frame::Cloud),
        }
    }

    pub fn get(&self, frame: Frame) -> &Mask {
        match frame {
            Frame::Dino(i) => &self.dino[i % PLAYER_FRAMES],
            Frame::Pterodactyl(i) => &self.pterodactyl[i % PTERODACTYL_FRAMES],
            Frame::Cactus => &self.cactus,
            Frame::Ground => &self.ground,
            Frame::Cloud => &self.cloud,
        }
    }
}
