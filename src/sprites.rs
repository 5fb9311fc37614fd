//! The sprite sheet: one immutable 1-bit image holding every frame, plus the
//! static table that maps a drawable frame onto a cell of that image.
//!
//! Sheet text format: one line per pixel row, `.` transparent, anything else
//! opaque.  Cells are `CELL_SIZE` square and laid out left to right.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::{PLAYER_FRAMES, PTERODACTYL_FRAMES};

/// Compiled-in default sheet.
const EMBEDDED_SHEET: &str = include_str!("../assets/spritesheet.txt");

/// Side length of one sheet cell, in source pixels.
pub const CELL_SIZE: u32 = 16;

const TRANSPARENT: char = '.';

// ── Frame lookup ──────────────────────────────────────────────────────────────

/// A single drawable image of some entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Frame {
    Dino(usize),
    Pterodactyl(usize),
    Cactus,
    Ground,
    Cloud,
}

/// Where a frame lives in the sheet and how much it is enlarged on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRef {
    pub cell: u32,
    pub scale: u32,
}

const DINO_CELLS: [CellRef; PLAYER_FRAMES] = [
    CellRef { cell: 0, scale: 6 },
    CellRef { cell: 1, scale: 6 },
    CellRef { cell: 2, scale: 6 },
];
const PTERODACTYL_CELLS: [CellRef; PTERODACTYL_FRAMES] = [
    CellRef { cell: 3, scale: 4 },
    CellRef { cell: 4, scale: 4 },
];
const CACTUS_CELL: CellRef = CellRef { cell: 5, scale: 4 };
const GROUND_CELL: CellRef = CellRef { cell: 6, scale: 4 };
const CLOUD_CELL: CellRef = CellRef { cell: 7, scale: 6 };

/// Number of cells the lookup table expects the sheet to hold.
pub const REQUIRED_CELLS: u32 = 8;

impl Frame {
    /// Every frame the game can draw, in sheet order.
    pub const ALL: [Frame; 8] = [
        Frame::Dino(0),
        Frame::Dino(1),
        Frame::Dino(2),
        Frame::Pterodactyl(0),
        Frame::Pterodactyl(1),
        Frame::Cactus,
        Frame::Ground,
        Frame::Cloud,
    ];

    /// Out-of-range animation indices wrap around.
    pub fn cell_ref(self) -> CellRef {
        match self {
            Frame::Dino(i) => DINO_CELLS[i % PLAYER_FRAMES],
            Frame::Pterodactyl(i) => PTERODACTYL_CELLS[i % PTERODACTYL_FRAMES],
            Frame::Cactus => CACTUS_CELL,
            Frame::Ground => GROUND_CELL,
            Frame::Cloud => CLOUD_CELL,
        }
    }

    /// On-screen edge length in pixels.
    pub fn screen_size(self) -> u32 {
        CELL_SIZE * self.cell_ref().scale
    }
}

// ── Errors ────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("cannot read sprite sheet {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("sprite sheet is empty")]
    Empty,
    #[error("sprite sheet row {row} is {found} pixels wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("sprite sheet is {width}x{height}, need at least {need_width}x{need_height}")]
    TooSmall {
        width: u32,
        height: u32,
        need_width: u32,
        need_height: u32,
    },
}

// ── Sheet ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct SpriteSheet {
    width: u32,
    height: u32,
    opaque: Vec<bool>,
}

impl SpriteSheet {
    pub fn embedded() -> Result<Self, SheetError> {
        Self::parse(EMBEDDED_SHEET)
    }

    pub fn load(path: &Path) -> Result<Self, SheetError> {
        let text = fs::read_to_string(path).map_err(|source| SheetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let sheet = Self::parse(&text)?;
        log::info!("Loaded sprite sheet {} ({}x{})", path.display(), sheet.width, sheet.height);
        Ok(sheet)
    }

    pub fn parse(text: &str) -> Result<Self, SheetError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect();
        let expected = rows.first().ok_or(SheetError::Empty)?.chars().count();

        let mut opaque = Vec::with_capacity(expected * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != expected {
                return Err(SheetError::RaggedRow { row, expected, found });
            }
            opaque.extend(line.chars().map(|c| c != TRANSPARENT));
        }

        let width = expected as u32;
        let height = rows.len() as u32;
        let need_width = CELL_SIZE * REQUIRED_CELLS;
        if width < need_width || height < CELL_SIZE {
            return Err(SheetError::TooSmall {
                width,
                height,
                need_width,
                need_height: CELL_SIZE,
            });
        }

        Ok(SpriteSheet { width, height, opaque })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixels outside the sheet read as transparent.
    pub fn is_opaque(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.opaque[(y * self.width + x) as usize]
    }

    /// Opacity of a pixel of `frame` as drawn on screen (scaled coordinates).
    pub fn frame_pixel(&self, frame: Frame, x: u32, y: u32) -> bool {
        let CellRef { cell, scale } = frame.cell_ref();
        let size = CELL_SIZE * scale;
        if x >= size || y >= size {
            return false;
        }
        self.is_opaque(cell * CELL_SIZE + x / scale, y / scale)
    }
}
