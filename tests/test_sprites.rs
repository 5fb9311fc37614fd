use std::path::Path;

use dino_game::config::{CLOUD_SIZE, GROUND_TILE_SIZE, OBSTACLE_SIZE, PLAYER_SIZE};
use dino_game::sprites::*;

fn row(c: char, width: usize) -> String {
    std::iter::repeat(c).take(width).collect()
}

#[test]
fn embedded_sheet_parses() {
    let sheet = SpriteSheet::embedded().unwrap();
    assert_eq!(sheet.width(), CELL_SIZE * REQUIRED_CELLS);
    assert_eq!(sheet.height(), CELL_SIZE);
}

#[test]
fn frame_sizes_match_entity_sizes() {
    for i in 0..3 {
        assert_eq!(Frame::Dino(i).screen_size() as i32, PLAYER_SIZE);
    }
    for i in 0..2 {
        assert_eq!(Frame::Pterodactyl(i).screen_size() as i32, OBSTACLE_SIZE);
    }
    assert_eq!(Frame::Cactus.screen_size() as i32, OBSTACLE_SIZE);
    assert_eq!(Frame::Ground.screen_size() as i32, GROUND_TILE_SIZE);
    assert_eq!(Frame::Cloud.screen_size() as i32, CLOUD_SIZE);
}

#[test]
fn lookup_table_covers_every_cell_once() {
    let mut cells: Vec<u32> = Frame::ALL.iter().map(|f| f.cell_ref().cell).collect();
    cells.sort_unstable();
    assert_eq!(cells, (0..REQUIRED_CELLS).collect::<Vec<_>>());
}

#[test]
fn dino_index_wraps_in_lookup() {
    assert_eq!(Frame::Dino(4).cell_ref(), Frame::Dino(1).cell_ref());
}

#[test]
fn frame_pixel_reads_scaled_cell() {
    let sheet = SpriteSheet::embedded().unwrap();
    // Cactus top row: "......####......"
    assert!(!sheet.frame_pixel(Frame::Cactus, 0, 0));
    assert!(sheet.frame_pixel(Frame::Cactus, 24, 0));
    assert!(sheet.frame_pixel(Frame::Cactus, 39, 3));
    assert!(!sheet.frame_pixel(Frame::Cactus, 40, 0));
    // Ground tile top edge is solid.
    assert!(sheet.frame_pixel(Frame::Ground, 63, 0));
}

#[test]
fn frame_pixel_outside_the_frame_is_transparent() {
    let sheet = SpriteSheet::parse(&vec![row('#', 128); 16].join("\n")).unwrap();
    assert!(sheet.frame_pixel(Frame::Cactus, 63, 63));
    assert!(!sheet.frame_pixel(Frame::Cactus, 64, 0));
    assert!(!sheet.frame_pixel(Frame::Cactus, 0, 64));
}

#[test]
fn is_opaque_outside_sheet_is_false() {
    let sheet = SpriteSheet::embedded().unwrap();
    assert!(!sheet.is_opaque(1000, 0));
    assert!(!sheet.is_opaque(0, 1000));
}

#[test]
fn parse_tolerates_trailing_whitespace_and_blank_lines() {
    let text = format!("\n{}  \n", row('.', 128)).repeat(16);
    let sheet = SpriteSheet::parse(&text).unwrap();
    assert_eq!(sheet.width(), 128);
    assert_eq!(sheet.height(), 16);
}

// ── Errors ────────────────────────────────────────────────────────────────────

#[test]
fn empty_sheet_is_rejected() {
    assert!(matches!(SpriteSheet::parse(""), Err(SheetError::Empty)));
    assert!(matches!(SpriteSheet::parse("\n \n"), Err(SheetError::Empty)));
}

#[test]
fn ragged_row_is_rejected() {
    let mut rows = vec![row('.', 128); 16];
    rows[3] = row('.', 127);
    let err = SpriteSheet::parse(&rows.join("\n")).unwrap_err();
    assert!(matches!(
        err,
        SheetError::RaggedRow { row: 3, expected: 128, found: 127 }
    ));
}

#[test]
fn undersized_sheet_is_rejected() {
    let err = SpriteSheet::parse(&vec![row('#', 64); 16].join("\n")).unwrap_err();
    assert!(matches!(err, SheetError::TooSmall { width: 64, height: 16, .. }));

    let err = SpriteSheet::parse(&vec![row('#', 128); 8].join("\n")).unwrap_err();
    assert!(matches!(err, SheetError::TooSmall { height: 8, .. }));
}

#[test]
fn missing_file_reports_its_path() {
    let path = Path::new("does/not/exist/sheet.txt");
    let err = SpriteSheet::load(path).unwrap_err();
    assert!(matches!(err, SheetError::Io { .. }));
    assert!(err.to_string().contains("does/not/exist/sheet.txt"));
}

#[test]
fn bundled_asset_loads_from_disk() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/spritesheet.txt");
    let sheet = SpriteSheet::load(&path).unwrap();
    assert_eq!(sheet.width(), 128);
}
