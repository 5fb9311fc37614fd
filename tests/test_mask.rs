use dino_game::mask::*;
use dino_game::sprites::{Frame, SpriteSheet};

use proptest::prelude::*;

fn filled(width: u32, height: u32) -> Mask {
    Mask::from_fn(width, height, |_, _| true)
}

/// Naive per-pixel reference for `overlaps`.
fn brute_force(a: &Mask, a_pos: (i32, i32), b: &Mask, b_pos: (i32, i32)) -> bool {
    for ay in 0..a.height() {
        for ax in 0..a.width() {
            if !a.get(ax, ay) {
                continue;
            }
            let bx = ax as i32 + a_pos.0 - b_pos.0;
            let by = ay as i32 + a_pos.1 - b_pos.1;
            if bx >= 0 && by >= 0 && b.get(bx as u32, by as u32) {
                return true;
            }
        }
    }
    false
}

fn noise_mask(width: u32, height: u32, seed: u64) -> Mask {
    Mask::from_fn(width, height, |x, y| {
        let bit = (x * 7 + y * 13) % 64;
        (seed.rotate_left(bit) & 1) == 1
    })
}

// ── Mask construction ─────────────────────────────────────────────────────────

#[test]
fn from_fn_records_opaque_pixels() {
    let m = Mask::from_fn(4, 3, |x, y| x == y);
    assert_eq!(m.width(), 4);
    assert_eq!(m.height(), 3);
    assert_eq!(m.count(), 3);
    assert!(m.get(0, 0));
    assert!(m.get(2, 2));
    assert!(!m.get(1, 0));
    // Outside the mask reads as transparent.
    assert!(!m.get(4, 0));
    assert!(!m.get(0, 3));
}

#[test]
fn from_fn_truncates_past_max_width() {
    let m = filled(200, 2);
    assert_eq!(m.width(), MAX_MASK_WIDTH);
    assert_eq!(m.count(), 2 * MAX_MASK_WIDTH);
}

// ── overlaps ──────────────────────────────────────────────────────────────────

#[test]
fn identical_masks_at_same_spot_overlap() {
    let m = filled(8, 8);
    assert!(overlaps(&m, (10, 10), &m, (10, 10)));
}

#[test]
fn bounding_boxes_overlap_but_silhouettes_do_not() {
    let left = Mask::from_fn(8, 8, |x, _| x < 4);
    let right = Mask::from_fn(8, 8, |x, _| x >= 4);
    assert!(!overlaps(&left, (0, 0), &right, (0, 0)));
    // One pixel to the left and the halves meet.
    assert!(overlaps(&left, (0, 0), &right, (-1, 0)));
}

#[test]
fn transparent_corners_touching_do_not_overlap() {
    // Lower-left and upper-right triangles with a transparent diagonal gap.
    let lower = Mask::from_fn(8, 8, |x, y| x + 1 < y);
    let upper = Mask::from_fn(8, 8, |x, y| y + 1 < x);
    assert!(!overlaps(&lower, (0, 0), &upper, (0, 0)));
    assert!(overlaps(&lower, (0, 0), &upper, (-6, 0)));
}

#[test]
fn edges_touching_is_not_overlap() {
    let m = filled(8, 8);
    assert!(!overlaps(&m, (0, 0), &m, (8, 0)));
    assert!(!overlaps(&m, (0, 0), &m, (-8, 0)));
    assert!(!overlaps(&m, (0, 0), &m, (0, 8)));
    assert!(!overlaps(&m, (0, 0), &m, (0, -8)));
    assert!(overlaps(&m, (0, 0), &m, (7, 7)));
    assert!(overlaps(&m, (0, 0), &m, (-7, -7)));
}

#[test]
fn overlap_is_symmetric() {
    let a = Mask::from_fn(10, 6, |x, y| (x + y) % 3 == 0);
    let b = Mask::from_fn(5, 9, |x, _| x == 2);
    for dx in -12..12 {
        for dy in -10..10 {
            assert_eq!(
                overlaps(&a, (0, 0), &b, (dx, dy)),
                overlaps(&b, (dx, dy), &a, (0, 0)),
                "offset ({}, {})",
                dx,
                dy
            );
        }
    }
}

#[test]
fn widest_rows_shift_without_overflow() {
    let wide = filled(MAX_MASK_WIDTH, 1);
    let dot = filled(1, 1);
    assert!(overlaps(&wide, (0, 0), &dot, (127, 0)));
    assert!(!overlaps(&wide, (0, 0), &dot, (128, 0)));
    assert!(overlaps(&dot, (127, 0), &wide, (0, 0)));
}

#[test]
fn empty_mask_never_overlaps() {
    let empty = Mask::from_fn(8, 8, |_, _| false);
    let full = filled(8, 8);
    assert!(!overlaps(&empty, (0, 0), &full, (0, 0)));
}

// ── Masks from the sheet ──────────────────────────────────────────────────────

#[test]
fn masks_match_screen_sizes() {
    let sheet = SpriteSheet::embedded().unwrap();
    let masks = Masks::from_sheet(&sheet);
    for frame in Frame::ALL {
        let mask = masks.get(frame);
        assert_eq!(mask.width(), frame.screen_size(), "{:?}", frame);
        assert_eq!(mask.height(), frame.screen_size(), "{:?}", frame);
        assert!(mask.count() > 0, "{:?} has no opaque pixels", frame);
    }
}

#[test]
fn sprites_have_transparent_padding() {
    let masks = Masks::from_sheet(&SpriteSheet::embedded().unwrap());
    let cactus = masks.get(Frame::Cactus);
    assert!(cactus.count() < cactus.width() * cactus.height());
    assert!(!cactus.get(0, 0));
}

#[test]
fn scaled_pixels_form_blocks() {
    let masks = Masks::from_sheet(&SpriteSheet::embedded().unwrap());
    let cactus = masks.get(Frame::Cactus);
    // Source pixel (6, 0) covers screen pixels 24..28 × 0..4.
    for y in 0..4 {
        for x in 24..28 {
            assert!(cactus.get(x, y));
        }
    }
    assert!(!cactus.get(23, 0));
}

#[test]
fn animation_index_wraps() {
    let masks = Masks::from_sheet(&SpriteSheet::embedded().unwrap());
    assert_eq!(masks.get(Frame::Dino(3)), masks.get(Frame::Dino(0)));
    assert_eq!(masks.get(Frame::Pterodactyl(2)), masks.get(Frame::Pterodactyl(0)));
    assert_ne!(masks.get(Frame::Pterodactyl(1)), masks.get(Frame::Pterodactyl(0)));
}

// ── Properties ────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn overlaps_matches_pixel_by_pixel_check(
        (aw, ah, a_seed) in (1u32..48, 1u32..24, any::<u64>()),
        (bw, bh, b_seed) in (1u32..48, 1u32..24, any::<u64>()),
        dx in -60i32..60,
        dy in -30i32..30,
    ) {
        let a = noise_mask(aw, ah, a_seed);
        let b = noise_mask(bw, bh, b_seed);
        prop_assert_eq!(
            overlaps(&a, (5, 5), &b, (5 + dx, 5 + dy)),
            brute_force(&a, (5, 5), &b, (5 + dx, 5 + dy))
        );
    }
}
