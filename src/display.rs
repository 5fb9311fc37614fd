//! Rendering layer — all terminal I/O lives here.
//!
//! The world is 640×480 pixels; each terminal cell covers 8×16 of them and
//! shows two vertical samples with half-block glyphs, so the full playfield
//! needs an 80×30 terminal.  Smaller terminals get the top-left part.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use dino_game::compute::{Drawable, Scene};
use dino_game::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use dino_game::mask::{Mask, Masks};
use dino_game::sprites::Frame;

const PX_PER_COL: i32 = 8;
const PX_PER_ROW: i32 = 16;
const VIEW_COLS: u16 = (SCREEN_WIDTH / PX_PER_COL) as u16;
const VIEW_ROWS: u16 = (SCREEN_HEIGHT / PX_PER_ROW) as u16;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_CLOUD: Color = Color::DarkGrey;
const C_GROUND: Color = Color::Grey;
const C_DINO: Color = Color::White;
const C_CACTUS: Color = Color::Green;
const C_PTERODACTYL: Color = Color::Magenta;
const C_SCORE: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

fn colour_for(frame: Frame) -> Color {
    match frame {
        Frame::Dino(_) => C_DINO,
        Frame::Pterodactyl(_) => C_PTERODACTYL,
        Frame::Cactus => C_CACTUS,
        Frame::Ground => C_GROUND,
        Frame::Cloud => C_CLOUD,
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Queue one complete frame.  `term` is the terminal size in cells.  The
/// caller flushes.
pub fn render<W: Write>(
    out: &mut W,
    scene: &Scene,
    masks: &Masks,
    term: (u16, u16),
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let cols = term.0.min(VIEW_COLS);
    let rows = term.1.min(VIEW_ROWS);

    for drawable in &scene.drawables {
        draw_sprite(out, drawable, masks.get(drawable.frame), cols, rows)?;
    }

    draw_controls_hint(out, term)?;
    draw_score(out, scene.score, cols)?;

    if scene.show_game_over {
        draw_game_over(out, scene.score, cols, rows)?;
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    Ok(())
}

// ── Sprites ───────────────────────────────────────────────────────────────────

fn sample(mask: &Mask, x: i32, y: i32) -> bool {
    x >= 0 && y >= 0 && mask.get(x as u32, y as u32)
}

fn draw_sprite<W: Write>(
    out: &mut W,
    drawable: &Drawable,
    mask: &Mask,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let first_col = drawable.x.div_euclid(PX_PER_COL).max(0);
    let last_col = (drawable.x + drawable.width - 1)
        .div_euclid(PX_PER_COL)
        .min(cols as i32 - 1);
    let first_row = drawable.y.div_euclid(PX_PER_ROW).max(0);
    let last_row = (drawable.y + drawable.height - 1)
        .div_euclid(PX_PER_ROW)
        .min(rows as i32 - 1);

    out.queue(style::SetForegroundColor(colour_for(drawable.frame)))?;

    for row in first_row..=last_row {
        // Sample the middle of each half cell.
        let top = row * PX_PER_ROW + PX_PER_ROW / 4 - drawable.y;
        let bottom = row * PX_PER_ROW + 3 * PX_PER_ROW / 4 - drawable.y;
        for col in first_col..=last_col {
            let x = col * PX_PER_COL + PX_PER_COL / 2 - drawable.x;
            let glyph = match (sample(mask, x, top), sample(mask, x, bottom)) {
                (true, true) => "█",
                (true, false) => "▀",
                (false, true) => "▄",
                (false, false) => continue,
            };
            out.queue(cursor::MoveTo(col as u16, row as u16))?;
            out.queue(Print(glyph))?;
        }
    }
    Ok(())
}

// ── HUD ───────────────────────────────────────────────────────────────────

fn draw_score<W: Write>(out: &mut W, score: u32, cols: u16) -> std::io::Result<()> {
    let text = format!("{:>6}", score);
    let x = cols.saturating_sub(text.chars().count() as u16 + 6);
    out.queue(cursor::MoveTo(x, 1))?;
    out.queue(style::SetForegroundColor(C_SCORE))?;
    out.queue(Print(&text))?;
    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W, term: (u16, u16)) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("SPACE / ↑ : Jump   R : Restart   Q : Quit"))?;
    if term.0 < VIEW_COLS || term.1 < VIEW_ROWS {
        out.queue(Print(format!(
            "   (enlarge terminal to {}x{})",
            VIEW_COLS, VIEW_ROWS
        )))?;
    }
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    score: u32,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let score_line = format!("Score: {}", score);
    let lines: [(&str, Color); 5] = [
        ("╔════════════════════╗", Color::Red),
        ("║     GAME  OVER     ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
        (score_line.as_str(), Color::Yellow),
        ("Press R to restart", Color::White),
    ];

    let cx = cols / 2;
    let start_row = (rows / 2).saturating_sub(lines.len() as u16 / 2 + 1);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
