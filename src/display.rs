//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! frame and stats. No game logic is performed; this module only translates
//! render descriptors into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use space_survival::{Drawable, GameConfig, Stat};

// ── Layout ────────────────────────────────────────────────────────────────────

/// Terminal columns per grid cell; the symbols are double-width emoji.
const CELL_W: u16 = 2;
/// Top-left corner of the grid interior on screen.
const ORIGIN_X: u16 = 1;
const ORIGIN_Y: u16 = 2;

const C_BORDER: Color = Color::DarkBlue;
const C_STAT_NAME: Color = Color::DarkGrey;
const C_STAT_VALUE: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;
const C_PAUSED: Color = Color::Cyan;

/// What the game loop wants drawn this frame.
pub struct View<'a> {
    pub frame: &'a [Drawable],
    pub stats: &'a [Stat],
    pub paused: bool,
    pub game_over: bool,
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, config: &GameConfig, view: &View<'_>) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_stats(out, view.stats)?;
    draw_border(out, config)?;

    // Ship is first in the frame; draw it last so it stays on top.
    for item in view.frame.iter().skip(1).chain(view.frame.first()) {
        draw_item(out, item)?;
    }

    let below = grid_bottom(config) + 1;
    if view.game_over {
        draw_banner(out, config, "GAME OVER  R: Restart  Q: Quit", Color::Red)?;
    } else if view.paused {
        draw_banner(out, config, "PAUSED  P: Resume", C_PAUSED)?;
    }
    draw_controls_hint(out, below)?;

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, below + 1))?;
    out.flush()?;
    Ok(())
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// Cells span 0..=width, so the interior is width + 1 cells wide.
fn interior_width(config: &GameConfig) -> u16 {
    (config.width as u16 + 1) * CELL_W
}

fn grid_bottom(config: &GameConfig) -> u16 {
    ORIGIN_Y + config.height as u16 + 1
}

fn draw_border<W: Write>(out: &mut W, config: &GameConfig) -> std::io::Result<()> {
    let w = interior_width(config) as usize;
    let bottom = grid_bottom(config);

    out.queue(style::SetForegroundColor(C_BORDER))?;
    out.queue(cursor::MoveTo(ORIGIN_X - 1, ORIGIN_Y - 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w))))?;
    out.queue(cursor::MoveTo(ORIGIN_X - 1, bottom))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w))))?;

    for row in ORIGIN_Y..bottom {
        out.queue(cursor::MoveTo(ORIGIN_X - 1, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(ORIGIN_X + w as u16, row))?;
        out.queue(Print("│"))?;
    }
    Ok(())
}

fn draw_item<W: Write>(out: &mut W, item: &Drawable) -> std::io::Result<()> {
    if item.pos.x < 0 || item.pos.y < 0 {
        return Ok(());
    }
    let col = ORIGIN_X + item.pos.x as u16 * CELL_W;
    let row = ORIGIN_Y + item.pos.y as u16;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::ResetColor)?;
    out.queue(Print(item.graphic.text))?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_stats<W: Write>(out: &mut W, stats: &[Stat]) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;
    for stat in stats {
        out.queue(style::SetForegroundColor(C_STAT_NAME))?;
        out.queue(Print(format!("{}: ", stat.name)))?;
        out.queue(style::SetForegroundColor(C_STAT_VALUE))?;
        out.queue(Print(format!("{}  ", stat.value)))?;
    }
    Ok(())
}

fn draw_banner<W: Write>(
    out: &mut W,
    config: &GameConfig,
    msg: &str,
    color: Color,
) -> std::io::Result<()> {
    let cx = ORIGIN_X + interior_width(config) / 2;
    let cy = ORIGIN_Y + config.height as u16 / 2;
    let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, cy))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(msg))?;
    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W, row: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(0, row))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("W A S D : Move   F : Fire   P : Pause   Q : Quit"))?;
    Ok(())
}
