//! Terminal display: all terminal output lives here.
//!
//! Receives a mutable writer and a finished `Scene`.  No game logic is
//! performed; this module only projects arena coordinates onto the terminal
//! grid and translates draw commands into crossterm commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use space_explorer::config::GameConfig;
use space_explorer::entities::Palette;
use space_explorer::scene::{Align, Scene, Shape, Text};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_STAR: Color = Color::DarkGrey;
const C_BAR_FULL: Color = Color::Green;
const C_BAR_EMPTY: Color = Color::Red;
const C_OVERLAY: Color = Color::DarkGrey;

fn color(palette: Palette) -> Color {
    match palette {
        Palette::White => Color::White,
        Palette::Red => Color::Red,
        Palette::Green => Color::Green,
        Palette::Yellow => Color::Yellow,
        Palette::Purple => Color::Magenta,
        Palette::Orange => Color::Rgb { r: 255, g: 165, b: 0 },
        Palette::Cyan => Color::Cyan,
    }
}

// ── Projection ────────────────────────────────────────────────────────────────

/// Maps arena units onto terminal cells.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    cols: u16,
    rows: u16,
    sx: f32,
    sy: f32,
}

impl Viewport {
    pub fn new(config: &GameConfig, cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            sx: cols as f32 / config.width.max(1.0),
            sy: rows as f32 / config.height.max(1.0),
        }
    }

    fn cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        let col = (x * self.sx).floor();
        let row = (y * self.sy).floor();
        if col < 0.0 || row < 0.0 || col >= self.cols as f32 || row >= self.rows as f32 {
            return None;
        }
        Some((col as u16, row as u16))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, scene: &Scene, view: &Viewport) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for shape in &scene.shapes {
        // The playfield fades behind the game-over summary.
        let dim = scene.overlay && !matches!(shape, Shape::Star { .. });
        draw_shape(out, shape, view, dim)?;
    }
    for text in &scene.texts {
        draw_text(out, text, view)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

fn put<W: Write>(out: &mut W, view: &Viewport, x: f32, y: f32, glyph: &str) -> std::io::Result<()> {
    if let Some((col, row)) = view.cell(x, y) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

// ── Shapes ────────────────────────────────────────────────────────────────────

fn draw_shape<W: Write>(
    out: &mut W,
    shape: &Shape,
    view: &Viewport,
    dim: bool,
) -> std::io::Result<()> {
    match *shape {
        Shape::Star { x, y } => {
            out.queue(style::SetForegroundColor(C_STAR))?;
            put(out, view, x, y, ".")?;
        }
        Shape::Circle { x, y, radius, color: c, filled } => {
            out.queue(style::SetForegroundColor(if dim { C_OVERLAY } else { color(c) }))?;
            draw_circle(out, view, x, y, radius, filled)?;
        }
        Shape::Ship { x, y, size, color: c } => {
            // Sprite (2 rows, 3 cols):
            //   ▲       ← tip
            //  /█\      ← fuselage + wings
            out.queue(style::SetForegroundColor(if dim { C_OVERLAY } else { color(c) }))?;
            put(out, view, x, y - size / 2.0, "▲")?;
            if let Some((col, row)) = view.cell(x, y + size / 2.0) {
                out.queue(cursor::MoveTo(col.saturating_sub(1), row))?;
                out.queue(Print("/█\\"))?;
            }
        }
        Shape::Bar { x, y, width, fill } => {
            let Some((col, row)) = view.cell(x.max(0.0), y) else {
                return Ok(());
            };
            let cells = ((width * view.sx).round() as u16).max(1);
            let full = (cells as f32 * fill).round() as u16;
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(style::SetForegroundColor(if dim { C_OVERLAY } else { C_BAR_FULL }))?;
            out.queue(Print("▬".repeat(full as usize)))?;
            out.queue(style::SetForegroundColor(if dim { C_OVERLAY } else { C_BAR_EMPTY }))?;
            out.queue(Print("▬".repeat(cells.saturating_sub(full) as usize)))?;
        }
    }
    Ok(())
}

/// Small circles collapse to one glyph; larger ones are rasterised as an
/// ellipse in cell space (cells are roughly twice as tall as wide).
fn draw_circle<W: Write>(
    out: &mut W,
    view: &Viewport,
    x: f32,
    y: f32,
    radius: f32,
    filled: bool,
) -> std::io::Result<()> {
    let rx = radius * view.sx;
    let ry = radius * view.sy;
    if rx < 1.0 && ry < 1.0 {
        let glyph = match (filled, radius <= 3.0) {
            (false, _) => "○",
            (true, true) => "•",
            (true, false) => "●",
        };
        return put(out, view, x, y, glyph);
    }

    let Some((cc, cr)) = view.cell(x, y) else {
        return Ok(());
    };
    let (rx, ry) = (rx.max(1.0), ry.max(1.0));
    let (span_c, span_r) = (rx.ceil() as i32, ry.ceil() as i32);
    for dr in -span_r..=span_r {
        for dc in -span_c..=span_c {
            let d = (dc as f32 / rx).powi(2) + (dr as f32 / ry).powi(2);
            let hit = if filled { d <= 1.0 } else { (0.6..=1.0).contains(&d) };
            let (col, row) = (cc as i32 + dc, cr as i32 + dr);
            if !hit || col < 0 || row < 0 || col >= view.cols as i32 || row >= view.rows as i32 {
                continue;
            }
            out.queue(cursor::MoveTo(col as u16, row as u16))?;
            out.queue(Print(if filled { "█" } else { "·" }))?;
        }
    }
    Ok(())
}

// ── Text ──────────────────────────────────────────────────────────────────────

fn draw_text<W: Write>(out: &mut W, text: &Text, view: &Viewport) -> std::io::Result<()> {
    let Some((col, row)) = view.cell(text.x.max(0.0), text.y.max(0.0)) else {
        return Ok(());
    };
    let len = text.text.chars().count() as u16;
    let col = match text.align {
        Align::Left => col.min(view.cols.saturating_sub(len)),
        Align::Center => col.saturating_sub(len / 2),
    };
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color(text.color)))?;
    out.queue(Print(&text.text))?;
    Ok(())
}
