//! Rendering layer. All terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable render snapshot.
//! No game logic is performed; this module only scales field coordinates to
//! terminal cells and translates the snapshot into crossterm commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print},
    terminal, QueueableCommand,
};

use crate::config::Tint;
use crate::snapshot::{ObjectView, PlayView, PopupView, RenderSnapshot, Scene, TextLine};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_SPARKLE: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

const GLYPH_FAVORABLE: &str = "*";
const GLYPH_UNFAVORABLE: &str = "o";
const GLYPH_CATCHER: &str = "▀";

/// Text at or above this reference size is drawn bold.
const BOLD_SIZE: u8 = 24;

pub fn tint_color(tint: Tint) -> Color {
    match tint {
        Tint::Navy => Color::Rgb { r: 0, g: 0, b: 128 },
        Tint::Yellow => Color::Yellow,
        Tint::Red => Color::Red,
        Tint::White => Color::White,
        Tint::Green => Color::Green,
        Tint::Gold => Color::Rgb { r: 255, g: 215, b: 0 },
        Tint::Lime => Color::Rgb { r: 0, g: 255, b: 0 },
        Tint::Cyan => Color::Cyan,
        Tint::Orange => Color::Rgb { r: 255, g: 165, b: 0 },
        Tint::Brown => Color::Rgb { r: 165, g: 42, b: 42 },
        Tint::Black => Color::Black,
    }
}

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Maps the field onto the terminal area inside a one-cell border.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    field_width: i32,
    field_height: i32,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, field_width: i32, field_height: i32) -> Self {
        Self {
            cols,
            rows,
            field_width: field_width.max(1),
            field_height: field_height.max(1),
        }
    }

    fn inner_cols(&self) -> i32 {
        (self.cols as i32 - 2).max(1)
    }

    fn inner_rows(&self) -> i32 {
        (self.rows as i32 - 2).max(1)
    }

    /// Terminal column for field x, or `None` outside the field.
    pub fn col(&self, x: i32) -> Option<u16> {
        if !(0..=self.field_width).contains(&x) {
            return None;
        }
        let inner = self.inner_cols();
        let c = (x as i64 * inner as i64 / self.field_width as i64).min(inner as i64 - 1);
        Some((c + 1) as u16)
    }

    /// Terminal row for field y, or `None` outside the field.
    pub fn row(&self, y: i32) -> Option<u16> {
        if !(0..=self.field_height).contains(&y) {
            return None;
        }
        let inner = self.inner_rows();
        let r = (y as i64 * inner as i64 / self.field_height as i64).min(inner as i64 - 1);
        Some((r + 1) as u16)
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        Some((self.col(x)?, self.row(y)?))
    }

    /// Field x under a terminal column (centre of the cell). Columns on or
    /// beyond the border map to the nearest field edge cell.
    pub fn field_x(&self, col: u16) -> i32 {
        let inner = self.inner_cols() as i64;
        let c = (col as i64 - 1).clamp(0, inner - 1);
        let fw = self.field_width as i64;
        ((c * fw + fw / 2) / inner) as i32
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, snapshot: &RenderSnapshot, viewport: &Viewport) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(tint_color(snapshot.background)))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, viewport)?;

    match &snapshot.scene {
        Scene::Title { lines } | Scene::GameOver { lines } => {
            for line in lines {
                draw_text(out, line, viewport)?;
            }
        }
        Scene::Playing(view) => draw_play(out, view, viewport, tint_color(snapshot.background))?,
    }

    for popup in &snapshot.popups {
        draw_popup(out, popup, viewport)?;
    }

    draw_controls_hint(out, viewport)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, viewport.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, viewport: &Viewport) -> std::io::Result<()> {
    let w = viewport.cols as usize;
    let h = viewport.rows;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, h.saturating_sub(1)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 1..h.saturating_sub(1) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(viewport.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── Text ──────────────────────────────────────────────────────────────────────

fn draw_text<W: Write>(out: &mut W, line: &TextLine, viewport: &Viewport) -> std::io::Result<()> {
    let Some((col, row)) = viewport.cell(line.x, line.y) else {
        return Ok(());
    };
    let len = line.text.chars().count() as u16;
    let start = col.saturating_sub(len / 2).max(1);

    out.queue(cursor::MoveTo(start, row))?;
    out.queue(style::SetForegroundColor(tint_color(line.tint)))?;
    if line.size >= BOLD_SIZE {
        out.queue(style::SetAttribute(Attribute::Bold))?;
    }
    out.queue(Print(&line.text))?;
    if line.size >= BOLD_SIZE {
        out.queue(style::SetAttribute(Attribute::NormalIntensity))?;
    }
    Ok(())
}

// ── Playing scene ─────────────────────────────────────────────────────────────

fn draw_play<W: Write>(
    out: &mut W,
    view: &PlayView,
    viewport: &Viewport,
    background: Color,
) -> std::io::Result<()> {
    for object in &view.objects {
        draw_object(out, object, viewport, background)?;
    }

    let c = &view.catcher;
    if let (Some(left), Some(right), Some(row)) = (
        viewport.col(c.x),
        viewport.col(c.x + c.width),
        viewport.row(c.y),
    ) {
        let span = (right - left + 1) as usize;
        out.queue(cursor::MoveTo(left, row))?;
        out.queue(style::SetForegroundColor(tint_color(view.catcher_tint)))?;
        out.queue(Print(GLYPH_CATCHER.repeat(span)))?;
    }

    draw_text(out, &view.score, viewport)?;
    draw_text(out, &view.time, viewport)?;
    Ok(())
}

fn draw_object<W: Write>(
    out: &mut W,
    object: &ObjectView,
    viewport: &Viewport,
    background: Color,
) -> std::io::Result<()> {
    // Stars below the floor are still live until they fully exit, but have no cell.
    let Some((col, row)) = viewport.cell(object.x, object.y) else {
        return Ok(());
    };
    out.queue(cursor::MoveTo(col, row))?;
    match object.sparkle {
        Some(_) => {
            out.queue(style::SetForegroundColor(C_SPARKLE))?;
            out.queue(style::SetBackgroundColor(tint_color(object.tint)))?;
            out.queue(Print(GLYPH_FAVORABLE))?;
        }
        None => {
            out.queue(style::SetForegroundColor(tint_color(object.tint)))?;
            out.queue(Print(GLYPH_UNFAVORABLE))?;
        }
    }
    out.queue(style::SetBackgroundColor(background))?;
    Ok(())
}

fn draw_popup<W: Write>(out: &mut W, popup: &PopupView, viewport: &Viewport) -> std::io::Result<()> {
    let line = TextLine {
        text: popup.text.clone(),
        tint: popup.tint,
        x: popup.x,
        y: popup.y.max(0),
        size: 14,
    };
    draw_text(out, &line, viewport)
}

// ── Controls hint (bottom border) ─────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, viewport: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(2, viewport.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(" Mouse : Move   Click / Space : Start   Q : Quit "))?;
    Ok(())
}
