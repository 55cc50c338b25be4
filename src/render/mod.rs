use std::io::{self, Write};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};

use crate::state::window::WindowInstance;

// Backdrop insets, in cells.
pub const TOP_BOTTOM_MARGIN: u16 = 1;
pub const LEFT_RIGHT_MARGIN: u16 = 2;
pub const TASKBAR_HEIGHT: u16 = 1;

const BACKDROP_COLOR: Color = Color::DarkBlue;
const TASKBAR_COLOR: Color = Color::Grey;
const TITLE_COLOR: Color = Color::Yellow;
const CLOSE_BG_COLOR: Color = Color::DarkRed;
const CLOSE_FG_COLOR: Color = Color::White;
const POINTER_COLOR: Color = Color::Magenta;

/// Pointer glyphs cycled from wall-clock time, one step per 200ms.
pub const POINTER_FRAMES: [&str; 4] = ["<", "\u{ab}", "\u{2039}", "<"];

pub fn pointer_frame(elapsed: Duration) -> usize {
    ((elapsed.as_millis() / 200) % POINTER_FRAMES.len() as u128) as usize
}

/// Queue a run of text, clipped against the top and left screen edges.
/// Window geometry can go negative mid-drag; clipping is purely an output
/// concern and never feeds back into hit-testing.
fn put(out: &mut impl Write, x: i32, y: i32, text: &str) -> io::Result<()> {
    if y < 0 {
        return Ok(());
    }
    let skip = (-x).max(0) as usize;
    let visible: String = text.chars().skip(skip).collect();
    if visible.is_empty() {
        return Ok(());
    }
    queue!(out, MoveTo((x + skip as i32) as u16, y as u16), Print(visible))
}

/// Paint the desktop backdrop and the taskbar strip, inset by the fixed
/// margins, row-major top to bottom.
pub fn draw_background(out: &mut impl Write, width: u16, height: u16) -> io::Result<()> {
    let inner_width = width.saturating_sub(LEFT_RIGHT_MARGIN * 2) as usize;
    let inner_height = height.saturating_sub(TOP_BOTTOM_MARGIN * 2 + TASKBAR_HEIGHT);
    if inner_width == 0 {
        return Ok(());
    }
    let blank = " ".repeat(inner_width);

    for row in 0..inner_height {
        queue!(
            out,
            MoveTo(LEFT_RIGHT_MARGIN, TOP_BOTTOM_MARGIN + row),
            SetBackgroundColor(BACKDROP_COLOR),
            Print(&blank),
            ResetColor
        )?;
    }
    queue!(
        out,
        MoveTo(LEFT_RIGHT_MARGIN, TOP_BOTTOM_MARGIN + inner_height),
        SetBackgroundColor(TASKBAR_COLOR),
        Print(&blank),
        ResetColor
    )
}

/// Compositor ordering: a stable ascending sort of arena indices by z-order.
/// Equal z keeps arena order; invisible windows stay in the list and are
/// skipped by `draw_window` itself.
pub fn draw_order(windows: &[WindowInstance]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..windows.len()).collect();
    order.sort_by_key(|&i| windows[i].z_order);
    order
}

/// Draw every window back to front, so higher-z windows overwrite the cells
/// of the ones painted before them.
pub fn draw_windows(out: &mut impl Write, windows: &[WindowInstance]) -> io::Result<()> {
    for index in draw_order(windows) {
        draw_window(out, &windows[index])?;
    }
    Ok(())
}

/// Paint one window: border frame, title bar with close glyph, blank
/// interior. Every styled run resets color state before the next one so
/// nothing bleeds into unrelated output.
pub fn draw_window(out: &mut impl Write, w: &WindowInstance) -> io::Result<()> {
    if !w.visible {
        return Ok(());
    }

    let bg = Color::AnsiValue(w.color);
    let body_width = (w.width - 2).max(0) as usize;
    let border_row = format!("+{}+", "-".repeat(body_width));

    // Top border
    queue!(out, SetBackgroundColor(bg))?;
    put(out, w.x, w.y, &border_row)?;
    queue!(out, ResetColor)?;

    // Title row. The close glyph and right border are positioned absolutely
    // so they stay aligned with the hit-test cells even when the title is
    // too long and its padding clamps to zero.
    let title_len = w.title.chars().count() as i32;
    let padding = (w.width - 4 - title_len).max(0) as usize;
    queue!(out, SetBackgroundColor(bg))?;
    put(out, w.x, w.y + 1, "|")?;
    queue!(out, SetForegroundColor(TITLE_COLOR))?;
    put(
        out,
        w.x + 1,
        w.y + 1,
        &format!(" {}{}", w.title, " ".repeat(padding.saturating_sub(1))),
    )?;
    queue!(
        out,
        ResetColor,
        SetBackgroundColor(CLOSE_BG_COLOR),
        SetForegroundColor(CLOSE_FG_COLOR)
    )?;
    put(out, w.x + w.width - 3, w.y + 1, "X")?;
    queue!(out, ResetColor, SetBackgroundColor(bg))?;
    put(out, w.x + w.width - 2, w.y + 1, " |")?;
    queue!(out, ResetColor)?;

    // Interior rows
    let interior_row = format!("|{}|", " ".repeat(body_width));
    for i in 0..(w.height - 3).max(0) {
        queue!(out, SetBackgroundColor(bg))?;
        put(out, w.x, w.y + 2 + i, &interior_row)?;
        queue!(out, ResetColor)?;
    }

    // Bottom border
    queue!(out, SetBackgroundColor(bg))?;
    put(out, w.x, w.y + w.height - 1, &border_row)?;
    queue!(out, ResetColor)
}

/// Paint the simulated mouse pointer glyph for the given animation frame.
pub fn draw_pointer(out: &mut impl Write, x: i32, y: i32, frame: usize) -> io::Result<()> {
    queue!(out, SetForegroundColor(POINTER_COLOR))?;
    put(out, x, y, POINTER_FRAMES[frame % POINTER_FRAMES.len()])?;
    queue!(out, ResetColor)
}
