use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::cursor;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};

use crate::state::PointerEvent;

const FALLBACK_SIZE: (u16, u16) = (80, 25);

/// One event out of the blocking terminal read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    Pointer(PointerEvent),
    /// Ctrl-C. Raw mode swallows the interrupt signal, so the session
    /// surfaces it as an explicit quit request instead.
    Quit,
}

/// Capability handle over the raw terminal.
///
/// Construction flips the console into the modes the desktop needs (raw
/// input, alternate screen, mouse reporting, hidden cursor); dropping the
/// handle restores them best-effort in reverse order, so error and panic
/// paths still hand back a usable shell.
pub struct TerminalSession {
    _private: (),
}

impl TerminalSession {
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw terminal mode")?;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )
        .context("failed to configure the terminal screen")?;
        Ok(Self { _private: () })
    }

    /// Current screen size in cells, with a classic 80x25 fallback.
    pub fn size(&self) -> (u16, u16) {
        terminal::size().unwrap_or(FALLBACK_SIZE)
    }

    /// Block until the next input event the desktop cares about. Keys other
    /// than Ctrl-C, non-left buttons, wheel motion and resize events all
    /// come back as `None` and the caller just redraws.
    pub fn next_event(&mut self) -> Result<Option<SessionEvent>> {
        let session_event = match event::read().context("failed to read terminal input")? {
            Event::Mouse(mouse) => translate_mouse(mouse).map(SessionEvent::Pointer),
            Event::Key(key)
                if key.kind == KeyEventKind::Press
                    && key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                Some(SessionEvent::Quit)
            }
            _ => None,
        };
        Ok(session_event)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut out = io::stdout();
        let _ = execute!(out, cursor::Show, DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        let _ = out.flush();
    }
}

/// Map a crossterm mouse event onto the desktop's pointer vocabulary.
/// Left-button drags count as plain moves; the drag session decides whether
/// a move relocates a window.
fn translate_mouse(mouse: MouseEvent) -> Option<PointerEvent> {
    let (x, y) = (mouse.column as i32, mouse.row as i32);
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
            Some(PointerEvent::Moved { x, y })
        }
        MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::LeftPressed { x, y }),
        MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::Released),
        _ => None,
    }
}
