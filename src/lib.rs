// Terminal capability handle and input translation
pub mod terminal;

// Desktop state: window arena, simulated pointer, drag session
pub mod state;

// Backdrop, compositor and window painting
pub mod render;

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use state::window::WindowInstance;
use state::Desktop;
use terminal::{SessionEvent, TerminalSession};

const FRAME_DELAY: Duration = Duration::from_millis(20);

/// The fixed startup layout. Windows are never created after this; closing
/// one only hides it.
fn initial_windows() -> Vec<WindowInstance> {
    vec![
        WindowInstance::new(10, 3, 60, 15, 3, "Main Window", 1),
        WindowInstance::new(5, 8, 30, 10, 4, "Blue Window", 2),
        WindowInstance::new(20, 6, 40, 12, 2, "Green Window", 3),
    ]
}

/// The frame loop: full redraw, one blocking input event, apply, sleep.
///
/// There is no dirty-region tracking; every frame repaints backdrop, windows
/// in z-order and the pointer glyph, then blocks until the terminal delivers
/// the next event. Each event is applied whole between draws, so a redraw
/// never shows a half-applied state.
pub fn run() -> Result<()> {
    let mut session = TerminalSession::new()?;
    let mut desktop = Desktop::new(initial_windows(), 40, 12);
    let started = Instant::now();
    let mut out = io::stdout();

    loop {
        let (width, height) = session.size();
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        render::draw_background(&mut out, width, height)?;
        render::draw_windows(&mut out, &desktop.windows)?;
        render::draw_pointer(
            &mut out,
            desktop.cursor_x,
            desktop.cursor_y,
            render::pointer_frame(started.elapsed()),
        )?;
        out.flush()?;

        match session.next_event()? {
            Some(SessionEvent::Quit) => break,
            Some(SessionEvent::Pointer(event)) => desktop.apply_event(event),
            None => {}
        }

        thread::sleep(FRAME_DELAY);
    }

    Ok(())
}
