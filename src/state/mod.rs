use self::window::{bring_to_front, WindowInstance};

pub mod window;

/// One normalized mouse event, the only input the desktop reacts to.
///
/// Drag motion arrives as plain `Moved` events; whether a move relocates a
/// window depends solely on the active drag session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    Moved { x: i32, y: i32 },
    LeftPressed { x: i32, y: i32 },
    Released,
}

/// Transient state linking the dragged window to the pointer's grab offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragSession {
    pub window: usize, // Arena index of the window being dragged
    pub offset_x: i32, // Pointer minus window origin at grab time
    pub offset_y: i32,
}

/// The whole mutable desktop: window arena, simulated pointer, drag session.
///
/// Owned exclusively by the main loop thread; every event is applied as a
/// single atomic step between redraws.
pub struct Desktop {
    pub windows: Vec<WindowInstance>,
    pub cursor_x: i32,
    pub cursor_y: i32,
    drag: Option<DragSession>,
}

impl Desktop {
    pub fn new(windows: Vec<WindowInstance>, cursor_x: i32, cursor_y: i32) -> Self {
        Self {
            windows,
            cursor_x,
            cursor_y,
            drag: None,
        }
    }

    pub fn drag_session(&self) -> Option<DragSession> {
        self.drag
    }

    /// Advance the desktop by one input event.
    pub fn apply_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Moved { x, y } => {
                self.cursor_x = x;
                self.cursor_y = y;

                if let Some(drag) = self.drag {
                    let w = &mut self.windows[drag.window];
                    w.x = x - drag.offset_x;
                    w.y = y - drag.offset_y;
                }
            }
            PointerEvent::LeftPressed { x, y } => self.press_at(x, y),
            PointerEvent::Released => {
                self.drag = None;
            }
        }
    }

    /// Hit-scan for a left press. Windows are probed from the highest arena
    /// index down (not by z-order), and the scan stops at the first hit: the
    /// close hot-spot wins over the window body, and a body hit raises the
    /// window and may start a drag if it landed on the title bar.
    fn press_at(&mut self, x: i32, y: i32) {
        for i in (0..self.windows.len()).rev() {
            if !self.windows[i].visible {
                continue;
            }

            if self.windows[i].close_button_contains(x, y) {
                self.windows[i].visible = false;
                self.drag = None;
                break;
            }

            if self.windows[i].contains(x, y) {
                bring_to_front(&mut self.windows, i);

                if self.windows[i].title_bar_contains(x, y) {
                    self.drag = Some(DragSession {
                        window: i,
                        offset_x: x - self.windows[i].x,
                        offset_y: y - self.windows[i].y,
                    });
                }
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_window_desktop() -> Desktop {
        Desktop::new(
            vec![
                WindowInstance::new(10, 3, 60, 15, 3, "Main Window", 1),
                WindowInstance::new(5, 8, 30, 10, 4, "Blue Window", 2),
                WindowInstance::new(20, 6, 40, 12, 2, "Green Window", 3),
            ],
            40,
            12,
        )
    }

    #[test]
    fn test_move_updates_cursor() {
        let mut desktop = three_window_desktop();

        desktop.apply_event(PointerEvent::Moved { x: 7, y: 21 });

        assert_eq!((desktop.cursor_x, desktop.cursor_y), (7, 21));
        assert!(desktop.drag_session().is_none());
    }

    #[test]
    fn test_body_click_raises_window() {
        let mut desktop = three_window_desktop();

        // (12, 5) is inside window 0 only
        desktop.apply_event(PointerEvent::LeftPressed { x: 12, y: 5 });

        assert_eq!(desktop.windows[0].z_order, 4);
        // A body click below the title bar never starts a drag
        assert!(desktop.drag_session().is_none());
    }

    #[test]
    fn test_press_scans_by_arena_index_not_z_order() {
        let mut desktop = three_window_desktop();
        // Window 0 is frontmost by z, but window 1 comes later in the arena
        desktop.windows[0].z_order = 9;

        // (12, 9) lies inside both window 0 and window 1
        desktop.apply_event(PointerEvent::LeftPressed { x: 12, y: 9 });

        assert_eq!(desktop.windows[1].z_order, 10);
        assert_eq!(desktop.windows[0].z_order, 9);
    }

    #[test]
    fn test_title_bar_press_starts_drag_with_grab_offset() {
        let mut desktop = three_window_desktop();

        // Window 1 sits at (5, 8); its title row is y = 9
        desktop.apply_event(PointerEvent::LeftPressed { x: 7, y: 9 });

        let drag = desktop.drag_session().unwrap();
        assert_eq!(drag.window, 1);
        assert_eq!((drag.offset_x, drag.offset_y), (2, 1));
    }

    #[test]
    fn test_drag_follows_pointer_minus_offset() {
        let mut desktop = three_window_desktop();

        desktop.apply_event(PointerEvent::LeftPressed { x: 7, y: 9 });
        desktop.apply_event(PointerEvent::Moved { x: 15, y: 14 });

        assert_eq!((desktop.windows[1].x, desktop.windows[1].y), (13, 13));

        // Dragging past the left edge is allowed; geometry goes negative
        desktop.apply_event(PointerEvent::Moved { x: 1, y: 14 });
        assert_eq!((desktop.windows[1].x, desktop.windows[1].y), (-1, 13));
    }

    #[test]
    fn test_release_ends_drag() {
        let mut desktop = three_window_desktop();

        desktop.apply_event(PointerEvent::LeftPressed { x: 7, y: 9 });
        desktop.apply_event(PointerEvent::Released);
        desktop.apply_event(PointerEvent::Moved { x: 30, y: 20 });

        // The window stays where the drag left it
        assert_eq!((desktop.windows[1].x, desktop.windows[1].y), (5, 8));
        assert!(desktop.drag_session().is_none());
    }

    #[test]
    fn test_close_button_hides_window_and_cancels_drag() {
        let mut desktop = three_window_desktop();
        desktop.apply_event(PointerEvent::LeftPressed { x: 7, y: 9 });

        // Window 2 at (20, 6), width 40: close hot-spot is (57, 7)
        desktop.apply_event(PointerEvent::LeftPressed { x: 57, y: 7 });

        assert!(!desktop.windows[2].visible);
        assert!(desktop.drag_session().is_none());
    }

    #[test]
    fn test_close_wins_over_title_bar_drag() {
        let mut desktop = three_window_desktop();

        // The close hot-spot is on the title row; it must hide, not grab
        desktop.apply_event(PointerEvent::LeftPressed { x: 57, y: 7 });

        assert!(!desktop.windows[2].visible);
        assert!(desktop.drag_session().is_none());
    }

    #[test]
    fn test_hidden_window_lets_press_fall_through() {
        let mut desktop = three_window_desktop();
        desktop.windows[2].visible = false;

        // (25, 9) used to be window 2's body; now it reaches window 1.
        // The hidden window's z = 3 is excluded from the raise computation.
        desktop.apply_event(PointerEvent::LeftPressed { x: 25, y: 9 });

        assert_eq!(desktop.windows[1].z_order, 3);
        assert_eq!(desktop.windows[2].z_order, 3);
    }

    #[test]
    fn test_press_on_backdrop_changes_nothing() {
        let mut desktop = three_window_desktop();
        let before: Vec<_> = desktop.windows.clone();

        desktop.apply_event(PointerEvent::LeftPressed { x: 1, y: 1 });

        assert_eq!(desktop.windows, before);
        assert!(desktop.drag_session().is_none());
    }
}
