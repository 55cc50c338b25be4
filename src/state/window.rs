/// A single desktop panel.
///
/// Windows live in a fixed arena owned by the `Desktop`; closing one only
/// clears `visible`, so indices stay stable for the whole session.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowInstance {
    pub x: i32,          // Top-left column (can go negative mid-drag)
    pub y: i32,          // Top-left row
    pub width: i32,      // In cells; >= 4 for the chrome to render sensibly
    pub height: i32,     // In cells; >= 3
    pub color: u8,       // ANSI palette index for the body background
    pub title: String,   // Shown in the title bar
    pub visible: bool,   // Cleared by the close button, never set again
    pub z_order: u32,    // Stacking order (higher = more in front)
}

impl WindowInstance {
    pub fn new(x: i32, y: i32, width: i32, height: i32, color: u8, title: &str, z_order: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color,
            title: title.to_string(),
            visible: true,
            z_order,
        }
    }

    /// True iff the window is visible and the point lies within its bounds,
    /// `[x, x + width) x [y, y + height)`.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.visible
            && x >= self.x
            && x < self.x + self.width
            && y >= self.y
            && y < self.y + self.height
    }

    /// True iff the point is on the title row (the row below the top border).
    pub fn title_bar_contains(&self, x: i32, y: i32) -> bool {
        self.contains(x, y) && y == self.y + 1
    }

    /// The single-cell close hot-spot near the right end of the title row.
    pub fn close_button_cell(&self) -> (i32, i32) {
        (self.x + self.width - 3, self.y + 1)
    }

    /// True iff the point is exactly the close hot-spot. Checked against the
    /// cell alone, not the window bounds, so a degenerate width can place the
    /// hot-spot outside the rectangle and it still fires.
    pub fn close_button_contains(&self, x: i32, y: i32) -> bool {
        self.visible && (x, y) == self.close_button_cell()
    }
}

/// Raise `windows[index]` above every visible window.
///
/// The new z-order is one past the maximum over visible windows only, so a
/// closed window parked at a high z can never pin the stack. Absolute values
/// are meaningless beyond relative comparison; re-raising the frontmost
/// window just gives it a fresh, strictly higher value.
pub fn bring_to_front(windows: &mut [WindowInstance], index: usize) {
    let max_z = windows
        .iter()
        .filter(|w| w.visible)
        .map(|w| w.z_order)
        .max()
        .unwrap_or(0);
    windows[index].z_order = max_z + 1;
}
