//! Mobile navigation overlay state.

/// Open/closed flag of the mobile menu overlay. Starts closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    is_open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Selecting any entry closes the overlay.
    pub fn close(&mut self) {
        self.is_open = false;
    }
}
