//! Flip mode: random-card review with a show/hide answer toggle.

use super::{ModeState, RevealAnswer};

/// Per-card state for flip mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlipState {
    revealed: bool,
}

impl ModeState for FlipState {
    fn on_card_loaded(&mut self) {
        self.revealed = false;
    }
}

impl RevealAnswer for FlipState {
    fn revealed(&self) -> bool {
        self.revealed
    }

    fn set_revealed(&mut self, on: bool) {
        self.revealed = on;
    }
}
