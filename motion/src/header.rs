//! Sticky header shadow.
//!
//! The header gains its `scrolled` class the first time the page moves down
//! past the threshold, and only loses it when the user scrolls back up to
//! within the threshold of the top. Anything else leaves it as it was.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use crate::consts::HEADER_SHADOW_THRESHOLD;
use crate::scroll::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderState {
    #[default]
    Top,
    Scrolled,
}

impl HeaderState {
    /// Pure transition function on (direction, offset).
    #[must_use]
    pub fn next(self, direction: Direction, offset: f64) -> Self {
        match direction {
            Direction::Forward if offset > HEADER_SHADOW_THRESHOLD => Self::Scrolled,
            Direction::Backward if offset < HEADER_SHADOW_THRESHOLD => Self::Top,
            _ => self,
        }
    }
}

/// Tracks the header state and the last offset, so the host only needs to
/// feed raw scroll offsets.
#[derive(Debug, Clone, Default)]
pub struct HeaderShadow {
    state: HeaderState,
    last_offset: f64,
}

impl HeaderShadow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> HeaderState {
        self.state
    }

    /// Feed a new scroll offset. Returns the new state when it changed.
    pub fn on_scroll(&mut self, offset: f64) -> Option<HeaderState> {
        let direction = Direction::between(self.last_offset, offset);
        self.last_offset = offset;
        let next = self.state.next(direction?, offset);
        if next == self.state {
            return None;
        }
        self.state = next;
        Some(next)
    }
}
