//! Mobile navigation toggle.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::hash::Hash;

use crate::consts::{NAV_DELAY, NAV_DURATION, NAV_OFFSET_X, NAV_STAGGER};
use crate::props::{Prop, Props};
use crate::timeline::{Position, Timeline};
use crate::tween::Tween;

#[derive(Debug, Clone, Copy, Default)]
pub struct NavToggle {
    open: bool,
}

impl NavToggle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu. Returns true when it just opened, which is the only
    /// time the links animate.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }
}

/// Links slide in from the left and fade up, one after another.
#[must_use]
pub fn links_entrance<K: Copy + Eq + Hash, C>(links: &[K]) -> Timeline<K, C> {
    let hidden = Props::new().with(Prop::X, NAV_OFFSET_X).with(Prop::Opacity, 0.0);
    let shown = Props::new().with(Prop::X, 0.0).with(Prop::Opacity, 1.0);
    links.iter().enumerate().fold(Timeline::new(), |tl, (i, link)| {
        #[allow(clippy::cast_precision_loss)]
        let at = NAV_DELAY + NAV_STAGGER * i as f64;
        tl.tween(*link, Tween::from_to(hidden.clone(), shown.clone()).duration(NAV_DURATION), Position::At(at))
    })
}
