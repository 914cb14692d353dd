//! Scroll metrics and viewport-intersection triggers.
//!
//! All positions are in viewport coordinates: an element's `top` is the
//! distance from the top of the visible window, negative once it has scrolled
//! past. A trigger line at fraction `f` sits `f * viewport_height` down.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::Rect;
use crate::consts::{BACK_TO_TOP_THRESHOLD, PARALLAX_MAX_PERCENT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Content moving up, scroll offset increasing.
    Forward,
    Backward,
}

impl Direction {
    /// Direction of travel from `previous` to `current`; `None` if unmoved.
    #[must_use]
    pub fn between(previous: f64, current: f64) -> Option<Self> {
        if current > previous {
            Some(Self::Forward)
        } else if current < previous {
            Some(Self::Backward)
        } else {
            None
        }
    }
}

/// The three numbers every scroll handler works from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    #[must_use]
    pub fn new(offset: f64, document_height: f64, viewport_height: f64) -> Self {
        Self { offset, document_height, viewport_height }
    }

    /// Total scrollable distance, never negative.
    #[must_use]
    pub fn max_offset(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }

    /// Percentage of the scrollable distance covered, in `[0, 100]`.
    ///
    /// A page that cannot scroll is always at its maximum offset, so it
    /// reports 100.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        let max = self.max_offset();
        if max <= 0.0 {
            return 100.0;
        }
        (self.offset / max * 100.0).clamp(0.0, 100.0)
    }

    #[must_use]
    pub fn shows_back_to_top(&self) -> bool {
        self.offset > BACK_TO_TOP_THRESHOLD
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    Play,
    Reverse,
}

/// Reversible trigger: plays once the element's top is at or above the
/// line, reverses when it drops back below. Re-entrant in both directions.
#[derive(Debug, Clone)]
pub struct RevealTrigger {
    fraction: f64,
    active: bool,
}

impl RevealTrigger {
    #[must_use]
    pub fn new(fraction: f64) -> Self {
        Self { fraction, active: false }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn update(&mut self, element_top: f64, viewport_height: f64) -> Option<RevealAction> {
        let crossed = element_top <= self.fraction * viewport_height;
        match (crossed, self.active) {
            (true, false) => {
                self.active = true;
                Some(RevealAction::Play)
            }
            (false, true) => {
                self.active = false;
                Some(RevealAction::Reverse)
            }
            _ => None,
        }
    }
}

/// One-shot trigger: reports the first crossing and nothing after.
#[derive(Debug, Clone)]
pub struct OnceTrigger {
    fraction: f64,
    fired: bool,
}

impl OnceTrigger {
    #[must_use]
    pub fn new(fraction: f64) -> Self {
        Self { fraction, fired: false }
    }

    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    pub fn update(&mut self, element_top: f64, viewport_height: f64) -> bool {
        if self.fired || element_top > self.fraction * viewport_height {
            return false;
        }
        self.fired = true;
        true
    }
}

/// Vertical shift, as a percentage of the image's height, for an image
/// whose container is at `container`. Progress runs from 0 when the
/// container's top meets the bottom of the viewport to 1 when its bottom
/// leaves the top, and maps linearly onto `[0, PARALLAX_MAX_PERCENT]`.
#[must_use]
pub fn parallax_percent(container: Rect, viewport_height: f64) -> f64 {
    let travel = viewport_height + container.height;
    if travel <= 0.0 {
        return 0.0;
    }
    let progress = ((viewport_height - container.top) / travel).clamp(0.0, 1.0);
    progress * PARALLAX_MAX_PERCENT
}
