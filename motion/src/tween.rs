//! A single interpolation between two property bags.

#[cfg(test)]
#[path = "tween_test.rs"]
mod tween_test;

use crate::ease::{Curve, Ease};
use crate::props::Props;

/// How many extra cycles a tween plays after the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    #[default]
    Never,
    Times(u32),
    Forever,
}

/// Default ease when none is given.
pub const DEFAULT_EASE: Ease = Ease::Power(1, Curve::Out);
pub const DEFAULT_DURATION: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    /// End values. Also defines which channels the tween owns.
    pub to: Props,
    /// Explicit start values; `None` reads the target's current values the
    /// first time the tween renders.
    pub from: Option<Props>,
    pub duration: f64,
    pub delay: f64,
    pub ease: Ease,
    pub repeat: Repeat,
    /// Play every odd cycle backward.
    pub yoyo: bool,
}

impl Tween {
    /// Animate from the current values to `to`.
    #[must_use]
    pub fn to(to: Props) -> Self {
        Self {
            to,
            from: None,
            duration: DEFAULT_DURATION,
            delay: 0.0,
            ease: DEFAULT_EASE,
            repeat: Repeat::Never,
            yoyo: false,
        }
    }

    /// Animate from explicit start values to `to`.
    #[must_use]
    pub fn from_to(from: Props, to: Props) -> Self {
        Self { from: Some(from), ..Self::to(to) }
    }

    /// Jump to `to` with no interpolation (after `delay`, if any).
    #[must_use]
    pub fn set(to: Props) -> Self {
        Self { duration: 0.0, ..Self::to(to) }
    }

    #[must_use]
    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds.max(0.0);
        self
    }

    #[must_use]
    pub fn delay(mut self, seconds: f64) -> Self {
        self.delay = seconds.max(0.0);
        self
    }

    #[must_use]
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    #[must_use]
    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    #[must_use]
    pub fn yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    /// Total play time after the delay, `None` when it repeats forever.
    #[must_use]
    pub fn total_duration(&self) -> Option<f64> {
        match self.repeat {
            Repeat::Never => Some(self.duration),
            Repeat::Times(n) => Some(self.duration * (f64::from(n) + 1.0)),
            Repeat::Forever => None,
        }
    }

    /// Eased fraction at `local` seconds since the tween was started
    /// (delay included), and whether the tween has finished.
    #[must_use]
    pub fn progress(&self, local: f64) -> (f64, bool) {
        let elapsed = local - self.delay;
        if elapsed < 0.0 {
            return (0.0, false);
        }
        if self.duration <= 0.0 {
            return (1.0, true);
        }

        if let Some(total) = self.total_duration() {
            if elapsed >= total {
                let last_cycle_backward = self.yoyo && matches!(self.repeat, Repeat::Times(n) if n % 2 == 1);
                let end = if last_cycle_backward { 0.0 } else { 1.0 };
                return (end, true);
            }
        }

        let cycle = (elapsed / self.duration).floor();
        let mut raw = (elapsed - cycle * self.duration) / self.duration;
        #[allow(clippy::cast_possible_truncation)]
        let backward = self.yoyo && (cycle as i64) % 2 == 1;
        if backward {
            raw = 1.0 - raw;
        }
        (self.ease.apply(raw), false)
    }
}
