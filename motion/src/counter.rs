//! Stat counters.
//!
//! Each counter counts up from zero to its target the first time it scrolls
//! into view and never again. The accumulator is the [`Prop::Value`]
//! channel of the counter's own stage target; the host turns it into text
//! with [`StatCounter::text`] on every update.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use crate::consts::{COUNTER_DURATION, COUNTER_TRIGGER_FRACTION};
use crate::ease::{Curve, Ease};
use crate::props::{Prop, Props};
use crate::scroll::OnceTrigger;
use crate::tween::Tween;

#[derive(Debug, Clone)]
pub struct StatCounter {
    target: i64,
    suffix: String,
    trigger: OnceTrigger,
}

impl StatCounter {
    #[must_use]
    pub fn new(target: i64, suffix: impl Into<String>) -> Self {
        Self { target, suffix: suffix.into(), trigger: OnceTrigger::new(COUNTER_TRIGGER_FRACTION) }
    }

    /// Build from the element's `data-target` and `data-suffix` values.
    /// `None` when the target has no leading integer.
    #[must_use]
    pub fn parse(target: &str, suffix: Option<&str>) -> Option<Self> {
        leading_integer(target).map(|t| Self::new(t, suffix.unwrap_or_default()))
    }

    #[must_use]
    pub fn target(&self) -> i64 {
        self.target
    }

    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.trigger.has_fired()
    }

    /// Feed the element's current top edge. True exactly once, on the first
    /// crossing.
    pub fn on_scroll(&mut self, element_top: f64, viewport_height: f64) -> bool {
        self.trigger.update(element_top, viewport_height)
    }

    /// Count-up from zero to the target.
    #[must_use]
    pub fn tween(&self) -> Tween {
        #[allow(clippy::cast_precision_loss)]
        let target = self.target as f64;
        Tween::from_to(Props::new().with(Prop::Value, 0.0), Props::new().with(Prop::Value, target))
            .duration(COUNTER_DURATION)
            .ease(Ease::Power(2, Curve::Out))
    }

    /// Displayed text for an accumulator value: rounded, then suffixed.
    #[must_use]
    pub fn text(&self, value: f64) -> String {
        #[allow(clippy::cast_possible_truncation)]
        let rounded = (value + 0.5).floor() as i64;
        format!("{rounded}{}", self.suffix)
    }
}

/// Integer prefix of `raw` after leading whitespace, with an optional sign.
/// Trailing garbage is ignored; no digits at all is `None`.
fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = if let Some(rest) = trimmed.strip_prefix('-') {
        (true, rest)
    } else {
        (false, trimmed.strip_prefix('+').unwrap_or(trimmed))
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    let magnitude = match rest[..digits].parse::<i64>() {
        Ok(value) => value,
        Err(_) => return None,
    };
    Some(if negative { -magnitude } else { magnitude })
}
