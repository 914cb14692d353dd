//! Rotating phrase text.
//!
//! DESIGN
//! ======
//! [`PhraseRotator`] is the cursor into the fixed phrase list together with
//! the in-transition guard. The host's interval calls [`PhraseRotator::begin`]
//! on every tick; a tick that arrives mid-transition gets `None` and is
//! dropped, not queued. When the cross-fade timeline completes the host calls
//! [`PhraseRotator::finish`], which commits the new index and clears the guard.
//!
//! The timeline builders below only describe motion. They are generic over
//! the host's element key so the same sequence can be checked in tests
//! against a plain `Stage<usize, _>`.

#[cfg(test)]
#[path = "phrases_test.rs"]
mod phrases_test;

use std::hash::Hash;

use crate::consts::{
    PHRASE_BLUR, PHRASE_DURATION, PHRASE_ENTER_SCALE, PHRASE_ENTRANCE_DELAY, PHRASE_EXIT_SCALE, PHRASE_OFFSET_Y,
    PHRASE_OVERLAP,
};
use crate::ease::{Curve, Ease};
use crate::props::{Prop, Props};
use crate::timeline::{Position, Timeline};
use crate::tween::Tween;

/// Phrases shown in the hero headline, in rotation order.
pub const DEFAULT_PHRASES: [&str; 5] = [
    "Precision & Quality",
    "Medical Instruments",
    "Electrical Switchgear",
    "Safety Equipment",
    "Industrial Supplies",
];

/// One step of the rotation: indices into the phrase list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseTransition {
    pub outgoing: usize,
    pub incoming: usize,
}

#[derive(Debug, Clone)]
pub struct PhraseRotator {
    phrases: Vec<String>,
    active: usize,
    pending: Option<usize>,
}

impl PhraseRotator {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { phrases: phrases.into_iter().map(Into::into).collect(), active: 0, pending: None }
    }

    #[must_use]
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether there is anything to rotate between.
    #[must_use]
    pub fn can_rotate(&self) -> bool {
        self.phrases.len() >= 2
    }

    /// The phrase used to size the container. On equal length the later
    /// phrase wins.
    #[must_use]
    pub fn longest(&self) -> Option<&str> {
        self.phrases
            .iter()
            .fold(None, |best: Option<&String>, phrase| match best {
                Some(b) if b.chars().count() > phrase.chars().count() => Some(b),
                _ => Some(phrase),
            })
            .map(String::as_str)
    }

    /// Start the next transition, or `None` if one is already running or
    /// there is nothing to rotate.
    pub fn begin(&mut self) -> Option<PhraseTransition> {
        if self.pending.is_some() || !self.can_rotate() {
            return None;
        }
        let incoming = (self.active + 1) % self.phrases.len();
        self.pending = Some(incoming);
        Some(PhraseTransition { outgoing: self.active, incoming })
    }

    /// Commit the running transition. Returns the new active index.
    pub fn finish(&mut self) -> usize {
        if let Some(incoming) = self.pending.take() {
            self.active = incoming;
        }
        self.active
    }
}

/// Resting state of every phrase before it first enters.
#[must_use]
pub fn hidden_props() -> Props {
    Props::new()
        .with(Prop::Opacity, 0.0)
        .with(Prop::Y, PHRASE_OFFSET_Y)
        .with(Prop::Blur, PHRASE_BLUR)
        .with(Prop::Scale, PHRASE_ENTER_SCALE)
}

fn shown_props() -> Props {
    Props::new().with(Prop::Opacity, 1.0).with(Prop::Y, 0.0).with(Prop::Blur, 0.0).with(Prop::Scale, 1.0)
}

fn exit_props() -> Props {
    Props::new()
        .with(Prop::Opacity, 0.0)
        .with(Prop::Y, -PHRASE_OFFSET_Y)
        .with(Prop::Blur, PHRASE_BLUR)
        .with(Prop::Scale, PHRASE_EXIT_SCALE)
}

/// First phrase's entrance, played once at startup.
#[must_use]
pub fn entrance_tween() -> Tween {
    Tween::to(shown_props())
        .duration(PHRASE_DURATION)
        .ease(Ease::Power(2, Curve::Out))
        .delay(PHRASE_ENTRANCE_DELAY)
}

/// Cross-fade from `outgoing` to `incoming`. The incoming phrase starts
/// before the outgoing one has finished, and the outgoing phrase is parked
/// back below the line once it is gone.
#[must_use]
pub fn cross_fade<K: Copy + Eq + Hash, C>(outgoing: K, incoming: K) -> Timeline<K, C> {
    let park = Props::new().with(Prop::Y, PHRASE_OFFSET_Y).with(Prop::Scale, PHRASE_ENTER_SCALE);
    Timeline::new()
        .tween(
            outgoing,
            Tween::to(exit_props()).duration(PHRASE_DURATION).ease(Ease::Power(2, Curve::InOut)),
            Position::Next,
        )
        .tween(
            incoming,
            Tween::from_to(hidden_props(), shown_props()).duration(PHRASE_DURATION).ease(Ease::Power(2, Curve::Out)),
            Position::Offset(-PHRASE_OVERLAP),
        )
        .tween(outgoing, Tween::set(park).delay(PHRASE_DURATION), Position::At(0.0))
}
