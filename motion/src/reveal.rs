//! Scroll-triggered reveals.
//!
//! Children of a reveal container start hidden (shifted down, invisible)
//! and play to their natural position when the container's
//! [`RevealTrigger`](crate::scroll::RevealTrigger) fires. Reversing plays
//! the same motion backward: last child first, with the ease mirrored.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::hash::Hash;

use crate::consts::{REVEAL_DURATION, REVEAL_OFFSET_Y, REVEAL_STAGGER};
use crate::ease::{Curve, Ease};
use crate::props::{Prop, Props};
use crate::scroll::RevealAction;
use crate::timeline::{Position, Timeline};
use crate::tween::Tween;

const REVEAL_EASE: Ease = Ease::Power(2, Curve::Out);

/// State every child is put in before the container first triggers.
#[must_use]
pub fn hidden_props() -> Props {
    Props::new().with(Prop::Y, REVEAL_OFFSET_Y).with(Prop::AutoAlpha, 0.0)
}

fn shown_props() -> Props {
    Props::new().with(Prop::Y, 0.0).with(Prop::AutoAlpha, 1.0)
}

#[must_use]
pub fn reveal_timeline<K: Copy + Eq + Hash, C>(children: &[K], action: RevealAction) -> Timeline<K, C> {
    let (to, ease) = match action {
        RevealAction::Play => (shown_props(), REVEAL_EASE),
        RevealAction::Reverse => (hidden_props(), REVEAL_EASE.reversed()),
    };
    let last = children.len().saturating_sub(1);
    children.iter().enumerate().fold(Timeline::new(), |tl, (i, child)| {
        let slot = match action {
            RevealAction::Play => i,
            RevealAction::Reverse => last - i,
        };
        #[allow(clippy::cast_precision_loss)]
        let at = REVEAL_STAGGER * slot as f64;
        tl.tween(*child, Tween::to(to.clone()).duration(REVEAL_DURATION).ease(ease), Position::At(at))
    })
}
