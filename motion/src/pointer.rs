//! Pointer-driven card tilt and magnetic buttons.
//!
//! Both effects are recomputed from scratch on every pointer move; the
//! stage's overwrite rule lets each new tween replace the one in flight.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use crate::consts::{
    MAGNETIC_DURATION, MAGNETIC_RESET_DURATION, MAGNETIC_STRENGTH, TILT_DURATION, TILT_MAX_DEG, TILT_PERSPECTIVE,
    TILT_RESET_DURATION,
};
use crate::ease::{Curve, DEFAULT_ELASTIC_AMPLITUDE, Ease};
use crate::props::{Prop, Props};
use crate::tween::Tween;
use crate::{Point, Rect};

/// Period of the overshoot when a magnetic button springs back.
const MAGNETIC_RESET_PERIOD: f64 = 0.3;

/// Card rotation for a pointer at `pointer` over a card at `card`.
///
/// The offset from the card's centre is normalized by the half extents, so
/// each axis peaks at [`TILT_MAX_DEG`] on the card's edge. Pointer below
/// centre tips the top edge away (negative `rotateX`); pointer right of
/// centre turns the card right (positive `rotateY`). A degenerate box
/// yields no rotation on that axis.
#[must_use]
pub fn tilt(card: Rect, pointer: Point) -> Props {
    let half_w = card.width / 2.0;
    let half_h = card.height / 2.0;
    let local_x = pointer.x - card.left;
    let local_y = pointer.y - card.top;
    let rotate_x = if half_h > 0.0 { ((local_y - half_h) / half_h) * -TILT_MAX_DEG } else { 0.0 };
    let rotate_y = if half_w > 0.0 { ((local_x - half_w) / half_w) * TILT_MAX_DEG } else { 0.0 };
    Props::new()
        .with(Prop::RotationX, rotate_x)
        .with(Prop::RotationY, rotate_y)
        .with(Prop::Perspective, TILT_PERSPECTIVE)
}

#[must_use]
pub fn tilt_tween(card: Rect, pointer: Point) -> Tween {
    Tween::to(tilt(card, pointer)).duration(TILT_DURATION).ease(Ease::Power(1, Curve::Out))
}

/// Back to flat when the pointer leaves.
#[must_use]
pub fn tilt_reset_tween() -> Tween {
    Tween::to(Props::new().with(Prop::RotationX, 0.0).with(Prop::RotationY, 0.0))
        .duration(TILT_RESET_DURATION)
        .ease(Ease::Power(2, Curve::Out))
}

/// Translation pulling a button toward the pointer: a fixed fraction of
/// the pointer's offset from the button's centre.
#[must_use]
pub fn magnetic_offset(button: Rect, pointer: Point) -> Point {
    let center = button.center();
    Point::new((pointer.x - center.x) * MAGNETIC_STRENGTH, (pointer.y - center.y) * MAGNETIC_STRENGTH)
}

#[must_use]
pub fn magnetic_tween(button: Rect, pointer: Point) -> Tween {
    let pull = magnetic_offset(button, pointer);
    Tween::to(Props::new().with(Prop::X, pull.x).with(Prop::Y, pull.y))
        .duration(MAGNETIC_DURATION)
        .ease(Ease::Power(2, Curve::Out))
}

/// Spring back to the origin with an elastic overshoot.
#[must_use]
pub fn magnetic_reset_tween() -> Tween {
    Tween::to(Props::new().with(Prop::X, 0.0).with(Prop::Y, 0.0))
        .duration(MAGNETIC_RESET_DURATION)
        .ease(Ease::Elastic { amplitude: DEFAULT_ELASTIC_AMPLITUDE, period: MAGNETIC_RESET_PERIOD })
}
