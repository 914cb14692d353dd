//! Preloader, hero entrance and particle drift.
//!
//! DESIGN
//! ======
//! Two timelines run back to back. The preloader timeline raises the
//! loading label and slides the panel away; its completion cue is what
//! starts the hero timeline. Pages without a preloader start the hero
//! timeline straight away. Either path goes through [`HeroGate`], so the
//! hero entrance plays at most once no matter how it was reached.
//!
//! Particle drift is independent of both: every particle gets its own
//! endless yoyo tween with randomized range and period.

#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

use std::hash::Hash;

use rand::Rng;

use crate::consts::{
    DRIFT_MAX_DURATION, DRIFT_MIN_DURATION, DRIFT_PHASE_STEP, DRIFT_X_RANGE, DRIFT_Y_RANGE, HERO_BUTTONS_DURATION,
    HERO_BUTTONS_OVERLAP, HERO_OFFSET_Y, HERO_PARTICLES_DURATION, HERO_PARTICLES_ELASTIC_PERIOD,
    HERO_PARTICLES_OVERLAP, HERO_PARTICLES_STAGGER, HERO_SHIMMER_OVERLAP, HERO_SUBTITLE_DURATION,
    HERO_SUBTITLE_OVERLAP, HERO_TAG_DURATION, HERO_TITLE_DURATION, HERO_TITLE_OVERLAP, PRELOADER_EXIT_DELAY,
    PRELOADER_EXIT_DURATION, PRELOADER_TEXT_DELAY, PRELOADER_TEXT_DURATION, PRELOADER_TEXT_OFFSET_Y,
};
use crate::ease::{Curve, DEFAULT_ELASTIC_AMPLITUDE, Ease};
use crate::props::{Prop, Props};
use crate::timeline::{Position, Stagger, StaggerFrom, Timeline};
use crate::tween::{Repeat, Tween};

/// Elements taking part in the hero entrance. Missing parts keep their
/// slot in the sequence so the others stay on schedule.
#[derive(Debug, Clone)]
pub struct HeroParts<K> {
    pub tag: Option<K>,
    pub title: Option<K>,
    pub subtitle: Option<K>,
    pub buttons: Option<K>,
    pub particles: Vec<K>,
}

impl<K> Default for HeroParts<K> {
    fn default() -> Self {
        Self { tag: None, title: None, subtitle: None, buttons: None, particles: Vec::new() }
    }
}

/// Host callbacks the hero entrance fires along the way.
#[derive(Debug, Clone)]
pub struct HeroCues<C> {
    /// The tag has landed; the host marks it active.
    pub tag_landed: C,
    /// The headline shimmer may start.
    pub shimmer: C,
}

/// Lets the hero entrance through once.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeroGate {
    opened: bool,
}

impl HeroGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True the first time only.
    pub fn open(&mut self) -> bool {
        !std::mem::replace(&mut self.opened, true)
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.opened
    }
}

fn rise(offset: f64, duration: f64, ease: Ease) -> Tween {
    Tween::from_to(
        Props::new().with(Prop::Opacity, 0.0).with(Prop::Y, offset),
        Props::new().with(Prop::Opacity, 1.0).with(Prop::Y, 0.0),
    )
    .duration(duration)
    .ease(ease)
}

/// Label rises in, then the panel slides up out of view.
#[must_use]
pub fn preloader_timeline<K: Copy + Eq + Hash, C>(label: &[K], panel: K) -> Timeline<K, C> {
    Timeline::new()
        .tween_all(
            label,
            rise(PRELOADER_TEXT_OFFSET_Y, PRELOADER_TEXT_DURATION, Ease::Power(4, Curve::Out))
                .delay(PRELOADER_TEXT_DELAY),
            Position::Next,
        )
        .tween(
            panel,
            Tween::to(Props::new().with(Prop::YPercent, -100.0))
                .duration(PRELOADER_EXIT_DURATION)
                .ease(Ease::Power(4, Curve::InOut))
                .delay(PRELOADER_EXIT_DELAY),
            Position::Next,
        )
}

/// Ordered, overlapping hero entrance.
pub fn hero_timeline<K, C, R>(parts: &HeroParts<K>, cues: HeroCues<C>, rng: &mut R) -> Timeline<K, C>
where
    K: Copy + Eq + Hash,
    R: Rng + ?Sized,
{
    let power3 = Ease::Power(3, Curve::Out);
    let power2 = Ease::Power(2, Curve::Out);
    let particles = Tween::from_to(
        Props::new().with(Prop::Opacity, 0.0).with(Prop::Scale, 0.0),
        Props::new().with(Prop::Opacity, 1.0).with(Prop::Scale, 1.0),
    )
    .duration(HERO_PARTICLES_DURATION)
    .ease(Ease::Elastic { amplitude: DEFAULT_ELASTIC_AMPLITUDE, period: HERO_PARTICLES_ELASTIC_PERIOD });

    Timeline::new()
        .tween_all(parts.tag.as_slice(), rise(HERO_OFFSET_Y, HERO_TAG_DURATION, power3), Position::Next)
        .cue(cues.tag_landed, Position::Next)
        .tween_all(
            parts.title.as_slice(),
            rise(HERO_OFFSET_Y, HERO_TITLE_DURATION, power3),
            Position::Offset(HERO_TITLE_OVERLAP),
        )
        .cue(cues.shimmer, Position::Offset(HERO_SHIMMER_OVERLAP))
        .tween_all(
            parts.subtitle.as_slice(),
            rise(HERO_OFFSET_Y, HERO_SUBTITLE_DURATION, power2),
            Position::Offset(HERO_SUBTITLE_OVERLAP),
        )
        .tween_all(
            parts.buttons.as_slice(),
            rise(HERO_OFFSET_Y, HERO_BUTTONS_DURATION, power2),
            Position::Offset(HERO_BUTTONS_OVERLAP),
        )
        .stagger(
            &parts.particles,
            particles,
            Stagger::each(HERO_PARTICLES_STAGGER).from(StaggerFrom::Random),
            Position::Offset(HERO_PARTICLES_OVERLAP),
            rng,
        )
}

/// Endless drift for the particle at `index`.
pub fn drift_tween<R: Rng + ?Sized>(rng: &mut R, index: usize) -> Tween {
    let x = rng.random_range(-DRIFT_X_RANGE..=DRIFT_X_RANGE);
    let y = rng.random_range(-DRIFT_Y_RANGE..=DRIFT_Y_RANGE);
    let duration = rng.random_range(DRIFT_MIN_DURATION..=DRIFT_MAX_DURATION);
    #[allow(clippy::cast_precision_loss)]
    let delay = DRIFT_PHASE_STEP * index as f64;
    Tween::to(Props::new().with(Prop::X, x).with(Prop::Y, y))
        .duration(duration)
        .delay(delay)
        .ease(Ease::Sine(Curve::InOut))
        .repeat(Repeat::Forever)
        .yoyo(true)
}
