#![allow(clippy::float_cmp)]

use super::*;
use crate::props::Prop;

fn linear(duration: f64) -> Tween {
    Tween::to(Props::new().with(Prop::X, 10.0)).duration(duration).ease(Ease::None)
}

#[test]
fn builder_defaults() {
    let tween = Tween::to(Props::new());
    assert_eq!(tween.duration, DEFAULT_DURATION);
    assert_eq!(tween.delay, 0.0);
    assert_eq!(tween.ease, DEFAULT_EASE);
    assert_eq!(tween.repeat, Repeat::Never);
    assert!(tween.from.is_none());
}

#[test]
fn negative_duration_and_delay_clamp_to_zero() {
    let tween = linear(-1.0).delay(-2.0);
    assert_eq!(tween.duration, 0.0);
    assert_eq!(tween.delay, 0.0);
}

#[test]
fn from_to_keeps_start() {
    let tween = Tween::from_to(Props::new().with(Prop::X, 1.0), Props::new().with(Prop::X, 2.0));
    assert_eq!(tween.from.unwrap().get(Prop::X), Some(1.0));
}

#[test]
fn progress_waits_for_delay() {
    let tween = linear(1.0).delay(0.5);
    assert_eq!(tween.progress(0.25), (0.0, false));
    assert_eq!(tween.progress(1.0), (0.5, false));
}

#[test]
fn progress_finishes_at_duration() {
    let tween = linear(1.0);
    assert_eq!(tween.progress(1.0), (1.0, true));
    assert_eq!(tween.progress(5.0), (1.0, true));
}

#[test]
fn set_finishes_immediately() {
    let tween = Tween::set(Props::new().with(Prop::Y, 30.0));
    assert_eq!(tween.progress(0.0), (1.0, true));
}

#[test]
fn delayed_set_finishes_after_delay() {
    let tween = Tween::set(Props::new()).delay(0.8);
    assert!(!tween.progress(0.5).1);
    assert!(tween.progress(0.8).1);
}

#[test]
fn total_duration_by_repeat() {
    assert_eq!(linear(2.0).total_duration(), Some(2.0));
    assert_eq!(linear(2.0).repeat(Repeat::Times(2)).total_duration(), Some(6.0));
    assert_eq!(linear(2.0).repeat(Repeat::Forever).total_duration(), None);
}

#[test]
fn repeat_restarts_each_cycle() {
    let tween = linear(1.0).repeat(Repeat::Times(1));
    let (fraction, done) = tween.progress(1.25);
    assert!((fraction - 0.25).abs() < 1e-9);
    assert!(!done);
}

#[test]
fn yoyo_plays_odd_cycles_backward() {
    let tween = linear(1.0).repeat(Repeat::Forever).yoyo(true);
    let (forward, _) = tween.progress(0.25);
    let (backward, _) = tween.progress(1.25);
    assert!((forward - 0.25).abs() < 1e-9);
    assert!((backward - 0.75).abs() < 1e-9);
}

#[test]
fn forever_never_finishes() {
    let tween = linear(1.0).repeat(Repeat::Forever).yoyo(true);
    assert!(!tween.progress(10_000.5).1);
}

#[test]
fn yoyo_with_odd_repeats_ends_at_start() {
    let tween = linear(1.0).repeat(Repeat::Times(1)).yoyo(true);
    assert_eq!(tween.progress(2.0), (0.0, true));
}
