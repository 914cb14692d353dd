#![allow(clippy::float_cmp)]

use super::*;
use crate::ease::Ease;
use crate::tween::Repeat;

type TestStage = Stage<u32, &'static str>;

fn x(value: f64) -> Props {
    Props::new().with(Prop::X, value)
}

fn linear_to(props: Props, duration: f64) -> Tween {
    Tween::to(props).duration(duration).ease(Ease::None)
}

fn update_for<'a>(tick: &'a Tick<u32, &'static str>, target: u32) -> Option<&'a Props> {
    tick.updates.iter().find(|u| u.target == target).map(|u| &u.props)
}

// --- Basic interpolation ---

#[test]
fn to_tween_starts_from_rest_value() {
    let mut stage = TestStage::new();
    stage.animate(1, linear_to(x(10.0), 1.0), 0.0);
    let tick = stage.tick(0.5);
    assert_eq!(update_for(&tick, 1).unwrap().get(Prop::X), Some(5.0));
}

#[test]
fn to_tween_starts_from_current_value() {
    let mut stage = TestStage::new();
    stage.set(1, &x(4.0));
    stage.animate(1, linear_to(x(8.0), 1.0), 0.0);
    let tick = stage.tick(0.5);
    assert_eq!(update_for(&tick, 1).unwrap().get(Prop::X), Some(6.0));
}

#[test]
fn start_values_are_captured_when_delay_elapses() {
    let mut stage = TestStage::new();
    stage.animate(1, linear_to(x(10.0), 1.0).delay(1.0), 0.0);
    stage.set(1, &x(2.0));
    stage.tick(0.5);
    let tick = stage.tick(1.5);
    assert_eq!(update_for(&tick, 1).unwrap().get(Prop::X), Some(6.0));
}

#[test]
fn finished_tween_lands_on_end_value_and_is_reported() {
    let mut stage = TestStage::new();
    let id = stage.animate(1, linear_to(x(10.0), 1.0), 0.0);
    let tick = stage.tick(3.0);
    assert_eq!(update_for(&tick, 1).unwrap().get(Prop::X), Some(10.0));
    assert_eq!(tick.finished, vec![id]);
    assert!(!stage.is_animating(1));
    assert_eq!(stage.value(1, Prop::X), Some(10.0));
}

#[test]
fn updates_carry_full_props_of_target() {
    let mut stage = TestStage::new();
    stage.set(1, &Props::new().with(Prop::Scale, 2.0));
    stage.animate(1, linear_to(x(10.0), 1.0), 0.0);
    let tick = stage.tick(1.0);
    let props = update_for(&tick, 1).unwrap();
    assert_eq!(props.get(Prop::Scale), Some(2.0));
    assert_eq!(props.get(Prop::X), Some(10.0));
}

#[test]
fn one_update_per_target_per_tick() {
    let mut stage = TestStage::new();
    stage.animate(1, linear_to(x(10.0), 1.0), 0.0);
    stage.animate(1, linear_to(Props::new().with(Prop::Y, 10.0), 1.0), 0.0);
    let tick = stage.tick(0.5);
    assert_eq!(tick.updates.len(), 1);
}

#[test]
fn from_values_render_immediately() {
    let mut stage = TestStage::new();
    let tween = Tween::from_to(Props::new().with(Prop::Opacity, 0.0), Props::new().with(Prop::Opacity, 1.0)).delay(2.0);
    stage.animate(7, tween, 0.0);
    let tick = stage.tick(0.0);
    assert_eq!(update_for(&tick, 7).unwrap().get(Prop::Opacity), Some(0.0));
}

#[test]
fn idle_tick_has_no_updates() {
    let mut stage = TestStage::new();
    stage.set(1, &x(1.0));
    stage.tick(0.0);
    assert!(stage.is_idle());
    assert!(stage.tick(1.0).updates.is_empty());
}

// --- Overwrite ---

#[test]
fn newer_tween_overrides_overlapping_channels() {
    let mut stage = TestStage::new();
    stage.animate(1, linear_to(x(100.0), 1.0), 0.0);
    stage.tick(0.5);
    stage.animate(1, linear_to(x(0.0), 1.0), 0.5);
    stage.tick(0.5);
    let tick = stage.tick(1.0);
    // New tween started at 50 and is halfway back to 0.
    assert_eq!(update_for(&tick, 1).unwrap().get(Prop::X), Some(25.0));
    let tick = stage.tick(1.5);
    assert_eq!(update_for(&tick, 1).unwrap().get(Prop::X), Some(0.0));
}

#[test]
fn overwrite_leaves_other_channels_running() {
    let mut stage = TestStage::new();
    stage.animate(1, linear_to(Props::new().with(Prop::X, 10.0).with(Prop::Y, 10.0), 1.0), 0.0);
    stage.tick(0.0);
    stage.animate(1, linear_to(x(0.0), 1.0), 0.0);
    let tick = stage.tick(0.5);
    let props = update_for(&tick, 1).unwrap();
    assert_eq!(props.get(Prop::Y), Some(5.0));
    assert_eq!(props.get(Prop::X), Some(0.0));
}

#[test]
fn delayed_tween_does_not_overwrite_before_it_starts() {
    let mut stage = TestStage::new();
    stage.animate(1, linear_to(x(10.0), 1.0), 0.0);
    stage.animate(1, Tween::set(x(-5.0)).delay(1.0), 0.0);
    let tick = stage.tick(0.5);
    assert_eq!(update_for(&tick, 1).unwrap().get(Prop::X), Some(5.0));
    let tick = stage.tick(1.0);
    assert_eq!(update_for(&tick, 1).unwrap().get(Prop::X), Some(-5.0));
}

#[test]
fn set_cancels_running_channels() {
    let mut stage = TestStage::new();
    stage.animate(1, linear_to(x(10.0), 1.0), 0.0);
    stage.tick(0.0);
    stage.set(1, &x(3.0));
    assert!(!stage.is_animating(1));
    let tick = stage.tick(0.5);
    assert_eq!(update_for(&tick, 1).unwrap().get(Prop::X), Some(3.0));
}

#[test]
fn kill_stops_target_only() {
    let mut stage = TestStage::new();
    stage.animate(1, linear_to(x(10.0), 1.0), 0.0);
    stage.animate(2, linear_to(x(10.0), 1.0), 0.0);
    stage.kill(1);
    assert!(!stage.is_animating(1));
    assert!(stage.is_animating(2));
}

// --- Repeat ---

#[test]
fn forever_tween_keeps_running() {
    let mut stage = TestStage::new();
    stage.animate(1, linear_to(x(10.0), 1.0).repeat(Repeat::Forever).yoyo(true), 0.0);
    let tick = stage.tick(1.5);
    assert_eq!(update_for(&tick, 1).unwrap().get(Prop::X), Some(5.0));
    assert!(stage.is_animating(1));
}

// --- Cues ---

#[test]
fn cues_fire_once_in_time_order() {
    let mut stage = TestStage::new();
    stage.cue(2.0, "late");
    stage.cue(1.0, "early");
    stage.cue(1.0, "early-second");
    assert!(stage.tick(0.5).cues.is_empty());
    assert_eq!(stage.tick(2.0).cues, vec!["early", "early-second", "late"]);
    assert!(stage.tick(3.0).cues.is_empty());
    assert!(stage.is_idle());
}

#[test]
fn newer_tween_cancels_older_delayed_tween() {
    let mut stage = TestStage::new();
    stage.animate(1, linear_to(x(10.0), 1.0).delay(0.5), 0.0);
    stage.animate(1, linear_to(x(-10.0), 1.0), 0.1);
    stage.tick(0.1);
    assert!(stage.tick(0.6).updates.iter().all(|u| u.props.get(Prop::X) < Some(0.0)));
    stage.tick(3.0);
    assert_eq!(stage.value(1, Prop::X), Some(-10.0));
    assert!(!stage.is_animating(1));
}
