#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;
use crate::ease::Ease;
use crate::props::{Prop, Props};

fn fade(duration: f64) -> Tween {
    Tween::to(Props::new().with(Prop::Opacity, 0.0)).duration(duration).ease(Ease::None)
}

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(7)
}

// --- Positions ---

#[test]
fn sequential_entries_chain() {
    let tl: Timeline<u32, ()> = Timeline::new()
        .tween(1, fade(0.5), Position::Next)
        .tween(2, fade(0.25), Position::Next);
    assert!((tl.duration() - 0.75).abs() < 1e-9);
}

#[test]
fn negative_offset_overlaps_previous() {
    let tl: Timeline<u32, ()> = Timeline::new()
        .tween(1, fade(0.35), Position::Next)
        .tween(2, fade(0.45), Position::Offset(-0.2));
    assert!((tl.duration() - 0.6).abs() < 1e-9);
}

#[test]
fn offset_never_goes_before_zero() {
    let tl: Timeline<u32, ()> = Timeline::new().tween(1, fade(0.5), Position::Offset(-3.0));
    assert_eq!(tl.duration(), 0.5);
}

#[test]
fn absolute_position() {
    let tl: Timeline<u32, ()> = Timeline::new().tween(1, fade(0.5), Position::At(2.0));
    assert_eq!(tl.duration(), 2.5);
}

#[test]
fn tween_delay_shifts_start() {
    let tl: Timeline<u32, ()> = Timeline::new()
        .tween(1, fade(0.4).delay(0.05), Position::Next)
        .tween(2, fade(0.5).delay(0.1), Position::Next);
    assert!((tl.duration() - 1.05).abs() < 1e-9);
}

#[test]
fn cue_does_not_extend_past_end() {
    let tl: Timeline<u32, &str> = Timeline::new()
        .tween(1, fade(1.0), Position::Next)
        .cue("mid", Position::Offset(-0.5));
    assert_eq!(tl.duration(), 1.0);
}

#[test]
fn empty_group_still_takes_its_slot() {
    let tl: Timeline<u32, ()> = Timeline::new().tween_all(&[], fade(0.3), Position::Next);
    assert!(tl.is_empty());
    assert_eq!(tl.duration(), 0.3);
}

// --- Stagger ---

#[test]
fn stagger_offsets_from_start_and_end() {
    let mut rng = rng();
    assert_eq!(Stagger::each(0.1).offsets(3, &mut rng), vec![0.0, 0.1, 0.2]);
    let reversed = Stagger::each(0.1).from(StaggerFrom::End).offsets(3, &mut rng);
    assert_eq!(reversed, vec![0.2, 0.1, 0.0]);
}

#[test]
fn random_stagger_is_a_permutation() {
    let mut rng = rng();
    let mut offsets = Stagger::each(1.0).from(StaggerFrom::Random).offsets(6, &mut rng);
    offsets.sort_by(f64::total_cmp);
    assert_eq!(offsets, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
}

#[test]
fn stagger_group_duration_includes_last_target() {
    let mut rng = rng();
    let tl: Timeline<u32, ()> =
        Timeline::new().stagger(&[1, 2, 3], fade(0.8), Stagger::each(0.1), Position::Next, &mut rng);
    assert!((tl.duration() - 1.0).abs() < 1e-9);
}

// --- Play ---

#[test]
fn play_schedules_tweens_and_cues_on_stage() {
    let mut stage: Stage<u32, &str> = Stage::new();
    Timeline::new()
        .tween(1, fade(1.0), Position::Next)
        .cue("halfway", Position::At(0.5))
        .tween(2, fade(1.0), Position::Next)
        .play(&mut stage, 10.0, Some("done"));

    let tick = stage.tick(10.5);
    assert_eq!(tick.cues, vec!["halfway"]);
    assert_eq!(stage.value(1, Prop::Opacity), Some(0.5));
    assert_eq!(stage.value(2, Prop::Opacity), None);

    let tick = stage.tick(11.5);
    assert_eq!(stage.value(1, Prop::Opacity), Some(0.0));
    assert_eq!(stage.value(2, Prop::Opacity), Some(0.5));
    assert!(tick.cues.is_empty());

    let tick = stage.tick(12.0);
    assert_eq!(tick.cues, vec!["done"]);
    assert!(stage.is_idle());
}

#[test]
fn play_renders_explicit_start_values_immediately() {
    let mut stage: Stage<u32, ()> = Stage::new();
    let tween = Tween::from_to(Props::new().with(Prop::Scale, 0.0), Props::new().with(Prop::Scale, 1.0));
    Timeline::new().tween(4, tween, Position::At(5.0)).play(&mut stage, 0.0, None);
    assert_eq!(stage.value(4, Prop::Scale), Some(0.0));
}
