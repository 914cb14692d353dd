#![allow(clippy::float_cmp)]

use super::*;
use crate::stage::Stage;

fn rotator() -> PhraseRotator {
    PhraseRotator::new(DEFAULT_PHRASES)
}

// --- Rotator ---

#[test]
fn begin_targets_next_phrase() {
    let mut r = rotator();
    assert_eq!(r.begin(), Some(PhraseTransition { outgoing: 0, incoming: 1 }));
    assert!(r.is_transitioning());
    assert_eq!(r.active(), 0);
}

#[test]
fn tick_during_transition_is_dropped() {
    let mut r = rotator();
    r.begin();
    assert_eq!(r.begin(), None);
    assert_eq!(r.active(), 0);
    assert_eq!(r.finish(), 1);
    assert!(!r.is_transitioning());
}

#[test]
fn full_cycle_wraps_to_start() {
    let mut r = rotator();
    let mut seen = Vec::new();
    for _ in 0..DEFAULT_PHRASES.len() {
        let step = r.begin().unwrap();
        seen.push(step.incoming);
        r.finish();
    }
    assert_eq!(seen, vec![1, 2, 3, 4, 0]);
    assert_eq!(r.active(), 0);
}

#[test]
fn finish_without_begin_keeps_index() {
    let mut r = rotator();
    assert_eq!(r.finish(), 0);
}

#[test]
fn fewer_than_two_phrases_never_rotate() {
    let mut single = PhraseRotator::new(["Only"]);
    assert_eq!(single.begin(), None);
    let mut empty = PhraseRotator::new(Vec::<String>::new());
    assert_eq!(empty.begin(), None);
    assert_eq!(empty.longest(), None);
}

#[test]
fn longest_prefers_later_on_tie() {
    assert_eq!(rotator().longest(), Some("Electrical Switchgear"));
    let tie = PhraseRotator::new(["abcd", "wxyz", "ab"]);
    assert_eq!(tie.longest(), Some("wxyz"));
}

// --- Motion ---

#[test]
fn entrance_lands_on_shown_state() {
    let mut stage: Stage<usize, ()> = Stage::new();
    stage.set(1, &hidden_props());
    stage.animate(1, entrance_tween(), 0.0);
    stage.tick(0.0);
    stage.tick(5.0);
    assert_eq!(stage.value(1, Prop::Opacity), Some(1.0));
    assert_eq!(stage.value(1, Prop::Blur), Some(0.0));
    assert_eq!(stage.value(1, Prop::Scale), Some(1.0));
}

#[test]
fn cross_fade_overlaps_and_parks_outgoing() {
    let tl: Timeline<usize, &str> = cross_fade(0, 1);
    assert!((tl.duration() - (2.0 * PHRASE_DURATION - PHRASE_OVERLAP)).abs() < 1e-9);

    let mut stage: Stage<usize, &str> = Stage::new();
    stage.set(0, &shown_props());
    stage.set(1, &hidden_props());
    tl.play(&mut stage, 0.0, Some("done"));

    stage.tick(0.5);
    // Incoming has started, outgoing has not finished yet.
    assert!(stage.value(1, Prop::Opacity).unwrap() > 0.0);
    assert!(stage.value(0, Prop::Opacity).unwrap() > 0.0);

    stage.tick(0.8);
    assert_eq!(stage.value(0, Prop::Y), Some(PHRASE_OFFSET_Y));
    assert_eq!(stage.value(0, Prop::Scale), Some(PHRASE_ENTER_SCALE));
    assert_eq!(stage.value(0, Prop::Opacity), Some(0.0));

    let tick = stage.tick(1.1);
    assert_eq!(tick.cues, vec!["done"]);
    assert_eq!(stage.value(1, Prop::Opacity), Some(1.0));
    assert_eq!(stage.value(1, Prop::Y), Some(0.0));
}
