#![allow(clippy::float_cmp)]

use super::*;
use crate::stage::Stage;
use crate::style;

fn hidden_stage(children: &[u8]) -> Stage<u8, ()> {
    let mut stage = Stage::new();
    for child in children {
        stage.set(*child, &hidden_props());
    }
    stage.tick(0.0);
    stage
}

#[test]
fn hidden_children_are_not_visible() {
    let css = style::css(&hidden_props());
    assert!(css.contains(&("visibility", "hidden".to_string())));
}

#[test]
fn play_staggers_first_child_first() {
    let mut stage = hidden_stage(&[0, 1, 2]);
    reveal_timeline(&[0, 1, 2], RevealAction::Play).play(&mut stage, 0.0, None);
    stage.tick(0.05);
    assert!(stage.value(0, Prop::AutoAlpha).unwrap() > 0.0);
    assert_eq!(stage.value(2, Prop::AutoAlpha), Some(0.0));
}

#[test]
fn reverse_starts_from_last_child() {
    let tl: Timeline<u8, ()> = reveal_timeline(&[0, 1, 2], RevealAction::Reverse);
    assert!((tl.duration() - (2.0 * REVEAL_STAGGER + REVEAL_DURATION)).abs() < 1e-9);

    let mut stage: Stage<u8, ()> = Stage::new();
    tl.play(&mut stage, 0.0, None);
    stage.tick(0.05);
    assert!(stage.value(2, Prop::Y).unwrap() > 0.0);
    assert_eq!(stage.value(0, Prop::Y), None);
}

#[test]
fn play_then_reverse_then_play_is_reentrant() {
    let children = [0, 1];
    let mut stage = hidden_stage(&children);

    reveal_timeline(&children, RevealAction::Play).play(&mut stage, 0.0, None);
    stage.tick(0.0);
    stage.tick(2.0);
    assert_eq!(stage.value(1, Prop::AutoAlpha), Some(1.0));
    assert_eq!(stage.value(1, Prop::Y), Some(0.0));

    reveal_timeline(&children, RevealAction::Reverse).play(&mut stage, 2.0, None);
    stage.tick(2.0);
    stage.tick(4.0);
    assert_eq!(stage.value(0, Prop::AutoAlpha), Some(0.0));
    assert_eq!(stage.value(0, Prop::Y), Some(REVEAL_OFFSET_Y));

    reveal_timeline(&children, RevealAction::Play).play(&mut stage, 4.0, None);
    stage.tick(4.0);
    stage.tick(6.0);
    assert_eq!(stage.value(0, Prop::AutoAlpha), Some(1.0));
}

#[test]
fn empty_container_yields_empty_timeline() {
    let tl: Timeline<u8, ()> = reveal_timeline(&[], RevealAction::Play);
    assert!(tl.is_empty());
}

#[test]
fn reverse_during_staggered_play_hides_every_child() {
    let children = [0, 1, 2, 3, 4];
    let mut stage = hidden_stage(&children);

    reveal_timeline(&children, RevealAction::Play).play(&mut stage, 0.0, None);
    stage.tick(0.0);
    reveal_timeline(&children, RevealAction::Reverse).play(&mut stage, 0.05, None);

    let mut now = 0.05;
    while now < 3.0 {
        now += 1.0 / 60.0;
        stage.tick(now);
    }
    for child in children {
        assert_eq!(stage.value(child, Prop::AutoAlpha), Some(0.0), "child {child}");
        assert_eq!(stage.value(child, Prop::Y), Some(REVEAL_OFFSET_Y), "child {child}");
    }
    assert!(stage.is_idle());
}
