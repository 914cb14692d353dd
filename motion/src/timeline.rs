//! Positioned sequences of tweens and cues.
//!
//! A timeline is built up front, then handed to a [`Stage`] in one go with
//! [`Timeline::play`]. Each entry's start is resolved when it is added,
//! relative to the end of everything added before it, so a negative
//! [`Position::Offset`] makes a step start before the previous one ends.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

use std::hash::Hash;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::stage::Stage;
use crate::tween::Tween;

/// Where an entry starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    /// At the current end of the timeline.
    Next,
    /// Relative to the current end; negative values overlap.
    Offset(f64),
    /// At an absolute time from the timeline's start.
    At(f64),
}

/// Which target starts first in a staggered group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaggerFrom {
    #[default]
    Start,
    End,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Stagger {
    /// Delay between consecutive targets.
    pub each: f64,
    pub from: StaggerFrom,
}

impl Stagger {
    #[must_use]
    pub fn each(each: f64) -> Self {
        Self { each, from: StaggerFrom::Start }
    }

    #[must_use]
    pub fn from(mut self, from: StaggerFrom) -> Self {
        self.from = from;
        self
    }

    /// Start offset for each of `count` targets, indexed by target.
    pub fn offsets<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<f64> {
        let mut order: Vec<usize> = (0..count).collect();
        match self.from {
            StaggerFrom::Start => {}
            StaggerFrom::End => order.reverse(),
            StaggerFrom::Random => order.shuffle(rng),
        }
        let mut offsets = vec![0.0; count];
        for (slot, target) in order.into_iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let step = slot as f64;
            offsets[target] = step * self.each;
        }
        offsets
    }
}

enum Entry<K, C> {
    Tween { at: f64, target: K, tween: Tween },
    Cue { at: f64, payload: C },
}

pub struct Timeline<K, C> {
    entries: Vec<Entry<K, C>>,
    end: f64,
}

impl<K, C> Default for Timeline<K, C> {
    fn default() -> Self {
        Self { entries: Vec::new(), end: 0.0 }
    }
}

impl<K: Copy + Eq + Hash, C> Timeline<K, C> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total length, seconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.end
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn tween(self, target: K, tween: Tween, position: Position) -> Self {
        self.tween_all(&[target], tween, position)
    }

    /// The same tween on every target, all starting together.
    #[must_use]
    pub fn tween_all(self, targets: &[K], tween: Tween, position: Position) -> Self {
        let offsets = vec![0.0; targets.len()];
        self.group(targets, tween, &offsets, position)
    }

    /// The same tween on every target, offset per target by `stagger`.
    #[must_use]
    pub fn stagger<R: Rng + ?Sized>(
        self,
        targets: &[K],
        tween: Tween,
        stagger: Stagger,
        position: Position,
        rng: &mut R,
    ) -> Self {
        let offsets = stagger.offsets(targets.len(), rng);
        self.group(targets, tween, &offsets, position)
    }

    /// A zero-length entry whose payload is released when reached.
    #[must_use]
    pub fn cue(mut self, payload: C, position: Position) -> Self {
        let at = self.resolve(position);
        self.end = self.end.max(at);
        self.entries.push(Entry::Cue { at, payload });
        self
    }

    /// Schedule every entry on `stage`, starting at `now`. `on_complete`,
    /// if given, is cued at the end of the timeline.
    pub fn play(self, stage: &mut Stage<K, C>, now: f64, on_complete: Option<C>) {
        for entry in self.entries {
            match entry {
                Entry::Tween { at, target, mut tween } => {
                    tween.delay = at;
                    stage.animate(target, tween, now);
                }
                Entry::Cue { at, payload } => stage.cue(now + at, payload),
            }
        }
        if let Some(payload) = on_complete {
            stage.cue(now + self.end, payload);
        }
    }

    fn resolve(&self, position: Position) -> f64 {
        match position {
            Position::Next => self.end,
            Position::Offset(delta) => (self.end + delta).max(0.0),
            Position::At(at) => at.max(0.0),
        }
    }

    fn group(mut self, targets: &[K], tween: Tween, offsets: &[f64], position: Position) -> Self {
        let start = self.resolve(position) + tween.delay;
        let length = tween.total_duration().unwrap_or(tween.duration);
        // An empty group still occupies its slot, so later offsets stay put.
        self.end = self.end.max(start + length);
        for (target, offset) in targets.iter().zip(offsets) {
            let at = start + offset;
            self.end = self.end.max(at + length);
            let mut tween = tween.clone();
            tween.delay = 0.0;
            self.entries.push(Entry::Tween { at, target: *target, tween });
        }
        self
    }
}
