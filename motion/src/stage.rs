//! Running tweens and timed cues for a set of targets.
//!
//! DESIGN
//! ======
//! The stage is the animation engine core. It knows nothing about the DOM:
//! targets are opaque keys chosen by the host, cues are opaque payloads the
//! host dispatches. The host calls [`Stage::tick`] once per animation frame
//! with its clock and writes the returned [`Update`]s.
//!
//! OVERWRITE
//! =========
//! When a tween renders for the first time it takes ownership of its
//! channels on that target: the same channels are stripped from every older
//! tween on the target, whether it is already playing or still waiting out
//! its delay. Re-triggering an effect therefore overrides the one in flight
//! instead of fighting it frame by frame.

#[cfg(test)]
#[path = "stage_test.rs"]
mod stage_test;

use std::collections::HashMap;
use std::hash::Hash;

use crate::props::{Prop, Props};
use crate::tween::Tween;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TweenId(u64);

/// New values for one target: the full set of channels it currently has.
#[derive(Debug, Clone, PartialEq)]
pub struct Update<K> {
    pub target: K,
    pub props: Props,
}

/// Everything that happened during one [`Stage::tick`].
#[derive(Debug)]
pub struct Tick<K, C> {
    pub updates: Vec<Update<K>>,
    /// Cues that came due, in time order.
    pub cues: Vec<C>,
    pub finished: Vec<TweenId>,
}

struct Running<K> {
    id: TweenId,
    target: K,
    tween: Tween,
    started_at: f64,
    /// Resolved start values, set on first render.
    from: Option<Props>,
}

struct PendingCue<C> {
    at: f64,
    seq: u64,
    payload: C,
}

pub struct Stage<K, C> {
    values: HashMap<K, Props>,
    running: Vec<Running<K>>,
    cues: Vec<PendingCue<C>>,
    dirty: Vec<K>,
    next_id: u64,
}

impl<K, C> Default for Stage<K, C> {
    fn default() -> Self {
        Self { values: HashMap::new(), running: Vec::new(), cues: Vec::new(), dirty: Vec::new(), next_id: 0 }
    }
}

impl<K: Copy + Eq + Hash, C> Stage<K, C> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `tween` on `target` at time `now`. Explicit start values are
    /// written immediately so the element never shows its unstyled state
    /// while the tween waits out its delay.
    pub fn animate(&mut self, target: K, tween: Tween, now: f64) -> TweenId {
        if let Some(from) = &tween.from {
            write(&mut self.values, &mut self.dirty, target, from);
        }
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.running.push(Running { id, target, tween, started_at: now, from: None });
        id
    }

    /// Write `props` immediately, cancelling any tween currently driving
    /// those channels on `target`. Tweens still waiting out their delay are
    /// left alone.
    pub fn set(&mut self, target: K, props: &Props) {
        for running in self.running.iter_mut().filter(|r| r.target == target && r.from.is_some()) {
            for prop in props.keys() {
                running.tween.to.remove(prop);
            }
        }
        self.running.retain(|r| !r.tween.to.is_empty());
        write(&mut self.values, &mut self.dirty, target, props);
    }

    /// Release `payload` from the first tick at or after `at`.
    pub fn cue(&mut self, at: f64, payload: C) {
        let seq = self.next_id;
        self.next_id += 1;
        self.cues.push(PendingCue { at, seq, payload });
    }

    /// Drop every tween on `target`, leaving its current values in place.
    pub fn kill(&mut self, target: K) {
        self.running.retain(|r| r.target != target);
    }

    #[must_use]
    pub fn is_animating(&self, target: K) -> bool {
        self.running.iter().any(|r| r.target == target)
    }

    #[must_use]
    pub fn props(&self, target: K) -> Option<&Props> {
        self.values.get(&target)
    }

    #[must_use]
    pub fn value(&self, target: K, prop: Prop) -> Option<f64> {
        self.values.get(&target).and_then(|p| p.get(prop))
    }

    /// Whether anything is left to do: running tweens or pending cues.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.running.is_empty() && self.cues.is_empty() && self.dirty.is_empty()
    }

    /// Advance every tween to `now` and collect what changed.
    pub fn tick(&mut self, now: f64) -> Tick<K, C> {
        self.activate(now);

        let Self { values, running, dirty, .. } = self;
        let mut finished = Vec::new();
        for r in running.iter() {
            let Some(from) = &r.from else {
                continue;
            };
            let (fraction, done) = r.tween.progress(now - r.started_at);
            write(values, dirty, r.target, &Props::lerp(from, &r.tween.to, fraction));
            if done {
                finished.push(r.id);
            }
        }
        running.retain(|r| !finished.contains(&r.id) && !r.tween.to.is_empty());

        let updates = std::mem::take(dirty)
            .into_iter()
            .map(|target| Update { target, props: values.get(&target).cloned().unwrap_or_default() })
            .collect();

        Tick { updates, cues: self.take_due_cues(now), finished }
    }

    /// Resolve start values for tweens whose delay has elapsed and apply
    /// the overwrite rule.
    fn activate(&mut self, now: f64) {
        for j in 0..self.running.len() {
            let due = {
                let r = &self.running[j];
                r.from.is_none() && now - r.started_at >= r.tween.delay
            };
            if !due {
                continue;
            }

            let target = self.running[j].target;
            let owned: Vec<Prop> = self.running[j].tween.to.keys().collect();
            // Older tweens still waiting out their delay lose the channels
            // too, or they would start later and undo this one.
            for older in self.running[..j].iter_mut().filter(|r| r.target == target) {
                for prop in &owned {
                    older.tween.to.remove(*prop);
                }
            }

            let current = self.values.get(&target).cloned().unwrap_or_default();
            let r = &mut self.running[j];
            r.from = Some(r.tween.from.clone().unwrap_or_else(|| current.project(&r.tween.to)));
        }
    }

    fn take_due_cues(&mut self, now: f64) -> Vec<C> {
        let (mut due, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut self.cues).into_iter().partition(|c| c.at <= now);
        self.cues = rest;
        due.sort_by(|a, b| a.at.total_cmp(&b.at).then(a.seq.cmp(&b.seq)));
        due.into_iter().map(|c| c.payload).collect()
    }
}

fn write<K: Copy + Eq + Hash>(values: &mut HashMap<K, Props>, dirty: &mut Vec<K>, target: K, props: &Props) {
    values.entry(target).or_default().merge(props);
    if !dirty.contains(&target) {
        dirty.push(target);
    }
}
