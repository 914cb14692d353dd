//! Animatable channels and the property bags tweens interpolate between.

#[cfg(test)]
#[path = "props_test.rs"]
mod props_test;

/// A single animatable channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Prop {
    /// Horizontal translation, px.
    X,
    /// Vertical translation, px.
    Y,
    /// Horizontal translation as a percentage of the element's own width.
    XPercent,
    /// Vertical translation as a percentage of the element's own height.
    YPercent,
    Scale,
    /// Rotation about the horizontal axis, degrees.
    RotationX,
    /// Rotation about the vertical axis, degrees.
    RotationY,
    /// Perspective distance for 3D rotations, px. Zero means none.
    Perspective,
    Opacity,
    /// Opacity that also toggles `visibility: hidden` at zero.
    AutoAlpha,
    /// Gaussian blur radius, px.
    Blur,
    /// Unstyled accumulator, e.g. the number a counter is showing.
    Value,
}

impl Prop {
    /// Value of the channel on an element no tween has touched.
    #[must_use]
    pub fn rest_value(self) -> f64 {
        match self {
            Self::Scale | Self::Opacity | Self::AutoAlpha => 1.0,
            _ => 0.0,
        }
    }
}

/// Ordered map of channel to value. Channel count is tiny, so a sorted
/// vector beats a hash map here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Props {
    entries: Vec<(Prop, f64)>,
}

impl Props {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Props::set`].
    #[must_use]
    pub fn with(mut self, prop: Prop, value: f64) -> Self {
        self.set(prop, value);
        self
    }

    pub fn set(&mut self, prop: Prop, value: f64) {
        match self.entries.binary_search_by(|(p, _)| p.cmp(&prop)) {
            Ok(i) => self.entries[i].1 = value,
            Err(i) => self.entries.insert(i, (prop, value)),
        }
    }

    #[must_use]
    pub fn get(&self, prop: Prop) -> Option<f64> {
        match self.entries.binary_search_by(|(p, _)| p.cmp(&prop)) {
            Ok(i) => Some(self.entries[i].1),
            Err(_) => None,
        }
    }

    /// Value of `prop`, falling back to its rest value.
    #[must_use]
    pub fn get_or_rest(&self, prop: Prop) -> f64 {
        self.get(prop).unwrap_or_else(|| prop.rest_value())
    }

    pub fn remove(&mut self, prop: Prop) {
        self.entries.retain(|(p, _)| *p != prop);
    }

    #[must_use]
    pub fn contains(&self, prop: Prop) -> bool {
        self.get(prop).is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = Prop> + '_ {
        self.entries.iter().map(|(p, _)| *p)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Prop, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Overlay every entry of `other` onto `self`.
    pub fn merge(&mut self, other: &Props) {
        for (prop, value) in other.iter() {
            self.set(prop, value);
        }
    }

    /// Values of `self` for exactly the channels present in `shape`,
    /// using rest values where `self` has none.
    #[must_use]
    pub fn project(&self, shape: &Props) -> Props {
        let mut out = Props::new();
        for prop in shape.keys() {
            out.set(prop, self.get_or_rest(prop));
        }
        out
    }

    /// Interpolate every channel of `to`, reading the start from `from`
    /// (rest value when missing). `t` is not clamped so overshooting eases
    /// carry through. Both endpoints are reproduced exactly.
    #[must_use]
    pub fn lerp(from: &Props, to: &Props, t: f64) -> Props {
        let mut out = Props::new();
        for (prop, end) in to.iter() {
            let start = from.get_or_rest(prop);
            out.set(prop, (1.0 - t) * start + t * end);
        }
        out
    }
}

impl FromIterator<(Prop, f64)> for Props {
    fn from_iter<I: IntoIterator<Item = (Prop, f64)>>(iter: I) -> Self {
        let mut out = Props::new();
        for (prop, value) in iter {
            out.set(prop, value);
        }
        out
    }
}
