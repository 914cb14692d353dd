//! Easing curves.
//!
//! Names follow the convention the site's motion design is written in:
//! `power1`..`power4` with `.in`, `.out` or `.inOut`, `sine.*`, and
//! `elastic.out(amplitude, period)`. `powerN` uses exponent `N + 1`, so
//! `power1` is quadratic and `power4` quintic.

#[cfg(test)]
#[path = "ease_test.rs"]
mod ease_test;

use std::f64::consts::{PI, TAU};
use std::str::FromStr;

/// Which end of the curve the easing applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    In,
    Out,
    InOut,
}

impl Curve {
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::In => Self::Out,
            Self::Out => Self::In,
            Self::InOut => Self::InOut,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    /// Linear.
    None,
    /// Polynomial ease with exponent `degree + 1`. `degree` is 1..=4.
    Power(u8, Curve),
    Sine(Curve),
    /// Overshooting spring, out only.
    Elastic { amplitude: f64, period: f64 },
}

pub const DEFAULT_ELASTIC_AMPLITUDE: f64 = 1.0;
pub const DEFAULT_ELASTIC_PERIOD: f64 = 0.3;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EaseParseError {
    #[error("unknown ease family: {0}")]
    UnknownFamily(String),
    #[error("unknown ease curve: {0}")]
    UnknownCurve(String),
    #[error("power degree out of range: {0}")]
    PowerDegree(String),
    #[error("invalid ease arguments: {0}")]
    Arguments(String),
}

impl Ease {
    /// Map linear progress `t` onto the curve. `t` is clamped to `[0, 1]`
    /// and both endpoints are returned exactly.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Self::None => t,
            Self::Power(degree, curve) => {
                let exp = i32::from(degree.clamp(1, 4)) + 1;
                shape(curve, t, |p| p.powi(exp))
            }
            Self::Sine(curve) => shape(curve, t, |p| 1.0 - ((p * PI) / 2.0).cos()),
            Self::Elastic { amplitude, period } => elastic_out(amplitude, period, t),
        }
    }

    /// The ease that traces this one backward in time.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Power(degree, curve) => Self::Power(degree, curve.reversed()),
            Self::Sine(curve) => Self::Sine(curve.reversed()),
            other => other,
        }
    }
}

/// Build `out` and `inOut` variants from an `in` curve.
fn shape(curve: Curve, t: f64, ease_in: impl Fn(f64) -> f64) -> f64 {
    match curve {
        Curve::In => ease_in(t),
        Curve::Out => 1.0 - ease_in(1.0 - t),
        Curve::InOut => {
            if t < 0.5 {
                ease_in(t * 2.0) / 2.0
            } else {
                1.0 - ease_in((1.0 - t) * 2.0) / 2.0
            }
        }
    }
}

fn elastic_out(amplitude: f64, period: f64, t: f64) -> f64 {
    let amp = amplitude.max(1.0);
    let cycle = period / amplitude.min(1.0);
    let phase = cycle / TAU * (1.0 / amp).asin();
    let freq = TAU / cycle;
    amp * 2f64.powf(-10.0 * t) * ((t - phase) * freq).sin() + 1.0
}

impl FromStr for Ease {
    type Err = EaseParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (head, args) = match s.find('(') {
            Some(open) => {
                let close = s.rfind(')').ok_or_else(|| EaseParseError::Arguments(s.to_string()))?;
                (&s[..open], Some(&s[open + 1..close]))
            }
            None => (s, None),
        };
        if head == "none" || head == "linear" {
            return Ok(Self::None);
        }

        let (family, curve) = head.split_once('.').unwrap_or((head, "out"));
        let curve = match curve {
            "in" => Curve::In,
            "out" => Curve::Out,
            "inOut" => Curve::InOut,
            other => return Err(EaseParseError::UnknownCurve(other.to_string())),
        };

        if let Some(degree) = family.strip_prefix("power") {
            let degree = degree
                .parse::<u8>()
                .map_err(|_| EaseParseError::PowerDegree(degree.to_string()))?;
            if !(1..=4).contains(&degree) {
                return Err(EaseParseError::PowerDegree(degree.to_string()));
            }
            return Ok(Self::Power(degree, curve));
        }

        match family {
            "sine" => Ok(Self::Sine(curve)),
            "elastic" if curve == Curve::Out => {
                let (amplitude, period) = parse_elastic_args(args)?;
                Ok(Self::Elastic { amplitude, period })
            }
            "elastic" => Err(EaseParseError::UnknownCurve(head.to_string())),
            other => Err(EaseParseError::UnknownFamily(other.to_string())),
        }
    }
}

fn parse_elastic_args(args: Option<&str>) -> Result<(f64, f64), EaseParseError> {
    let Some(args) = args else {
        return Ok((DEFAULT_ELASTIC_AMPLITUDE, DEFAULT_ELASTIC_PERIOD));
    };
    let mut values = args.split(',').map(str::trim).filter(|a| !a.is_empty()).map(|a| {
        a.parse::<f64>()
            .map_err(|_| EaseParseError::Arguments(args.to_string()))
    });
    let amplitude = values.next().transpose()?.unwrap_or(DEFAULT_ELASTIC_AMPLITUDE);
    let period = values.next().transpose()?.unwrap_or(DEFAULT_ELASTIC_PERIOD);
    if values.next().is_some() || amplitude <= 0.0 || period <= 0.0 {
        return Err(EaseParseError::Arguments(args.to_string()));
    }
    Ok((amplitude, period))
}
