//! Animation engine and interaction state for the storefront site.
//!
//! This crate is compiled into the WebAssembly client but has no browser
//! dependency of its own. The host (the `client` crate) owns the DOM: it feeds
//! clock readings, pointer positions and scroll metrics in, and writes the
//! resulting [`stage::Update`]s back out as inline styles. Everything here is
//! deterministic and runs under plain `cargo test`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`ease`] | Easing curves and their declarative names |
//! | [`props`] | Animatable channels and property bags |
//! | [`style`] | Property bag to inline CSS |
//! | [`tween`] | Single interpolation with delay, repeat and yoyo |
//! | [`stage`] | Running tweens, overwrite rules and cues |
//! | [`timeline`] | Positioned sequences of tweens and cues |
//! | [`hero`] | Preloader, hero entrance and particle drift |
//! | [`scroll`] | Scroll metrics and viewport triggers |
//! | [`reveal`] | Scroll reveal motion, forward and reverse |
//! | [`header`] | Sticky header shadow state |
//! | [`theme`] | Light/dark preference and persistence |
//! | [`phrases`] | Rotating phrase cursor and cross-fade |
//! | [`counter`] | Stat counters |
//! | [`pointer`] | Tilt and magnetic pull geometry |
//! | [`nav`] | Mobile navigation toggle |
//! | [`consts`] | Shared timings and thresholds |

pub mod consts;
pub mod counter;
pub mod ease;
pub mod header;
pub mod hero;
pub mod nav;
pub mod phrases;
pub mod pointer;
pub mod props;
pub mod reveal;
pub mod scroll;
pub mod stage;
pub mod style;
pub mod theme;
pub mod timeline;
pub mod tween;

/// A point in viewport (client) coordinates, CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An element's bounding box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point { x: self.left + self.width / 2.0, y: self.top + self.height / 2.0 }
    }
}
