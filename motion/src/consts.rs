//! Shared timings, thresholds and offsets. Durations are in seconds.

// ── Cursor ──────────────────────────────────────────────────────

/// Lag of the outline ring behind the pointer.
pub const CURSOR_OUTLINE_DURATION: f64 = 0.15;

// ── Preloader / hero ────────────────────────────────────────────

pub const PRELOADER_TEXT_DURATION: f64 = 0.4;
pub const PRELOADER_TEXT_DELAY: f64 = 0.05;
pub const PRELOADER_EXIT_DURATION: f64 = 0.5;
pub const PRELOADER_EXIT_DELAY: f64 = 0.1;
/// Distance the loading label rises from, px. Mirrors the stylesheet.
pub const PRELOADER_TEXT_OFFSET_Y: f64 = 20.0;

/// Distance hero parts rise from, px. Mirrors the stylesheet.
pub const HERO_OFFSET_Y: f64 = 30.0;

pub const HERO_TAG_DURATION: f64 = 0.35;
pub const HERO_TITLE_DURATION: f64 = 0.45;
pub const HERO_TITLE_OVERLAP: f64 = -0.2;
pub const HERO_SHIMMER_OVERLAP: f64 = -0.2;
pub const HERO_SUBTITLE_DURATION: f64 = 0.35;
pub const HERO_SUBTITLE_OVERLAP: f64 = -0.25;
pub const HERO_BUTTONS_DURATION: f64 = 0.3;
pub const HERO_BUTTONS_OVERLAP: f64 = -0.2;
pub const HERO_PARTICLES_DURATION: f64 = 1.2;
pub const HERO_PARTICLES_STAGGER: f64 = 0.08;
pub const HERO_PARTICLES_OVERLAP: f64 = -0.6;
pub const HERO_PARTICLES_ELASTIC_PERIOD: f64 = 0.5;

/// Particle drift ranges, px.
pub const DRIFT_X_RANGE: f64 = 20.0;
pub const DRIFT_Y_RANGE: f64 = 30.0;
pub const DRIFT_MIN_DURATION: f64 = 3.0;
pub const DRIFT_MAX_DURATION: f64 = 6.0;
pub const DRIFT_PHASE_STEP: f64 = 0.2;

// ── Scroll reveals ──────────────────────────────────────────────

/// Fraction of viewport height at which a reveal container triggers.
pub const REVEAL_TRIGGER_FRACTION: f64 = 0.8;
pub const REVEAL_OFFSET_Y: f64 = 50.0;
pub const REVEAL_DURATION: f64 = 0.8;
pub const REVEAL_STAGGER: f64 = 0.1;

// ── Parallax ────────────────────────────────────────────────────

/// Maximum vertical shift as a percentage of the image's own height.
pub const PARALLAX_MAX_PERCENT: f64 = 20.0;

// ── Header ──────────────────────────────────────────────────────

pub const HEADER_SHADOW_THRESHOLD: f64 = 50.0;

// ── Phrases ─────────────────────────────────────────────────────

pub const PHRASE_INITIAL_DELAY: f64 = 1.2;
pub const PHRASE_INTERVAL: f64 = 3.5;
pub const PHRASE_ENTRANCE_DELAY: f64 = 0.1;
pub const PHRASE_DURATION: f64 = 0.8;
/// The incoming phrase starts this long before the outgoing one finishes.
pub const PHRASE_OVERLAP: f64 = 0.6;
pub const PHRASE_OFFSET_Y: f64 = 30.0;
pub const PHRASE_BLUR: f64 = 10.0;
pub const PHRASE_ENTER_SCALE: f64 = 1.1;
pub const PHRASE_EXIT_SCALE: f64 = 0.9;

// ── Mobile nav ──────────────────────────────────────────────────

pub const NAV_OFFSET_X: f64 = -20.0;
pub const NAV_DURATION: f64 = 0.4;
pub const NAV_STAGGER: f64 = 0.1;
pub const NAV_DELAY: f64 = 0.2;

// ── Stat counters ───────────────────────────────────────────────

pub const COUNTER_TRIGGER_FRACTION: f64 = 0.85;
pub const COUNTER_DURATION: f64 = 2.0;

// ── Pointer effects ─────────────────────────────────────────────

pub const TILT_MAX_DEG: f64 = 5.0;
pub const TILT_PERSPECTIVE: f64 = 1000.0;
pub const TILT_DURATION: f64 = 0.4;
pub const TILT_RESET_DURATION: f64 = 0.8;

pub const MAGNETIC_STRENGTH: f64 = 0.3;
pub const MAGNETIC_DURATION: f64 = 0.3;
pub const MAGNETIC_RESET_DURATION: f64 = 0.8;

// ── Scroll progress ─────────────────────────────────────────────

/// Scroll offset past which the back-to-top button shows, px.
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;
