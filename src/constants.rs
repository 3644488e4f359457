//! Centralised physical constants and scenario tuning values.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//! [`crate::config::SimConfig`] mirrors every constant and can override any
//! subset at runtime via `assets/sim.toml`; this module remains the
//! authoritative compile-time default.
//!
//! ## Unit convention
//!
//! Physics state (radius, velocities, the geodesic equations) is expressed in
//! SI units: metres, seconds, kilograms.  Display state (photon positions,
//! paths, the drawn horizon disc) is expressed in pixels.  The two are related
//! by [`VIS_SCALE`] (pixels per metre); nothing else in the codebase converts
//! units.

// ── Physics: Fundamental Constants ───────────────────────────────────────────

/// Speed of light, m/s.  Photon coordinate speed is renormalised to `c` at the
/// start of every integration step when the Cartesian direction is decomposed
/// onto the local polar basis.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Newtonian gravitational constant, m³/(kg·s²).
pub const GRAVITATIONAL_CONST: f64 = 6.6743e-11;

// ── Physics: Black Hole ──────────────────────────────────────────────────────

/// Mass of the simulated black hole, kg.
///
/// Roughly Sagittarius A* (4.3 million solar masses).  The Schwarzschild
/// radius follows as `2·G·m/c² ≈ 1.268e10 m`, which [`VIS_SCALE`] maps to a
/// ~76 px horizon disc on the default 1600×900 window.
pub const BLACK_HOLE_MASS: f64 = 8.54e36;

// ── Visualisation Scaling ────────────────────────────────────────────────────

/// Metres-to-pixels conversion factor (pixels per metre).
///
/// This is the main tuning knob coupling the physical scale to the screen.
/// At 6.01e-9 the horizon spans ~76 px and the reference photon launched from
/// [`PHOTON_START_OFFSET_Y`] px winds a full turn around the photon sphere
/// before capture.  Values above ~6.1e-9 shrink the critical impact parameter
/// past the launch offset and the ray plunges with less than half a turn;
/// values at or below 6.0e-9 let it slingshot back out after looping.
pub const VIS_SCALE: f64 = 6.01e-9;

/// Multiplier applied to wall-clock frame time before it is handed to the
/// integrator as `dt` (seconds of coordinate time per second of real time).
///
/// At 100× and 60 fps each step advances coordinate time by ~1.67 s, moving a
/// photon ~3 px per frame at the default [`VIS_SCALE`].  Raising this speeds
/// the visualisation up but degrades the first-order integrator; beyond ~1000×
/// near-horizon trajectories visibly fall apart.
pub const TIME_MULT: f64 = 100.0;

// ── Window ───────────────────────────────────────────────────────────────────

/// Default window width, px.
pub const SCREEN_WIDTH: u32 = 1600;

/// Default window height, px.
pub const SCREEN_HEIGHT: u32 = 900;

// ── Scenario: Reference Photon ───────────────────────────────────────────────

/// Vertical launch offset of the reference photon, px above the hole.
///
/// Tuned against [`VIS_SCALE`] so the ray's impact parameter sits just inside
/// the critical value: it orbits once near the photon sphere and is then
/// captured, the canonical bent-light demonstration.
pub const PHOTON_START_OFFSET_Y: f32 = 285.99;

// ── Scenario: Fan Burst ──────────────────────────────────────────────────────

/// Number of rays spawned per fan burst (Space key).
pub const FAN_COUNT: usize = 40;

/// Vertical extent of the fan as a fraction of window height.
pub const FAN_SPREAD: f32 = 0.8;

/// Per-ray random vertical jitter applied to fan spawns, px.
///
/// Breaks up the visual banding of evenly spaced parallel rays.  Set to 0.0
/// for perfectly regular spacing.
pub const FAN_JITTER: f32 = 4.0;

// ── Rendering ────────────────────────────────────────────────────────────────

/// Radius of the dot drawn at each live photon's head, px.
pub const PHOTON_HEAD_RADIUS: f32 = 2.0;

/// Segment count of the horizon disc mesh.  128 is indistinguishable from a
/// circle at the default zoom.
pub const HORIZON_DISC_SEGMENTS: u32 = 128;

/// Font size for the on-screen statistics overlay.
pub const STATS_FONT_SIZE: f32 = 20.0;
