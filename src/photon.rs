//! A single light ray and its per-step update.
//!
//! A [`Photon`] deliberately carries a hybrid representation: its Cartesian
//! display position and direction are the authoritative state between steps,
//! while the polar radius and angle are re-derived from them at the start of
//! every update.  The polar *velocities* persist across steps but are likewise
//! rebuilt from the stored unit direction (scaled to `c`), which renormalises
//! the coordinate speed each step.  The tuned scenario constants depend on
//! this exact scheme; a pure-polar representation produces different orbits.

use crate::black_hole::BlackHole;
use crate::config::SimConfig;
use crate::geodesic::{integrate_step, PolarState};
use bevy::prelude::*;

/// One light ray: current display state, persisted polar velocities, and the
/// trailing path history.
///
/// `path` is append-only and unbounded — one entry per live step, oldest
/// first.  Unbounded growth is a documented characteristic of the
/// visualisation, not a leak to fix; a long-running session simply accumulates
/// its full trail.
#[derive(Debug, Clone)]
pub struct Photon {
    position: Vec2,
    direction: Vec2,
    dr: f64,
    dphi: f64,
    path: Vec<Vec2>,
    absorbed: bool,
}

impl Photon {
    /// Create a photon at `position` heading along `direction`.
    ///
    /// The direction is normalised; a zero vector is kept as zero and the
    /// photon simply never moves.  `path` starts seeded with the initial
    /// position.
    pub fn new(position: Vec2, direction: Vec2) -> Self {
        Self {
            position,
            direction: direction.normalize_or_zero(),
            dr: 0.0,
            dphi: 0.0,
            path: vec![position],
            absorbed: false,
        }
    }

    /// Current position, display px.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Current unit direction in display space.
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Radial coordinate velocity from the last live step, m/s.
    pub fn dr(&self) -> f64 {
        self.dr
    }

    /// Angular coordinate velocity from the last live step, rad/s.
    pub fn dphi(&self) -> f64 {
        self.dphi
    }

    /// Visited positions, oldest first.  Grows by exactly one entry per live
    /// step; frozen once absorbed.
    pub fn path(&self) -> &[Vec2] {
        &self.path
    }

    /// Whether this photon has crossed the event horizon.  Irreversible.
    pub fn is_absorbed(&self) -> bool {
        self.absorbed
    }

    /// Advance this photon by one coordinate-time step `dt` (seconds).
    ///
    /// Re-derives the polar radius and angle from the current Cartesian
    /// position, runs the horizon and singularity guards, decomposes the
    /// direction onto the local polar basis at speed `c`, integrates one
    /// geodesic step, and converts back to display coordinates.  Appends the
    /// new position to `path`.
    ///
    /// An absorbed photon is permanently frozen: position, direction, and
    /// path are left untouched for any further `dt`.
    pub fn update(&mut self, dt: f64, black_hole: &BlackHole, config: &SimConfig) {
        if self.absorbed {
            return;
        }

        let c = config.speed_of_light;
        let vis_scale = config.vis_scale;
        let rs = black_hole.schwarzschild_radius();

        let delta = self.position - black_hole.position();
        let (dx, dy) = (delta.x as f64, delta.y as f64);
        let r = (dx * dx + dy * dy).sqrt() / vis_scale;

        // Coordinate singularity: a photon sitting exactly on the hole's
        // centre has no defined angle; leave it where it is.
        if r <= 0.0 {
            return;
        }
        if r < rs {
            self.absorbed = true;
            return;
        }

        let phi = dy.atan2(dx);
        let (sin_phi, cos_phi) = (phi.sin(), phi.cos());

        // Decompose direction·c onto the local polar basis (r̂, φ̂).
        let vx = self.direction.x as f64 * c;
        let vy = self.direction.y as f64 * c;
        let dr = vx * cos_phi + vy * sin_phi;
        let dphi = (-vx * sin_phi + vy * cos_phi) / r;

        let next = integrate_step(PolarState { r, phi, dr, dphi }, rs, c, dt);
        self.dr = next.dr;
        self.dphi = next.dphi;

        let (next_sin, next_cos) = (next.phi.sin(), next.phi.cos());
        self.position = black_hole.position()
            + Vec2::new(
                (next.r * next_cos * vis_scale) as f32,
                (next.r * next_sin * vis_scale) as f32,
            );

        // New Cartesian velocity from the updated polar rates and basis.
        let vr = next.dr;
        let vt = next.r * next.dphi;
        let nvx = vr * next_cos - vt * next_sin;
        let nvy = vr * next_sin + vt * next_cos;
        let speed = (nvx * nvx + nvy * nvy).sqrt();
        if speed > 0.0 {
            self.direction = Vec2::new((nvx / speed) as f32, (nvy / speed) as f32);
        }

        self.path.push(self.position);
    }
}
