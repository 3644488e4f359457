//! The compact object at the centre of the simulation.
//!
//! A [`BlackHole`] is immutable after construction: the Schwarzschild radius
//! is derived from the mass exactly once and never recomputed.  Photons query
//! it fresh every step for the absorption test; nothing holds a persistent
//! back-reference.

use crate::error::{validate_mass, SimResult};
use bevy::prelude::*;

/// A non-rotating (Schwarzschild) black hole.
///
/// `position` lives in display coordinates (pixels); `mass` and the derived
/// `schwarzschild_radius` are physical (kg, metres).  See
/// [`crate::constants`] for the unit convention.
#[derive(Debug, Clone)]
pub struct BlackHole {
    position: Vec2,
    mass: f64,
    schwarzschild_radius: f64,
}

impl BlackHole {
    /// Construct a black hole at `position` with the given mass.
    ///
    /// Computes `r_s = 2·G·m/c²` once and stores it.  Returns
    /// [`SimError::InvalidMass`](crate::error::SimError::InvalidMass) for a
    /// non-positive or non-finite mass rather than carrying a degenerate
    /// horizon through every later radius comparison.
    pub fn new(position: Vec2, mass: f64, g: f64, c: f64) -> SimResult<Self> {
        validate_mass(mass)?;
        Ok(Self {
            position,
            mass,
            schwarzschild_radius: 2.0 * g * mass / (c * c),
        })
    }

    /// Centre of the hole in display coordinates, px.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Mass, kg.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Event horizon radius `2·G·m/c²`, metres.
    pub fn schwarzschild_radius(&self) -> f64 {
        self.schwarzschild_radius
    }

    /// Horizon radius scaled into display coordinates, px.
    ///
    /// This is the radius of the filled disc the renderer draws.
    pub fn display_radius(&self, vis_scale: f64) -> f32 {
        (self.schwarzschild_radius * vis_scale) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{GRAVITATIONAL_CONST, SPEED_OF_LIGHT, VIS_SCALE};

    #[test]
    fn schwarzschild_radius_matches_formula() {
        let mass = 8.54e36;
        let bh = BlackHole::new(Vec2::ZERO, mass, GRAVITATIONAL_CONST, SPEED_OF_LIGHT)
            .expect("positive mass");
        let expected = 2.0 * GRAVITATIONAL_CONST * mass / (SPEED_OF_LIGHT * SPEED_OF_LIGHT);
        let rel_err = (bh.schwarzschild_radius() - expected).abs() / expected;
        assert!(rel_err < 1e-12, "rel err {rel_err}");
        // Sanity: Sgr A*-scale hole has a horizon around 1.27e10 m.
        assert!((bh.schwarzschild_radius() - 1.268e10).abs() < 1e8);
    }

    #[test]
    fn non_positive_mass_is_rejected() {
        assert!(BlackHole::new(Vec2::ZERO, 0.0, GRAVITATIONAL_CONST, SPEED_OF_LIGHT).is_err());
        assert!(BlackHole::new(Vec2::ZERO, -5.0e30, GRAVITATIONAL_CONST, SPEED_OF_LIGHT).is_err());
    }

    #[test]
    fn display_radius_scales_by_vis_scale() {
        let bh = BlackHole::new(Vec2::ZERO, 8.54e36, GRAVITATIONAL_CONST, SPEED_OF_LIGHT)
            .expect("positive mass");
        let px = bh.display_radius(VIS_SCALE);
        assert!((px - (bh.schwarzschild_radius() * VIS_SCALE) as f32).abs() < f32::EPSILON);
        assert!(px > 70.0 && px < 85.0, "default scale puts the horizon at ~76 px, got {px}");
    }
}
