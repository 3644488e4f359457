//! Schwarzschild null-geodesic integration in the equatorial plane.
//!
//! The equations of motion are expressed in coordinate time (the time of a
//! distant observer) via the impact parameter `L = r²·φ̇/c`, which is
//! re-derived from the instantaneous velocity on every call rather than being
//! tracked as a persistent conserved quantity.  Combined with the explicit
//! first-order stepping this accumulates drift over long integrations; that is
//! the accepted behaviour of this visualisation, not a defect.
//!
//! The integrator is a pure function over [`PolarState`] — it owns no state
//! and performs no allocation.

/// A photon's polar-coordinate state, physical units.
///
/// `r` in metres, `phi` in radians (unconstrained range; take it modulo 2π
/// before trigonometry if a bounded angle is needed), `dr` in m/s, `dphi` in
/// rad/s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarState {
    /// Radial distance from the hole, m.
    pub r: f64,
    /// Azimuthal angle, rad.
    pub phi: f64,
    /// Radial coordinate velocity dr/dt, m/s.
    pub dr: f64,
    /// Angular coordinate velocity dφ/dt, rad/s.
    pub dphi: f64,
}

/// Advance a photon's polar state by one coordinate-time step `dt`.
///
/// Semi-implicit Euler: accelerations are applied to the velocities first,
/// then the updated velocities advance the positions.  One sub-step per call.
///
/// Radial acceleration (Schwarzschild equatorial null geodesic):
///
/// ```text
/// d²r/dt² = -r_s·c²/(2r²) + L²c²/r³ - 3·r_s·L²c²/(2r⁴)      L = r²·φ̇/c
/// d²φ/dt² = -(2/r)·ṙ·φ̇
/// ```
///
/// A state with `r <= 0` is returned unchanged (coordinate singularity
/// guard).  Callers are responsible for the horizon test: a photon with
/// `r < r_s` must be treated as absorbed and never handed back in.
pub fn integrate_step(state: PolarState, schwarzschild_radius: f64, c: f64, dt: f64) -> PolarState {
    if state.r <= 0.0 {
        return state;
    }

    let PolarState {
        mut r,
        mut phi,
        mut dr,
        mut dphi,
    } = state;
    let rs = schwarzschild_radius;

    let l = r * r * dphi / c;

    let r3 = r * r * r;
    let r4 = r3 * r;
    let d2r = -(rs * c * c) / (2.0 * r * r) + (l * l * c * c) / r3
        - (3.0 * rs * l * l * c * c) / (2.0 * r4);
    let d2phi = (-2.0 / r) * dr * dphi;

    dr += d2r * dt;
    dphi += d2phi * dt;
    r += dr * dt;
    phi += dphi * dt;

    PolarState { r, phi, dr, dphi }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SPEED_OF_LIGHT;

    const C: f64 = SPEED_OF_LIGHT;

    #[test]
    fn zero_radius_is_a_no_op() {
        let state = PolarState {
            r: 0.0,
            phi: 1.0,
            dr: -C,
            dphi: 0.0,
        };
        assert_eq!(integrate_step(state, 1.0e10, C, 1.0), state);
    }

    #[test]
    fn negative_radius_is_a_no_op() {
        let state = PolarState {
            r: -5.0,
            phi: 0.0,
            dr: 0.0,
            dphi: 1.0,
        };
        assert_eq!(integrate_step(state, 1.0e10, C, 1.0), state);
    }

    #[test]
    fn output_stays_finite_near_the_horizon() {
        let rs = 1.268e10;
        let state = PolarState {
            r: rs * 1.01,
            phi: 0.3,
            dr: -0.5 * C,
            dphi: 0.8 * C / (rs * 1.01),
        };
        let next = integrate_step(state, rs, C, 1.0 / 60.0 * 100.0);
        assert!(next.r.is_finite());
        assert!(next.phi.is_finite());
        assert!(next.dr.is_finite());
        assert!(next.dphi.is_finite());
    }

    /// With `r_s = 0` the equations reduce to flat-space motion in polar
    /// coordinates: a purely tangential velocity must feel the centripetal
    /// term `r·φ̇²` exactly, which over one small step matches a straight
    /// line to first order.
    #[test]
    fn flat_space_tangential_step_matches_straight_line() {
        let r0 = 1.0e12;
        let dphi0 = C / r0; // tangential at speed c
        let state = PolarState {
            r: r0,
            phi: 0.0,
            dr: 0.0,
            dphi: dphi0,
        };
        let dt = 1.0e-3;
        let next = integrate_step(state, 0.0, C, dt);

        // Straight line: after dt the point (r0, c·dt) in Cartesian.
        let expect_r = (r0 * r0 + (C * dt) * (C * dt)).sqrt();
        let expect_phi = (C * dt / r0).atan();
        // First-order method: allow an error quadratic in the step.
        let tol = C * dt * (C * dt / r0);
        assert!(
            (next.r - expect_r).abs() < tol.max(1.0),
            "r: got {}, expected {}",
            next.r,
            expect_r
        );
        assert!((next.phi - expect_phi).abs() < 1e-6);
    }

    /// The geodesic terms all carry a factor of `r_s`, so they vanish as
    /// `r_s/r → 0`: the radial acceleration at huge radius is dominated by
    /// the flat-space centripetal term alone.
    #[test]
    fn geodesic_terms_vanish_far_from_the_hole() {
        let rs = 1.268e10;
        let r0 = rs * 1.0e6;
        let dphi0 = C / r0;
        let state = PolarState {
            r: r0,
            phi: 0.0,
            dr: 0.0,
            dphi: dphi0,
        };
        let dt = 1.0;
        let curved = integrate_step(state, rs, C, dt);
        let flat = integrate_step(state, 0.0, C, dt);
        let rel = (curved.dr - flat.dr).abs() / C;
        assert!(rel < 1e-5, "relative radial kick {rel} should be negligible");
    }
}
