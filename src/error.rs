//! Simulation-specific error types.
//!
//! The domain has almost no failure modes: numerical edge cases (zero radius,
//! horizon crossing) are handled internally as no-op guards or terminal
//! states, never surfaced as errors.  What remains is parameter validation at
//! construction time.
//!
//! ## Usage
//!
//! ```rust
//! use lensing::error::{validate_mass, SimResult};
//!
//! fn build(mass: f64) -> SimResult<()> {
//!     validate_mass(mass)?;
//!     Ok(())
//! }
//! ```

use std::fmt;

/// Top-level error enum for the lensing simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimError {
    /// A black hole was constructed with a non-positive mass, which would
    /// yield a degenerate (zero or negative) Schwarzschild radius.
    InvalidMass {
        /// The mass that was rejected, kg.
        value: f64,
    },

    /// A non-positive time step was supplied where the caller opted into
    /// eager validation.  The step functions themselves tolerate such values
    /// silently and produce degenerate no-progress results.
    InvalidTimeStep {
        /// The time step that was rejected, s.
        value: f64,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidMass { value } => write!(
                f,
                "black hole mass must be positive, got {} kg",
                value
            ),
            SimError::InvalidTimeStep { value } => {
                write!(f, "time step must be positive, got {} s", value)
            }
        }
    }
}

impl std::error::Error for SimError {}

/// Convenience alias: a `Result` using `SimError` as the error type.
pub type SimResult<T> = Result<T, SimError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error unless `mass` is strictly positive and finite.
pub fn validate_mass(mass: f64) -> SimResult<()> {
    if mass > 0.0 && mass.is_finite() {
        Ok(())
    } else {
        Err(SimError::InvalidMass { value: mass })
    }
}

/// Returns an error unless `dt` is strictly positive and finite.
///
/// For callers that prefer eager rejection over the silently-tolerant default
/// behaviour of the step functions.
pub fn validate_time_step(dt: f64) -> SimResult<()> {
    if dt > 0.0 && dt.is_finite() {
        Ok(())
    } else {
        Err(SimError::InvalidTimeStep { value: dt })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_mass_is_valid() {
        assert!(validate_mass(8.54e36).is_ok());
    }

    #[test]
    fn zero_and_negative_mass_are_rejected() {
        assert_eq!(
            validate_mass(0.0),
            Err(SimError::InvalidMass { value: 0.0 })
        );
        assert!(validate_mass(-1.0).is_err());
        assert!(validate_mass(f64::NAN).is_err());
    }

    #[test]
    fn time_step_validation() {
        assert!(validate_time_step(1.0 / 60.0).is_ok());
        assert!(validate_time_step(0.0).is_err());
        assert!(validate_time_step(f64::INFINITY).is_err());
    }
}
