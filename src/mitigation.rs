//! # Mitigation strategy evaluator
//!
//! Delta-v calculators for the two deflection strategies: an instantaneous
//! kinetic impactor and a slow gravity tractor. Both reduce to a velocity
//! change applied to the asteroid's current heliocentric speed.

use serde::{Deserialize, Serialize};

use crate::constants::{Day, Kilogram, MeterPerSecond, Newton, SECONDS_PER_DAY};
use crate::skyfall_errors::SkyfallError;

/// Deflection strategy identifier, serialized in snake case
/// (`"kinetic_impactor"` / `"gravity_tractor"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    KineticImpactor,
    GravityTractor,
}

/// Velocity of the asteroid before and after a deflection maneuver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeflectionOutcome {
    pub old_velocity: MeterPerSecond,
    pub new_velocity: MeterPerSecond,
}

/// Apply an instantaneous velocity change from a kinetic impactor.
///
/// Purely additive: `new = old + delta_v`. Total over all finite reals, no
/// validation needed.
pub fn kinetic_impactor(
    delta_v: MeterPerSecond,
    asteroid_velocity: MeterPerSecond,
) -> DeflectionOutcome {
    DeflectionOutcome {
        old_velocity: asteroid_velocity,
        new_velocity: asteroid_velocity + delta_v,
    }
}

/// Apply the cumulative velocity change of a gravity tractor hovering near the
/// asteroid for a given duration.
///
/// Arguments
/// ---------
/// * `duration_days`: station-keeping duration in days
/// * `force_newton`: constant tug force in newtons
/// * `mass_kg`: asteroid mass in kilograms, must be non-zero
/// * `asteroid_velocity`: current asteroid velocity in m/s
///
/// Return
/// ------
/// * The outcome with `delta_v = F·t / m` (t converted to seconds)
/// * [`SkyfallError::ZeroAsteroidMass`] if `mass_kg == 0`
///
/// Negative force or duration is accepted and reads as a deceleration.
pub fn gravity_tractor(
    duration_days: Day,
    force_newton: Newton,
    mass_kg: Kilogram,
    asteroid_velocity: MeterPerSecond,
) -> Result<DeflectionOutcome, SkyfallError> {
    if mass_kg == 0.0 {
        return Err(SkyfallError::ZeroAsteroidMass);
    }
    let delta_v = force_newton * duration_days * SECONDS_PER_DAY / mass_kg;
    Ok(DeflectionOutcome {
        old_velocity: asteroid_velocity,
        new_velocity: asteroid_velocity + delta_v,
    })
}

#[cfg(test)]
mod mitigation_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_kinetic_impactor() {
        let outcome = kinetic_impactor(5.0, 15000.0);
        assert_eq!(outcome.old_velocity, 15000.0);
        assert_eq!(outcome.new_velocity, 15005.0);

        // retrograde impact slows the asteroid down
        let retro = kinetic_impactor(-12.5, 15000.0);
        assert_eq!(retro.new_velocity, 14987.5);
    }

    #[test]
    fn test_gravity_tractor() {
        // 1 N for a year on a 1e10 kg asteroid: delta_v = 365·86400/1e10
        let outcome = gravity_tractor(365.0, 1.0, 1e10, 20000.0).unwrap();
        assert_eq!(outcome.old_velocity, 20000.0);
        assert_relative_eq!(
            outcome.new_velocity - outcome.old_velocity,
            3.1536e-3,
            max_relative = 1e-12
        );
        assert_relative_eq!(outcome.new_velocity, 20000.0031536, max_relative = 1e-12);
    }

    #[test]
    fn test_gravity_tractor_deceleration() {
        let outcome = gravity_tractor(10.0, -2.0, 1e8, 18000.0).unwrap();
        assert!(outcome.new_velocity < outcome.old_velocity);
    }

    #[test]
    fn test_gravity_tractor_zero_mass() {
        assert_eq!(
            gravity_tractor(365.0, 1.0, 0.0, 20000.0),
            Err(SkyfallError::ZeroAsteroidMass)
        );
    }

    #[test]
    fn test_strategy_serialization() {
        assert_eq!(
            serde_json::to_string(&Strategy::KineticImpactor).unwrap(),
            "\"kinetic_impactor\""
        );
        assert_eq!(
            serde_json::to_string(&Strategy::GravityTractor).unwrap(),
            "\"gravity_tractor\""
        );
    }
}
