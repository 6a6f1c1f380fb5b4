//! # Orbit position evaluator
//!
//! Single-point evaluation of a Keplerian ellipse: given semi-major axis,
//! eccentricity and true anomaly, compute the orbital radius and its Cartesian
//! projection in the orbital plane. No propagation and no time dependence; one
//! orbit geometry, one angle, one position.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::constants::{Meter, Radian, EPS};
use crate::skyfall_errors::SkyfallError;

/// Position of a body on a Keplerian ellipse, in the orbital plane.
///
/// Units:
/// * `x`, `y`: meters, periapsis on the +x axis
/// * `r`: meters, orbital radius at the evaluated true anomaly
///
/// For a closed ellipse (`0 <= e < 1`) the radius always satisfies
/// `a·(1−e) <= r <= a·(1+e)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitPosition {
    pub x: Meter,
    pub y: Meter,
    pub r: Meter,
}

impl OrbitPosition {
    /// In-plane position as a nalgebra vector.
    pub fn position(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

/// Evaluate the conic equation `r = a·(1−e²)/(1+e·cos ν)` at a single true
/// anomaly and project onto Cartesian axes.
///
/// Arguments
/// ---------
/// * `semi_major_axis_m`: semi-major axis in meters
/// * `eccentricity`: orbital eccentricity, must satisfy `0 <= e < 1`
/// * `true_anomaly_rad`: true anomaly in radians, measured from periapsis
///
/// Return
/// ------
/// * The [`OrbitPosition`] at the given anomaly
/// * [`SkyfallError::UnsupportedEccentricity`] for `e < 0` or `e >= 1`
///   (parabolic and hyperbolic conics are out of scope)
/// * [`SkyfallError::NearParabolicAnomaly`] when `|1 + e·cos ν|` falls below
///   the comparison epsilon and the radius would diverge
pub fn kepler_position(
    semi_major_axis_m: Meter,
    eccentricity: f64,
    true_anomaly_rad: Radian,
) -> Result<OrbitPosition, SkyfallError> {
    if !(0.0..1.0).contains(&eccentricity) {
        return Err(SkyfallError::UnsupportedEccentricity(eccentricity));
    }

    let denominator = 1.0 + eccentricity * true_anomaly_rad.cos();
    if denominator.abs() < EPS {
        return Err(SkyfallError::NearParabolicAnomaly(denominator));
    }

    let r = semi_major_axis_m * (1.0 - eccentricity.powi(2)) / denominator;
    Ok(OrbitPosition {
        x: r * true_anomaly_rad.cos(),
        y: r * true_anomaly_rad.sin(),
        r,
    })
}

#[cfg(test)]
mod orbit_test {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    const AU_M: f64 = 1.495978707e11;

    #[test]
    fn test_circular_orbit_radius_is_constant() {
        for nu in [0.0, 0.5, PI / 2.0, PI, 4.0, 2.0 * PI] {
            let pos = kepler_position(AU_M, 0.0, nu).unwrap();
            assert_relative_eq!(pos.r, AU_M, max_relative = 1e-14);
            assert_relative_eq!(pos.position().norm(), AU_M, max_relative = 1e-14);
        }
    }

    #[test]
    fn test_apsides() {
        let a = AU_M;
        let e = 0.3;

        let periapsis = kepler_position(a, e, 0.0).unwrap();
        assert_relative_eq!(periapsis.r, a * (1.0 - e), max_relative = 1e-14);
        assert_relative_eq!(periapsis.x, periapsis.r, max_relative = 1e-14);
        assert_relative_eq!(periapsis.y, 0.0, epsilon = 1e-4);

        let apoapsis = kepler_position(a, e, PI).unwrap();
        assert_relative_eq!(apoapsis.r, a * (1.0 + e), max_relative = 1e-14);
        assert_relative_eq!(apoapsis.x, -apoapsis.r, max_relative = 1e-14);
    }

    #[test]
    fn test_radius_stays_within_apsidal_bounds() {
        let a = 2.5 * AU_M;
        let e = 0.7;
        for step in 0..64 {
            let nu = step as f64 * 2.0 * PI / 64.0;
            let pos = kepler_position(a, e, nu).unwrap();
            assert!(pos.r >= a * (1.0 - e) * (1.0 - 1e-12));
            assert!(pos.r <= a * (1.0 + e) * (1.0 + 1e-12));
        }
    }

    #[test]
    fn test_open_conics_rejected() {
        assert_eq!(
            kepler_position(AU_M, 1.0, 0.0),
            Err(SkyfallError::UnsupportedEccentricity(1.0))
        );
        assert_eq!(
            kepler_position(AU_M, 1.8, 0.0),
            Err(SkyfallError::UnsupportedEccentricity(1.8))
        );
        assert_eq!(
            kepler_position(AU_M, -0.1, 0.0),
            Err(SkyfallError::UnsupportedEccentricity(-0.1))
        );
    }

    #[test]
    fn test_near_parabolic_denominator_rejected() {
        // e close enough to 1 that 1 + e·cos(π) underflows the epsilon
        let e = 1.0 - 1e-9;
        match kepler_position(AU_M, e, PI) {
            Err(SkyfallError::NearParabolicAnomaly(d)) => assert!(d.abs() < 1e-6),
            other => panic!("expected near-parabolic rejection, got {other:?}"),
        }
    }
}
