//! # Impact physics engine
//!
//! Closed-form estimates of the ground effects of an asteroid impact: kinetic
//! energy of the impactor, transient crater diameter, equivalent seismic
//! magnitude, and tsunami height at a coastal distance.
//!
//! All functions are pure and stateless. The kinetic-energy and crater formulas
//! are total; the seismic and tsunami formulas have restricted domains and
//! report out-of-domain inputs as [`SkyfallError`] values instead of returning
//! NaN.

use std::f64::consts::PI;

use crate::constants::{
    Joule, Kilometer, Megaton, Meter, MeterPerSecond, Richter, ASTEROID_DENSITY, CRATER_SCALING,
    JOULES_PER_MEGATON, SEISMIC_OFFSET, SEISMIC_SLOPE,
};
use crate::conversion::joules_to_megatons;
use crate::skyfall_errors::SkyfallError;

/// Kinetic energy of an impactor modeled as a uniform sphere of average
/// asteroid density (3000 kg/m³).
///
/// Arguments
/// ---------
/// * `diameter_m`: impactor diameter in meters
/// * `velocity_mps`: impact velocity in m/s
///
/// Return
/// ------
/// * Kinetic energy in joules, `½·m·v²` with `m = ρ·(4/3)π·(d/2)³`
///
/// Negative inputs are not rejected: the result is mathematically defined but
/// physically meaningless, and guarding against them is the caller's concern.
pub fn kinetic_energy(diameter_m: Meter, velocity_mps: MeterPerSecond) -> Joule {
    let radius = diameter_m / 2.0;
    let volume = (4.0 / 3.0) * PI * radius.powi(3);
    let mass = volume * ASTEROID_DENSITY;
    0.5 * mass * velocity_mps.powi(2)
}

/// Impact energy expressed in megatons of TNT equivalent.
pub fn energy_in_megatons(energy: Joule) -> Megaton {
    joules_to_megatons(energy)
}

/// Transient crater diameter from impact energy, cube-root scaling law
/// `D ≈ 1.161·E^(1/3)`.
///
/// Uses the real-valued [`f64::cbrt`], which preserves sign for negative
/// energies; raising a negative base to a fractional power would be NaN.
/// Total over all finite reals; `crater_size(0.0) == 0.0`.
pub fn crater_size(energy_megatons: Megaton) -> Kilometer {
    CRATER_SCALING * energy_megatons.cbrt()
}

/// Equivalent seismic magnitude of an impact, Gutenberg–Richter relation
/// `M = 0.67·log10(E_joules) − 5.87`.
///
/// Arguments
/// ---------
/// * `energy_megatons`: impact energy in megatons TNT, must be strictly positive
///
/// Return
/// ------
/// * Richter-scale magnitude; may be negative for very small energies
/// * [`SkyfallError::NonPositiveLogArgument`] if `energy_megatons <= 0`
pub fn seismic_magnitude(energy_megatons: Megaton) -> Result<Richter, SkyfallError> {
    if energy_megatons <= 0.0 {
        return Err(SkyfallError::NonPositiveLogArgument(energy_megatons));
    }
    Ok(SEISMIC_SLOPE * (energy_megatons * JOULES_PER_MEGATON).log10() - SEISMIC_OFFSET)
}

/// Rough tsunami height at a distance from the impact point,
/// `h = E^(1/4) / d^(1/2)`.
///
/// Arguments
/// ---------
/// * `distance_km`: distance from the coast in kilometers, must be strictly positive
/// * `energy_megatons`: impact energy in megatons TNT, must be non-negative
///
/// Return
/// ------
/// * Wave height in meters
/// * [`SkyfallError::NonPositiveDistance`] if `distance_km <= 0`
/// * [`SkyfallError::NegativeEnergy`] if `energy_megatons < 0` (fractional power
///   of a negative base is undefined)
pub fn tsunami_height(
    distance_km: Kilometer,
    energy_megatons: Megaton,
) -> Result<Meter, SkyfallError> {
    if distance_km <= 0.0 {
        return Err(SkyfallError::NonPositiveDistance(distance_km));
    }
    if energy_megatons < 0.0 {
        return Err(SkyfallError::NegativeEnergy(energy_megatons));
    }
    Ok(energy_megatons.powf(0.25) / distance_km.sqrt())
}
