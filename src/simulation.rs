//! # Simulation operations and result assembly
//!
//! High-level request surface of the crate: each operation takes the raw numeric
//! parameters of a scenario, runs the relevant formula modules, and assembles
//! the outputs into an immutable result record. No computation happens here
//! beyond field naming and optional-field handling.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    Day, Degree, Joule, Kilogram, Kilometer, Megaton, Meter, MeterPerSecond, Newton, Richter,
    DEFAULT_COASTAL_DISTANCE_KM,
};
use crate::conversion::degrees_to_radians;
use crate::impact::{crater_size, energy_in_megatons, kinetic_energy, seismic_magnitude, tsunami_height};
use crate::mitigation::{gravity_tractor, kinetic_impactor, DeflectionOutcome, Strategy};
use crate::orbit::{kepler_position, OrbitPosition};
use crate::skyfall_errors::SkyfallError;

/// Full ground-effect estimate for a single impact scenario.
///
/// `kinetic_energy_j` and `energy_megatons_tnt` are related by the fixed
/// megaton conversion constant; crater diameter and seismic magnitude are
/// functions of the megaton energy alone, tsunami height of energy and
/// coastal distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactResult {
    pub diameter_m: Meter,
    pub velocity_mps: MeterPerSecond,
    #[serde(rename = "kinetic_energy_J")]
    pub kinetic_energy_j: Joule,
    #[serde(rename = "energy_megatons_TNT")]
    pub energy_megatons_tnt: Megaton,
    pub crater_diameter_km: Kilometer,
    pub seismic_magnitude: Richter,
    pub tsunami_height_m: Option<Meter>,
}

/// Outcome of a deflection maneuver, tagged with the strategy that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MitigationResult {
    pub old_velocity: MeterPerSecond,
    pub new_velocity: MeterPerSecond,
    pub strategy: Strategy,
}

impl MitigationResult {
    fn from_outcome(outcome: DeflectionOutcome, strategy: Strategy) -> Self {
        MitigationResult {
            old_velocity: outcome.old_velocity,
            new_velocity: outcome.new_velocity,
            strategy,
        }
    }
}

/// Simulate an asteroid impact: kinetic energy, crater, seismic magnitude and
/// tsunami height.
///
/// Arguments
/// ---------
/// * `diameter_m`: asteroid diameter in meters
/// * `velocity_mps`: impact velocity in m/s
/// * `distance_km`: distance from the coast for the tsunami estimate; defaults
///   to 500 km when `None`
///
/// Return
/// ------
/// * The assembled [`ImpactResult`]
/// * A domain error if the derived energy is non-positive (seismic magnitude
///   undefined) or the coastal distance is non-positive
pub fn simulate_impact(
    diameter_m: Meter,
    velocity_mps: MeterPerSecond,
    distance_km: Option<Kilometer>,
) -> Result<ImpactResult, SkyfallError> {
    debug!(diameter_m, velocity_mps, "simulating impact");

    let energy = kinetic_energy(diameter_m, velocity_mps);
    let megatons = energy_in_megatons(energy);
    let crater = crater_size(megatons);
    let seismic = seismic_magnitude(megatons)?;
    let distance = distance_km.unwrap_or(DEFAULT_COASTAL_DISTANCE_KM);
    let tsunami = tsunami_height(distance, megatons)?;

    Ok(ImpactResult {
        diameter_m,
        velocity_mps,
        kinetic_energy_j: energy,
        energy_megatons_tnt: megatons,
        crater_diameter_km: crater,
        seismic_magnitude: seismic,
        tsunami_height_m: Some(tsunami),
    })
}

/// Compute a single orbital position from Keplerian elements.
///
/// The true anomaly is taken in degrees and converted before evaluation; see
/// [`kepler_position`] for the eccentricity and denominator domain checks.
pub fn simulate_orbit(
    semi_major_axis_m: Meter,
    eccentricity: f64,
    true_anomaly_deg: Degree,
) -> Result<OrbitPosition, SkyfallError> {
    debug!(
        semi_major_axis_m,
        eccentricity, true_anomaly_deg, "simulating orbit"
    );
    kepler_position(
        semi_major_axis_m,
        eccentricity,
        degrees_to_radians(true_anomaly_deg),
    )
}

/// Apply the kinetic-impactor strategy and tag the result.
pub fn apply_kinetic_impactor(
    delta_v: MeterPerSecond,
    asteroid_velocity: MeterPerSecond,
) -> MitigationResult {
    debug!(delta_v, asteroid_velocity, "applying kinetic impactor");
    MitigationResult::from_outcome(
        kinetic_impactor(delta_v, asteroid_velocity),
        Strategy::KineticImpactor,
    )
}

/// Apply the gravity-tractor strategy and tag the result.
///
/// Fails with [`SkyfallError::ZeroAsteroidMass`] for a zero asteroid mass.
pub fn apply_gravity_tractor(
    duration_days: Day,
    force_newton: Newton,
    mass_kg: Kilogram,
    asteroid_velocity: MeterPerSecond,
) -> Result<MitigationResult, SkyfallError> {
    debug!(
        duration_days,
        force_newton, mass_kg, asteroid_velocity, "applying gravity tractor"
    );
    let outcome = gravity_tractor(duration_days, force_newton, mass_kg, asteroid_velocity)?;
    Ok(MitigationResult::from_outcome(
        outcome,
        Strategy::GravityTractor,
    ))
}
