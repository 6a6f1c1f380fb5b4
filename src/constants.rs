//! # Constants and type definitions for Skyfall
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! definitions** used throughout the `skyfall` library.
//!
//! ## Overview
//!
//! - Impact-physics constants (asteroid bulk density, crater and seismic scaling)
//! - Unit conversions (degrees ↔ radians, joules ↔ megatons TNT, days ↔ seconds)
//! - Core type aliases used across the crate
//!
//! These definitions are shared by the impact, orbit, mitigation and simulation modules so
//! that each constant has exactly one definition site.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// Joules per megaton of TNT equivalent
///
/// The single definition used by the energy conversion *and* the seismic magnitude
/// formula; duplicating the literal risks the two drifting apart.
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// Average asteroid bulk density in kg/m³ (uniform-sphere impactor model)
pub const ASTEROID_DENSITY: f64 = 3000.0;

/// Empirical crater-diameter scaling constant (km per cube-root megaton)
pub const CRATER_SCALING: f64 = 1.161;

/// Slope of the Gutenberg–Richter energy/magnitude relation
pub const SEISMIC_SLOPE: f64 = 0.67;

/// Offset of the Gutenberg–Richter energy/magnitude relation
pub const SEISMIC_OFFSET: f64 = 5.87;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Numerical epsilon used for floating-point comparisons
pub const EPS: f64 = 1e-6;

/// Default distance from the coast, in kilometers, used for the tsunami estimate
/// when a request does not supply one.
pub const DEFAULT_COASTAL_DISTANCE_KM: f64 = 500.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;

/// Angle in radians
pub type Radian = f64;

/// Length in meters
pub type Meter = f64;

/// Length in kilometers
pub type Kilometer = f64;

/// Velocity in meters per second
pub type MeterPerSecond = f64;

/// Mass in kilograms
pub type Kilogram = f64;

/// Energy in joules
pub type Joule = f64;

/// Energy in megatons of TNT equivalent
pub type Megaton = f64;

/// Force in newtons
pub type Newton = f64;

/// Duration in days
pub type Day = f64;

/// Seismic magnitude on the Richter scale
pub type Richter = f64;
