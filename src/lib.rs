//! # Skyfall
//!
//! Asteroid impact simulation and mitigation library.
//!
//! The crate exposes a set of closed-form astrophysical formulas as pure,
//! synchronous functions, together with two gateways to external data sources:
//!
//! - [`impact`] — kinetic energy, crater scaling, seismic magnitude and tsunami
//!   height for a given impactor.
//! - [`orbit`] — single-point Keplerian position from orbital elements.
//! - [`mitigation`] — delta-v calculators for the kinetic-impactor and
//!   gravity-tractor deflection strategies.
//! - [`simulation`] — the high-level request surface, assembling raw formula
//!   outputs into structured result records.
//! - [`neo_request`] — NASA Near-Earth-Object catalog client (feed and
//!   per-object lookup, passthrough JSON).
//! - [`topography`] — USGS topography dataset loader.
//!
//! Every formula is a pure function of its inputs: no shared mutable state, no
//! I/O, no suspension. Only the gateway modules perform network or file access,
//! through the shared [`env_state::SkyfallEnv`] environment.
//!
//! Invalid physical inputs (non-positive logarithm arguments, zero divisors,
//! open conic sections) are detected before computation and reported as
//! [`skyfall_errors::SkyfallError`] values, never silently coerced to NaN.

pub mod constants;
pub mod conversion;
pub mod env_state;
pub mod impact;
pub mod mitigation;
pub mod neo_request;
pub mod orbit;
pub mod simulation;
pub mod skyfall_errors;
pub mod topography;
