use thiserror::Error;

/// Error type for the whole crate.
///
/// Three families share this enum: domain errors from formula evaluation
/// (invalid physical input, detected before any computation runs), upstream
/// errors from the NASA NEO gateway, and dataset errors from the topography
/// loader. [`SkyfallError::is_domain_error`] distinguishes the first family
/// for callers that need the split.
#[derive(Error, Debug)]
pub enum SkyfallError {
    #[error("seismic magnitude is undefined for non-positive impact energy: {0} Mt")]
    NonPositiveLogArgument(f64),

    #[error("tsunami height requires a positive coastal distance, got {0} km")]
    NonPositiveDistance(f64),

    #[error("tsunami height is undefined for negative impact energy: {0} Mt")]
    NegativeEnergy(f64),

    #[error("eccentricity {0} is outside the closed-ellipse range [0, 1)")]
    UnsupportedEccentricity(f64),

    #[error("orbit radius diverges near the parabolic asymptote (1 + e*cos(nu) = {0})")]
    NearParabolicAnomaly(f64),

    #[error("gravity tractor requires a non-zero asteroid mass")]
    ZeroAsteroidMass,

    #[error("HTTP ureq error: {0}")]
    UreqHttpError(#[from] ureq::Error),

    #[error("upstream service returned status {status} for {url}")]
    UpstreamStatus { status: u16, url: String },

    #[error("unable to parse upstream JSON body: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),
}

impl SkyfallError {
    /// True for invalid-physical-input errors, as opposed to upstream or
    /// dataset failures.
    pub fn is_domain_error(&self) -> bool {
        use SkyfallError::*;
        matches!(
            self,
            NonPositiveLogArgument(_)
                | NonPositiveDistance(_)
                | NegativeEnergy(_)
                | UnsupportedEccentricity(_)
                | NearParabolicAnomaly(_)
                | ZeroAsteroidMass
        )
    }
}

impl PartialEq for SkyfallError {
    fn eq(&self, other: &Self) -> bool {
        use SkyfallError::*;
        match (self, other) {
            (NonPositiveLogArgument(a), NonPositiveLogArgument(b)) => a == b,
            (NonPositiveDistance(a), NonPositiveDistance(b)) => a == b,
            (NegativeEnergy(a), NegativeEnergy(b)) => a == b,
            (UnsupportedEccentricity(a), UnsupportedEccentricity(b)) => a == b,
            (NearParabolicAnomaly(a), NearParabolicAnomaly(b)) => a == b,
            (ZeroAsteroidMass, ZeroAsteroidMass) => true,

            (
                UpstreamStatus { status: a, url: u },
                UpstreamStatus {
                    status: b,
                    url: v,
                },
            ) => a == b && u == v,

            // Wrapped errors are not comparable: equal if same variant
            (UreqHttpError(_), UreqHttpError(_)) => true,
            (JsonParseError(_), JsonParseError(_)) => true,
            (IoError(_), IoError(_)) => true,
            (CsvError(_), CsvError(_)) => true,

            _ => false,
        }
    }
}
