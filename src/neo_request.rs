//! # NASA Near-Earth-Object gateway
//!
//! Client for the NASA NeoWs REST API. Two endpoints are exposed: the
//! date-ranged feed and the per-object lookup. Both return the upstream JSON
//! payload unchanged; [`asteroids_from_feed`] additionally extracts a flat list
//! of [`Asteroid`] records from a feed payload.
//!
//! The API key is an explicit constructor argument with the public rate-limited
//! `DEMO_KEY` as the default; [`NeoClient::from_env`] reads it from the
//! `NASA_API_KEY` environment variable instead.
//!
//! Upstream failures (transport errors, non-2xx responses) propagate to the
//! caller as [`SkyfallError`] values; the gateway never retries.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::constants::{Kilometer, Meter, MeterPerSecond};
use crate::env_state::SkyfallEnv;
use crate::skyfall_errors::SkyfallError;

/// Base URL of the NASA NeoWs REST API.
pub const NEO_API_BASE: &str = "https://api.nasa.gov/neo/rest/v1";

/// Public rate-limited placeholder key accepted by the NASA API.
pub const DEMO_API_KEY: &str = "DEMO_KEY";

/// Environment variable consulted by [`NeoClient::from_env`].
pub const API_KEY_ENV_VAR: &str = "NASA_API_KEY";

/// One close approach of a catalogued near-Earth object, as extracted from the
/// NeoWs feed payload.
///
/// Units:
/// * `diameter_m`: meters (midpoint of the catalog's estimated range)
/// * `velocity_mps`: m/s relative velocity at close approach
/// * `miss_distance_km`: kilometers
/// * `close_approach_date`: ISO date string, passed through from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub id: String,
    pub name: String,
    pub diameter_m: Meter,
    pub velocity_mps: MeterPerSecond,
    pub miss_distance_km: Kilometer,
    pub close_approach_date: String,
}

/// Client for the NeoWs feed and lookup endpoints.
#[derive(Debug, Clone)]
pub struct NeoClient {
    env: SkyfallEnv,
    api_key: String,
    base_url: String,
}

impl NeoClient {
    /// Create a client with an explicit API key.
    ///
    /// Arguments
    /// ---------
    /// * `env`: shared HTTP environment
    /// * `api_key`: the NASA API key; `None` falls back to the public
    ///   rate-limited [`DEMO_API_KEY`]
    pub fn new(env: SkyfallEnv, api_key: Option<String>) -> Self {
        let api_key = api_key.unwrap_or_else(|| {
            warn!("no NASA API key supplied, using the rate-limited demo key");
            DEMO_API_KEY.to_string()
        });
        NeoClient {
            env,
            api_key,
            base_url: NEO_API_BASE.to_string(),
        }
    }

    /// Create a client reading the key from the `NASA_API_KEY` environment
    /// variable, falling back to the demo key when unset.
    pub fn from_env(env: SkyfallEnv) -> Self {
        Self::new(env, std::env::var(API_KEY_ENV_VAR).ok())
    }

    #[cfg(test)]
    pub(crate) fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Fetch the NEO feed between two dates.
    ///
    /// Arguments
    /// ---------
    /// * `start_date`, `end_date`: ISO dates (`YYYY-MM-DD`), passed through to
    ///   the upstream API unvalidated
    ///
    /// Return
    /// ------
    /// * The upstream JSON payload, unchanged
    pub fn fetch_feed(&self, start_date: &str, end_date: &str) -> Result<Value, SkyfallError> {
        debug!(start_date, end_date, "fetching NEO feed");
        let url = format!("{}/feed", self.base_url);
        let body = self.env.get_from_url(
            &url,
            &[
                ("start_date", start_date),
                ("end_date", end_date),
                ("api_key", &self.api_key),
            ],
        )?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch the catalog record of a single NEO by its identifier.
    pub fn fetch_by_id(&self, neo_id: &str) -> Result<Value, SkyfallError> {
        debug!(neo_id, "fetching NEO details");
        let url = format!("{}/neo/{}", self.base_url, neo_id);
        let body = self
            .env
            .get_from_url(&url, &[("api_key", &self.api_key)])?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Extract per-object [`Asteroid`] records from a NeoWs feed payload.
///
/// The feed groups objects under `near_earth_objects.<date>`; each object
/// carries an estimated diameter range in meters and a list of close
/// approaches with stringified velocity and miss-distance figures. One record
/// is produced per object, using its first close approach; objects with
/// missing or malformed fields are skipped.
///
/// Records are sorted by close-approach date, then id, for deterministic
/// output.
pub fn asteroids_from_feed(feed: &Value) -> Vec<Asteroid> {
    let mut asteroids: Vec<Asteroid> = feed
        .get("near_earth_objects")
        .and_then(Value::as_object)
        .into_iter()
        .flat_map(|by_date| by_date.values())
        .filter_map(Value::as_array)
        .flatten()
        .filter_map(asteroid_from_neo)
        .collect();

    asteroids.sort_by(|a, b| {
        (a.close_approach_date.as_str(), a.id.as_str())
            .cmp(&(b.close_approach_date.as_str(), b.id.as_str()))
    });
    asteroids
}

fn asteroid_from_neo(neo: &Value) -> Option<Asteroid> {
    let meters = neo.get("estimated_diameter")?.get("meters")?;
    let diameter_min = meters.get("estimated_diameter_min")?.as_f64()?;
    let diameter_max = meters.get("estimated_diameter_max")?.as_f64()?;

    let approach = neo.get("close_approach_data")?.as_array()?.first()?;
    let velocity_kps: f64 = approach
        .get("relative_velocity")?
        .get("kilometers_per_second")?
        .as_str()?
        .parse()
        .ok()?;
    let miss_distance_km: f64 = approach
        .get("miss_distance")?
        .get("kilometers")?
        .as_str()?
        .parse()
        .ok()?;

    Some(Asteroid {
        id: neo.get("id")?.as_str()?.to_string(),
        name: neo.get("name")?.as_str()?.to_string(),
        diameter_m: (diameter_min + diameter_max) / 2.0,
        velocity_mps: velocity_kps * 1000.0,
        miss_distance_km,
        close_approach_date: approach.get("close_approach_date")?.as_str()?.to_string(),
    })
}

#[cfg(test)]
mod neo_request_test {
    use super::*;

    #[test]
    fn test_default_api_key() {
        let client = NeoClient::new(SkyfallEnv::new(), None);
        assert_eq!(client.api_key, DEMO_API_KEY);

        let client = NeoClient::new(SkyfallEnv::new(), Some("abc123".into()));
        assert_eq!(client.api_key, "abc123");
    }

    #[test]
    fn test_non_2xx_response_is_an_upstream_error() {
        use std::io::{Read, Write};
        use std::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            stream
                .write_all(b"HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
                .unwrap();
        });

        let base = format!("http://{addr}");
        let client = NeoClient::new(SkyfallEnv::new(), None).with_base_url(&base);
        let err = client.fetch_by_id("2465633").unwrap_err();
        match err {
            SkyfallError::UpstreamStatus { status, ref url } => {
                assert_eq!(status, 503);
                assert!(url.contains("/neo/2465633"));
            }
            other => panic!("expected upstream status error, got {other:?}"),
        }
        assert!(!err.is_domain_error());
        server.join().unwrap();
    }

    #[test]
    fn test_asteroid_from_neo_skips_malformed_entries() {
        let missing_approach = serde_json::json!({
            "id": "3726710",
            "name": "(2015 RC)",
            "estimated_diameter": {
                "meters": {
                    "estimated_diameter_min": 13.1,
                    "estimated_diameter_max": 29.3
                }
            },
            "close_approach_data": []
        });
        assert_eq!(asteroid_from_neo(&missing_approach), None);
    }
}
