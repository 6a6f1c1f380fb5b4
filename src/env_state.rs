//! # Skyfall environment state
//!
//! This module defines [`SkyfallEnv`], the shared environment object passed to
//! the external data gateways. It owns a persistent HTTP client configured with
//! a global timeout, so that every upstream request goes through the same agent
//! and the same failure policy.
//!
//! The formula modules never touch this object: only the gateways
//! ([`crate::neo_request`]) perform network access.
//!
//! The struct is cheaply cloneable (the agent is reference-counted internally)
//! and holds no mutable state of its own.

use std::time::Duration;

use ureq::Agent;

use crate::skyfall_errors::SkyfallError;

/// Timeout applied to every upstream HTTP request.
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared environment for external data access.
///
/// # Fields
///
/// * `http_client` - A ureq agent used to make HTTP requests to upstream
///   services, with a 10 s global timeout
#[derive(Debug, Clone)]
pub struct SkyfallEnv {
    pub http_client: Agent,
}

impl Default for SkyfallEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl SkyfallEnv {
    /// Create a new environment with a default-configured HTTP client.
    pub fn new() -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(HTTP_TIMEOUT))
            .build();
        let agent: Agent = config.into();

        SkyfallEnv { http_client: agent }
    }

    /// Perform a GET request with query parameters and return the response body.
    ///
    /// Arguments
    /// ---------
    /// * `url`: the request URL, without query string
    /// * `query`: query parameters appended to the request
    ///
    /// Return
    /// ------
    /// * The response body as a string
    /// * [`SkyfallError::UpstreamStatus`] for a non-2xx response
    /// * [`SkyfallError::UreqHttpError`] for transport failures (DNS, timeout, TLS)
    ///
    /// Failures propagate unchanged to the caller; no retry is attempted.
    pub(crate) fn get_from_url(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<String, SkyfallError> {
        let mut request = self.http_client.get(url);
        for (key, value) in query {
            request = request.query(*key, *value);
        }

        let mut response = request.call().map_err(|err| match err {
            ureq::Error::StatusCode(status) => SkyfallError::UpstreamStatus {
                status,
                url: url.to_string(),
            },
            other => SkyfallError::UreqHttpError(other),
        })?;

        Ok(response.body_mut().read_to_string()?)
    }
}
