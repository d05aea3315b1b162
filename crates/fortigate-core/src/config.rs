//! Appliance connection configuration.
//!
//! This module provides the immutable configuration value that describes how
//! to reach one FortiGate appliance. Clients are built from it and hold no
//! mutable connection state of their own.

use crate::Error;
use secrecy::SecretString;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;
use validator::Validate;

const fn default_tls_verify() -> bool {
    true
}

const fn default_request_timeout_secs() -> u64 {
    30
}

/// Connection configuration for a single FortiGate appliance.
///
/// The API key is held as a [`SecretString`] so it is redacted from `Debug`
/// output. TLS certificate verification is on by default; disabling it is an
/// explicit, per-deployment decision.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FortigateConfig {
    /// Appliance address (IP or DNS name, optionally with `:port`)
    #[validate(length(min = 1, message = "host must not be empty"))]
    pub host: String,

    /// REST API key, sent as a bearer token
    pub api_key: SecretString,

    /// Whether to verify the appliance TLS certificate
    #[serde(default = "default_tls_verify")]
    pub tls_verify: bool,

    /// Optional path to a custom CA certificate bundle (PEM)
    #[serde(default)]
    pub tls_ca_cert: Option<PathBuf>,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl FortigateConfig {
    /// Create a new configuration for the given appliance.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn new(host: impl Into<String>, api_key: impl Into<String>) -> Result<Self, Error> {
        let config = Self {
            host: host.into(),
            api_key: SecretString::from(api_key.into()),
            tls_verify: default_tls_verify(),
            tls_ca_cert: None,
            request_timeout_secs: default_request_timeout_secs(),
        };

        config
            .validate()
            .map_err(|e| Error::Config(format!("Invalid configuration: {e}")))?;

        Ok(config)
    }

    /// Set whether to verify the appliance TLS certificate.
    #[must_use]
    pub const fn with_tls_verify(mut self, verify: bool) -> Self {
        self.tls_verify = verify;
        self
    }

    /// Set a custom CA certificate bundle path.
    #[must_use]
    pub fn with_ca_cert(mut self, path: PathBuf) -> Self {
        self.tls_ca_cert = Some(path);
        self
    }

    /// Set request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = seconds;
        self
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Base URL of the appliance REST surface (`https://{host}/api/v2/`).
    ///
    /// # Errors
    ///
    /// Returns an error if the host does not form a valid URL.
    pub fn base_url(&self) -> Result<Url, Error> {
        Url::parse(&format!("https://{}/api/v2/", self.host))
            .map_err(|e| Error::Config(format!("Invalid appliance host: {e}")))
    }
}
