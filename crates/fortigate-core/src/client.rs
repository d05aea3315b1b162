//! Authenticated HTTP transport for the appliance `/api/v2/` surface.
//!
//! [`FortigateClient`] issues GET/POST/PUT/DELETE requests against a single
//! appliance, authenticating with a bearer API key. Paths are given without
//! the `/api/v2/` prefix, mirroring the appliance API layout: `cmdb/...` for
//! configuration endpoints and `monitor/...` for monitor endpoints.
//!
//! GET returns the raw body text for the caller to parse. The mutating verbs
//! decode the vendor status code embedded in the response body (see
//! [`crate::response`]) and report failures as typed errors.

use crate::config::FortigateConfig;
use crate::error::{Error, Result};
use crate::response;
use reqwest::{Certificate, Method};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!("fortigate-core/", env!("CARGO_PKG_VERSION"));

/// Default request timeout for appliance requests.
pub const DEFAULT_TIMEOUT: u64 = 30;

/// Builder for [`FortigateClient`].
#[derive(Debug, Clone)]
pub struct FortigateClientBuilder {
    api_base: Url,
    api_key: Option<SecretString>,
    tls_verify: bool,
    tls_ca_cert: Option<PathBuf>,
    timeout: Duration,
}

impl FortigateClientBuilder {
    /// Create a builder for the given appliance base URL.
    ///
    /// The `/api/v2/` prefix is appended here; pass the bare scheme/host,
    /// e.g. `https://fw.example.com`.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot be parsed.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let mut base = base_url.as_ref().trim_end_matches('/').to_string();
        base.push('/');
        let api_base = Url::parse(&base)?.join("api/v2/")?;

        Ok(Self {
            api_base,
            api_key: None,
            tls_verify: true,
            tls_ca_cert: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT),
        })
    }

    /// Create a builder from an appliance configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured host does not form a valid URL.
    pub fn from_config(config: &FortigateConfig) -> Result<Self> {
        Ok(Self {
            api_base: config.base_url()?,
            api_key: Some(config.api_key.clone()),
            tls_verify: config.tls_verify,
            tls_ca_cert: config.tls_ca_cert.clone(),
            timeout: config.timeout(),
        })
    }

    /// Set the API key sent as a bearer token.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Set whether to verify the appliance TLS certificate.
    #[must_use]
    pub const fn with_tls_verify(mut self, verify: bool) -> Self {
        self.tls_verify = verify;
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the CA bundle cannot be read or the underlying
    /// HTTP client cannot be constructed.
    pub fn build(self) -> Result<FortigateClient> {
        let mut builder = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(self.timeout)
            .danger_accept_invalid_certs(!self.tls_verify);

        if let Some(path) = &self.tls_ca_cert {
            let pem = std::fs::read(path)?;
            builder = builder.add_root_certificate(Certificate::from_pem(&pem)?);
        }

        Ok(FortigateClient {
            http: builder.build()?,
            api_base: self.api_base,
            api_key: self.api_key,
        })
    }
}

/// Asynchronous client for one FortiGate appliance.
#[derive(Debug, Clone)]
pub struct FortigateClient {
    http: reqwest::Client,
    api_base: Url,
    api_key: Option<SecretString>,
}

impl FortigateClient {
    /// Construct a client directly from the appliance base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client
    /// cannot be constructed.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        FortigateClientBuilder::new(base_url)?.build()
    }

    /// Construct a client from an appliance configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be constructed.
    pub fn from_config(config: &FortigateConfig) -> Result<Self> {
        FortigateClientBuilder::from_config(config)?.build()
    }

    /// Return the API base URL (including the `/api/v2/` prefix).
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Send a GET request and return the raw response body.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the exchange fails or the appliance
    /// answers with a non-success HTTP status.
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<String> {
        debug!(path, "GET");
        let mut request = self.http.request(Method::GET, self.endpoint(path)?);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key.expose_secret());
        }
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::Http(format!("GET {path} returned {status}")));
        }
        Ok(body)
    }

    /// Send a GET request and decode the response body as JSON.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the exchange fails and
    /// [`Error::MalformedResponse`] if the body does not decode.
    pub async fn get_json<R>(&self, path: &str, query: &[(&str, String)]) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let body = self.get(path, query).await?;
        serde_json::from_str(&body).map_err(Error::from)
    }

    /// Send a POST request with an optional JSON body.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the exchange fails, or the interpreted
    /// vendor outcome if the appliance rejects the request.
    pub async fn post<B>(&self, path: &str, body: Option<&B>) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.send_checked(Method::POST, path, body).await
    }

    /// Send a PUT request with an optional JSON body.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the exchange fails, or the interpreted
    /// vendor outcome if the appliance rejects the request.
    pub async fn put<B>(&self, path: &str, body: Option<&B>) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.send_checked(Method::PUT, path, body).await
    }

    /// Send a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the exchange fails, or the interpreted
    /// vendor outcome if the appliance rejects the request.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.send_checked::<()>(Method::DELETE, path, None).await
    }

    async fn send_checked<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        debug!(%method, path, "sending request");
        let mut request = self.http.request(method, self.endpoint(path)?);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key.expose_secret());
        }
        if let Some(payload) = body {
            request = request.json(payload);
        }

        let response = request.send().await?;
        let text = response.text().await?;
        response::interpret(&text)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.api_base
            .join(path.trim_start_matches('/'))
            .map_err(Error::from)
    }
}
