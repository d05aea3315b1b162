//! Asynchronous client for the system API endpoints.

use crate::Result;
use fortigate_core::client::FortigateClient;
use fortigate_core::types::CmdbResponse;
use serde::Deserialize;

/// Scope of a configuration backup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackupScope {
    /// Full appliance configuration
    #[default]
    Global,
    /// Current virtual domain only
    Vdom,
}

impl BackupScope {
    /// Query-parameter value for this scope.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Vdom => "vdom",
        }
    }
}

#[derive(Debug, Deserialize)]
struct GlobalSettings {
    hostname: String,
}

/// Asynchronous system API client.
#[derive(Debug, Clone)]
pub struct SystemClient {
    inner: FortigateClient,
}

impl SystemClient {
    /// Wrap an appliance transport.
    #[must_use]
    pub const fn new(client: FortigateClient) -> Self {
        Self { inner: client }
    }

    /// Fetch the appliance hostname from the global system settings.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the exchange fails and
    /// [`fortigate_core::Error::MalformedResponse`] if the body does not
    /// carry a hostname.
    pub async fn hostname(&self) -> Result<String> {
        let envelope: CmdbResponse<GlobalSettings> =
            self.inner.get_json("cmdb/system/global", &[]).await?;
        Ok(envelope.results.hostname)
    }

    /// Download the running configuration.
    ///
    /// The body is the configuration file itself, not JSON; it is returned
    /// verbatim.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the exchange fails or the appliance
    /// answers with a non-success HTTP status.
    pub async fn config_backup(&self, scope: BackupScope) -> Result<String> {
        self.inner
            .get(
                "monitor/system/config/backup/",
                &[("scope", scope.as_str().to_string())],
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fortigate_core::Error;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> SystemClient {
        SystemClient::new(FortigateClient::new(server.uri()).unwrap())
    }

    #[test]
    fn backup_scope_as_str() {
        assert_eq!(BackupScope::Global.as_str(), "global");
        assert_eq!(BackupScope::Vdom.as_str(), "vdom");
        assert_eq!(BackupScope::default(), BackupScope::Global);
    }

    #[tokio::test]
    async fn hostname_reads_global_settings() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/cmdb/system/global"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "http_status": 200,
                "results": {"hostname": "branch-fw-01", "admintimeout": 5}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        assert_eq!(client.hostname().await.unwrap(), "branch-fw-01");
    }

    #[tokio::test]
    async fn hostname_missing_field_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/cmdb/system/global"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "http_status": 200,
                "results": {"admintimeout": 5}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client.hostname().await.unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn config_backup_returns_raw_configuration() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/monitor/system/config/backup/"))
            .and(query_param("scope", "global"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("#config-version=FGT60E-6.4.5\nconfig system global\nend\n"),
            )
            .mount(&server)
            .await;

        let client = test_client(&server);
        let config = client.config_backup(BackupScope::Global).await.unwrap();
        assert!(config.starts_with("#config-version="));
    }

    #[tokio::test]
    async fn config_backup_failure_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/monitor/system/config/backup/"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client.config_backup(BackupScope::Global).await.unwrap_err();
        assert!(matches!(err, Error::Http(_)));
    }
}
