//! Asynchronous client for the `cmdb/router/` endpoints.

use crate::models::{RouteSnapshot, StaticRoute};
use crate::Result;
use async_trait::async_trait;
use fortigate_core::client::FortigateClient;
use fortigate_core::types::CmdbResponse;

/// Access to the appliance's static route table.
///
/// [`RouterClient`] is the real implementation; the trait exists so the
/// pruning workflow can be exercised against a mock store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StaticRouteStore: Send + Sync {
    /// Fetch the full static route table as a point-in-time snapshot.
    async fn list_static_routes(&self) -> Result<Vec<StaticRoute>>;

    /// Delete the route at the given sequence number.
    async fn delete_static_route(&self, seq_num: u32) -> Result<()>;
}

/// Asynchronous router API client.
#[derive(Debug, Clone)]
pub struct RouterClient {
    inner: FortigateClient,
}

impl RouterClient {
    /// Wrap an appliance transport.
    #[must_use]
    pub const fn new(client: FortigateClient) -> Self {
        Self { inner: client }
    }

    /// Fetch the static route table.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the exchange fails and
    /// [`fortigate_core::Error::MalformedResponse`] if the body is not a
    /// valid route-table document.
    pub async fn list_static_routes(&self) -> Result<Vec<StaticRoute>> {
        let envelope: CmdbResponse<Vec<StaticRoute>> =
            self.inner.get_json("cmdb/router/static/", &[]).await?;
        Ok(envelope.results)
    }

    /// Delete the static route at the given sequence number.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the exchange fails, or the interpreted
    /// vendor outcome if the appliance rejects the deletion.
    pub async fn delete_static_route(&self, seq_num: u32) -> Result<()> {
        self.inner
            .delete(&format!("cmdb/router/static/{seq_num}"))
            .await
    }

    /// Fetch the static, policy, and OSPF routing documents in one pass.
    ///
    /// # Errors
    ///
    /// Returns a transport error if any of the three fetches fails.
    pub async fn route_snapshot(&self) -> Result<RouteSnapshot> {
        Ok(RouteSnapshot {
            static_routes: self.inner.get_json("cmdb/router/static/", &[]).await?,
            policy_routes: self.inner.get_json("cmdb/router/policy/", &[]).await?,
            ospf: self.inner.get_json("cmdb/router/ospf/", &[]).await?,
        })
    }
}

#[async_trait]
impl StaticRouteStore for RouterClient {
    async fn list_static_routes(&self) -> Result<Vec<StaticRoute>> {
        Self::list_static_routes(self).await
    }

    async fn delete_static_route(&self, seq_num: u32) -> Result<()> {
        Self::delete_static_route(self, seq_num).await
    }
}
