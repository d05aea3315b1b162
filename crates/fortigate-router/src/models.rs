//! Router models shared by the client and the pruning workflow.

use serde::{Deserialize, Serialize};

/// Destination of the default route (`network mask` form).
pub const DEFAULT_ROUTE_DST: &str = "0.0.0.0 0.0.0.0";

/// One entry of the appliance's static route table.
///
/// The sequence number is assigned by the appliance and unique within the
/// table at fetch time, but it is not stable: deleting an entry renumbers
/// everything behind it. A fetched route is a read-only snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StaticRoute {
    /// Appliance-assigned position within the route table
    #[serde(rename = "seq-num")]
    pub seq_num: u32,
    /// Destination as a "network mask" pair, e.g. `10.0.0.0 255.0.0.0`
    pub dst: String,
    /// Outgoing interface
    pub device: String,
}

impl StaticRoute {
    /// Returns true if this entry is the default route.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.dst == DEFAULT_ROUTE_DST
    }
}

/// Raw routing documents fetched in one pass, for display or diffing.
///
/// The appliance returns different shapes per routing protocol, so these are
/// kept as untyped JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSnapshot {
    /// `cmdb/router/static/` response
    pub static_routes: serde_json::Value,
    /// `cmdb/router/policy/` response
    pub policy_routes: serde_json::Value,
    /// `cmdb/router/ospf/` response
    pub ospf: serde_json::Value,
}
