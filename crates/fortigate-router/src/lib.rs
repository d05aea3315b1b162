//! Router API client and the static-route pruning workflow.
//!
//! Provides typed models for the appliance's static route table, an
//! asynchronous client for `cmdb/router/` endpoints, and a workflow that
//! deletes every non-default static route in an order that is safe against
//! the appliance's sequence-number renumbering.

#![deny(missing_docs)]

pub mod client;
pub mod models;
pub mod prune;

pub use client::{RouterClient, StaticRouteStore};
pub use models::{RouteSnapshot, StaticRoute, DEFAULT_ROUTE_DST};
pub use prune::{deletion_plan, prune_non_default_routes, PruneOutcome, PruneReport};

/// Convenient result alias that reuses the shared error type.
pub type Result<T> = fortigate_core::Result<T>;
