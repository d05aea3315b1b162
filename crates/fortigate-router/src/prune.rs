//! Deletion of every non-default static route, in a renumbering-safe order.
//!
//! The appliance renumbers the remaining table entries synchronously after
//! each deletion, shifting later sequence numbers downward. The workflow
//! therefore computes its whole plan from a single snapshot, walks it from
//! the highest sequence number down, and never issues two deletions
//! concurrently.

use crate::client::StaticRouteStore;
use crate::models::StaticRoute;
use crate::Result;
use fortigate_core::Error;
use std::collections::HashSet;
use tracing::{info, warn};

/// Compute the deletion plan for a fetched route table.
///
/// The plan contains every non-default route exactly once, ordered by
/// sequence number descending. Duplicate sequence numbers violate the
/// appliance's uniqueness invariant; planning against such a table could
/// delete an unintended route, so it is refused outright.
///
/// # Errors
///
/// Returns [`Error::DataIntegrity`] if the table carries duplicate
/// sequence numbers.
pub fn deletion_plan(table: &[StaticRoute]) -> Result<Vec<StaticRoute>> {
    let mut seen = HashSet::with_capacity(table.len());
    for route in table {
        if !seen.insert(route.seq_num) {
            return Err(Error::DataIntegrity(format!(
                "duplicate seq-num {} in fetched route table",
                route.seq_num
            )));
        }
    }

    let mut plan: Vec<StaticRoute> = table.iter().filter(|r| !r.is_default()).cloned().collect();
    plan.sort_unstable_by(|a, b| b.seq_num.cmp(&a.seq_num));
    Ok(plan)
}

/// Outcome of one attempted route deletion.
#[derive(Debug, Clone, PartialEq)]
pub struct PruneOutcome {
    /// The route from the pre-deletion snapshot
    pub route: StaticRoute,
    /// Result of the DELETE for this route
    pub result: Result<()>,
}

/// Per-route log of a pruning run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PruneReport {
    /// One entry per planned route, in deletion order
    pub outcomes: Vec<PruneOutcome>,
}

impl PruneReport {
    /// Number of routes deleted successfully.
    #[must_use]
    pub fn deleted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    /// Number of routes whose deletion failed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.deleted()
    }

    /// Returns true if every planned deletion succeeded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    /// Iterate over the failed deletions.
    pub fn failures(&self) -> impl Iterator<Item = &PruneOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }
}

/// Delete every non-default static route.
///
/// Fetches the table once, computes the plan, then issues the deletions
/// strictly one after another. A failed deletion is recorded and the run
/// continues: the remaining plan entries have higher positions in the
/// pre-deletion snapshot than anything already removed, so their sequence
/// numbers are still valid. Re-running the workflow after a partial run is
/// safe; already-deleted routes simply no longer appear in the fetched
/// table.
///
/// # Errors
///
/// Returns an error if the table cannot be fetched or fails the
/// integrity check. Per-route failures are reported in the
/// [`PruneReport`], not as errors.
pub async fn prune_non_default_routes<S>(store: &S) -> Result<PruneReport>
where
    S: StaticRouteStore + ?Sized,
{
    let table = store.list_static_routes().await?;
    let plan = deletion_plan(&table)?;
    info!(
        total = table.len(),
        planned = plan.len(),
        "pruning non-default static routes"
    );

    let mut outcomes = Vec::with_capacity(plan.len());
    for route in plan {
        let result = store.delete_static_route(route.seq_num).await;
        match &result {
            Ok(()) => info!(
                seq_num = route.seq_num,
                dst = %route.dst,
                device = %route.device,
                "deleted static route"
            ),
            Err(err) => warn!(
                seq_num = route.seq_num,
                dst = %route.dst,
                device = %route.device,
                error = %err,
                "failed to delete static route"
            ),
        }
        outcomes.push(PruneOutcome { route, result });
    }

    Ok(PruneReport { outcomes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockStaticRouteStore;
    use fortigate_core::response::VendorErrorKind;
    use mockall::predicate::eq;
    use mockall::Sequence;

    fn route(seq_num: u32, dst: &str, device: &str) -> StaticRoute {
        StaticRoute {
            seq_num,
            dst: dst.to_string(),
            device: device.to_string(),
        }
    }

    fn sample_table() -> Vec<StaticRoute> {
        vec![
            route(1, "0.0.0.0 0.0.0.0", "wan1"),
            route(2, "10.0.0.0 255.0.0.0", "vpn1"),
            route(3, "10.0.0.0 255.0.0.0", "vpn2"),
        ]
    }

    #[test]
    fn plan_excludes_default_and_sorts_descending() {
        let plan = deletion_plan(&sample_table()).unwrap();
        let seq_nums: Vec<u32> = plan.iter().map(|r| r.seq_num).collect();
        assert_eq!(seq_nums, vec![3, 2]);
        assert!(plan.iter().all(|r| !r.is_default()));
    }

    #[test]
    fn plan_includes_every_non_default_route_once() {
        let table = vec![
            route(4, "172.16.0.0 255.240.0.0", "dmz"),
            route(1, "0.0.0.0 0.0.0.0", "wan1"),
            route(9, "192.168.0.0 255.255.0.0", "lan"),
            route(5, "10.0.0.0 255.0.0.0", "vpn1"),
        ];
        let plan = deletion_plan(&table).unwrap();
        let seq_nums: Vec<u32> = plan.iter().map(|r| r.seq_num).collect();
        assert_eq!(seq_nums, vec![9, 5, 4]);
    }

    #[test]
    fn plan_of_empty_table_is_empty() {
        assert!(deletion_plan(&[]).unwrap().is_empty());
    }

    #[test]
    fn plan_of_default_only_table_is_empty() {
        let table = vec![route(1, "0.0.0.0 0.0.0.0", "wan1")];
        assert!(deletion_plan(&table).unwrap().is_empty());
    }

    #[test]
    fn plan_rejects_duplicate_seq_nums() {
        let table = vec![
            route(2, "10.0.0.0 255.0.0.0", "vpn1"),
            route(2, "10.1.0.0 255.255.0.0", "vpn2"),
        ];
        let err = deletion_plan(&table).unwrap_err();
        assert!(matches!(err, Error::DataIntegrity(_)));
    }

    #[test]
    fn plan_rejects_duplicates_even_on_default_routes() {
        // The integrity check covers the whole table, not just the plan
        let table = vec![
            route(1, "0.0.0.0 0.0.0.0", "wan1"),
            route(1, "0.0.0.0 0.0.0.0", "wan2"),
        ];
        assert!(deletion_plan(&table).is_err());
    }

    #[tokio::test]
    async fn prune_deletes_in_descending_order() {
        let mut store = MockStaticRouteStore::new();
        store
            .expect_list_static_routes()
            .times(1)
            .returning(|| Ok(sample_table()));

        let mut seq = Sequence::new();
        store
            .expect_delete_static_route()
            .with(eq(3))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        store
            .expect_delete_static_route()
            .with(eq(2))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let report = prune_non_default_routes(&store).await.unwrap();
        assert_eq!(report.deleted(), 2);
        assert_eq!(report.failed(), 0);
        assert!(report.is_clean());
    }

    #[tokio::test]
    async fn prune_continues_past_a_failed_deletion() {
        let mut store = MockStaticRouteStore::new();
        store
            .expect_list_static_routes()
            .times(1)
            .returning(|| Ok(sample_table()));
        store
            .expect_delete_static_route()
            .with(eq(3))
            .times(1)
            .returning(|_| Err(Error::Vendor(VendorErrorKind::PermissionDenied)));
        store
            .expect_delete_static_route()
            .with(eq(2))
            .times(1)
            .returning(|_| Ok(()));

        let report = prune_non_default_routes(&store).await.unwrap();
        assert_eq!(report.deleted(), 1);
        assert_eq!(report.failed(), 1);
        assert!(!report.is_clean());

        let failed: Vec<u32> = report.failures().map(|o| o.route.seq_num).collect();
        assert_eq!(failed, vec![3]);
    }

    #[tokio::test]
    async fn prune_records_transport_failures_and_continues() {
        let mut store = MockStaticRouteStore::new();
        store
            .expect_list_static_routes()
            .times(1)
            .returning(|| Ok(sample_table()));
        store
            .expect_delete_static_route()
            .with(eq(3))
            .times(1)
            .returning(|_| Err(Error::Timeout("deadline elapsed".to_string())));
        store
            .expect_delete_static_route()
            .with(eq(2))
            .times(1)
            .returning(|_| Ok(()));

        let report = prune_non_default_routes(&store).await.unwrap();
        assert_eq!(report.failed(), 1);
        assert_eq!(report.deleted(), 1);
    }

    #[tokio::test]
    async fn prune_aborts_on_fetch_failure() {
        let mut store = MockStaticRouteStore::new();
        store
            .expect_list_static_routes()
            .times(1)
            .returning(|| Err(Error::Unreachable("connection refused".to_string())));
        store.expect_delete_static_route().times(0);

        let err = prune_non_default_routes(&store).await.unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn prune_aborts_on_malformed_table_without_deleting() {
        let mut store = MockStaticRouteStore::new();
        store
            .expect_list_static_routes()
            .times(1)
            .returning(|| Err(Error::MalformedResponse("missing results key".to_string())));
        store.expect_delete_static_route().times(0);

        let err = prune_non_default_routes(&store).await.unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn prune_aborts_on_duplicate_seq_nums_without_deleting() {
        let mut store = MockStaticRouteStore::new();
        store.expect_list_static_routes().times(1).returning(|| {
            Ok(vec![
                route(2, "10.0.0.0 255.0.0.0", "vpn1"),
                route(2, "10.1.0.0 255.255.0.0", "vpn2"),
            ])
        });
        store.expect_delete_static_route().times(0);

        let err = prune_non_default_routes(&store).await.unwrap_err();
        assert!(matches!(err, Error::DataIntegrity(_)));
    }

    #[tokio::test]
    async fn prune_of_already_pruned_table_is_a_no_op() {
        let mut store = MockStaticRouteStore::new();
        store
            .expect_list_static_routes()
            .times(1)
            .returning(|| Ok(vec![route(1, "0.0.0.0 0.0.0.0", "wan1")]));
        store.expect_delete_static_route().times(0);

        let report = prune_non_default_routes(&store).await.unwrap();
        assert!(report.outcomes.is_empty());
        assert!(report.is_clean());
    }
}
