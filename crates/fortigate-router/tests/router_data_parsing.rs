//! Integration tests for parsing router API data.
//!
//! These tests validate that the fortigate-router models can correctly
//! deserialize an actual appliance route-table response, and that planning
//! behaves as expected against it.

use std::fs;
use std::path::PathBuf;

use fortigate_core::types::CmdbResponse;
use fortigate_router::{deletion_plan, StaticRoute};

/// Get the path to the test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load the route table fixture from disk.
fn load_route_table_fixture() -> String {
    let fixture_path = fixtures_dir().join("static_route_table.json");
    fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read route table fixture at {}: {}",
            fixture_path.display(),
            e
        )
    })
}

#[test]
fn test_deserialize_route_table() {
    let json_data = load_route_table_fixture();

    let envelope: CmdbResponse<Vec<StaticRoute>> =
        serde_json::from_str(&json_data).unwrap_or_else(|e| {
            panic!("Failed to deserialize route table data: {e}\nJSON: {json_data}")
        });

    let routes = envelope.results;
    assert_eq!(routes.len(), 4, "Expected 4 routes in test data");

    // The default route is first and carries the exact default destination
    assert!(routes[0].is_default());
    assert_eq!(routes[0].device, "wan1");

    // Extra appliance fields (gateway, distance, ...) are ignored
    assert_eq!(routes[1].seq_num, 2);
    assert_eq!(routes[1].dst, "10.0.0.0 255.0.0.0");
    assert_eq!(routes[1].device, "VPN_OmniPeak10");
}

#[test]
fn test_plan_from_appliance_data() {
    let json_data = load_route_table_fixture();
    let envelope: CmdbResponse<Vec<StaticRoute>> = serde_json::from_str(&json_data).unwrap();

    let plan = deletion_plan(&envelope.results).unwrap();
    let seq_nums: Vec<u32> = plan.iter().map(|r| r.seq_num).collect();
    assert_eq!(seq_nums, vec![4, 3, 2]);
}
