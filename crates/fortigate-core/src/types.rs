//! Response envelope types shared by the API crates.

use serde::Deserialize;

/// Envelope the appliance wraps around `cmdb` responses.
///
/// Table endpoints return `results` as an array, single-object endpoints as
/// a map; the type parameter covers both.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CmdbResponse<T> {
    /// Payload of the response
    pub results: T,
}
