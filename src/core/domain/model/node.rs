//! Node entries from the `/nodes` listing.

use serde::{Deserialize, Serialize};

/// A node as reported by the cluster's node listing.
///
/// `status` is the reachability state from the listing ("online"/"offline"),
/// independent of whether a later per-node detail query succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NodeRef {
    /// The node name (e.g., "pve1").
    #[serde(rename = "node")]
    pub name: String,
    /// Reachability as reported by the listing.
    pub status: String,
}

impl NodeRef {
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: status.into(),
        }
    }
}
