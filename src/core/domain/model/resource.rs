//! Cluster-wide resource records from `/cluster/resources`.
//!
//! The endpoint returns a heterogeneous list (VMs, containers, storage,
//! nodes) discriminated by a `type` field. Only the kind and running state
//! feed the resource summary; the rest is informational.

use serde::{Deserialize, Serialize};

/// Discriminant of a cluster resource entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// A QEMU virtual machine.
    Qemu,
    /// An LXC container.
    Lxc,
    /// A storage entity.
    Storage,
    /// A cluster node.
    Node,
    /// Any other resource type (pools, SDN, ...).
    #[serde(other)]
    Other,
}

/// One entry from the cluster-wide resource listing.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ResourceRecord {
    /// Unique resource identifier (e.g., "qemu/100").
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    /// Resource state ("running", "stopped", "online", ...).
    #[serde(default)]
    pub status: String,
    /// Node the resource resides on, when applicable.
    #[serde(default)]
    pub node: Option<String>,
    /// Human-readable name, when set.
    #[serde(default)]
    pub name: Option<String>,
}

impl ResourceRecord {
    /// Returns true if the resource reports itself as running.
    pub fn is_running(&self) -> bool {
        self.status == "running"
    }
}
