use crate::core::domain::model::cluster::{Cluster, ClusterHealth};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A registered cluster as exposed to callers.
///
/// Enrichment fields that failed during registration render as the
/// `"unknown"` / `0` wire values; the entity itself keeps them as `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterRecord {
    pub id: String,
    pub name: String,
    pub api_endpoint: String,
    pub status: ClusterHealth,
    pub proxmox_version: String,
    pub node_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Cluster> for ClusterRecord {
    fn from(cluster: &Cluster) -> Self {
        Self {
            id: cluster.id().to_string(),
            name: cluster.name().to_string(),
            api_endpoint: cluster.api_endpoint().to_string(),
            status: cluster.health(),
            proxmox_version: cluster.version().unwrap_or("unknown").to_string(),
            node_count: cluster.node_count().unwrap_or(0),
            created_at: cluster.created_at(),
            updated_at: cluster.updated_at(),
        }
    }
}

/// All registered clusters plus their count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterList {
    pub clusters: Vec<ClusterRecord>,
    pub total: usize,
}
