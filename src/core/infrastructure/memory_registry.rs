//! In-memory implementation of the cluster repository.
//!
//! Suitable for a registry whose lifecycle is tied to the owning process;
//! nothing survives a restart.

use crate::core::domain::error::{FleetError, FleetResult};
use crate::core::domain::model::cluster::Cluster;
use crate::core::domain::repository::ClusterRepository;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Concurrency-safe in-memory cluster store.
///
/// A single reader/writer lock guards the whole map: writes are exclusive,
/// reads proceed concurrently with each other. All operations are O(1)
/// except `find_by_name` and `list`, which scan.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    clusters: RwLock<HashMap<String, Cluster>>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClusterRepository for MemoryRegistry {
    async fn save(&self, cluster: Cluster) -> FleetResult<()> {
        cluster.validate()?;
        let mut clusters = self.clusters.write().await;
        clusters.insert(cluster.id().to_string(), cluster);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> FleetResult<Cluster> {
        if id.is_empty() {
            return Err(FleetError::InvalidClusterId);
        }
        let clusters = self.clusters.read().await;
        clusters
            .get(id)
            .cloned()
            .ok_or_else(|| FleetError::NotFound(format!("cluster with id {}", id)))
    }

    async fn find_by_name(&self, name: &str) -> FleetResult<Cluster> {
        let clusters = self.clusters.read().await;
        clusters
            .values()
            .find(|c| c.name() == name)
            .cloned()
            .ok_or_else(|| FleetError::NotFound(format!("cluster with name {}", name)))
    }

    async fn list(&self) -> FleetResult<Vec<Cluster>> {
        let clusters = self.clusters.read().await;
        Ok(clusters.values().cloned().collect())
    }

    async fn delete(&self, id: &str) -> FleetResult<()> {
        if id.is_empty() {
            return Err(FleetError::InvalidClusterId);
        }
        let mut clusters = self.clusters.write().await;
        if clusters.remove(id).is_none() {
            return Err(FleetError::NotFound(format!("cluster with id {}", id)));
        }
        Ok(())
    }

    async fn exists(&self, id: &str) -> bool {
        if id.is_empty() {
            return false;
        }
        let clusters = self.clusters.read().await;
        clusters.contains_key(id)
    }
}
