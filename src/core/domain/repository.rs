//! Storage port for registered clusters.

use crate::core::domain::error::FleetResult;
use crate::core::domain::model::cluster::Cluster;
use async_trait::async_trait;

/// Store of registered clusters.
///
/// Implementations must be safe under concurrent readers and writers.
/// `save` validates the entity but does not enforce name uniqueness —
/// that is the registration workflow's responsibility, checked through
/// [`ClusterRepository::find_by_name`] before committing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClusterRepository: Send + Sync {
    /// Inserts or replaces a cluster by id.
    ///
    /// # Errors
    /// Returns `FleetError::Validation` if the entity fails validation.
    async fn save(&self, cluster: Cluster) -> FleetResult<()>;

    /// Looks a cluster up by id.
    ///
    /// # Errors
    /// `FleetError::InvalidClusterId` for an empty id,
    /// `FleetError::NotFound` if absent.
    async fn find_by_id(&self, id: &str) -> FleetResult<Cluster>;

    /// Looks a cluster up by display name (linear scan).
    ///
    /// Returns the first match; names are expected unique by construction.
    ///
    /// # Errors
    /// `FleetError::NotFound` if absent.
    async fn find_by_name(&self, name: &str) -> FleetResult<Cluster>;

    /// Returns all registered clusters in unspecified order.
    async fn list(&self) -> FleetResult<Vec<Cluster>>;

    /// Removes a cluster by id.
    ///
    /// # Errors
    /// `FleetError::InvalidClusterId` for an empty id,
    /// `FleetError::NotFound` if absent.
    async fn delete(&self, id: &str) -> FleetResult<()>;

    /// Existence probe. Never fails; an empty id is simply absent.
    async fn exists(&self, id: &str) -> bool;
}
