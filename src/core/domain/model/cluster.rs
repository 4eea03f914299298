//! The registered-cluster entity and its health states.

use crate::core::domain::error::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum length of a cluster display name, in characters.
pub const MAX_NAME_LENGTH: usize = 255;

/// Health of a registered cluster as last observed by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterHealth {
    Healthy,
    Degraded,
    Unhealthy,
    Unknown,
}

/// A Proxmox cluster registered with the fleet.
///
/// The entity lives in process memory only; credentials are never written
/// to disk. `version` and `node_count` are `None` when the best-effort
/// enrichment during registration failed, which keeps the fallback
/// distinguishable from values the remote system actually reported.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    id: String,
    name: String,
    api_endpoint: String,
    username: String,
    password: String,
    health: ClusterHealth,
    version: Option<String>,
    node_count: Option<u32>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Cluster {
    /// Creates a new cluster entity with `Unknown` health and no
    /// enrichment data yet.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        api_endpoint: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            api_endpoint: api_endpoint.into(),
            username: username.into(),
            password: password.into(),
            health: ClusterHealth::Unknown,
            version: None,
            node_count: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn health(&self) -> ClusterHealth {
        self.health
    }

    /// Remote-reported Proxmox version, if enrichment succeeded.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Remote-reported node count, if enrichment succeeded.
    pub fn node_count(&self) -> Option<u32> {
        self.node_count
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns true if the cluster is in a healthy state.
    pub fn is_healthy(&self) -> bool {
        self.health == ClusterHealth::Healthy
    }

    /// Updates the health status and refreshes the update timestamp.
    pub fn set_health(&mut self, health: ClusterHealth) {
        self.health = health;
        self.touch();
    }

    /// Records the remote-reported version and refreshes the update timestamp.
    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = Some(version.into());
        self.touch();
    }

    /// Records the remote-reported node count and refreshes the update timestamp.
    pub fn set_node_count(&mut self, count: u32) {
        self.node_count = Some(count);
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Validates the entity invariants: every identifying field must be
    /// non-empty and the name must fit within [`MAX_NAME_LENGTH`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::Field {
                field: "id".to_string(),
                message: "cluster id cannot be empty".to_string(),
            });
        }
        if self.name.is_empty() {
            return Err(ValidationError::Field {
                field: "name".to_string(),
                message: "cluster name cannot be empty".to_string(),
            });
        }
        if self.name.chars().count() > MAX_NAME_LENGTH {
            return Err(ValidationError::ConstraintViolation(format!(
                "cluster name exceeds maximum of {} characters",
                MAX_NAME_LENGTH
            )));
        }
        if self.api_endpoint.is_empty() {
            return Err(ValidationError::Field {
                field: "api_endpoint".to_string(),
                message: "api endpoint cannot be empty".to_string(),
            });
        }
        if self.username.is_empty() {
            return Err(ValidationError::Field {
                field: "username".to_string(),
                message: "username cannot be empty".to_string(),
            });
        }
        if self.password.is_empty() {
            return Err(ValidationError::Field {
                field: "password".to_string(),
                message: "password cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity() -> Cluster {
        Cluster::new(
            "c-1",
            "lab",
            "https://pve.example.com:8006",
            "root@pam",
            "secret",
        )
    }

    #[test]
    fn new_cluster_starts_unknown_with_matching_timestamps() {
        let cluster = entity();
        assert_eq!(cluster.health(), ClusterHealth::Unknown);
        assert_eq!(cluster.version(), None);
        assert_eq!(cluster.node_count(), None);
        assert_eq!(cluster.created_at(), cluster.updated_at());
    }

    #[test]
    fn mutators_refresh_updated_at() {
        let mut cluster = entity();
        let created = cluster.created_at();

        cluster.set_health(ClusterHealth::Healthy);
        assert!(cluster.is_healthy());
        assert!(cluster.updated_at() >= created);

        cluster.set_version("8.1.4");
        assert_eq!(cluster.version(), Some("8.1.4"));

        cluster.set_node_count(3);
        assert_eq!(cluster.node_count(), Some(3));
        assert!(cluster.updated_at() >= created);
    }

    #[test]
    fn validate_accepts_complete_entity() {
        assert!(entity().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_fields() {
        let cases = [
            Cluster::new("", "lab", "https://pve:8006", "root@pam", "x"),
            Cluster::new("c-1", "", "https://pve:8006", "root@pam", "x"),
            Cluster::new("c-1", "lab", "", "root@pam", "x"),
            Cluster::new("c-1", "lab", "https://pve:8006", "", "x"),
            Cluster::new("c-1", "lab", "https://pve:8006", "root@pam", ""),
        ];
        for cluster in cases {
            assert!(cluster.validate().is_err());
        }
    }

    #[test]
    fn validate_rejects_overlong_name() {
        let cluster = Cluster::new(
            "c-1",
            "a".repeat(MAX_NAME_LENGTH + 1),
            "https://pve:8006",
            "root@pam",
            "x",
        );
        assert!(matches!(
            cluster.validate(),
            Err(ValidationError::ConstraintViolation(_))
        ));
    }
}
