use serde::Deserialize;

/// Request to register a new cluster with the fleet.
///
/// Credentials are held only for the duration of the workflow and inside
/// the resulting in-memory entity; they are never persisted to disk.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterCluster {
    /// Display name, unique across the registry.
    pub name: String,
    /// Cluster API endpoint (e.g., "https://pve.example.com:8006").
    pub api_endpoint: String,
    /// Username including realm (e.g., "root@pam").
    pub username: String,
    pub password: String,
}
