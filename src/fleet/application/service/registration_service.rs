//! Registration workflow: validate, reject duplicates, authenticate
//! against the live endpoint, best-effort enrich, commit.

use crate::core::domain::error::{FleetError, FleetResult, ValidationError};
use crate::core::domain::gateway::GatewayFactory;
use crate::core::domain::model::cluster::{Cluster, ClusterHealth, MAX_NAME_LENGTH};
use crate::core::domain::repository::ClusterRepository;
use crate::fleet::application::request::register_request::RegisterCluster;
use crate::fleet::application::response::cluster_record::{ClusterList, ClusterRecord};
use std::sync::Arc;
use tracing::{error, info, warn};
use url::Url;
use uuid::Uuid;

/// Manages the lifecycle of registered clusters.
pub struct RegistrationService {
    repository: Arc<dyn ClusterRepository>,
    gateways: Arc<dyn GatewayFactory>,
}

impl RegistrationService {
    pub fn new(repository: Arc<dyn ClusterRepository>, gateways: Arc<dyn GatewayFactory>) -> Self {
        Self {
            repository,
            gateways,
        }
    }

    /// Registers a new cluster.
    ///
    /// The workflow is linear, with no retries:
    /// input validation, duplicate-name check, live authentication,
    /// best-effort version/node-count enrichment, commit. Nothing is
    /// persisted unless authentication succeeds.
    ///
    /// # Errors
    /// `Validation` for malformed input, `AlreadyExists` for a duplicate
    /// name, `Authentication` when the endpoint rejects the credentials,
    /// `Internal` when the commit fails.
    pub async fn register(&self, request: RegisterCluster) -> FleetResult<ClusterRecord> {
        validate_request(&request).map_err(|e| {
            error!(error = %e, "invalid register request");
            FleetError::from(e)
        })?;

        // Duplicate names never reach authentication: no remote call is
        // spent on a doomed request. The check-then-insert pair is not
        // atomic; two racing registrations with the same name can both
        // pass it (see DESIGN.md).
        match self.repository.find_by_name(&request.name).await {
            Ok(_) => {
                warn!(name = %request.name, "cluster name already exists");
                return Err(FleetError::AlreadyExists(request.name));
            }
            Err(FleetError::NotFound(_)) => {}
            Err(e) => return Err(e),
        }

        info!(endpoint = %request.api_endpoint, "authenticating with cluster");
        let gateway = self.gateways.open(&request.api_endpoint);
        let session = gateway
            .authenticate(&request.username, &request.password)
            .await
            .map_err(|e| {
                error!(error = %e, "cluster authentication failed");
                match e {
                    FleetError::Authentication(_) => e,
                    other => FleetError::Authentication(other.to_string()),
                }
            })?;

        // Version and node count are informational; their failure degrades
        // the entity, never the registration.
        let version = match gateway.version(&session).await {
            Ok(version) => Some(version),
            Err(e) => {
                warn!(error = %e, "failed to fetch cluster version");
                None
            }
        };
        let node_count = match gateway.node_count(&session).await {
            Ok(count) => Some(count as u32),
            Err(e) => {
                warn!(error = %e, "failed to fetch node count");
                None
            }
        };

        let mut cluster = Cluster::new(
            Uuid::new_v4().to_string(),
            request.name,
            request.api_endpoint,
            request.username,
            request.password,
        );
        if let Some(version) = version {
            cluster.set_version(version);
        }
        if let Some(count) = node_count {
            cluster.set_node_count(count);
        }
        cluster.set_health(ClusterHealth::Healthy);

        self.repository.save(cluster.clone()).await.map_err(|e| {
            error!(error = %e, "failed to save cluster");
            FleetError::Internal(format!("failed to save cluster: {}", e))
        })?;

        info!(cluster_id = %cluster.id(), name = %cluster.name(), "cluster registered");
        Ok(ClusterRecord::from(&cluster))
    }

    /// Removes a registered cluster. No remote call is made.
    ///
    /// # Errors
    /// `InvalidClusterId` for an empty id, `NotFound` if absent.
    pub async fn deregister(&self, cluster_id: &str) -> FleetResult<()> {
        if cluster_id.is_empty() {
            error!("empty cluster id provided");
            return Err(FleetError::InvalidClusterId);
        }
        self.repository.find_by_id(cluster_id).await?;
        self.repository.delete(cluster_id).await?;
        info!(cluster_id, "cluster deregistered");
        Ok(())
    }

    /// Fetches one registered cluster.
    pub async fn get(&self, cluster_id: &str) -> FleetResult<ClusterRecord> {
        if cluster_id.is_empty() {
            return Err(FleetError::InvalidClusterId);
        }
        let cluster = self.repository.find_by_id(cluster_id).await?;
        Ok(ClusterRecord::from(&cluster))
    }

    /// Lists all registered clusters.
    pub async fn list(&self) -> FleetResult<ClusterList> {
        let clusters = self.repository.list().await?;
        let records: Vec<ClusterRecord> = clusters.iter().map(ClusterRecord::from).collect();
        info!(count = records.len(), "listed clusters");
        Ok(ClusterList {
            total: records.len(),
            clusters: records,
        })
    }
}

fn validate_request(request: &RegisterCluster) -> Result<(), ValidationError> {
    if request.name.is_empty() {
        return Err(ValidationError::Field {
            field: "name".to_string(),
            message: "cluster name is required".to_string(),
        });
    }
    if request.name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::ConstraintViolation(format!(
            "cluster name exceeds maximum of {} characters",
            MAX_NAME_LENGTH
        )));
    }
    if request.api_endpoint.is_empty() {
        return Err(ValidationError::Field {
            field: "api_endpoint".to_string(),
            message: "api endpoint is required".to_string(),
        });
    }
    Url::parse(&request.api_endpoint).map_err(|e| {
        ValidationError::Format(format!("api endpoint is not a valid url: {}", e))
    })?;
    if request.username.is_empty() {
        return Err(ValidationError::Field {
            field: "username".to_string(),
            message: "username is required".to_string(),
        });
    }
    if request.password.is_empty() {
        return Err(ValidationError::Field {
            field: "password".to_string(),
            message: "password is required".to_string(),
        });
    }
    Ok(())
}
