//! Registry and aggregation engine for fleets of independently-owned
//! Proxmox VE clusters.
//!
//! Each cluster is reachable only through its own endpoint and
//! credentials. Registration validates credentials against the live
//! remote before anything is persisted; aggregation authenticates, lists
//! the cluster's nodes, and queries every node concurrently, isolating
//! per-node failures so one unreachable node degrades — but never aborts —
//! the aggregate result.
//!
//! The registry is volatile by design: it lives in process memory and is
//! rebuilt by re-registering clusters after a restart.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use proxfleet::{
//!     AggregationService, FleetResult, GatewayConfig, HttpGatewayFactory,
//!     MemoryRegistry, RegisterCluster, RegistrationService,
//! };
//!
//! #[tokio::main]
//! async fn main() -> FleetResult<()> {
//!     let registry = Arc::new(MemoryRegistry::new());
//!     let gateways = Arc::new(HttpGatewayFactory::new(GatewayConfig::from_env())?);
//!
//!     let registration = RegistrationService::new(registry.clone(), gateways.clone());
//!     let aggregation = AggregationService::new(registry, gateways);
//!
//!     let cluster = registration
//!         .register(RegisterCluster {
//!             name: "lab".to_string(),
//!             api_endpoint: "https://pve.example.com:8006".to_string(),
//!             username: "root@pam".to_string(),
//!             password: "secret".to_string(),
//!         })
//!         .await?;
//!
//!     let disks = aggregation.cluster_disks(&cluster.id).await?;
//!     println!("{} disks across {} nodes", disks.total_disks, disks.nodes.len());
//!     Ok(())
//! }
//! ```

mod config;
mod core;
mod fleet;

#[cfg(test)]
mod tests;

pub use crate::config::GatewayConfig;
pub use crate::core::domain::error::{FleetError, FleetResult, ValidationError};
pub use crate::core::domain::gateway::{GatewayFactory, ProxmoxGateway};
pub use crate::core::domain::model::cluster::{Cluster, ClusterHealth, MAX_NAME_LENGTH};
pub use crate::core::domain::model::disk::DiskRecord;
pub use crate::core::domain::model::node::NodeRef;
pub use crate::core::domain::model::node_status::{MemoryUsage, NodeStatusData};
pub use crate::core::domain::model::resource::{ResourceKind, ResourceRecord};
pub use crate::core::domain::model::session::SessionTicket;
pub use crate::core::domain::repository::ClusterRepository;
pub use crate::core::infrastructure::http_gateway::{HttpGateway, HttpGatewayFactory};
pub use crate::core::infrastructure::memory_registry::MemoryRegistry;
pub use crate::fleet::application::request::register_request::RegisterCluster;
pub use crate::fleet::application::response::cluster_record::{ClusterList, ClusterRecord};
pub use crate::fleet::application::response::disk_report::{
    ClusterDisksReport, DiskSummary, NodeDisks,
};
pub use crate::fleet::application::response::status_report::{
    ClusterStatusReport, NodeHealthReport, ResourceSummary,
};
pub use crate::fleet::application::service::aggregation_service::AggregationService;
pub use crate::fleet::application::service::registration_service::RegistrationService;
