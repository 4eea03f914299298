//! Remote-gateway port: the operations the core consumes from a cluster's
//! management API. Implemented by the reqwest adapter in
//! `core::infrastructure::http_gateway`; mocked in service tests.

use crate::core::domain::error::FleetResult;
use crate::core::domain::model::disk::DiskRecord;
use crate::core::domain::model::node::NodeRef;
use crate::core::domain::model::node_status::NodeStatusData;
use crate::core::domain::model::resource::ResourceRecord;
use crate::core::domain::model::session::SessionTicket;
use async_trait::async_trait;
use std::sync::Arc;

/// Client bound to one cluster endpoint.
///
/// Every operation except `authenticate` requires a [`SessionTicket`]
/// obtained from the same gateway; tickets are never reused across
/// operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProxmoxGateway: Send + Sync {
    /// Validates credentials against the live endpoint.
    ///
    /// # Errors
    /// `FleetError::Authentication` when the remote rejects the
    /// credentials, `FleetError::Connection` when it cannot be reached.
    async fn authenticate(&self, username: &str, password: &str) -> FleetResult<SessionTicket>;

    /// Fetches the remote system's version string.
    async fn version(&self, session: &SessionTicket) -> FleetResult<String>;

    /// Counts the nodes in the cluster.
    async fn node_count(&self, session: &SessionTicket) -> FleetResult<usize>;

    /// Lists the cluster's nodes, in the order the remote reports them.
    async fn list_nodes(&self, session: &SessionTicket) -> FleetResult<Vec<NodeRef>>;

    /// Lists the physical disks of one node.
    async fn list_node_disks(
        &self,
        session: &SessionTicket,
        node: &str,
    ) -> FleetResult<Vec<DiskRecord>>;

    /// Fetches the detailed status of one node.
    async fn node_status(&self, session: &SessionTicket, node: &str)
    -> FleetResult<NodeStatusData>;

    /// Lists cluster-wide resources (VMs, containers, storage, nodes).
    async fn cluster_resources(&self, session: &SessionTicket)
    -> FleetResult<Vec<ResourceRecord>>;
}

/// Produces a gateway bound to an endpoint supplied at call time.
///
/// Clusters are not known until registration, so gateways cannot be
/// constructed ahead of time.
pub trait GatewayFactory: Send + Sync {
    fn open(&self, endpoint: &str) -> Arc<dyn ProxmoxGateway>;
}
