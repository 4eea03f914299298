//! Concurrent fan-out aggregation over a cluster's nodes.
//!
//! Both operations share the same shape: look the cluster up,
//! authenticate, list its nodes, then query every node in parallel and
//! merge the results back in listing order. A result slot is allocated per
//! node before any task starts; each task resolves exactly one slot, so a
//! single unreachable node degrades its own slot and nothing else.
//!
//! Dropping the returned future (caller timeout or cancellation) aborts
//! every still-running per-node task along with its in-flight request.

use crate::core::domain::error::{FleetError, FleetResult};
use crate::core::domain::gateway::{GatewayFactory, ProxmoxGateway};
use crate::core::domain::model::cluster::Cluster;
use crate::core::domain::model::node::NodeRef;
use crate::core::domain::model::session::SessionTicket;
use crate::core::domain::repository::ClusterRepository;
use crate::fleet::application::response::disk_report::{ClusterDisksReport, NodeDisks};
use crate::fleet::application::response::status_report::{
    ClusterStatusReport, NodeHealthReport, ResourceSummary,
};
use chrono::Utc;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// Produces aggregated per-node views of a registered cluster.
pub struct AggregationService {
    repository: Arc<dyn ClusterRepository>,
    gateways: Arc<dyn GatewayFactory>,
}

impl AggregationService {
    pub fn new(repository: Arc<dyn ClusterRepository>, gateways: Arc<dyn GatewayFactory>) -> Self {
        Self {
            repository,
            gateways,
        }
    }

    /// Collects the disk inventory of every node in the cluster.
    ///
    /// Per-node failures are recorded in the affected node's slot; the
    /// operation itself fails only if the cluster is unknown,
    /// authentication is refused, or the node listing cannot be fetched.
    pub async fn cluster_disks(&self, cluster_id: &str) -> FleetResult<ClusterDisksReport> {
        let (cluster, gateway, session, nodes) = self.open_cluster(cluster_id).await?;

        let (node_reports, total_disks) = fan_out_disks(gateway, &session, &nodes).await;

        info!(cluster_id = %cluster.id(), total_disks, "cluster disks collected");
        Ok(ClusterDisksReport {
            cluster_id: cluster.id().to_string(),
            cluster_name: cluster.name().to_string(),
            nodes: node_reports,
            total_disks,
        })
    }

    /// Collects the health status of every node plus a cluster-wide
    /// VM/container summary.
    ///
    /// The summary comes from a single resource-listing call, independent
    /// of the per-node fan-out; if that call fails the summary degrades to
    /// all-zero counts without failing the request.
    pub async fn cluster_status(&self, cluster_id: &str) -> FleetResult<ClusterStatusReport> {
        let (cluster, gateway, session, nodes) = self.open_cluster(cluster_id).await?;

        let resources = match gateway.cluster_resources(&session).await {
            Ok(resources) => resources,
            Err(e) => {
                warn!(cluster_id = %cluster.id(), error = %e, "resource listing failed, summary degraded");
                Vec::new()
            }
        };
        let resource_summary = ResourceSummary::tally(&resources);

        let node_reports = fan_out_status(gateway, &session, &nodes).await;

        info!(cluster_id = %cluster.id(), "cluster status collected");
        Ok(ClusterStatusReport {
            cluster_id: cluster.id().to_string(),
            cluster_name: cluster.name().to_string(),
            nodes: node_reports,
            resource_summary,
            fetched_at: Utc::now(),
        })
    }

    /// Shared preamble of both aggregations: registry lookup, gateway
    /// construction, authentication, node listing. Any failure here aborts
    /// the whole operation — there is nothing to fan out over yet.
    async fn open_cluster(
        &self,
        cluster_id: &str,
    ) -> FleetResult<(Cluster, Arc<dyn ProxmoxGateway>, SessionTicket, Vec<NodeRef>)> {
        if cluster_id.is_empty() {
            return Err(FleetError::InvalidClusterId);
        }
        let cluster = self.repository.find_by_id(cluster_id).await?;

        let gateway = self.gateways.open(cluster.api_endpoint());
        let session = gateway
            .authenticate(cluster.username(), cluster.password())
            .await
            .map_err(|e| match e {
                FleetError::Authentication(_) => e,
                other => FleetError::Authentication(other.to_string()),
            })?;

        let nodes = gateway.list_nodes(&session).await?;
        Ok((cluster, gateway, session, nodes))
    }
}

/// Queries every node's disk listing concurrently.
///
/// Slots are pre-allocated and indexed by listing position, so output
/// order is deterministic regardless of completion order. The merge loop
/// is the single writer of both the slots and the running disk total.
async fn fan_out_disks(
    gateway: Arc<dyn ProxmoxGateway>,
    session: &SessionTicket,
    nodes: &[NodeRef],
) -> (Vec<NodeDisks>, u64) {
    let mut slots: Vec<Option<NodeDisks>> = (0..nodes.len()).map(|_| None).collect();
    let mut tasks = JoinSet::new();

    for (index, node) in nodes.iter().cloned().enumerate() {
        let gateway = Arc::clone(&gateway);
        let session = session.clone();
        tasks.spawn(async move {
            let report = match gateway.list_node_disks(&session, &node.name).await {
                Ok(disks) => NodeDisks::collected(&node, disks),
                Err(e) => {
                    warn!(node = %node.name, error = %e, "disk query failed for node");
                    NodeDisks::failed(&node, e.to_string())
                }
            };
            (index, report)
        });
    }

    let mut total_disks = 0u64;
    while let Some(joined) = tasks.join_next().await {
        if let Ok((index, report)) = joined {
            total_disks += report.disks.len() as u64;
            slots[index] = Some(report);
        }
    }

    let reports = nodes
        .iter()
        .zip(slots)
        .map(|(node, slot)| {
            slot.unwrap_or_else(|| NodeDisks::failed(node, "node task did not complete"))
        })
        .collect();
    (reports, total_disks)
}

/// Queries every node's status concurrently. Same slot discipline as
/// [`fan_out_disks`].
async fn fan_out_status(
    gateway: Arc<dyn ProxmoxGateway>,
    session: &SessionTicket,
    nodes: &[NodeRef],
) -> Vec<NodeHealthReport> {
    let mut slots: Vec<Option<NodeHealthReport>> = (0..nodes.len()).map(|_| None).collect();
    let mut tasks = JoinSet::new();

    for (index, node) in nodes.iter().cloned().enumerate() {
        let gateway = Arc::clone(&gateway);
        let session = session.clone();
        tasks.spawn(async move {
            let report = match gateway.node_status(&session, &node.name).await {
                Ok(status) => NodeHealthReport::observed(&node, status),
                Err(e) => {
                    warn!(node = %node.name, error = %e, "status query failed for node");
                    NodeHealthReport::failed(&node, e.to_string())
                }
            };
            (index, report)
        });
    }

    while let Some(joined) = tasks.join_next().await {
        if let Ok((index, report)) = joined {
            slots[index] = Some(report);
        }
    }

    nodes
        .iter()
        .zip(slots)
        .map(|(node, slot)| {
            slot.unwrap_or_else(|| NodeHealthReport::failed(node, "node task did not complete"))
        })
        .collect()
}
