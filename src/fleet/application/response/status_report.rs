//! Node-health aggregate response.

use crate::core::domain::model::node::NodeRef;
use crate::core::domain::model::node_status::NodeStatusData;
use crate::core::domain::model::resource::{ResourceKind, ResourceRecord};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health detail of one node, or the error that prevented collecting it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeHealthReport {
    pub node_name: String,
    /// Reachability as reported by the node listing.
    pub status: String,
    /// CPU usage percentage (0-100).
    pub cpu_usage: f64,
    pub memory_used: u64,
    pub memory_total: u64,
    /// Memory usage percentage (0-100).
    pub memory_usage: f64,
    pub swap_used: u64,
    pub swap_total: u64,
    /// Swap usage percentage (0-100).
    pub swap_usage: f64,
    /// Uptime in seconds.
    pub uptime: u64,
    /// Load average [1min, 5min, 15min].
    pub load_avg: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NodeHealthReport {
    pub(crate) fn observed(node: &NodeRef, status: NodeStatusData) -> Self {
        let memory_usage = percentage(status.memory.used, status.memory.total);
        let swap_usage = percentage(status.swap.used, status.swap.total);
        Self {
            node_name: node.name.clone(),
            status: node.status.clone(),
            cpu_usage: status.cpu * 100.0,
            memory_used: status.memory.used,
            memory_total: status.memory.total,
            memory_usage,
            swap_used: status.swap.used,
            swap_total: status.swap.total,
            swap_usage,
            uptime: status.uptime,
            load_avg: status.loadavg,
            error: None,
        }
    }

    pub(crate) fn failed(node: &NodeRef, error: impl Into<String>) -> Self {
        Self {
            node_name: node.name.clone(),
            status: node.status.clone(),
            cpu_usage: 0.0,
            memory_used: 0,
            memory_total: 0,
            memory_usage: 0.0,
            swap_used: 0,
            swap_total: 0,
            swap_usage: 0.0,
            uptime: 0,
            load_avg: Vec::new(),
            error: Some(error.into()),
        }
    }
}

fn percentage(used: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    used as f64 / total as f64 * 100.0
}

/// VM and container counts reduced from the cluster-wide resource listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResourceSummary {
    pub total_vms: u32,
    pub running_vms: u32,
    pub total_containers: u32,
    pub running_containers: u32,
}

impl ResourceSummary {
    /// Pure reduction over the resource listing; storage and node entries
    /// are ignored.
    pub(crate) fn tally(resources: &[ResourceRecord]) -> Self {
        let mut summary = Self::default();
        for resource in resources {
            match resource.kind {
                ResourceKind::Qemu => {
                    summary.total_vms += 1;
                    if resource.is_running() {
                        summary.running_vms += 1;
                    }
                }
                ResourceKind::Lxc => {
                    summary.total_containers += 1;
                    if resource.is_running() {
                        summary.running_containers += 1;
                    }
                }
                ResourceKind::Storage | ResourceKind::Node | ResourceKind::Other => {}
            }
        }
        summary
    }
}

/// Cluster-wide health report, one entry per node in listing order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterStatusReport {
    pub cluster_id: String,
    pub cluster_name: String,
    pub nodes: Vec<NodeHealthReport>,
    pub resource_summary: ResourceSummary,
    pub fetched_at: DateTime<Utc>,
}
