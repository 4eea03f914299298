//! Disk-inventory aggregate response.

use crate::core::domain::model::disk::DiskRecord;
use crate::core::domain::model::node::NodeRef;
use serde::Serialize;

/// One disk, summarized for callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiskSummary {
    /// Device path (e.g., "/dev/sda").
    pub device: String,
    #[serde(rename = "type")]
    pub disk_type: String,
    /// Size in bytes.
    pub size: u64,
    pub model: String,
    pub serial: String,
    pub vendor: String,
    /// SSD wear level percentage; absent for spinning disks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wear_percent: Option<u8>,
    /// S.M.A.R.T. health verdict.
    pub health: String,
    /// Usage kind (LVM, ZFS, partitions, ...).
    pub used: String,
}

impl From<DiskRecord> for DiskSummary {
    fn from(disk: DiskRecord) -> Self {
        Self {
            device: disk.devpath,
            disk_type: disk.disk_type,
            size: disk.size,
            model: disk.model,
            serial: disk.serial,
            vendor: disk.vendor,
            wear_percent: disk.wearout.map(|w| w.clamp(0.0, 100.0) as u8),
            health: disk.health,
            used: disk.used,
        }
    }
}

/// Disk inventory of one node, or the error that prevented collecting it.
///
/// `disks` and `error` are mutually exclusive: a failed detail query leaves
/// the inventory empty and explains itself in `error`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeDisks {
    pub node_name: String,
    /// Reachability as reported by the node listing.
    pub status: String,
    pub disks: Vec<DiskSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NodeDisks {
    pub(crate) fn collected(node: &NodeRef, disks: Vec<DiskRecord>) -> Self {
        Self {
            node_name: node.name.clone(),
            status: node.status.clone(),
            disks: disks.into_iter().map(DiskSummary::from).collect(),
            error: None,
        }
    }

    pub(crate) fn failed(node: &NodeRef, error: impl Into<String>) -> Self {
        Self {
            node_name: node.name.clone(),
            status: node.status.clone(),
            disks: Vec::new(),
            error: Some(error.into()),
        }
    }
}

/// Cluster-wide disk inventory, one entry per node in listing order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterDisksReport {
    pub cluster_id: String,
    pub cluster_name: String,
    pub nodes: Vec<NodeDisks>,
    pub total_disks: u64,
}
