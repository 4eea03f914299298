//! Detailed status for a single node, from `/nodes/{node}/status`.

use serde::{Deserialize, Serialize};

/// Status detail for one node.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NodeStatusData {
    /// CPU usage as a fraction (0.0 to 1.0).
    pub cpu: f64,
    /// Memory usage in bytes.
    pub memory: MemoryUsage,
    /// Swap usage in bytes. Nodes without swap report zeroes.
    #[serde(default)]
    pub swap: MemoryUsage,
    /// System uptime in seconds.
    pub uptime: u64,
    /// Load average over 1, 5, and 15 minutes.
    #[serde(default)]
    pub loadavg: Vec<f64>,
}

/// Memory or swap usage counters.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MemoryUsage {
    /// Total in bytes.
    pub total: u64,
    /// Used in bytes.
    pub used: u64,
    /// Free in bytes.
    #[serde(default)]
    pub free: u64,
}
