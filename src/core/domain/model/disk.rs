//! Physical disk records from `/nodes/{node}/disks/list`.

use serde::{Deserialize, Deserializer, Serialize};

/// A physical disk attached to a node.
///
/// The remote `wearout` field is numeric for SSDs and absent or a
/// non-numeric placeholder for spinning disks, so it is modeled as an
/// optional value rather than a sentinel.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DiskRecord {
    /// Device path (e.g., "/dev/sda").
    pub devpath: String,
    /// Disk kind ("hdd", "ssd", "nvme").
    #[serde(rename = "type", default)]
    pub disk_type: String,
    /// Capacity in bytes.
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub serial: String,
    #[serde(default)]
    pub vendor: String,
    /// SSD wear level percentage; `None` when not applicable.
    #[serde(default, deserialize_with = "lenient_wearout")]
    pub wearout: Option<f64>,
    /// S.M.A.R.T. health verdict.
    #[serde(default)]
    pub health: String,
    /// Usage kind ("LVM", "ZFS", "partitions", ...).
    #[serde(default)]
    pub used: String,
}

/// Accepts the `wearout` field in any of the shapes Proxmox emits:
/// a number, a placeholder string, or nothing at all.
fn lenient_wearout<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(serde_json::Value::as_f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wearout_accepts_numbers_and_placeholders() {
        let ssd: DiskRecord = serde_json::from_value(serde_json::json!({
            "devpath": "/dev/nvme0n1",
            "type": "nvme",
            "size": 512110190592_u64,
            "wearout": 93
        }))
        .unwrap();
        assert_eq!(ssd.wearout, Some(93.0));

        let hdd: DiskRecord = serde_json::from_value(serde_json::json!({
            "devpath": "/dev/sda",
            "type": "hdd",
            "wearout": "N/A"
        }))
        .unwrap();
        assert_eq!(hdd.wearout, None);

        let bare: DiskRecord = serde_json::from_value(serde_json::json!({
            "devpath": "/dev/sdb"
        }))
        .unwrap();
        assert_eq!(bare.wearout, None);
    }
}
