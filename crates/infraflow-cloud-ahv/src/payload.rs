//! Prism v2.0 request bodies and entity-list parsing

use crate::error::Result;
use infraflow_cloud::Package;
use infraflow_config::Host;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const BYTES_PER_GB: u64 = 1_000_000_000;

/// Body of `POST vms/{uuid}/clone`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CloneRequest {
    pub spec_list: Vec<CloneSpec>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CloneSpec {
    pub name: String,
    pub memory_mb: u32,
    pub num_vcpus: u32,
    pub num_cores_per_vcpu: u32,
    pub vm_nics: Vec<VmNic>,
    pub request_ip: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VmNic {
    pub adapter_type: String,
    pub network_uuid: String,
    pub ip_address: String,
}

impl CloneRequest {
    pub fn new(package: &Package, host: &Host, network_uuid: &str) -> Self {
        Self {
            spec_list: vec![CloneSpec {
                name: host.name.clone(),
                memory_mb: package.memory_mb,
                num_vcpus: package.cpu,
                num_cores_per_vcpu: 1,
                vm_nics: vec![VmNic {
                    adapter_type: "Vmxnet3".to_string(),
                    network_uuid: network_uuid.to_string(),
                    ip_address: host.ip_address.clone(),
                }],
                request_ip: false,
            }],
        }
    }
}

/// Body of `POST vms/{uuid}/disks/attach`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DiskAttachRequest {
    pub vm_disks: Vec<VmDisk>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VmDisk {
    pub disk_address: DiskAddress,
    pub vm_disk_create: VmDiskCreate,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DiskAddress {
    pub device_bus: String,
    pub device_index: u32,
    pub is_cdrom: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VmDiskCreate {
    /// Bytes (decimal gigabytes)
    pub size: u64,
    pub storage_container_uuid: String,
}

impl DiskAttachRequest {
    pub fn new(package: &Package, storage_container_uuid: &str) -> Self {
        Self {
            vm_disks: vec![VmDisk {
                disk_address: DiskAddress {
                    device_bus: "SCSI".to_string(),
                    device_index: 1,
                    is_cdrom: false,
                },
                vm_disk_create: VmDiskCreate {
                    size: package.app_disk_gb * BYTES_PER_GB,
                    storage_container_uuid: storage_container_uuid.to_string(),
                },
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
struct VmList {
    #[serde(default)]
    entities: Vec<VmEntity>,
}

#[derive(Debug, Deserialize)]
struct VmEntity {
    name: Option<String>,
    uuid: Option<String>,
}

/// Parse a `GET vms` body into `(name, uuid)` pairs, in listing order.
///
/// Entities lacking either field are skipped.
pub fn parse_vm_list(body: &str) -> Result<Vec<(String, String)>> {
    let list: VmList = serde_json::from_str(body)?;

    Ok(list
        .entities
        .into_iter()
        .filter_map(|entity| Some((entity.name?, entity.uuid?)))
        .collect())
}

/// Look a VM up by name. Later duplicates win.
pub fn find_uuid(vms: &[(String, String)], name: &str) -> Option<String> {
    let index: HashMap<&str, &str> = vms
        .iter()
        .map(|(name, uuid)| (name.as_str(), uuid.as_str()))
        .collect();

    index.get(name).map(|uuid| uuid.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn host() -> Host {
        Host::new("splunk01", "10.0.0.5", "255.255.255.0", "10.0.0.1")
    }

    #[test]
    fn test_clone_payload() {
        let body = serde_json::to_value(CloneRequest::new(&Package::SMALL, &host(), "net-1")).unwrap();

        assert_eq!(
            body,
            json!({
                "spec_list": [{
                    "name": "splunk01",
                    "memory_mb": 8096,
                    "num_vcpus": 2,
                    "num_cores_per_vcpu": 1,
                    "vm_nics": [{
                        "adapter_type": "Vmxnet3",
                        "network_uuid": "net-1",
                        "ip_address": "10.0.0.5"
                    }],
                    "request_ip": false
                }]
            })
        );
    }

    #[test]
    fn test_disk_payload() {
        let body = serde_json::to_value(DiskAttachRequest::new(&Package::SMALL, "sc-1")).unwrap();

        assert_eq!(
            body,
            json!({
                "vm_disks": [{
                    "disk_address": {
                        "device_bus": "SCSI",
                        "device_index": 1,
                        "is_cdrom": false
                    },
                    "vm_disk_create": {
                        "size": 10_000_000_000u64,
                        "storage_container_uuid": "sc-1"
                    }
                }]
            })
        );
    }

    #[test]
    fn test_disk_size_per_tier() {
        let large = DiskAttachRequest::new(&Package::LARGE, "sc-1");
        assert_eq!(large.vm_disks[0].vm_disk_create.size, 40_000_000_000);
    }

    #[test]
    fn test_parse_vm_list_positional() {
        let body = json!({
            "metadata": {"count": 3},
            "entities": [
                {"name": "tmpl-base", "uuid": "uuid-A", "power_state": "off"},
                {"name": "splunk01", "uuid": "uuid-B"},
                {"name": "splunk02", "uuid": "uuid-C"}
            ]
        })
        .to_string();

        let vms = parse_vm_list(&body).unwrap();

        assert_eq!(
            vms,
            vec![
                ("tmpl-base".to_string(), "uuid-A".to_string()),
                ("splunk01".to_string(), "uuid-B".to_string()),
                ("splunk02".to_string(), "uuid-C".to_string()),
            ]
        );
        assert_eq!(find_uuid(&vms, "splunk01").as_deref(), Some("uuid-B"));
        assert_eq!(find_uuid(&vms, "splunk03"), None);
    }

    #[test]
    fn test_parse_skips_incomplete_entities() {
        let body = r#"{"entities": [{"name": "orphan"}, {"uuid": "uuid-X"}, {"name": "a", "uuid": "u"}]}"#;
        assert_eq!(
            parse_vm_list(body).unwrap(),
            vec![("a".to_string(), "u".to_string())]
        );
    }

    #[test]
    fn test_parse_empty_and_invalid() {
        assert!(parse_vm_list("{}").unwrap().is_empty());
        assert!(parse_vm_list("not json").is_err());
    }

    #[test]
    fn test_duplicate_names_last_wins() {
        let vms = vec![
            ("dup".to_string(), "first".to_string()),
            ("dup".to_string(), "second".to_string()),
        ];
        assert_eq!(find_uuid(&vms, "dup").as_deref(), Some("second"));
    }
}
