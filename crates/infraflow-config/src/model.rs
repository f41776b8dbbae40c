//! Deployment configuration schema
//!
//! Section and key names follow the established deployer YAML
//! (`vcenter`, `ahv`, `servers`); the backend-neutral names are accepted as
//! aliases.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::net::Ipv4Addr;

const DEFAULT_AHV_TIMEOUT_SECS: u64 = 60;
const DEFAULT_CLONE_WAIT_SECS: u64 = 30;

/// Whole configuration document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeployConfig {
    /// vSphere section, driven through govc
    #[serde(default, alias = "cliBackend")]
    pub vcenter: Option<VcenterConfig>,

    /// Nutanix AHV section, driven through the Prism REST API
    #[serde(default, alias = "restBackend")]
    pub ahv: Option<AhvConfig>,

    /// Hosts to deploy, in order
    #[serde(default, alias = "hosts")]
    pub servers: Vec<Host>,
}

impl DeployConfig {
    /// Check field values that serde cannot check on its own.
    pub fn validate(&self) -> Result<()> {
        if let Some(vcenter) = &self.vcenter {
            vcenter.validate()?;
        }
        if let Some(ahv) = &self.ahv {
            ahv.validate()?;
        }

        if self.servers.is_empty() {
            return Err(ConfigError::NoServers);
        }

        let mut seen = HashSet::new();
        for host in &self.servers {
            host.validate()?;
            if !seen.insert(host.name.as_str()) {
                return Err(ConfigError::invalid(
                    "servers",
                    "name",
                    format!("duplicate server name '{}'", host.name),
                ));
            }
        }

        Ok(())
    }
}

/// vCenter connection and placement settings
#[derive(Clone, Serialize, Deserialize)]
pub struct VcenterConfig {
    pub url: String,
    pub username: String,
    pub password: String,
    pub template: String,
    pub datastore: String,
    pub network: String,
    #[serde(rename = "resourcepool", alias = "resourcePool")]
    pub resource_pool: String,
    pub datacenter: String,

    /// Skip TLS verification against vCenter (GOVC_INSECURE)
    #[serde(default = "default_true")]
    pub insecure: bool,

    /// Path to the govc binary; `govc` on PATH when unset
    #[serde(default)]
    pub govc: Option<String>,
}

impl VcenterConfig {
    fn validate(&self) -> Result<()> {
        require("vcenter", "url", &self.url)?;
        require("vcenter", "username", &self.username)?;
        require("vcenter", "template", &self.template)?;
        require("vcenter", "network", &self.network)?;
        require("vcenter", "datacenter", &self.datacenter)?;
        Ok(())
    }
}

impl fmt::Debug for VcenterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VcenterConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"***")
            .field("template", &self.template)
            .field("datastore", &self.datastore)
            .field("network", &self.network)
            .field("resource_pool", &self.resource_pool)
            .field("datacenter", &self.datacenter)
            .field("insecure", &self.insecure)
            .field("govc", &self.govc)
            .finish()
    }
}

/// Prism (AHV cluster) connection and placement settings
#[derive(Clone, Serialize, Deserialize)]
pub struct AhvConfig {
    /// Prism base URL, e.g. `https://prism.example.com:9440`
    pub url: String,
    pub username: String,
    pub password: String,
    pub template: String,

    #[serde(rename = "networkUUID", alias = "networkIdentifier")]
    pub network_uuid: String,

    #[serde(rename = "storageContainerUUID", alias = "storageContainerIdentifier")]
    pub storage_container_uuid: String,

    /// Accepted for compatibility; no request uses it yet
    #[serde(default, rename = "volumeGroup", alias = "volumeGroupIdentifier")]
    pub volume_group: Option<String>,

    /// Disable TLS certificate verification
    #[serde(default, alias = "insecureTLS")]
    pub insecure: bool,

    /// Per-request HTTP timeout
    #[serde(default = "default_ahv_timeout", rename = "timeoutSecs")]
    pub timeout_secs: u64,

    /// Fixed wait after the clone request before looking up the new VM
    #[serde(default = "default_clone_wait", rename = "cloneWaitSecs")]
    pub clone_wait_secs: u64,
}

impl AhvConfig {
    fn validate(&self) -> Result<()> {
        require("ahv", "url", &self.url)?;
        require("ahv", "username", &self.username)?;
        require("ahv", "template", &self.template)?;
        require("ahv", "networkUUID", &self.network_uuid)?;
        require("ahv", "storageContainerUUID", &self.storage_container_uuid)?;
        if self.timeout_secs == 0 {
            return Err(ConfigError::invalid(
                "ahv",
                "timeoutSecs",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for AhvConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AhvConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"***")
            .field("template", &self.template)
            .field("network_uuid", &self.network_uuid)
            .field("storage_container_uuid", &self.storage_container_uuid)
            .field("volume_group", &self.volume_group)
            .field("insecure", &self.insecure)
            .field("timeout_secs", &self.timeout_secs)
            .field("clone_wait_secs", &self.clone_wait_secs)
            .finish()
    }
}

/// A single deployment target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Host {
    pub name: String,
    #[serde(rename = "ipaddress", alias = "ipAddress")]
    pub ip_address: String,
    pub netmask: String,
    pub gateway: String,
}

impl Host {
    pub fn new(
        name: impl Into<String>,
        ip_address: impl Into<String>,
        netmask: impl Into<String>,
        gateway: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ip_address: ip_address.into(),
            netmask: netmask.into(),
            gateway: gateway.into(),
        }
    }

    fn validate(&self) -> Result<()> {
        require("servers", "name", &self.name)?;
        for (field, value) in [
            ("ipaddress", &self.ip_address),
            ("netmask", &self.netmask),
            ("gateway", &self.gateway),
        ] {
            if value.parse::<Ipv4Addr>().is_err() {
                return Err(ConfigError::invalid(
                    format!("servers[{}]", self.name),
                    field,
                    format!("'{}' is not an IPv4 address", value),
                ));
            }
        }
        Ok(())
    }
}

fn require(section: &str, field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::invalid(section, field, "must not be empty"));
    }
    Ok(())
}

fn default_true() -> bool {
    true
}

fn default_ahv_timeout() -> u64 {
    DEFAULT_AHV_TIMEOUT_SECS
}

fn default_clone_wait() -> u64 {
    DEFAULT_CLONE_WAIT_SECS
}
