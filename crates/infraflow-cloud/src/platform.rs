//! Platform selection from the configured backend sections

use crate::error::{CloudError, Result};
use infraflow_config::DeployConfig;

/// Virtualization backend a run targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// vSphere through govc
    Vsphere,
    /// Nutanix AHV through the Prism REST API
    Ahv,
    /// Neither or both sections present
    Unknown,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Vsphere => write!(f, "vsphere"),
            Platform::Ahv => write!(f, "ahv"),
            Platform::Unknown => write!(f, "unknown"),
        }
    }
}

/// Inspect which backend section is present. Never fails.
pub fn select_platform(config: &DeployConfig) -> Platform {
    match (config.vcenter.is_some(), config.ahv.is_some()) {
        (true, false) => Platform::Vsphere,
        (false, true) => Platform::Ahv,
        _ => Platform::Unknown,
    }
}

/// Like [`select_platform`] but turns `Unknown` into a `Platform` error.
pub fn resolve_platform(config: &DeployConfig) -> Result<Platform> {
    match select_platform(config) {
        Platform::Unknown if config.vcenter.is_some() => Err(CloudError::Platform(
            "both `vcenter` and `ahv` are configured; keep exactly one".to_string(),
        )),
        Platform::Unknown => Err(CloudError::Platform(
            "invalid platform in configuration file: configure either `vcenter` or `ahv`"
                .to_string(),
        )),
        platform => Ok(platform),
    }
}
