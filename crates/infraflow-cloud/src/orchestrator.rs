//! Deployment orchestration
//!
//! Runs the selected provider over the host list in order. The first host
//! that fails stops the run; hosts after it are not attempted.

use crate::error::{CloudError, Result};
use crate::package::Package;
use crate::provider::CloudProvider;
use infraflow_config::{ConfigError, Host};
use serde::{Deserialize, Serialize};

/// Result of a completed deployment run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploySummary {
    /// Provider that handled the run
    pub provider: String,

    /// Package applied to every host
    pub package: Package,

    /// Hosts deployed, in order
    pub deployed: Vec<String>,

    /// Total execution time in milliseconds
    pub duration_ms: u64,
}

/// Deploy every host with `provider`, aborting on the first failure.
///
/// The returned error is `CloudError::HostFailed`, naming the host and
/// carrying the provider's error as its source. An empty host list is the
/// same `NoServers` error config validation reports.
pub async fn deploy_all(
    provider: &dyn CloudProvider,
    package: &Package,
    hosts: &[Host],
) -> Result<DeploySummary> {
    if hosts.is_empty() {
        return Err(ConfigError::NoServers.into());
    }

    let start = std::time::Instant::now();
    let mut deployed = Vec::with_capacity(hosts.len());

    for (index, host) in hosts.iter().enumerate() {
        tracing::info!(
            "[{}/{}] Deploying {} on {} ({})",
            index + 1,
            hosts.len(),
            host.name,
            provider.display_name(),
            package.describe()
        );

        if let Err(e) = provider.deploy(package, host).await {
            tracing::error!("Deployment of {} failed: {}", host.name, e);
            return Err(CloudError::HostFailed {
                host: host.name.clone(),
                source: Box::new(e),
            });
        }

        tracing::info!("{} deployed", host.name);
        deployed.push(host.name.clone());
    }

    Ok(DeploySummary {
        provider: provider.name().to_string(),
        package: *package,
        deployed,
        duration_ms: start.elapsed().as_millis() as u64,
    })
}
