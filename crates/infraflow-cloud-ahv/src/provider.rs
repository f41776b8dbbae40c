//! AHV provider implementation

use crate::api::{ApiTransport, HttpTransport};
use crate::error::{AhvError, Result};
use crate::payload::{CloneRequest, DiskAttachRequest, find_uuid, parse_vm_list};
use async_trait::async_trait;
use infraflow_cloud::{CloudProvider, Package, RetryConfig};
use infraflow_config::{AhvConfig, Host};
use std::time::Duration;

/// Nutanix AHV provider
pub struct AhvProvider<T = HttpTransport> {
    transport: T,
    template: String,
    network_uuid: String,
    storage_container_uuid: String,
    clone_wait: Duration,
    retry: RetryConfig,
}

impl AhvProvider<HttpTransport> {
    pub fn new(config: &AhvConfig) -> Result<Self> {
        Ok(Self::with_transport(config, HttpTransport::new(config)?))
    }
}

impl<T: ApiTransport> AhvProvider<T> {
    /// Use a custom transport instead of talking HTTP
    pub fn with_transport(config: &AhvConfig, transport: T) -> Self {
        Self {
            transport,
            template: config.template.clone(),
            network_uuid: config.network_uuid.clone(),
            storage_container_uuid: config.storage_container_uuid.clone(),
            clone_wait: Duration::from_secs(config.clone_wait_secs),
            retry: RetryConfig::default(),
        }
    }

    /// Retry policy for resolving the freshly cloned VM
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_clone_wait(mut self, wait: Duration) -> Self {
        self.clone_wait = wait;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Name to UUID via the `vms` collection
    async fn resolve_uuid(&self, name: &str) -> Result<String> {
        let response = self
            .transport
            .get("vms")
            .await?
            .check(|| format!("get UUID of vm {}", name))?;

        let vms = parse_vm_list(&response.body)?;
        find_uuid(&vms, name).ok_or_else(|| AhvError::Resolution(name.to_string()))
    }

    /// Resolve a VM that may not be listed yet. Only misses are retried.
    async fn resolve_with_retry(&self, name: &str) -> Result<String> {
        let mut attempt = 0;
        loop {
            match self.resolve_uuid(name).await {
                Err(AhvError::Resolution(_)) if attempt + 1 < self.retry.max_attempts => {
                    let delay = self.retry.delay_for_attempt(attempt);
                    tracing::warn!(
                        "{} not listed yet (attempt {}/{}), retrying in {:?}",
                        name,
                        attempt + 1,
                        self.retry.max_attempts,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    async fn clone_vm(&self, template_uuid: &str, package: &Package, host: &Host) -> Result<()> {
        let body = serde_json::to_value(CloneRequest::new(package, host, &self.network_uuid))?;
        let response = self
            .transport
            .post_json(&format!("vms/{}/clone", template_uuid), &body)
            .await?
            .check(|| {
                format!(
                    "clone virtual machine {} from template {}",
                    host.name, self.template
                )
            })?;

        tracing::info!(
            "HTTP Code {}: Clone {} created from {}",
            response.status,
            host.name,
            self.template
        );
        Ok(())
    }

    async fn attach_disk(&self, vm_uuid: &str, package: &Package, host: &Host) -> Result<()> {
        let body = serde_json::to_value(DiskAttachRequest::new(
            package,
            &self.storage_container_uuid,
        ))?;
        let response = self
            .transport
            .post_json(&format!("vms/{}/disks/attach", vm_uuid), &body)
            .await?
            .check(|| format!("attach application disk to {}", host.name))?;

        tracing::info!(
            "HTTP Code {}: application disk attach task created",
            response.status
        );
        Ok(())
    }

    async fn run(&self, package: &Package, host: &Host) -> Result<()> {
        let template_uuid = self.resolve_uuid(&self.template).await?;

        tracing::info!("Cloning {} from template {}", host.name, self.template);
        self.clone_vm(&template_uuid, package, host).await?;

        // No task polling: give the clone a fixed head start
        tracing::info!(
            "Waiting {} seconds for VM creation to complete...",
            self.clone_wait.as_secs()
        );
        tokio::time::sleep(self.clone_wait).await;

        tracing::info!("Attaching app disk to {}", host.name);
        let vm_uuid = self.resolve_with_retry(&host.name).await?;
        self.attach_disk(&vm_uuid, package, host).await
    }
}

#[async_trait]
impl<T: ApiTransport> CloudProvider for AhvProvider<T> {
    fn name(&self) -> &str {
        "ahv"
    }

    fn display_name(&self) -> &str {
        "Nutanix AHV"
    }

    async fn deploy(&self, package: &Package, host: &Host) -> infraflow_cloud::Result<()> {
        self.run(package, host).await.map_err(Into::into)
    }
}
