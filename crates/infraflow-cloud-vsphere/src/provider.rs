//! vSphere provider implementation

use crate::error::GovcError;
use crate::govc::{CommandRunner, Govc};
use crate::pipeline::{CloneSource, Step, step_args};
use async_trait::async_trait;
use infraflow_cloud::{CloudProvider, Package};
use infraflow_config::{Host, VcenterConfig};

/// vSphere provider
pub struct VsphereProvider<R = Govc> {
    runner: R,
    source: CloneSource,
}

impl VsphereProvider<Govc> {
    pub fn new(config: &VcenterConfig) -> Self {
        Self::with_runner(config, Govc::new(config))
    }
}

impl<R: CommandRunner> VsphereProvider<R> {
    /// Use a custom runner instead of spawning govc
    pub fn with_runner(config: &VcenterConfig, runner: R) -> Self {
        Self {
            runner,
            source: CloneSource {
                template: config.template.clone(),
                network: config.network.clone(),
            },
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run one step; a non-zero exit stops the pipeline.
    async fn run_step(
        &self,
        step: Step,
        package: &Package,
        host: &Host,
    ) -> Result<(), GovcError> {
        let args = step_args(step, &self.source, package, host);
        let output = self.runner.run(&args).await?;

        if !output.success() {
            return Err(GovcError::StepFailed {
                step,
                host: host.name.clone(),
                code: output.code,
                stderr: output.stderr,
            });
        }

        Ok(())
    }
}

#[async_trait]
impl<R: CommandRunner> CloudProvider for VsphereProvider<R> {
    fn name(&self) -> &str {
        "vsphere"
    }

    fn display_name(&self) -> &str {
        "VMware vSphere"
    }

    async fn deploy(&self, package: &Package, host: &Host) -> infraflow_cloud::Result<()> {
        for (index, step) in Step::ALL.iter().enumerate() {
            tracing::info!(
                "[{}/{}] {}: {}",
                index + 1,
                Step::ALL.len(),
                host.name,
                step
            );

            self.run_step(*step, package, host)
                .await
                .map_err(|e| e.into_cloud(*step, &host.name))?;
        }

        Ok(())
    }
}
