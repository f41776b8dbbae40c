//! vSphere provider error types

use crate::pipeline::Step;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GovcError {
    #[error("govc not found at '{0}'. Please install: https://github.com/vmware/govmomi/tree/main/govc")]
    GovcNotFound(String),

    #[error("failed to {} {host} (govc {} exited with {code}): {stderr}", .step.action(), .step.subcommand())]
    StepFailed {
        step: Step,
        host: String,
        code: i32,
        stderr: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl GovcError {
    /// Attach the pipeline step and host to a failure that happened before
    /// govc could report an exit status.
    pub(crate) fn into_cloud(self, step: Step, host: &str) -> infraflow_cloud::CloudError {
        let step = match &self {
            GovcError::StepFailed { step, .. } => *step,
            _ => step,
        };
        infraflow_cloud::CloudError::Provisioning {
            host: host.to_string(),
            step: step.name().to_string(),
            message: self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GovcError>;
