//! govc CLI wrapper
//!
//! Runs govc as a child process. vCenter credentials and placement defaults
//! are handed to the child through its own environment; the parent process
//! environment is left untouched.

use crate::error::{GovcError, Result};
use async_trait::async_trait;
use infraflow_config::VcenterConfig;
use std::process::Stdio;
use tokio::process::Command;

const DEFAULT_BINARY: &str = "govc";

/// Exit status and captured output of one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Process exit code (-1 when terminated by a signal)
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Something that can execute a govc argument list
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, args: &[String]) -> Result<CommandOutput>;
}

/// govc CLI wrapper
pub struct Govc {
    binary: String,
    env: Vec<(&'static str, String)>,
}

impl Govc {
    pub fn new(config: &VcenterConfig) -> Self {
        let binary = config
            .govc
            .clone()
            .unwrap_or_else(|| DEFAULT_BINARY.to_string());

        let env = vec![
            ("GOVC_URL", config.url.clone()),
            ("GOVC_USERNAME", config.username.clone()),
            ("GOVC_PASSWORD", config.password.clone()),
            ("GOVC_DATASTORE", config.datastore.clone()),
            ("GOVC_NETWORK", config.network.clone()),
            ("GOVC_RESOURCE_POOL", config.resource_pool.clone()),
            ("GOVC_DATACENTER", config.datacenter.clone()),
            ("GOVC_INSECURE", config.insecure.to_string()),
        ];

        Self { binary, env }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Environment handed to every govc child process
    pub fn env(&self) -> &[(&'static str, String)] {
        &self.env
    }
}

#[async_trait]
impl CommandRunner for Govc {
    async fn run(&self, args: &[String]) -> Result<CommandOutput> {
        let mut cmd = Command::new(&self.binary);
        cmd.args(args);
        cmd.envs(self.env.iter().map(|(k, v)| (*k, v.as_str())));
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        tracing::debug!("Running: {} {}", self.binary, args.join(" "));

        let output = cmd.output().await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => GovcError::GovcNotFound(self.binary.clone()),
            _ => GovcError::IoError(e),
        })?;

        Ok(CommandOutput {
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}
