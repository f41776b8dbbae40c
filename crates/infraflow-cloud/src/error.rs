//! Provisioning error types

use thiserror::Error;

/// Errors surfaced by providers and the orchestrator
#[derive(Error, Debug)]
pub enum CloudError {
    #[error(transparent)]
    Config(#[from] infraflow_config::ConfigError),

    #[error("Invalid package selection: {0}")]
    Validation(String),

    #[error("Platform error: {0}")]
    Platform(String),

    #[error("Provisioning {host} failed at step '{step}': {message}")]
    Provisioning {
        host: String,
        step: String,
        message: String,
    },

    #[error("API error: {0}")]
    Protocol(String),

    #[error("Not found: {0}")]
    Resolution(String),

    #[error("Deployment of {host} failed")]
    HostFailed {
        host: String,
        #[source]
        source: Box<CloudError>,
    },
}

pub type Result<T> = std::result::Result<T, CloudError>;
