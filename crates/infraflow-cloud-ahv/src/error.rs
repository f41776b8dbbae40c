//! AHV provider error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AhvError {
    #[error("failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("{method} {url} failed")]
    Transport {
        method: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to {action}: HTTP {status}, response: {body}")]
    Status {
        action: String,
        status: u16,
        body: String,
    },

    #[error("virtual machine '{0}' not found")]
    Resolution(String),

    #[error("unexpected response body")]
    JsonError(#[from] serde_json::Error),
}

impl AhvError {
    /// Message including every underlying cause, e.g.
    /// "GET https://.../vms failed: error sending request: connection refused"
    pub fn chain_message(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}

impl From<AhvError> for infraflow_cloud::CloudError {
    fn from(e: AhvError) -> Self {
        match e {
            AhvError::Resolution(_) => infraflow_cloud::CloudError::Resolution(e.to_string()),
            other => infraflow_cloud::CloudError::Protocol(other.chain_message()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AhvError>;
