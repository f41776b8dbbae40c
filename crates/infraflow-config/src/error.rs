use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "config file not found. Checked:\n\
        - the current directory: infraflow.yaml, infraflow.yml, .infraflow.yaml\n\
        - ~/.config/infraflow/config.yaml\n\
        Pass --config <path> or set INFRAFLOW_CONFIG to point at one"
    )]
    ConfigFileNotFound,

    #[error("config file does not exist: {0}")]
    ConfigFileMissing(PathBuf),

    #[error("failed to read {path}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid value for {section}.{field}: {reason}")]
    InvalidField {
        section: String,
        field: String,
        reason: String,
    },

    #[error("no servers defined in the `servers` section")]
    NoServers,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    pub(crate) fn invalid(
        section: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            section: section.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
