pub mod error;
pub mod model;

pub use error::*;
pub use model::{AhvConfig, DeployConfig, Host, VcenterConfig};

use std::path::{Path, PathBuf};

/// Environment variable naming the config file directly
pub const CONFIG_ENV: &str = "INFRAFLOW_CONFIG";

const CANDIDATES: [&str; 3] = ["infraflow.yaml", "infraflow.yml", ".infraflow.yaml"];

/// Global config location (`~/.config/infraflow/config.yaml`)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("infraflow").join("config.yaml"))
}

/// Locate the deployment config file.
///
/// Search order:
/// 1. `INFRAFLOW_CONFIG` environment variable
/// 2. current directory: infraflow.yaml, infraflow.yml, .infraflow.yaml
/// 3. ~/.config/infraflow/config.yaml
pub fn find_config_file() -> Result<PathBuf> {
    if let Ok(config_path) = std::env::var(CONFIG_ENV) {
        let path = PathBuf::from(config_path);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::ConfigFileMissing(path));
    }

    let current_dir = std::env::current_dir()?;
    for filename in &CANDIDATES {
        let path = current_dir.join(filename);
        if path.exists() {
            return Ok(path);
        }
    }

    if let Some(global) = global_config_path() {
        if global.exists() {
            return Ok(global);
        }
    }

    Err(ConfigError::ConfigFileNotFound)
}

/// Resolve an explicit `--config` path, falling back to discovery.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) if path.exists() => Ok(path.to_path_buf()),
        Some(path) => Err(ConfigError::ConfigFileMissing(path.to_path_buf())),
        None => find_config_file(),
    }
}

/// Parse and validate a config document.
pub fn parse_config(content: &str) -> Result<DeployConfig> {
    let config: DeployConfig = serde_yaml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Read, parse and validate the config file at `path`.
pub fn load_config(path: &Path) -> Result<DeployConfig> {
    tracing::debug!("Loading config from {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    const MINIMAL: &str = r#"
ahv:
  url: https://prism.example.com:9440
  username: admin
  password: x
  template: tmpl-base
  networkUUID: net-1
  storageContainerUUID: sc-1
servers:
  - name: splunk01
    ipaddress: 10.0.0.5
    netmask: 255.255.255.0
    gateway: 10.0.0.1
"#;

    #[test]
    #[serial]
    fn test_find_config_file_in_current_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let original_dir = std::env::current_dir().unwrap();
        fs::write(temp_dir.path().join("infraflow.yaml"), MINIMAL).unwrap();

        std::env::set_current_dir(&temp_dir).unwrap();
        let result = temp_env::with_var_unset(CONFIG_ENV, find_config_file);
        std::env::set_current_dir(original_dir).unwrap();

        assert!(result.unwrap().ends_with("infraflow.yaml"));
    }

    #[test]
    #[serial]
    fn test_find_config_file_priority() {
        let temp_dir = tempfile::tempdir().unwrap();
        let original_dir = std::env::current_dir().unwrap();
        fs::write(temp_dir.path().join(".infraflow.yaml"), MINIMAL).unwrap();
        fs::write(temp_dir.path().join("infraflow.yml"), MINIMAL).unwrap();

        std::env::set_current_dir(&temp_dir).unwrap();
        let result = temp_env::with_var_unset(CONFIG_ENV, find_config_file);
        std::env::set_current_dir(original_dir).unwrap();

        // infraflow.yml comes before the hidden file
        assert!(result.unwrap().ends_with("infraflow.yml"));
    }

    #[test]
    #[serial]
    fn test_find_config_file_env_var() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("custom.yaml");
        fs::write(&config_path, MINIMAL).unwrap();

        let result = temp_env::with_var(CONFIG_ENV, Some(config_path.as_os_str()), || {
            find_config_file()
        });

        assert_eq!(result.unwrap(), config_path);
    }

    #[test]
    #[serial]
    fn test_find_config_file_env_var_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("nope.yaml");

        let result = temp_env::with_var(CONFIG_ENV, Some(config_path.as_os_str()), || {
            find_config_file()
        });

        assert!(matches!(result, Err(ConfigError::ConfigFileMissing(_))));
    }

    #[test]
    fn test_resolve_explicit_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("deploy.yaml");

        assert!(matches!(
            resolve_config_path(Some(&config_path)),
            Err(ConfigError::ConfigFileMissing(_))
        ));

        fs::write(&config_path, MINIMAL).unwrap();
        assert_eq!(resolve_config_path(Some(&config_path)).unwrap(), config_path);
    }

    #[test]
    fn test_load_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("deploy.yaml");
        fs::write(&config_path, MINIMAL).unwrap();

        let config = load_config(&config_path).unwrap();
        assert!(config.ahv.is_some());
        assert_eq!(config.servers.len(), 1);
    }

    #[test]
    fn test_load_config_malformed() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("deploy.yaml");
        fs::write(&config_path, "servers: [unterminated").unwrap();

        assert!(matches!(
            load_config(&config_path),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn test_load_config_unreadable() {
        let temp_dir = tempfile::tempdir().unwrap();

        assert!(matches!(
            load_config(&temp_dir.path().join("missing.yaml")),
            Err(ConfigError::ReadFailed { .. })
        ));
    }
}
