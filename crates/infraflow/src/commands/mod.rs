pub mod deploy;
pub mod packages;
pub mod validate;

use anyhow::Context;
use colored::Colorize;
use infraflow_config::DeployConfig;
use std::path::Path;

/// Find and load the config file, echoing which file is used.
pub(crate) fn load(explicit: Option<&Path>) -> anyhow::Result<DeployConfig> {
    let path = infraflow_config::resolve_config_path(explicit)?;
    println!("Config file: {}", path.display().to_string().cyan());

    let config = infraflow_config::load_config(&path)
        .with_context(|| format!("failed to load {}", path.display()))?;

    Ok(config)
}
