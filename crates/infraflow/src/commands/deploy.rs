use colored::Colorize;
use infraflow_cloud::{CloudProvider, Platform, deploy_all, resolve_platform, select_package};
use infraflow_cloud_ahv::AhvProvider;
use infraflow_cloud_vsphere::VsphereProvider;
use infraflow_config::DeployConfig;
use std::path::Path;

pub async fn handle(
    config_path: Option<&Path>,
    small: bool,
    medium: bool,
    large: bool,
) -> anyhow::Result<()> {
    // Flags are checked before any file is touched
    let size = select_package(small, medium, large)?;
    let package = size.package();

    let config = super::load(config_path)?;
    let platform = resolve_platform(&config)?;
    let provider = build_provider(platform, &config)?;

    println!();
    println!(
        "{}",
        format!(
            "Deploying {} server(s) to {}",
            config.servers.len(),
            provider.display_name()
        )
        .blue()
        .bold()
    );
    println!("Package: {} ({})", size.to_string().cyan(), package.describe());
    for host in &config.servers {
        println!("  - {} ({})", host.name.cyan(), host.ip_address);
    }
    println!();

    let summary = deploy_all(provider.as_ref(), package, &config.servers).await?;

    println!();
    println!("{}", "✓ Deployment complete".green().bold());
    for name in &summary.deployed {
        println!("  {} {}", "✓".green(), name);
    }
    println!(
        "  {} server(s) in {:.1}s",
        summary.deployed.len(),
        summary.duration_ms as f64 / 1000.0
    );

    Ok(())
}

/// Driver for the platform the config selects
fn build_provider(
    platform: Platform,
    config: &DeployConfig,
) -> anyhow::Result<Box<dyn CloudProvider>> {
    match (platform, &config.vcenter, &config.ahv) {
        (Platform::Vsphere, Some(vcenter), _) => Ok(Box::new(VsphereProvider::new(vcenter))),
        (Platform::Ahv, _, Some(ahv)) => Ok(Box::new(AhvProvider::new(ahv)?)),
        _ => anyhow::bail!("no provider available for platform '{}'", platform),
    }
}
