use colored::Colorize;
use infraflow_cloud::{Platform, resolve_platform};
use std::path::Path;

pub fn handle(config_path: Option<&Path>) -> anyhow::Result<()> {
    println!("{}", "Validating configuration...".blue());

    let config = super::load(config_path)?;
    let platform = resolve_platform(&config)?;

    println!("{}", "✓ Configuration is valid".green().bold());
    println!();
    println!("Summary:");

    match platform {
        Platform::Vsphere => {
            if let Some(vcenter) = &config.vcenter {
                println!("  Platform: {} ({})", "vsphere".cyan(), vcenter.url);
                println!("  Template: {}", vcenter.template);
            }
        }
        Platform::Ahv => {
            if let Some(ahv) = &config.ahv {
                println!("  Platform: {} ({})", "ahv".cyan(), ahv.url);
                println!("  Template: {}", ahv.template);
            }
        }
        Platform::Unknown => {}
    }

    println!("  Servers: {}", config.servers.len());
    for host in &config.servers {
        println!(
            "    - {} ({}/{} via {})",
            host.name.cyan(),
            host.ip_address,
            host.netmask,
            host.gateway
        );
    }

    Ok(())
}
