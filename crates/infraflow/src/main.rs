mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "infraflow")]
#[command(about = "Provision sized VM fleets on VMware vSphere or Nutanix AHV", long_about = None)]
struct Cli {
    /// Config file (default: ./infraflow.yaml, then ~/.config/infraflow/config.yaml)
    #[arg(short, long, global = true, env = "INFRAFLOW_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clone, size and start every server in the config
    Deploy {
        /// 2 CPUs, 8GB memory, 10GB application disk
        #[arg(long)]
        small: bool,
        /// 4 CPUs, 16GB memory, 20GB application disk
        #[arg(long)]
        medium: bool,
        /// 8 CPUs, 32GB memory, 40GB application disk
        #[arg(long)]
        large: bool,
    },
    /// Check the config file without provisioning anything
    Validate,
    /// List the sizing packages
    Packages,
    /// Show version information
    Version,
}

#[tokio::main]
async fn main() {
    // Usage errors exit 1 like every other failure; help and version exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Deploy {
            small,
            medium,
            large,
        } => commands::deploy::handle(cli.config.as_deref(), small, medium, large).await,
        Commands::Validate => commands::validate::handle(cli.config.as_deref()),
        Commands::Packages => {
            commands::packages::handle();
            Ok(())
        }
        Commands::Version => {
            println!("infraflow {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
