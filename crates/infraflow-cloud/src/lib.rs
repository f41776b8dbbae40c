//! InfraFlow provisioning core
//!
//! This crate provides the provider abstraction for InfraFlow: the sizing
//! package catalog, platform selection, the `CloudProvider` trait every
//! backend implements, and the orchestrator that deploys a host list.
//!
//! # Supported Providers
//!
//! - **vSphere**: clone, disk, NIC, customization, power-on (via govc CLI)
//! - **Nutanix AHV**: clone and disk attach (via Prism REST API v2.0)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                  InfraFlow CLI                   │
//! │            (infraflow deploy --small)            │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────┐
//! │                infraflow-cloud                   │
//! │  ┌──────────────────────────────────────────┐   │
//! │  │          Provider Abstraction             │   │
//! │  │  trait CloudProvider { deploy(..) }       │   │
//! │  └──────────────────────────────────────────┘   │
//! │  ┌──────────────┐  ┌──────────────┐            │
//! │  │   Packages   │  │ Orchestrator │            │
//! │  └──────────────┘  └──────────────┘            │
//! └───────┬─────────────────┬───────────────────────┘
//!         │                 │
//! ┌───────▼───────┐ ┌───────▼───────┐
//! │    vsphere    │ │      ahv      │
//! │   provider    │ │   provider    │
//! └───────────────┘ └───────────────┘
//! ```

pub mod error;
pub mod orchestrator;
pub mod package;
pub mod platform;
pub mod provider;

// Re-exports
pub use error::{CloudError, Result};
pub use orchestrator::{DeploySummary, deploy_all};
pub use package::{Package, PackageSize, select_package};
pub use platform::{Platform, resolve_platform, select_platform};
pub use provider::{CloudProvider, RetryConfig};

pub use infraflow_config::Host;
