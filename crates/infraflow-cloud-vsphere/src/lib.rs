//! vSphere provider for InfraFlow
//!
//! This crate implements the CloudProvider trait for VMware vSphere by
//! driving the `govc` CLI through a fixed, fail-fast pipeline:
//!
//! 1. `vm.clone` the template (powered off, sized from the package)
//! 2. `vm.disk.create` a thick-provisioned application disk
//! 3. `device.connect` the primary NIC
//! 4. `vm.customize` the static IP, netmask and gateway
//! 5. `vm.power -on`
//!
//! # Requirements
//!
//! - `govc` must be installed (or its path set via `vcenter.govc`)
//! - Credentials come from the `vcenter` config section and are passed to
//!   each govc process through `GOVC_*` variables on that process only
//!
//! # Example
//!
//! ```ignore
//! use infraflow_cloud::{CloudProvider, Package};
//! use infraflow_cloud_vsphere::VsphereProvider;
//!
//! let provider = VsphereProvider::new(&vcenter_config);
//! provider.deploy(&Package::SMALL, &host).await?;
//! ```

pub mod error;
pub mod govc;
pub mod pipeline;
pub mod provider;

pub use error::{GovcError, Result};
pub use govc::{CommandOutput, CommandRunner, Govc};
pub use pipeline::Step;
pub use provider::VsphereProvider;
