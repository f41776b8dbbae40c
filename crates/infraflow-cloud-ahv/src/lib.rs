//! Nutanix AHV provider for InfraFlow
//!
//! This crate implements the CloudProvider trait for Nutanix AHV through the
//! Prism REST API v2.0:
//!
//! 1. Resolve the template UUID from `GET vms`
//! 2. `POST vms/{template}/clone` with the package sizing and static IP
//! 3. Wait a fixed interval for the clone (`ahv.cloneWaitSecs`)
//! 4. Resolve the new VM's UUID, retrying while it is not listed yet
//! 5. `POST vms/{vm}/disks/attach` with the application disk
//!
//! # Requirements
//!
//! - Network access to the Prism gateway (usually port 9440)
//! - `ahv.networkUUID` and `ahv.storageContainerUUID`, obtainable with
//!   `acli net.list` and `ncli ctr ls` on a CVM
//!
//! # Example
//!
//! ```ignore
//! use infraflow_cloud::{CloudProvider, Package};
//! use infraflow_cloud_ahv::AhvProvider;
//!
//! let provider = AhvProvider::new(&ahv_config)?;
//! provider.deploy(&Package::MEDIUM, &host).await?;
//! ```

pub mod api;
pub mod error;
pub mod payload;
pub mod provider;

pub use api::{ApiResponse, ApiTransport, HttpTransport, api_root};
pub use error::{AhvError, Result};
pub use provider::AhvProvider;
