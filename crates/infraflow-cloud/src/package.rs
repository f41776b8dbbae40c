//! Sizing packages
//!
//! Every deployment uses exactly one of three fixed hardware sizes.

use crate::error::{CloudError, Result};
use serde::{Deserialize, Serialize};

/// Hardware sizing applied to a clone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Virtual CPU count
    pub cpu: u32,

    /// Memory in MB
    pub memory_mb: u32,

    /// Size of the additional application disk in GB
    pub app_disk_gb: u64,
}

impl Package {
    pub const SMALL: Package = Package {
        cpu: 2,
        memory_mb: 8096,
        app_disk_gb: 10,
    };

    pub const MEDIUM: Package = Package {
        cpu: 4,
        memory_mb: 16384,
        app_disk_gb: 20,
    };

    pub const LARGE: Package = Package {
        cpu: 8,
        memory_mb: 32768,
        app_disk_gb: 40,
    };

    /// Human readable sizing, e.g. "2 CPUs, 8GB Memory, 10GB application disk"
    pub fn describe(&self) -> String {
        format!(
            "{} CPUs, {:.0}GB Memory, {}GB application disk",
            self.cpu,
            f64::from(self.memory_mb) / 1024.0,
            self.app_disk_gb
        )
    }
}

/// Name of a sizing package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageSize {
    Small,
    Medium,
    Large,
}

impl PackageSize {
    pub const ALL: [PackageSize; 3] = [PackageSize::Small, PackageSize::Medium, PackageSize::Large];

    pub fn package(&self) -> &'static Package {
        match self {
            PackageSize::Small => &Package::SMALL,
            PackageSize::Medium => &Package::MEDIUM,
            PackageSize::Large => &Package::LARGE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PackageSize::Small => "small",
            PackageSize::Medium => "medium",
            PackageSize::Large => "large",
        }
    }
}

impl std::fmt::Display for PackageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the package from the `--small/--medium/--large` flags.
///
/// Exactly one flag must be set.
pub fn select_package(small: bool, medium: bool, large: bool) -> Result<PackageSize> {
    let selected: Vec<PackageSize> = [small, medium, large]
        .into_iter()
        .zip(PackageSize::ALL)
        .filter_map(|(set, size)| set.then_some(size))
        .collect();

    match selected.as_slice() {
        [size] => Ok(*size),
        [] => Err(CloudError::Validation(
            "--small, --medium, or --large must be set. Only one flag can be specified at a time"
                .to_string(),
        )),
        _ => Err(CloudError::Validation(
            "only one package size can be specified".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_values() {
        assert_eq!(
            *PackageSize::Small.package(),
            Package {
                cpu: 2,
                memory_mb: 8096,
                app_disk_gb: 10
            }
        );
        assert_eq!(PackageSize::Medium.package().memory_mb, 16384);
        assert_eq!(PackageSize::Large.package().cpu, 8);
        assert_eq!(PackageSize::Large.package().app_disk_gb, 40);
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            Package::SMALL.describe(),
            "2 CPUs, 8GB Memory, 10GB application disk"
        );
        assert_eq!(
            Package::LARGE.describe(),
            "8 CPUs, 32GB Memory, 40GB application disk"
        );
    }

    #[test]
    fn test_select_exactly_one() {
        assert_eq!(
            select_package(true, false, false).unwrap(),
            PackageSize::Small
        );
        assert_eq!(
            select_package(false, true, false).unwrap(),
            PackageSize::Medium
        );
        assert_eq!(
            select_package(false, false, true).unwrap(),
            PackageSize::Large
        );
    }

    #[test]
    fn test_select_rejects_other_combinations() {
        for small in [false, true] {
            for medium in [false, true] {
                for large in [false, true] {
                    let count = [small, medium, large].iter().filter(|f| **f).count();
                    if count == 1 {
                        continue;
                    }
                    assert!(
                        matches!(
                            select_package(small, medium, large),
                            Err(CloudError::Validation(_))
                        ),
                        "{} {} {} should be rejected",
                        small,
                        medium,
                        large
                    );
                }
            }
        }
    }

    #[test]
    fn test_select_error_messages() {
        let none = select_package(false, false, false).unwrap_err().to_string();
        assert!(none.contains("--small, --medium, or --large"));

        let many = select_package(true, false, true).unwrap_err().to_string();
        assert!(many.contains("only one package size"));
    }
}
