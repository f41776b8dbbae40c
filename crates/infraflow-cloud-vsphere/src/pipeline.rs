//! The five govc steps that turn a template into a running host

use infraflow_cloud::Package;
use infraflow_config::Host;

/// Pipeline step, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Clone,
    DiskCreate,
    NicConnect,
    Customize,
    PowerOn,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::Clone,
        Step::DiskCreate,
        Step::NicConnect,
        Step::Customize,
        Step::PowerOn,
    ];

    /// Name reported in errors and logs
    pub fn name(&self) -> &'static str {
        match self {
            Step::Clone => "clone",
            Step::DiskCreate => "disk-create",
            Step::NicConnect => "nic-connect",
            Step::Customize => "customize",
            Step::PowerOn => "power-on",
        }
    }

    pub fn subcommand(&self) -> &'static str {
        match self {
            Step::Clone => "vm.clone",
            Step::DiskCreate => "vm.disk.create",
            Step::NicConnect => "device.connect",
            Step::Customize => "vm.customize",
            Step::PowerOn => "vm.power",
        }
    }

    /// Verb phrase for messages ("failed to <action> <host>")
    pub fn action(&self) -> &'static str {
        match self {
            Step::Clone => "clone virtual machine",
            Step::DiskCreate => "create application disk for",
            Step::NicConnect => "set vmxnet3 adapter to start connected on",
            Step::Customize => "set ip address of",
            Step::PowerOn => "power on",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Template and network the clone step starts from
#[derive(Debug, Clone)]
pub struct CloneSource {
    pub template: String,
    pub network: String,
}

/// Build the govc argument list for one step.
pub fn step_args(step: Step, source: &CloneSource, package: &Package, host: &Host) -> Vec<String> {
    let args: Vec<String> = match step {
        Step::Clone => vec![
            "-vm".into(),
            source.template.clone(),
            "-on=false".into(),
            format!("-c={}", package.cpu),
            format!("-m={}", package.memory_mb),
            format!("-net={}", source.network),
            "-net.adapter=vmxnet3".into(),
            host.name.clone(),
        ],
        Step::DiskCreate => vec![
            "-vm".into(),
            host.name.clone(),
            "-name".into(),
            format!("{0}/{0}_001", host.name),
            "-size".into(),
            format!("{}G", package.app_disk_gb),
            "-thick=true".into(),
        ],
        Step::NicConnect => vec!["-vm".into(), host.name.clone(), "ethernet-0".into()],
        Step::Customize => vec![
            "-vm".into(),
            host.name.clone(),
            "-ip".into(),
            host.ip_address.clone(),
            "-netmask".into(),
            host.netmask.clone(),
            "-gateway".into(),
            host.gateway.clone(),
        ],
        Step::PowerOn => vec!["-on".into(), host.name.clone()],
    };

    std::iter::once(step.subcommand().to_string())
        .chain(args)
        .collect()
}
