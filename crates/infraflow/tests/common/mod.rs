use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const SERVERS: &str = r#"
servers:
  - name: splunk01
    ipaddress: 10.0.0.5
    netmask: 255.255.255.0
    gateway: 10.0.0.1
  - name: splunk02
    ipaddress: 10.0.0.6
    netmask: 255.255.255.0
    gateway: 10.0.0.1
"#;

pub struct TestProject {
    pub root: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        Self { root }
    }

    pub fn path(&self) -> PathBuf {
        self.root.path().to_path_buf()
    }

    /// Write `infraflow.yaml` and return its path
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.root.path().join("infraflow.yaml");
        fs::write(&path, content).unwrap();
        path
    }

    pub fn vcenter_section(&self, govc: Option<&PathBuf>) -> String {
        let mut section = String::from(
            r#"
vcenter:
  url: https://vc.example.com/sdk
  username: administrator@vsphere.local
  password: secret
  template: splunk-template
  datastore: ds01
  network: VM Network
  resourcepool: /dc1/host/cluster1/Resources
  datacenter: dc1
"#,
        );
        if let Some(govc) = govc {
            section.push_str(&format!("  govc: {}\n", govc.display()));
        }
        section
    }

    pub fn ahv_section(&self, url: &str) -> String {
        format!(
            r#"
ahv:
  url: {}
  username: admin
  password: secret
  template: tmpl-base
  networkUUID: net-1
  storageContainerUUID: sc-1
  timeoutSecs: 5
  cloneWaitSecs: 0
"#,
            url
        )
    }

    /// Scripted govc stand-in: logs each subcommand, fails on `fail_on`
    #[cfg(unix)]
    #[allow(dead_code)]
    pub fn write_fake_govc(&self, fail_on: Option<&str>) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let log = self.govc_log_path();
        let env_log = self.root.path().join("govc-env.log");
        let script = format!(
            r#"#!/bin/sh
echo "$1" >> "{log}"
echo "$GOVC_URL $GOVC_USERNAME $GOVC_DATACENTER" > "{env_log}"
if [ "$1" = "{fail_on}" ]; then
  echo "govc: device 'ethernet-0' not found" >&2
  exit 1
fi
exit 0
"#,
            log = log.display(),
            env_log = env_log.display(),
            fail_on = fail_on.unwrap_or("__never__"),
        );

        let path = self.root.path().join("fake-govc");
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    pub fn govc_log_path(&self) -> PathBuf {
        self.root.path().join("govc.log")
    }

    /// Subcommands the fake govc was invoked with, in order
    #[allow(dead_code)]
    pub fn govc_calls(&self) -> Vec<String> {
        fs::read_to_string(self.govc_log_path())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[allow(dead_code)]
    pub fn govc_env(&self) -> String {
        fs::read_to_string(self.root.path().join("govc-env.log")).unwrap_or_default()
    }
}
