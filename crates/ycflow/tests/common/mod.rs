use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

/// A stand-in `yc` executable answering from YAML files in a temp dir
pub struct FakeYc {
    pub root: TempDir,
}

impl FakeYc {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().display().to_string();

        let script = format!(
            r#"#!/bin/sh
echo "$*" >> "{dir}/calls.log"
case "$*" in
  *"compute instance list"*) cat "{dir}/list.yaml" ;;
  *"compute disk get"*) cat "{dir}/disk.yaml" ;;
  *"compute instance create"*)
    if [ -f "{dir}/create.err" ]; then cat "{dir}/create.err" >&2; exit 1; fi
    cat "{dir}/create.yaml" ;;
  *"compute instance delete"*) ;;
  *) echo "unknown command: $*" >&2; exit 2 ;;
esac
"#
        );
        let path = root.path().join("yc");
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

        let fake = Self { root };
        fake.write("list.yaml", "[]\n");
        fake
    }

    pub fn write(&self, name: &str, content: &str) {
        fs::write(self.root.path().join(name), content).unwrap();
    }

    pub fn program(&self) -> PathBuf {
        self.root.path().join("yc")
    }

    /// Argument lines of every call made so far
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.root.path().join("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[allow(dead_code)]
    pub fn mutations(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.contains("instance create") || c.contains("instance delete"))
            .collect()
    }
}

pub fn instance_yaml(name: &str, cores: i64, memory: i64, disk_id: &str) -> String {
    format!(
        r#"id: fhm{name}
name: {name}
resources:
  memory: "{memory}"
  cores: "{cores}"
  core_fraction: "100"
status: RUNNING
boot_disk:
  disk_id: {disk_id}
network_interfaces:
  - index: "0"
    primary_v4_address:
      address: 10.128.0.20
      one_to_one_nat:
        address: 84.201.150.12
"#
    )
}

/// `instance_yaml` entries as a YAML list
#[allow(dead_code)]
pub fn list_yaml(items: &[String]) -> String {
    items
        .iter()
        .map(|item| {
            let mut lines = item.lines();
            let first = lines.next().unwrap_or_default();
            let rest: Vec<String> = lines.map(|l| format!("  {}", l)).collect();
            format!("- {}\n{}\n", first, rest.join("\n"))
        })
        .collect()
}

#[allow(dead_code)]
pub fn disk_yaml(id: &str, size: i64) -> String {
    format!("id: {id}\nsize: \"{size}\"\nstatus: READY\n")
}

pub const GIB: i64 = 1024 * 1024 * 1024;
