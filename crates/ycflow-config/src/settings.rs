//! Configuration file model
//!
//! ```yaml
//! yc:
//!   program: yc
//!   profile: default
//!   folder_id: b1g0123456789abcdef
//!   zone: ru-central1-a
//! boot_disk:
//!   type: network-ssd
//!   image_folder_id: standard-images
//! defaults:
//!   cores: 2
//!   memory_g: 2
//!   disk_g: 10
//!   image: centos-8
//!   ssh_key: ~/.ssh/id_rsa.pub
//! ```

use serde::{Deserialize, Serialize};

/// Top-level configuration. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub yc: YcSettings,
    pub boot_disk: BootDiskSettings,
    pub defaults: InstanceDefaults,
}

/// How to reach the control plane
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct YcSettings {
    /// `yc` executable, looked up in `PATH` unless absolute
    pub program: String,

    /// `yc` profile, `None` for the active one
    pub profile: Option<String>,

    /// Folder to work in, `None` for the profile's folder
    pub folder_id: Option<String>,

    /// Zone for new instances, `None` for the profile's zone
    pub zone: Option<String>,
}

impl Default for YcSettings {
    fn default() -> Self {
        Self {
            program: "yc".to_string(),
            profile: None,
            folder_id: None,
            zone: None,
        }
    }
}

/// Boot disk of new instances
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BootDiskSettings {
    #[serde(rename = "type")]
    pub disk_type: String,

    pub image_folder_id: String,
}

impl Default for BootDiskSettings {
    fn default() -> Self {
        Self {
            disk_type: "network-ssd".to_string(),
            image_folder_id: "standard-images".to_string(),
        }
    }
}

/// Values used when the command line leaves an attribute out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstanceDefaults {
    pub cores: i64,
    pub memory_g: i64,
    pub disk_g: i64,
    pub image: String,
    pub ssh_key: String,
}

impl Default for InstanceDefaults {
    fn default() -> Self {
        Self {
            cores: 2,
            memory_g: 2,
            disk_g: 10,
            image: "centos-8".to_string(),
            ssh_key: "~/.ssh/id_rsa.pub".to_string(),
        }
    }
}
