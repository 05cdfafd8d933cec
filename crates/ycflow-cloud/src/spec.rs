//! Desired instance specification

use crate::error::{CloudError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Desired state of a single compute instance
///
/// Built once per run from caller input and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesiredSpec {
    /// Instance name, unique within the folder
    pub name: String,

    /// Number of vCPU cores
    pub cores: i64,

    /// Memory size in GB
    pub memory_g: i64,

    /// Boot disk size in GB
    pub disk_g: i64,

    /// Image family used for the boot disk
    pub image: String,

    /// Path to the public SSH key placed on the instance
    pub ssh_key: String,
}

impl DesiredSpec {
    /// Reject specs that could never be satisfied.
    ///
    /// Called before any control-plane call is made.
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;

        for (field, value) in [
            ("cores", self.cores),
            ("memory_g", self.memory_g),
            ("disk_g", self.disk_g),
        ] {
            if value <= 0 {
                return Err(CloudError::InvalidSpec {
                    field,
                    reason: format!("must be positive, got {}", value),
                });
            }
        }

        if self.image.trim().is_empty() {
            return Err(CloudError::InvalidSpec {
                field: "image",
                reason: "must not be empty".to_string(),
            });
        }

        if self.ssh_key.trim().is_empty() {
            return Err(CloudError::InvalidSpec {
                field: "ssh_key",
                reason: "must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Lowercase letters, digits and hyphens; starts with a letter, does not end
/// with a hyphen, at most 63 characters.
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z]([-a-z0-9]{0,61}[a-z0-9])?$").expect("instance name pattern compiles")
});

fn validate_name(name: &str) -> Result<()> {
    if NAME_PATTERN.is_match(name) {
        return Ok(());
    }

    Err(CloudError::InvalidSpec {
        field: "name",
        reason: format!(
            "'{}' must be 1-63 lowercase letters, digits or hyphens, \
             starting with a letter and not ending with a hyphen",
            name
        ),
    })
}
