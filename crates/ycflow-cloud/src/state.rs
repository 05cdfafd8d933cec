//! Observed state of compute resources
//!
//! Values here are only ever produced by a [`ComputeProvider`](crate::ComputeProvider)
//! and are fetched fresh on every run.

use serde::{Deserialize, Serialize};

/// Bytes in one GB as the control plane counts them (1024³)
pub const GIB: i64 = 1024 * 1024 * 1024;

/// Convert a byte count to whole GB, truncating any remainder.
pub fn bytes_to_gb(bytes: i64) -> i64 {
    bytes / GIB
}

/// A compute instance as reported by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservedInstance {
    /// Provider-specific instance ID
    pub id: String,

    pub name: String,

    pub cores: i64,

    pub memory_bytes: i64,

    /// ID of the boot disk, resolved through a separate disk lookup
    pub boot_disk_id: String,

    /// One-to-one NAT address of the first network interface
    pub public_ipv4: Option<String>,
}

impl ObservedInstance {
    /// Memory in whole GB
    pub fn memory_g(&self) -> i64 {
        bytes_to_gb(self.memory_bytes)
    }
}

/// A disk as reported by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservedDisk {
    pub id: String,

    pub size_bytes: i64,
}

impl ObservedDisk {
    /// Size in whole GB
    pub fn size_g(&self) -> i64 {
        bytes_to_gb(self.size_bytes)
    }
}
