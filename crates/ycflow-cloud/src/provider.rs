//! Compute provider trait definition

use crate::error::Result;
use crate::spec::DesiredSpec;
use crate::state::{ObservedDisk, ObservedInstance};
use async_trait::async_trait;

/// Compute provider abstraction trait
///
/// Implementations talk to a cloud control plane and hand back typed,
/// validated observations. Each method is a single attempt; retries are
/// never performed at this layer.
#[async_trait]
pub trait ComputeProvider: Send + Sync {
    /// Returns the provider name (e.g., "yandex-cloud")
    fn name(&self) -> &str;

    /// List every instance visible to the configured credentials
    async fn list_instances(&self) -> Result<Vec<ObservedInstance>>;

    /// Fetch a disk by ID
    async fn get_disk(&self, disk_id: &str) -> Result<ObservedDisk>;

    /// Delete an instance by name
    async fn delete_instance(&self, name: &str) -> Result<()>;

    /// Create an instance and return it as reported by the create call
    ///
    /// Instances are always created with a public IPv4 address and as
    /// preemptible.
    async fn create_instance(&self, spec: &DesiredSpec) -> Result<ObservedInstance>;
}
