//! Yandex Cloud provider implementation

use crate::document::{DiskDocument, InstanceDocument, decode};
use crate::yc::{Gateway, YcCli};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use ycflow_cloud::{ComputeProvider, DesiredSpec, ObservedDisk, ObservedInstance, Result};

/// Settings applied to every instance the provider creates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    /// Availability zone, `None` for the profile default
    pub zone: Option<String>,

    /// Boot disk type
    pub disk_type: String,

    /// Folder holding the public images
    pub image_folder_id: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            zone: None,
            disk_type: "network-ssd".to_string(),
            image_folder_id: "standard-images".to_string(),
        }
    }
}

/// Yandex Cloud compute provider
pub struct YandexCloudProvider<G = YcCli> {
    gateway: G,
    settings: ProviderSettings,
}

impl<G: Gateway> YandexCloudProvider<G> {
    pub fn new(gateway: G) -> Self {
        Self::with_settings(gateway, ProviderSettings::default())
    }

    pub fn with_settings(gateway: G, settings: ProviderSettings) -> Self {
        Self { gateway, settings }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    async fn call<T: DeserializeOwned>(&self, args: Vec<String>) -> Result<T> {
        decode(self.gateway.invoke(&args).await?)
    }

    /// Arguments of the `compute instance create` call for `spec`
    ///
    /// The instance always gets a one-to-one NAT address and is preemptible.
    pub fn create_args(&self, spec: &DesiredSpec) -> Vec<String> {
        let mut args = tokens(&[
            "compute",
            "instance",
            "create",
            "--name",
            &spec.name,
            "--hostname",
            &spec.name,
        ]);

        if let Some(ref zone) = self.settings.zone {
            args.extend(tokens(&["--zone", zone]));
        }

        let boot_disk = format!(
            "type={},image-folder-id={},image-family={},size={}",
            self.settings.disk_type, self.settings.image_folder_id, spec.image, spec.disk_g
        );

        args.extend(tokens(&[
            "--ssh-key",
            &spec.ssh_key,
            "--cores",
            &spec.cores.to_string(),
            "--memory",
            &spec.memory_g.to_string(),
            "--create-boot-disk",
            &boot_disk,
            "--public-ip",
            "--preemptible",
        ]));
        args
    }
}

fn tokens(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[async_trait]
impl<G: Gateway> ComputeProvider for YandexCloudProvider<G> {
    fn name(&self) -> &str {
        "yandex-cloud"
    }

    async fn list_instances(&self) -> Result<Vec<ObservedInstance>> {
        let reply = self
            .gateway
            .invoke(&tokens(&["compute", "instance", "list"]))
            .await?;

        if reply.document.is_null() {
            return Ok(Vec::new());
        }

        let instances: Vec<InstanceDocument> = decode(reply)?;
        tracing::debug!("Listed {} instances", instances.len());
        Ok(instances.into_iter().map(ObservedInstance::from).collect())
    }

    async fn get_disk(&self, disk_id: &str) -> Result<ObservedDisk> {
        let disk: DiskDocument = self
            .call(tokens(&["compute", "disk", "get", "--id", disk_id]))
            .await?;
        Ok(disk.into())
    }

    async fn delete_instance(&self, name: &str) -> Result<()> {
        self.gateway
            .invoke(&tokens(&["compute", "instance", "delete", "--name", name]))
            .await?;
        Ok(())
    }

    async fn create_instance(&self, spec: &DesiredSpec) -> Result<ObservedInstance> {
        let instance: InstanceDocument = self.call(self.create_args(spec)).await?;
        tracing::debug!(
            "Instance {} reported status {}",
            instance.name,
            instance.status.as_deref().unwrap_or("unknown")
        );
        Ok(instance.into())
    }
}
