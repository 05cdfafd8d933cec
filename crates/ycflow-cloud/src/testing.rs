//! In-memory provider used by the unit tests

use crate::error::{CloudError, Result};
use crate::provider::ComputeProvider;
use crate::spec::DesiredSpec;
use crate::state::{GIB, ObservedDisk, ObservedInstance};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    GetDisk(String),
    Delete(String),
    Create(DesiredSpec),
}

impl Call {
    pub fn is_mutation(&self) -> bool {
        matches!(self, Call::Delete(_) | Call::Create(_))
    }
}

#[derive(Default)]
struct Inner {
    instances: Vec<ObservedInstance>,
    disks: HashMap<String, ObservedDisk>,
    calls: Vec<Call>,
    fail_create: bool,
    without_public_ip: bool,
    next_id: usize,
}

#[derive(Default)]
pub struct FakeProvider {
    inner: Mutex<Inner>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an instance along with its boot disk
    pub fn with_instance(self, name: &str, cores: i64, memory_bytes: i64, disk_bytes: i64) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.next_id += 1;
            let id = format!("fhm{}", inner.next_id);
            let disk_id = format!("{}disk", id);
            inner.disks.insert(
                disk_id.clone(),
                ObservedDisk {
                    id: disk_id.clone(),
                    size_bytes: disk_bytes,
                },
            );
            inner.instances.push(ObservedInstance {
                id,
                name: name.to_string(),
                cores,
                memory_bytes,
                boot_disk_id: disk_id,
                public_ipv4: Some("51.250.10.1".to_string()),
            });
        }
        self
    }

    pub fn failing_create(self) -> Self {
        self.inner.lock().unwrap().fail_create = true;
        self
    }

    pub fn without_public_ip(self) -> Self {
        self.inner.lock().unwrap().without_public_ip = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn mutations(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_mutation).collect()
    }

    pub fn instance_names(&self) -> Vec<String> {
        let inner = self.inner.lock().unwrap();
        inner.instances.iter().map(|i| i.name.clone()).collect()
    }
}

#[async_trait]
impl ComputeProvider for FakeProvider {
    fn name(&self) -> &str {
        "fake"
    }

    async fn list_instances(&self) -> Result<Vec<ObservedInstance>> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(Call::List);
        Ok(inner.instances.clone())
    }

    async fn get_disk(&self, disk_id: &str) -> Result<ObservedDisk> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(Call::GetDisk(disk_id.to_string()));
        inner
            .disks
            .get(disk_id)
            .cloned()
            .ok_or_else(|| CloudError::GatewayExecution {
                command: format!("compute disk get --id {}", disk_id),
                exit_code: Some(1),
                stderr: format!("disk {} not found", disk_id),
            })
    }

    async fn delete_instance(&self, name: &str) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(Call::Delete(name.to_string()));
        inner.instances.retain(|i| i.name != name);
        Ok(())
    }

    async fn create_instance(&self, spec: &DesiredSpec) -> Result<ObservedInstance> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(Call::Create(spec.clone()));

        if inner.fail_create {
            return Err(CloudError::GatewayExecution {
                command: format!("compute instance create --name {}", spec.name),
                exit_code: Some(1),
                stderr: "quota exceeded".to_string(),
            });
        }

        inner.next_id += 1;
        let id = format!("fhm{}", inner.next_id);
        let disk_id = format!("{}disk", id);
        inner.disks.insert(
            disk_id.clone(),
            ObservedDisk {
                id: disk_id.clone(),
                size_bytes: spec.disk_g * GIB,
            },
        );

        let public_ipv4 = if inner.without_public_ip {
            None
        } else {
            Some("51.250.99.7".to_string())
        };
        let instance = ObservedInstance {
            id,
            name: spec.name.clone(),
            cores: spec.cores,
            memory_bytes: spec.memory_g * GIB,
            boot_disk_id: disk_id,
            public_ipv4,
        };
        inner.instances.push(instance.clone());
        Ok(instance)
    }
}

pub fn web_spec() -> DesiredSpec {
    DesiredSpec {
        name: "web-1".to_string(),
        cores: 2,
        memory_g: 2,
        disk_g: 10,
        image: "centos-8".to_string(),
        ssh_key: "~/.ssh/id_rsa.pub".to_string(),
    }
}
