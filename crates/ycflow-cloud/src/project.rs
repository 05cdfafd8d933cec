//! Projection of the final instance state into the caller-facing result

use crate::error::{CloudError, Result};
use crate::provider::ComputeProvider;
use crate::state::{ObservedDisk, ObservedInstance};
use serde::{Deserialize, Serialize};

/// Outcome of a reconciliation run
///
/// Serializes to `{name, cores, memory_g, disk_g, public_ip, changed}`. In
/// check mode only `name` and `changed` are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationResult {
    pub name: String,

    #[serde(flatten)]
    pub instance: Option<InstanceReport>,

    pub changed: bool,
}

/// Attributes of the instance after reconciliation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceReport {
    pub cores: i64,
    pub memory_g: i64,
    pub disk_g: i64,
    pub public_ip: String,
}

impl ReconciliationResult {
    /// Result of a check-mode run, without instance attributes
    pub fn preview(name: impl Into<String>, changed: bool) -> Self {
        Self {
            name: name.into(),
            instance: None,
            changed,
        }
    }
}

/// Build the result for `instance`.
///
/// `known_disk` is reused when it is the instance's boot disk; otherwise the
/// disk is fetched from the provider.
pub async fn project<P>(
    provider: &P,
    instance: &ObservedInstance,
    changed: bool,
    known_disk: Option<&ObservedDisk>,
) -> Result<ReconciliationResult>
where
    P: ComputeProvider + ?Sized,
{
    let public_ip = instance
        .public_ipv4
        .clone()
        .ok_or_else(|| CloudError::MissingNetworkInterface {
            name: instance.name.clone(),
        })?;

    let disk_g = match known_disk {
        Some(disk) if disk.id == instance.boot_disk_id => disk.size_g(),
        _ => provider.get_disk(&instance.boot_disk_id).await?.size_g(),
    };

    Ok(ReconciliationResult {
        name: instance.name.clone(),
        instance: Some(InstanceReport {
            cores: instance.cores,
            memory_g: instance.memory_g(),
            disk_g,
            public_ip,
        }),
        changed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GIB;
    use crate::testing::{Call, FakeProvider};

    fn instance(public_ipv4: Option<&str>) -> ObservedInstance {
        ObservedInstance {
            id: "fhm1".to_string(),
            name: "web-1".to_string(),
            cores: 2,
            memory_bytes: 2255000000,
            boot_disk_id: "fhm1disk".to_string(),
            public_ipv4: public_ipv4.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_project_fetches_disk() {
        let provider = FakeProvider::new().with_instance("web-1", 2, 2 * GIB, 15 * GIB);

        let result = project(&provider, &instance(Some("51.250.1.2")), true, None)
            .await
            .unwrap();

        assert_eq!(
            result,
            ReconciliationResult {
                name: "web-1".to_string(),
                instance: Some(InstanceReport {
                    cores: 2,
                    memory_g: 2,
                    disk_g: 15,
                    public_ip: "51.250.1.2".to_string(),
                }),
                changed: true,
            }
        );
        assert_eq!(provider.calls(), vec![Call::GetDisk("fhm1disk".to_string())]);
    }

    #[tokio::test]
    async fn test_project_reuses_known_disk() {
        let provider = FakeProvider::new();
        let disk = ObservedDisk {
            id: "fhm1disk".to_string(),
            size_bytes: 10 * GIB + 1,
        };

        let result = project(&provider, &instance(Some("51.250.1.2")), false, Some(&disk))
            .await
            .unwrap();

        assert_eq!(result.instance.unwrap().disk_g, 10);
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_public_ip() {
        let provider = FakeProvider::new();

        match project(&provider, &instance(None), true, None).await {
            Err(CloudError::MissingNetworkInterface { name }) => assert_eq!(name, "web-1"),
            other => panic!("expected MissingNetworkInterface, got {:?}", other),
        }
    }

    #[test]
    fn test_result_field_names() {
        let result = ReconciliationResult {
            name: "web-1".to_string(),
            instance: Some(InstanceReport {
                cores: 2,
                memory_g: 2,
                disk_g: 10,
                public_ip: "51.250.1.2".to_string(),
            }),
            changed: true,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "web-1",
                "cores": 2,
                "memory_g": 2,
                "disk_g": 10,
                "public_ip": "51.250.1.2",
                "changed": true,
            })
        );
    }

    #[test]
    fn test_preview_has_no_attributes() {
        let json = serde_json::to_value(ReconciliationResult::preview("web-1", true)).unwrap();
        assert_eq!(json, serde_json::json!({"name": "web-1", "changed": true}));
    }
}
