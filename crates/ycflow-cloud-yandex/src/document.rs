//! Typed views of `yc` YAML documents
//!
//! `yc` prints 64-bit integers as quoted strings (`memory: "2147483648"`), so
//! numeric fields accept both forms. Required fields that are missing fail
//! deserialization instead of surfacing later as lookups on absent keys.

use crate::yc::Reply;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use ycflow_cloud::{CloudError, ObservedDisk, ObservedInstance, Result};

/// `compute instance get/list/create` entry
#[derive(Debug, Clone, Deserialize)]
pub struct InstanceDocument {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub status: Option<String>,

    pub resources: ResourcesDocument,

    pub boot_disk: BootDiskDocument,

    #[serde(default)]
    pub network_interfaces: Vec<NetworkInterfaceDocument>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourcesDocument {
    #[serde(deserialize_with = "int_or_string")]
    pub cores: i64,

    #[serde(deserialize_with = "int_or_string")]
    pub memory: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BootDiskDocument {
    pub disk_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NetworkInterfaceDocument {
    #[serde(default)]
    pub primary_v4_address: Option<AddressDocument>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddressDocument {
    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub one_to_one_nat: Option<NatDocument>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NatDocument {
    #[serde(default)]
    pub address: Option<String>,
}

impl InstanceDocument {
    /// Public address of the first network interface
    pub fn public_ipv4(&self) -> Option<String> {
        self.network_interfaces
            .first()?
            .primary_v4_address
            .as_ref()?
            .one_to_one_nat
            .as_ref()?
            .address
            .clone()
    }
}

impl From<InstanceDocument> for ObservedInstance {
    fn from(doc: InstanceDocument) -> Self {
        let public_ipv4 = doc.public_ipv4();
        Self {
            id: doc.id,
            name: doc.name,
            cores: doc.resources.cores,
            memory_bytes: doc.resources.memory,
            boot_disk_id: doc.boot_disk.disk_id,
            public_ipv4,
        }
    }
}

/// `compute disk get` output
#[derive(Debug, Clone, Deserialize)]
pub struct DiskDocument {
    pub id: String,

    #[serde(deserialize_with = "int_or_string")]
    pub size: i64,
}

impl From<DiskDocument> for ObservedDisk {
    fn from(doc: DiskDocument) -> Self {
        Self {
            id: doc.id,
            size_bytes: doc.size,
        }
    }
}

/// Deserialize the document of `reply` into `T`.
///
/// Failures keep the command line and the output exactly as they were.
pub fn decode<T: DeserializeOwned>(reply: Reply) -> Result<T> {
    let Reply {
        command,
        raw,
        document,
    } = reply;

    serde_yaml::from_value(document).map_err(|e| CloudError::GatewayParse {
        command,
        raw,
        cause: e.to_string(),
    })
}

fn int_or_string<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Str(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(value) => Ok(value),
        Raw::Str(s) => s
            .trim()
            .parse()
            .map_err(|e| D::Error::custom(format!("invalid integer {:?}: {}", s, e))),
    }
}
