//! Yandex Cloud provider for ycflow
//!
//! This crate implements the ComputeProvider trait for Yandex Cloud by
//! driving the `yc` CLI.
//!
//! # Requirements
//!
//! - `yc` CLI must be installed and initialised (`yc init`)
//! - Authentication and the default folder come from the active `yc` profile
//!   unless overridden
//!
//! # Example
//!
//! ```ignore
//! use ycflow_cloud::{DesiredSpec, Reconciler};
//! use ycflow_cloud_yandex::{YandexCloudProvider, YcCli};
//!
//! let provider = YandexCloudProvider::new(YcCli::new());
//! let reconciler = Reconciler::new(provider);
//!
//! let result = reconciler.reconcile(&spec, false).await?;
//! println!("{} -> {:?}", result.name, result.changed);
//! ```

pub mod document;
pub mod provider;
pub mod yc;

pub use document::{DiskDocument, InstanceDocument};
pub use provider::{ProviderSettings, YandexCloudProvider};
pub use yc::{Document, Gateway, Reply, YcCli};
