//! ycflow compute reconciliation
//!
//! This crate decides whether a single compute instance has to be created,
//! replaced or left alone, and carries the decision out through a
//! [`ComputeProvider`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                   ycflow CLI                     │
//! │            (ycflow instance --check)             │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────┐
//! │                 ycflow-cloud                     │
//! │  ┌──────────────────────────────────────────┐   │
//! │  │               Reconciler                  │   │
//! │  │  lookup → compare → plan → apply          │   │
//! │  └──────────────────────────────────────────┘   │
//! │  ┌──────────────┐  ┌──────────────┐            │
//! │  │   Projector  │  │ trait Compute │            │
//! │  │              │  │   Provider    │            │
//! │  └──────────────┘  └──────────────┘            │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//!           ┌───────▼───────┐
//!           │ yandex-cloud  │
//!           │  (yc CLI)     │
//!           └───────────────┘
//! ```

pub mod action;
pub mod compare;
pub mod error;
pub mod lookup;
pub mod project;
pub mod provider;
pub mod reconciler;
pub mod spec;
pub mod state;

#[cfg(test)]
mod testing;

// Re-exports
pub use action::{Decision, Plan};
pub use compare::{Comparison, compare, matches};
pub use error::{CloudError, Result};
pub use lookup::find_by_name;
pub use project::{InstanceReport, ReconciliationResult, project};
pub use provider::ComputeProvider;
pub use reconciler::Reconciler;
pub use spec::DesiredSpec;
pub use state::{GIB, ObservedDisk, ObservedInstance, bytes_to_gb};
