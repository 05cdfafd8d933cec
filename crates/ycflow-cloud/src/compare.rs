//! Comparison of observed and desired instance attributes
//!
//! Cores, memory and boot disk size are compared after converting bytes to
//! whole GB. Image and SSH key are not compared.

use crate::error::Result;
use crate::provider::ComputeProvider;
use crate::spec::DesiredSpec;
use crate::state::{ObservedDisk, ObservedInstance};

/// Outcome of comparing an instance against a spec
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub matches: bool,

    /// Boot disk, if it had to be fetched
    pub disk: Option<ObservedDisk>,
}

/// Compare `observed` against `desired`.
///
/// The boot disk is only fetched when cores and memory already match.
pub async fn compare<P>(
    provider: &P,
    observed: &ObservedInstance,
    desired: &DesiredSpec,
) -> Result<Comparison>
where
    P: ComputeProvider + ?Sized,
{
    if observed.cores != desired.cores {
        tracing::debug!(
            "{}: cores differ (observed {}, desired {})",
            observed.name,
            observed.cores,
            desired.cores
        );
        return Ok(Comparison {
            matches: false,
            disk: None,
        });
    }

    if observed.memory_g() != desired.memory_g {
        tracing::debug!(
            "{}: memory differs (observed {} bytes = {}G, desired {}G)",
            observed.name,
            observed.memory_bytes,
            observed.memory_g(),
            desired.memory_g
        );
        return Ok(Comparison {
            matches: false,
            disk: None,
        });
    }

    let disk = provider.get_disk(&observed.boot_disk_id).await?;
    let matches = disk.size_g() == desired.disk_g;
    if !matches {
        tracing::debug!(
            "{}: boot disk {} differs (observed {}G, desired {}G)",
            observed.name,
            disk.id,
            disk.size_g(),
            desired.disk_g
        );
    }

    Ok(Comparison {
        matches,
        disk: Some(disk),
    })
}

/// Whether `observed` satisfies `desired`
pub async fn matches<P>(provider: &P, observed: &ObservedInstance, desired: &DesiredSpec) -> Result<bool>
where
    P: ComputeProvider + ?Sized,
{
    Ok(compare(provider, observed, desired).await?.matches)
}
