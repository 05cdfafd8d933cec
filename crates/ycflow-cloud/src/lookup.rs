//! Resource lookup by name

use crate::error::{CloudError, Result};
use crate::provider::ComputeProvider;
use crate::state::ObservedInstance;

/// Find the single instance called `name`.
///
/// Returns `None` when no instance has that name. More than one match is an
/// [`CloudError::AmbiguousResource`] error; no match is ever picked silently.
pub async fn find_by_name<P>(provider: &P, name: &str) -> Result<Option<ObservedInstance>>
where
    P: ComputeProvider + ?Sized,
{
    let mut matching: Vec<ObservedInstance> = provider
        .list_instances()
        .await?
        .into_iter()
        .filter(|instance| instance.name == name)
        .collect();

    match matching.len() {
        0 => {
            tracing::debug!("No instance named {}", name);
            Ok(None)
        }
        1 => Ok(matching.pop()),
        count => Err(CloudError::AmbiguousResource {
            name: name.to_string(),
            count,
        }),
    }
}
