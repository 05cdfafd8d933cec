//! Reconciliation of a single compute instance
//!
//! ```text
//! START → LOOKED_UP → NOOP | CREATE | REPLACE → (EXECUTING) → DONE
//! ```
//!
//! A run is a flat sequence of provider calls: list, optional disk lookup,
//! optional delete, optional create, optional disk lookup. The first error
//! ends the run.

use crate::action::Plan;
use crate::compare::compare;
use crate::error::{CloudError, Result};
use crate::lookup::find_by_name;
use crate::project::{ReconciliationResult, project};
use crate::provider::ComputeProvider;
use crate::spec::DesiredSpec;
use crate::state::ObservedInstance;

/// Drives a provider towards a desired spec
pub struct Reconciler<P> {
    provider: P,
}

impl<P: ComputeProvider> Reconciler<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Look up the current instance and decide what to do.
    ///
    /// Never mutates anything.
    pub async fn plan(&self, desired: &DesiredSpec) -> Result<Plan> {
        desired.validate()?;

        let plan = match find_by_name(&self.provider, &desired.name).await? {
            None => Plan::Create,
            Some(instance) => {
                let comparison = compare(&self.provider, &instance, desired).await?;
                if comparison.matches {
                    Plan::Keep {
                        instance,
                        disk: comparison.disk,
                    }
                } else {
                    Plan::Replace { existing: instance }
                }
            }
        };

        tracing::info!(
            "{}: {} (provider {})",
            desired.name,
            plan.decision(),
            self.provider.name()
        );
        Ok(plan)
    }

    /// Carry out `plan` and report the resulting instance.
    pub async fn apply(&self, desired: &DesiredSpec, plan: Plan) -> Result<ReconciliationResult> {
        match plan {
            Plan::Keep { instance, disk } => {
                project(&self.provider, &instance, false, disk.as_ref()).await
            }
            Plan::Create => {
                let created = self.create(desired).await?;
                project(&self.provider, &created, true, None).await
            }
            Plan::Replace { existing } => {
                tracing::info!(
                    "Deleting instance {} (ID: {})",
                    existing.name,
                    existing.id
                );
                self.provider.delete_instance(&existing.name).await?;

                let created = self.create(desired).await.map_err(|e| {
                    tracing::error!(
                        "Instance {} was deleted but could not be created again: {}",
                        existing.name,
                        e
                    );
                    CloudError::ReplaceAborted {
                        name: existing.name.clone(),
                        source: Box::new(e),
                    }
                })?;
                project(&self.provider, &created, true, None).await
            }
        }
    }

    /// Reconcile `desired` against the provider.
    ///
    /// In check mode the decision is reported as `changed` and nothing is
    /// created or deleted.
    pub async fn reconcile(
        &self,
        desired: &DesiredSpec,
        check_mode: bool,
    ) -> Result<ReconciliationResult> {
        let plan = self.plan(desired).await?;

        if check_mode {
            return Ok(ReconciliationResult::preview(
                desired.name.clone(),
                plan.has_changes(),
            ));
        }

        self.apply(desired, plan).await
    }

    async fn create(&self, desired: &DesiredSpec) -> Result<ObservedInstance> {
        tracing::info!(
            "Creating instance {} ({} cores, {}G memory, {}G disk, image {})",
            desired.name,
            desired.cores,
            desired.memory_g,
            desired.disk_g,
            desired.image
        );
        let created = self.provider.create_instance(desired).await?;
        tracing::info!("Created instance {} (ID: {})", created.name, created.id);
        Ok(created)
    }
}
