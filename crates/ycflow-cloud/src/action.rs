//! Reconciliation decisions

use crate::state::{ObservedDisk, ObservedInstance};
use serde::{Deserialize, Serialize};

/// What a reconciliation run will do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// The existing instance already matches
    NoOp,
    /// No instance exists yet
    Create,
    /// The existing instance is destroyed and created again
    Replace,
}

impl Decision {
    /// Whether carrying out the decision changes anything
    pub fn is_change(self) -> bool {
        self != Decision::NoOp
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::NoOp => write!(f, "no-op"),
            Decision::Create => write!(f, "create"),
            Decision::Replace => write!(f, "replace"),
        }
    }
}

/// A decision together with the observations it was based on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    /// Keep the existing instance as it is
    Keep {
        instance: ObservedInstance,
        /// Boot disk fetched while comparing, reused for the result
        disk: Option<ObservedDisk>,
    },
    /// Create a new instance
    Create,
    /// Destroy `existing`, then create a new instance
    Replace { existing: ObservedInstance },
}

impl Plan {
    pub fn decision(&self) -> Decision {
        match self {
            Plan::Keep { .. } => Decision::NoOp,
            Plan::Create => Decision::Create,
            Plan::Replace { .. } => Decision::Replace,
        }
    }

    pub fn has_changes(&self) -> bool {
        self.decision().is_change()
    }
}
