//! Reconciliation error types

use thiserror::Error;

/// Errors raised while reconciling a compute instance.
///
/// Every variant aborts the current run. Nothing is retried or downgraded.
#[derive(Error, Debug)]
pub enum CloudError {
    #[error("failed to start `{command}`: {source}")]
    GatewaySpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed ({}): {stderr}", describe_exit(.exit_code))]
    GatewayExecution {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("unexpected output from `{command}`: {cause}\n--- raw output ---\n{raw}")]
    GatewayParse {
        command: String,
        raw: String,
        cause: String,
    },

    #[error("{count} instances are named '{name}', refusing to pick one")]
    AmbiguousResource { name: String, count: usize },

    #[error("instance '{name}' has no network interface with a public IPv4 address")]
    MissingNetworkInterface { name: String },

    #[error("invalid {field}: {reason}")]
    InvalidSpec { field: &'static str, reason: String },

    /// Replace deleted the old instance and the create that followed failed.
    #[error("instance '{name}' was deleted but could not be created again: {source}")]
    ReplaceAborted {
        name: String,
        #[source]
        source: Box<CloudError>,
    },
}

impl CloudError {
    /// Whether the error came out of a control-plane call.
    pub fn is_gateway(&self) -> bool {
        matches!(
            self.underlying(),
            CloudError::GatewaySpawn { .. }
                | CloudError::GatewayExecution { .. }
                | CloudError::GatewayParse { .. }
        )
    }

    /// The error that stopped the run, looking through `ReplaceAborted`.
    pub fn underlying(&self) -> &CloudError {
        match self {
            CloudError::ReplaceAborted { source, .. } => source.underlying(),
            other => other,
        }
    }
}

fn describe_exit(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, CloudError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_error_carries_command_and_stderr() {
        let err = CloudError::GatewayExecution {
            command: "yc compute instance list".to_string(),
            exit_code: Some(1),
            stderr: "ERROR: permission denied".to_string(),
        };

        let message = err.to_string();
        assert!(message.contains("yc compute instance list"));
        assert!(message.contains("exit code 1"));
        assert!(message.contains("permission denied"));
        assert!(err.is_gateway());
    }

    #[test]
    fn test_signal_exit() {
        let err = CloudError::GatewayExecution {
            command: "yc".to_string(),
            exit_code: None,
            stderr: String::new(),
        };
        assert!(err.to_string().contains("terminated by signal"));
    }

    #[test]
    fn test_ambiguous_is_not_gateway() {
        let err = CloudError::AmbiguousResource {
            name: "web-1".to_string(),
            count: 2,
        };
        assert_eq!(
            err.to_string(),
            "2 instances are named 'web-1', refusing to pick one"
        );
        assert!(!err.is_gateway());
    }

    #[test]
    fn test_replace_aborted_keeps_gateway_error() {
        let err = CloudError::ReplaceAborted {
            name: "web-1".to_string(),
            source: Box::new(CloudError::GatewayExecution {
                command: "yc compute instance create --name web-1".to_string(),
                exit_code: Some(1),
                stderr: "ERROR: quota exceeded".to_string(),
            }),
        };

        let message = err.to_string();
        assert!(message.contains("'web-1' was deleted but could not be created again"));
        assert!(message.contains("quota exceeded"));
        assert!(err.is_gateway());
        assert!(matches!(
            err.underlying(),
            CloudError::GatewayExecution { .. }
        ));
        assert!(std::error::Error::source(&err).is_some());
    }
}
