//! yc CLI wrapper
//!
//! Runs `yc` non-interactively with YAML output and hands back the parsed
//! document together with the exact command line and raw output.

use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use ycflow_cloud::{CloudError, Result};

/// Parsed structured output of a control-plane call
pub type Document = serde_yaml::Value;

/// One answered control-plane call
#[derive(Debug, Clone)]
pub struct Reply {
    /// Command line as it was run
    pub command: String,

    /// Stdout as received
    pub raw: String,

    pub document: Document,
}

/// Executes control-plane commands
///
/// One call is one attempt. Implementations never retry.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Run the command made of `args` and parse its output
    async fn invoke(&self, args: &[String]) -> Result<Reply>;
}

/// `yc` CLI gateway
#[derive(Debug, Clone)]
pub struct YcCli {
    program: String,
    profile: Option<String>,
    folder_id: Option<String>,
}

impl Default for YcCli {
    fn default() -> Self {
        Self {
            program: "yc".to_string(),
            profile: None,
            folder_id: None,
        }
    }
}

impl YcCli {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use another executable instead of `yc` from `PATH`
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_profile(mut self, profile: Option<String>) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_folder_id(mut self, folder_id: Option<String>) -> Self {
        self.folder_id = folder_id;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Full argument list: output flags, global flags, then `args`
    fn command_line(&self, args: &[String]) -> Vec<String> {
        let mut line: Vec<String> = ["--no-user-output", "--format", "yaml"]
            .into_iter()
            .map(String::from)
            .collect();

        if let Some(ref profile) = self.profile {
            line.push("--profile".to_string());
            line.push(profile.clone());
        }
        if let Some(ref folder_id) = self.folder_id {
            line.push("--folder-id".to_string());
            line.push(folder_id.clone());
        }

        line.extend(args.iter().cloned());
        line
    }
}

#[async_trait]
impl Gateway for YcCli {
    async fn invoke(&self, args: &[String]) -> Result<Reply> {
        let line = self.command_line(args);
        let command = format!("{} {}", self.program, line.join(" "));

        tracing::debug!("Running: {}", command);

        let output = Command::new(&self.program)
            .args(&line)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| CloudError::GatewaySpawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CloudError::GatewayExecution {
                command,
                exit_code: output.status.code(),
                stderr: stderr.trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        parse_reply(command, stdout)
    }
}

/// Parse YAML output. Empty output is a null document.
pub fn parse_reply(command: String, raw: String) -> Result<Reply> {
    if raw.trim().is_empty() {
        return Ok(Reply {
            command,
            raw,
            document: Document::Null,
        });
    }

    match serde_yaml::from_str(&raw) {
        Ok(document) => Ok(Reply {
            command,
            raw,
            document,
        }),
        Err(e) => Err(CloudError::GatewayParse {
            command,
            raw,
            cause: e.to_string(),
        }),
    }
}
