//! External command execution.
//!
//! Every git/gh call goes through [`CommandRunner`] so workflow steps can be
//! exercised against a scripted runner. Commands run one at a time; callers
//! await each before issuing the next.

use std::fmt;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum OpsError {
    #[error("failed to launch `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("unexpected output from `{command}`: {reason}")]
    UnexpectedOutput { command: String, reason: String },

    #[error("Cannot find issue ID from branch name '{0}'")]
    MissingIssueId(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// One external program call: program, arguments and optional working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl Invocation {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
        }
    }

    pub fn git<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new("git", args)
    }

    pub fn gh<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new("gh", args)
    }

    pub fn in_dir(mut self, dir: &Path) -> Self {
        self.cwd = Some(dir.to_path_buf());
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " {arg:?}")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs the command to completion and returns its stdout.
    /// A non-zero exit is an `OpsError::CommandFailed`.
    async fn run(&self, invocation: &Invocation) -> Result<String, OpsError>;
}

/// Runs commands as real child processes.
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, invocation: &Invocation) -> Result<String, OpsError> {
        match &invocation.cwd {
            Some(dir) => info!("$ {invocation}  (in {})", dir.display()),
            None => info!("$ {invocation}"),
        }

        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);
        if let Some(dir) = &invocation.cwd {
            command.current_dir(dir);
        }

        let output = command.output().await.map_err(|source| OpsError::Spawn {
            command: invocation.to_string(),
            source,
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if !stdout.trim().is_empty() {
            debug!("{}", stdout.trim_end());
        }

        if !output.status.success() {
            return Err(OpsError::CommandFailed {
                command: invocation.to_string(),
                status: output
                    .status
                    .code()
                    .map(|c| format!("exit code {c}"))
                    .unwrap_or_else(|| "a signal".to_string()),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_quotes_arguments_with_spaces() {
        let inv = Invocation::git(["commit", "-m", "wip: update progress"]);
        assert_eq!(inv.to_string(), r#"git commit -m "wip: update progress""#);
    }

    #[test]
    fn test_in_dir_sets_cwd() {
        let inv = Invocation::git(["fetch", "origin"]).in_dir(Path::new("../worktrees/qa"));
        assert_eq!(inv.cwd.as_deref(), Some(Path::new("../worktrees/qa")));
    }

    #[tokio::test]
    async fn test_system_runner_reports_missing_program() {
        let inv = Invocation::new("definitely-not-a-real-program-xyz", ["--version"]);
        let err = SystemRunner.run(&inv).await.unwrap_err();
        assert!(matches!(err, OpsError::Spawn { .. }));
    }
}
