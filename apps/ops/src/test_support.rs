use std::sync::Mutex;

use async_trait::async_trait;

use crate::runner::{CommandRunner, Invocation, OpsError};

/// Records every invocation and answers from a list of prefix rules.
/// Unmatched commands succeed with empty stdout.
#[derive(Default)]
pub struct ScriptedRunner {
    rules: Vec<(String, Result<String, String>)>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ok(mut self, prefix: &str, stdout: &str) -> Self {
        self.rules.push((prefix.to_string(), Ok(stdout.to_string())));
        self
    }

    pub fn fail(mut self, prefix: &str, stderr: &str) -> Self {
        self.rules.push((prefix.to_string(), Err(stderr.to_string())));
        self
    }

    /// Rendered commands in call order; commands run in a directory are
    /// prefixed with `[dir] `.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, invocation: &Invocation) -> Result<String, OpsError> {
        let rendered = match &invocation.cwd {
            Some(dir) => format!("[{}] {invocation}", dir.display()),
            None => invocation.to_string(),
        };
        self.calls.lock().unwrap().push(rendered.clone());

        let rule = self
            .rules
            .iter()
            .find(|(prefix, _)| rendered.starts_with(prefix.as_str()));

        match rule {
            Some((_, Ok(stdout))) => Ok(stdout.clone()),
            Some((_, Err(stderr))) => Err(OpsError::CommandFailed {
                command: rendered,
                status: "exit code 1".to_string(),
                stderr: stderr.clone(),
            }),
            None => Ok(String::new()),
        }
    }
}
