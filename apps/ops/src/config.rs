use std::path::PathBuf;

use anyhow::Result;

/// Workflow configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Parent directory of the per-role worktrees.
    pub worktree_root: PathBuf,
    /// Branch that topic branches start from and pull requests target.
    pub integration_branch: String,
    /// Branch new long-lived branches are cut from.
    pub main_branch: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            worktree_root: std::env::var("OPS_WORKTREE_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("../worktrees")),
            integration_branch: std::env::var("OPS_INTEGRATION_BRANCH")
                .unwrap_or_else(|_| "dev".to_string()),
            main_branch: std::env::var("OPS_MAIN_BRANCH").unwrap_or_else(|_| "main".to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn worktree_path(&self, name: &str) -> PathBuf {
        self.worktree_root.join(name)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            worktree_root: PathBuf::from("../worktrees"),
            integration_branch: "dev".to_string(),
            main_branch: "main".to_string(),
            rust_log: "info".to_string(),
        }
    }
}
