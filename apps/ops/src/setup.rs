//! One-time repository provisioning: long-lived branches, issue labels and
//! one detached worktree per agent role.

use tracing::{info, warn};

use crate::config::Config;
use crate::naming::parse_branch_list;
use crate::runner::{CommandRunner, Invocation, OpsError};

pub struct Label {
    pub name: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

pub const LABELS: &[Label] = &[
    Label {
        name: "feature",
        color: "a2eeef",
        description: "New functionality",
    },
    Label {
        name: "bug",
        color: "d73a4a",
        description: "Something isn't working",
    },
    Label {
        name: "refactor",
        color: "cfd3d7",
        description: "Code change that neither fixes a bug nor adds a feature",
    },
    Label {
        name: "chore",
        color: "7057ff",
        description: "Build process or auxiliary tool changes",
    },
];

/// Role worktrees, created under `Config::worktree_root`.
pub const WORKTREES: &[&str] = &["architect", "qa-back", "qa-front", "backend", "frontend"];

/// Release branches that must exist next to the integration branch.
const RELEASE_BRANCHES: &[&str] = &["beta", "prod"];

pub fn required_branches(config: &Config) -> Vec<String> {
    let mut branches = vec![config.integration_branch.clone()];
    for b in RELEASE_BRANCHES {
        if !branches.iter().any(|existing| existing == b) {
            branches.push(b.to_string());
        }
    }
    branches
}

pub async fn run_setup(runner: &dyn CommandRunner, config: &Config) -> Result<(), OpsError> {
    info!("Setup initiated");

    ensure_branches(runner, config).await?;
    ensure_labels(runner).await;
    ensure_worktrees(runner, config).await?;

    info!("Switching to {} branch", config.integration_branch);
    runner
        .run(&Invocation::git(["checkout", config.integration_branch.as_str()]))
        .await?;

    info!("Setup complete");
    Ok(())
}

async fn ensure_branches(runner: &dyn CommandRunner, config: &Config) -> Result<(), OpsError> {
    info!("Checking branches");
    let existing = parse_branch_list(&runner.run(&Invocation::git(["branch", "-a"])).await?);

    for branch in required_branches(config) {
        if existing.contains(&branch) {
            info!("Branch '{branch}' already exists");
            continue;
        }

        info!("Creating branch: {branch}");
        let from_main = Invocation::git(["branch", branch.as_str(), config.main_branch.as_str()]);
        if let Err(e) = runner.run(&from_main).await {
            warn!("Could not branch from {}: {e}; using HEAD", config.main_branch);
            runner
                .run(&Invocation::git(["branch", branch.as_str()]))
                .await?;
        }
        runner
            .run(&Invocation::git(["push", "-u", "origin", branch.as_str()]))
            .await?;
    }
    Ok(())
}

/// A failed `gh label create` means the label is already there.
async fn ensure_labels(runner: &dyn CommandRunner) {
    info!("Checking GitHub labels");
    for label in LABELS {
        let create = Invocation::gh([
            "label",
            "create",
            label.name,
            "--color",
            label.color,
            "--description",
            label.description,
        ]);
        match runner.run(&create).await {
            Ok(_) => info!("Created label: {}", label.name),
            Err(_) => info!("Label '{}' ready", label.name),
        }
    }
}

async fn ensure_worktrees(runner: &dyn CommandRunner, config: &Config) -> Result<(), OpsError> {
    info!("Setting up worktrees");
    tokio::fs::create_dir_all(&config.worktree_root).await?;

    for name in WORKTREES {
        let path = config.worktree_path(name);
        if tokio::fs::try_exists(&path).await? {
            info!("Worktree '{name}' already exists");
            continue;
        }

        info!("Creating worktree: {name}");
        // Detached so several worktrees can sit on the same branch.
        let path = path.to_string_lossy();
        runner
            .run(&Invocation::git([
                "worktree",
                "add",
                "--detach",
                &*path,
                config.integration_branch.as_str(),
            ]))
            .await?;
    }
    Ok(())
}
