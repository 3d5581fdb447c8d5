//! Issue → branch → pull request → merge lifecycle.

use serde::Deserialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::naming::{issue_id_from_branch, issue_number_from_url, topic_branch};
use crate::runner::{CommandRunner, Invocation, OpsError};
use crate::setup::WORKTREES;

pub const TICKET_LABEL: &str = "feature";
pub const WIP_MESSAGE: &str = "wip: update progress";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedIssue {
    pub number: u64,
    pub url: String,
}

#[derive(Debug, Deserialize)]
struct IssueTitle {
    title: String,
}

/// `ops ticket`: opens a feature issue and reports its number.
pub async fn ticket(
    runner: &dyn CommandRunner,
    title: &str,
    body: &str,
) -> Result<CreatedIssue, OpsError> {
    let create = Invocation::gh([
        "issue", "create", "--title", title, "--body", body, "--label", TICKET_LABEL,
    ]);
    let stdout = runner.run(&create).await?;

    let number = issue_number_from_url(&stdout).ok_or_else(|| OpsError::UnexpectedOutput {
        command: create.to_string(),
        reason: format!("no issue URL in '{}'", stdout.trim()),
    })?;
    let url = stdout
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .last()
        .unwrap_or_default()
        .to_string();

    Ok(CreatedIssue { number, url })
}

/// `ops start`: cuts the topic branch from a fresh integration branch and
/// points every role worktree at it. Returns the branch name.
pub async fn start(
    runner: &dyn CommandRunner,
    config: &Config,
    issue_id: u64,
) -> Result<String, OpsError> {
    let id = issue_id.to_string();
    let view = Invocation::gh(["issue", "view", id.as_str(), "--json", "title"]);
    let stdout = runner.run(&view).await?;
    let issue: IssueTitle =
        serde_json::from_str(&stdout).map_err(|e| OpsError::UnexpectedOutput {
            command: view.to_string(),
            reason: e.to_string(),
        })?;

    let branch = topic_branch(issue_id, &issue.title);
    info!("Initializing branch: {branch}");

    let base = config.integration_branch.as_str();
    runner.run(&Invocation::git(["checkout", base])).await?;
    runner.run(&Invocation::git(["pull", "origin", base])).await?;
    if runner
        .run(&Invocation::git(["checkout", "-b", branch.as_str()]))
        .await
        .is_err()
    {
        info!("Branch {branch} already exists, switching to it");
        runner
            .run(&Invocation::git(["checkout", branch.as_str()]))
            .await?;
    }

    for name in WORKTREES {
        let path = config.worktree_path(name);
        info!("Syncing worktree: {}", path.display());
        if let Err(e) = sync_worktree(runner, &path, &branch).await {
            warn!(
                "Could not sync {}: {e}. Check if directory exists.",
                path.display()
            );
        }
    }

    Ok(branch)
}

async fn sync_worktree(
    runner: &dyn CommandRunner,
    path: &std::path::Path,
    branch: &str,
) -> Result<(), OpsError> {
    runner
        .run(&Invocation::git(["fetch", "origin"]).in_dir(path))
        .await?;
    runner
        .run(&Invocation::git(["checkout", branch]).in_dir(path))
        .await?;
    Ok(())
}

/// `ops ready`: stages everything, then commits and pushes.
/// Returns `false` when there was nothing to commit or the push failed.
pub async fn ready(runner: &dyn CommandRunner) -> Result<bool, OpsError> {
    runner.run(&Invocation::git(["add", "."])).await?;

    let committed = async {
        runner
            .run(&Invocation::git(["commit", "-m", WIP_MESSAGE]))
            .await?;
        runner
            .run(&Invocation::git(["push", "origin", "HEAD"]))
            .await
    }
    .await;

    Ok(committed.is_ok())
}

/// `ops pr`: pushes the current topic branch and opens a pull request that
/// closes its issue. Returns the issue number.
pub async fn pr(runner: &dyn CommandRunner, config: &Config) -> Result<u64, OpsError> {
    let current = runner
        .run(&Invocation::git(["branch", "--show-current"]))
        .await?;
    let branch = current.trim();
    let issue_id =
        issue_id_from_branch(branch).ok_or_else(|| OpsError::MissingIssueId(branch.to_string()))?;

    runner
        .run(&Invocation::git(["push", "origin", branch]))
        .await?;

    let title = format!("feat: Resolve #{issue_id}");
    let body = format!("Closes #{issue_id}");
    runner
        .run(&Invocation::gh([
            "pr",
            "create",
            "--base",
            config.integration_branch.as_str(),
            "--head",
            branch,
            "--title",
            title.as_str(),
            "--body",
            body.as_str(),
        ]))
        .await?;

    Ok(issue_id)
}

/// `ops merge`: squash-merges and deletes the head branch.
pub async fn merge(runner: &dyn CommandRunner, pr_id: u64) -> Result<(), OpsError> {
    let id = pr_id.to_string();
    runner
        .run(&Invocation::gh([
            "pr",
            "merge",
            id.as_str(),
            "--squash",
            "--delete-branch",
        ]))
        .await?;
    Ok(())
}
