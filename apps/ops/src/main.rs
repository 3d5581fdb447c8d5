mod cli;
mod config;
mod naming;
mod runner;
mod setup;
mod workflow;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use clap::{error::ErrorKind, Parser};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Command, USAGE};
use crate::config::Config;
use crate::runner::SystemRunner;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::InvalidSubcommand => {
            println!("{USAGE}");
            return Ok(());
        }
        // Missing arguments, bad values, --help and --version
        Err(e) => e.exit(),
    };

    let Some(command) = cli.command else {
        println!("{USAGE}");
        return Ok(());
    };

    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let runner = SystemRunner;

    match command {
        Command::Setup => {
            setup::run_setup(&runner, &config).await?;
            println!("Setup complete! Worktrees are ready.");
        }
        Command::Ticket { title, body } => {
            let issue = workflow::ticket(&runner, &title, &body).await?;
            println!("Ticket created: #{} ({})", issue.number, issue.url);
        }
        Command::Start { issue_id } => {
            let branch = workflow::start(&runner, &config, issue_id).await?;
            info!("Worktrees moved to {branch}");
            println!("Started {branch}");
        }
        Command::Ready => {
            if workflow::ready(&runner).await? {
                println!("Changes pushed to remote.");
            } else {
                println!("Nothing to commit.");
            }
        }
        Command::Pr => {
            let issue_id = workflow::pr(&runner, &config).await?;
            println!("Pull request opened for #{issue_id}");
        }
        Command::Merge { pr_id } => {
            workflow::merge(&runner, pr_id).await?;
            println!("PR #{pr_id} merged and branch deleted");
        }
    }

    Ok(())
}
