use clap::{builder::NonEmptyStringValueParser, Parser, Subcommand};

pub const USAGE: &str = r#"
  Usage:
    ops setup
    ops ticket "Title" "Body"
    ops start <issue-id>
    ops ready
    ops pr
    ops merge <pr-id>
"#;

/// Branch, worktree, issue and pull-request automation over git and gh.
#[derive(Debug, Parser)]
#[command(name = "ops", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Provision long-lived branches, GitHub labels and role worktrees
    Setup,
    /// Open a feature issue
    Ticket {
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        title: String,
        #[arg(default_value = "Details required")]
        body: String,
    },
    /// Create the topic branch for an issue and move every worktree onto it
    Start {
        #[arg(value_name = "ISSUE_ID")]
        issue_id: u64,
    },
    /// Commit and push work in progress
    Ready,
    /// Open a pull request for the current topic branch
    Pr,
    /// Squash-merge a pull request and delete its branch
    Merge {
        #[arg(value_name = "PR_ID")]
        pr_id: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_ticket_body_defaults() {
        let cli = Cli::try_parse_from(["ops", "ticket", "Add login"]).unwrap();
        match cli.command {
            Some(Command::Ticket { title, body }) => {
                assert_eq!(title, "Add login");
                assert_eq!(body, "Details required");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_ticket_requires_title() {
        let err = Cli::try_parse_from(["ops", "ticket"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_ticket_rejects_empty_title() {
        assert!(Cli::try_parse_from(["ops", "ticket", ""]).is_err());
    }

    #[test]
    fn test_start_requires_numeric_issue() {
        assert!(Cli::try_parse_from(["ops", "start", "abc"]).is_err());
        assert!(Cli::try_parse_from(["ops", "start"]).is_err());
    }

    #[test]
    fn test_merge_parses_pr_id() {
        let cli = Cli::try_parse_from(["ops", "merge", "17"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Merge { pr_id: 17 })));
    }

    #[test]
    fn test_no_command_is_allowed() {
        let cli = Cli::try_parse_from(["ops"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_unknown_command_is_invalid_subcommand() {
        let err = Cli::try_parse_from(["ops", "deploy"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
    }
}
