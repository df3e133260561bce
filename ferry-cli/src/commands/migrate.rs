//! Migrate command - transfer every issue from one repository to another

use clap::{Args, ValueEnum};
use ferry_core::{Config, RepoRef, Secrets};
use ferry_github::{
    migrate_issues, GitHubClient, IssueStateFilter, ListOptions, MigrationOptions, MigrationReport,
};

/// Arguments for the migrate command
#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// Repository to take issues from (owner/name)
    #[arg(short, long)]
    pub source_repo: RepoRef,

    /// Repository to move issues into (owner/name)
    #[arg(short, long)]
    pub destination_repo: RepoRef,

    /// GitHub token (falls back to the secrets file)
    #[arg(short, long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Which issues to move
    #[arg(long, default_value = "all")]
    pub state: StateFilter,

    /// Issues requested per page, 1-100 (overrides config)
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Give up listing after this many pages, 0 for no limit (overrides config)
    #[arg(long)]
    pub max_pages: Option<u32>,

    /// Create labels in the destination that only exist in the source
    #[arg(long)]
    pub create_labels: bool,

    /// List what would be moved without transferring anything
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StateFilter {
    Open,
    Closed,
    All,
}

impl From<StateFilter> for IssueStateFilter {
    fn from(filter: StateFilter) -> Self {
        match filter {
            StateFilter::Open => IssueStateFilter::Open,
            StateFilter::Closed => IssueStateFilter::Closed,
            StateFilter::All => IssueStateFilter::All,
        }
    }
}

impl MigrateArgs {
    fn options(&self, config: &Config) -> MigrationOptions {
        MigrationOptions {
            list: ListOptions {
                state: self.state.into(),
                ..ListOptions::from(&config.github)
            },
            create_labels_if_missing: self.create_labels,
            dry_run: self.dry_run,
        }
    }

    /// Execute the migrate command
    pub async fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        // Credential problems surface here, before any request is sent
        let secrets = Secrets::load()?;
        let client = GitHubClient::from_secrets(self.token.as_deref(), &secrets, &config.github)?;

        if verbose {
            tracing::info!(
                endpoint = %client.endpoint(),
                page_size = config.github.page_size,
                max_pages = ?config.github.page_limit(),
                "Using GitHub endpoint"
            );
        }

        println!("Ferry Migration");
        println!("===============");
        println!();
        println!("Source: {}", self.source_repo);
        println!("Destination: {}", self.destination_repo);
        if self.dry_run {
            println!("[Dry run] No issues will be transferred");
        }
        println!();

        let report = migrate_issues(
            &client,
            &self.source_repo,
            &self.destination_repo,
            &self.options(config),
        )
        .await?;

        print_report(&report);
        Ok(())
    }
}

fn print_report(report: &MigrationReport) {
    for issue in &report.transferred {
        println!("  #{} {}", issue.number, issue.url);
    }

    let elapsed = report.finished_at - report.started_at;
    println!();
    if report.dry_run {
        println!(
            "Found {} issue(s) that would be transferred ({}s)",
            report.discovered,
            elapsed.num_seconds()
        );
    } else {
        println!(
            "Transferred {} of {} issue(s) ({}s)",
            report.transferred.len(),
            report.discovered,
            elapsed.num_seconds()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        args: MigrateArgs,
    }

    fn parse(argv: &[&str]) -> Result<MigrateArgs, clap::Error> {
        let mut full = vec!["ferry"];
        full.extend_from_slice(argv);
        TestCli::try_parse_from(full).map(|cli| cli.args)
    }

    #[test]
    fn test_parse_required_flags() {
        let args = parse(&["-s", "octo-org/source", "-d", "octo-org/target", "-t", "ghp_x"]).unwrap();
        assert_eq!(args.source_repo.to_string(), "octo-org/source");
        assert_eq!(args.destination_repo.to_string(), "octo-org/target");
        assert_eq!(args.token.as_deref(), Some("ghp_x"));
        assert!(!args.dry_run);
    }

    #[test]
    fn test_malformed_reference_rejected() {
        let err = parse(&["--source-repo", "not-a-valid-ref", "--destination-repo", "o/n"])
            .unwrap_err();
        assert!(err.to_string().contains("not-a-valid-ref"));
    }

    #[test]
    fn test_destination_required() {
        assert!(parse(&["--source-repo", "octo-org/source"]).is_err());
    }

    #[test]
    fn test_options_follow_config_and_flags() {
        let args = parse(&[
            "-s",
            "octo-org/source",
            "-d",
            "octo-org/target",
            "--state",
            "closed",
            "--create-labels",
            "--dry-run",
        ])
        .unwrap();

        let config = Config::default().with_cli_overrides(None, Some(20), Some(0));
        let options = args.options(&config);

        assert_eq!(options.list.page_size, 20);
        assert_eq!(options.list.max_pages, None);
        assert_eq!(options.list.state, IssueStateFilter::Closed);
        assert!(options.create_labels_if_missing);
        assert!(options.dry_run);
    }
}
