//! CLI for the blocker report.
//!
//! Fetches bugs from Jira and prints them grouped by blocker flag, with
//! optional per-status counts.

use blocker_report::{
    token_from_env, BlockerFilter, Report, ReportFilters, Runner, RunnerConfig, RunnerError,
    StatusFilter, VersionFilter,
};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Blocker Report - List Jira bugs grouped by release blocker flag.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Affected versions to include (e.g. '4.10,4.11'), default is all versions.
    #[arg(long, value_delimiter = ',')]
    versions: Vec<String>,

    /// Target versions to include (e.g. '---,4.11.z'), default is all versions.
    #[arg(long, value_delimiter = ',')]
    target_version: Vec<String>,

    /// Blocker flag values to include (e.g. '+,-,?,none'), default is all bugs.
    #[arg(long, value_delimiter = ',')]
    blocker: Vec<String>,

    /// Hide bugs without a blocker flag.
    #[arg(
        long,
        default_value_t = true,
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    blockers_only: bool,

    /// Only show bugs for components owned by these teams, default is all teams.
    #[arg(long, value_delimiter = ',')]
    teams: Vec<String>,

    /// Only include bugs with one of these statuses.
    #[arg(long, value_delimiter = ',')]
    status: Vec<String>,

    /// Exclude bugs with these statuses (ignored when --status is set).
    #[arg(long, value_delimiter = ',')]
    not_status: Vec<String>,

    /// Print the number of bugs per status.
    #[arg(long)]
    counts: bool,

    /// Path to a TOML settings file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Jira server URL, overriding the settings.
    #[arg(long)]
    server: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    match run(args).await {
        Ok(report) => {
            let rendered = report.render();
            if !rendered.is_empty() {
                println!("{rendered}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output) on stderr, keeping stdout for the report
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Builds the report filters from the command line.
fn filters(args: &Args) -> Result<ReportFilters, RunnerError> {
    Ok(ReportFilters {
        versions: VersionFilter::new(args.target_version.clone(), args.versions.clone()),
        blockers: BlockerFilter::parse(&args.blocker)?,
        statuses: StatusFilter::new(&args.status, &args.not_status),
        include_unflagged: !args.blockers_only,
        show_counts: args.counts,
    })
}

/// Main execution logic.
async fn run(args: Args) -> Result<Report, RunnerError> {
    let filters = filters(&args)?;
    let token = token_from_env()?;

    let mut config = RunnerConfig::new(token, args.teams, filters);
    if let Some(path) = args.config {
        config = config.with_settings_path(path);
    }
    if let Some(server) = args.server {
        config = config.with_server(server);
    }

    let runner = Runner::new(config)?;
    runner.run().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_show_only_flagged_bugs() {
        let args = Args::parse_from(["blocker-report"]);
        let filters = filters(&args).unwrap();

        assert!(args.blockers_only);
        assert!(!filters.include_unflagged);
        assert!(!filters.show_counts);
        assert_eq!(filters, ReportFilters::default());
    }

    #[test]
    fn lists_are_comma_separated() {
        let args = Args::parse_from([
            "blocker-report",
            "--target-version",
            "4.11.z,4.12",
            "--teams",
            "api",
            "--blocker",
            "+,?",
            "--blockers-only",
            "false",
            "--counts",
        ]);

        assert_eq!(args.target_version, vec!["4.11.z", "4.12"]);
        assert_eq!(args.teams, vec!["api"]);

        let filters = filters(&args).unwrap();
        assert!(filters.include_unflagged);
        assert!(filters.show_counts);
        assert_eq!(filters.blockers, BlockerFilter::parse(&["+", "?"]).unwrap());
    }

    #[test]
    fn blockers_only_accepts_bare_flag() {
        let args = Args::try_parse_from(["blocker-report", "--blockers-only", "--counts"]).unwrap();
        assert!(args.blockers_only);
        assert!(args.counts);

        let args = Args::try_parse_from(["blocker-report", "--blockers-only=false"]).unwrap();
        assert!(!args.blockers_only);
    }

    #[test]
    fn invalid_blocker_is_rejected() {
        let args = Args::parse_from(["blocker-report", "--blocker", "maybe"]);
        assert!(matches!(filters(&args), Err(RunnerError::Filter(_))));
    }
}
