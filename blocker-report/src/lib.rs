#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod bugs;
pub mod config;
pub mod filter;
pub mod jira;
pub mod query;
pub mod report;
pub mod runner;

pub use bugs::{bugs_from_issues, BlockerFlag, Bug};
pub use config::{load_settings, ConfigError, FieldIds, Settings, Team, TeamTable};
pub use filter::{
    group_bugs, BlockerFilter, FilterError, ReportFilters, Section, StatusFilter, VersionFilter,
};
pub use jira::{token_from_env, Issue, JiraClient, JiraError, SearchResponse, TOKEN_ENV};
pub use query::{build_search_query, team_clause, QueryError};
pub use report::{Report, StatusCounts};
pub use runner::{Runner, RunnerConfig, RunnerError};
