//! Application configuration

use std::env;

use crate::error::{Error, Result};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: Option<String>,
    /// How far back to look for updated PRs (days)
    pub lookback_days: u32,
    /// Repositories to collect, as (owner, name) pairs
    pub repositories: Vec<(String, String)>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `REPOSITORIES` is a comma-separated list of `owner/name` entries;
    /// a malformed entry is a configuration error, not a silent skip.
    pub fn from_env() -> Result<Self> {
        let repositories = env::var("REPOSITORIES")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(parse_repository)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            github_token: env::var("GITHUB_TOKEN").ok(),
            lookback_days: env::var("LOOKBACK_DAYS")
                .ok()
                .and_then(|d| d.parse().ok())
                .unwrap_or(30),
            repositories,
        })
    }
}

fn parse_repository(entry: &str) -> Result<(String, String)> {
    match entry.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() => {
            Ok((owner.to_string(), name.to_string()))
        }
        _ => Err(Error::Config(format!(
            "repository entry '{}' is not in owner/name form",
            entry
        ))),
    }
}
