//! Per-repository metric collection from the GitHub API

use common::models::{PickupMetric, ReviewEvent, TimelineEvent};
use github::{ClientError, GitHubClient, GithubPr};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::pickup;

#[derive(Error, Debug)]
pub enum CollectError {
    #[error("GitHub API error: {0}")]
    GitHub(ClientError),
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),
    #[error(transparent)]
    Invalid(#[from] common::Error),
}

impl From<ClientError> for CollectError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::RateLimited { retry_after } => Self::RateLimited(retry_after),
            other => Self::GitHub(other),
        }
    }
}

/// Collects pickup-time metrics for a repository's recent PRs
pub struct Collector {
    client: GitHubClient,
    lookback_days: u32,
}

impl Collector {
    pub fn new(github_token: Option<String>, lookback_days: u32) -> Self {
        Self {
            client: GitHubClient::new(github_token),
            lookback_days,
        }
    }

    /// Collect metrics for PRs updated within the lookback window.
    ///
    /// Validation faults and rate limiting abort the repository with no
    /// partial result; other per-PR fetch errors are logged and the PR
    /// is skipped.
    pub async fn collect_repo(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<Vec<PickupMetric>, CollectError> {
        info!("Collecting pickup metrics for {}/{}", owner, name);

        let prs = self
            .client
            .fetch_prs_since(owner, name, None, self.lookback_days)
            .await?;

        let mut metrics = Vec::new();
        for pr in &prs {
            match self.process_pr(owner, name, pr).await {
                Ok(Some(metric)) => metrics.push(metric),
                Ok(None) => {
                    debug!("PR #{}: no metric (not ready or not reviewed)", pr.number);
                }
                Err(e @ (CollectError::RateLimited(_) | CollectError::Invalid(_))) => {
                    return Err(e);
                }
                Err(e) => {
                    warn!("Error processing PR #{}: {}", pr.number, e);
                }
            }
        }

        info!(
            "Computed {} metrics from {} PRs for {}/{}",
            metrics.len(),
            prs.len(),
            owner,
            name
        );
        Ok(metrics)
    }

    async fn process_pr(
        &self,
        owner: &str,
        name: &str,
        pr: &GithubPr,
    ) -> Result<Option<PickupMetric>, CollectError> {
        let raw_timeline = self
            .client
            .list_timeline_events(owner, name, pr.number)
            .await?;
        let raw_reviews = self.client.list_reviews(owner, name, pr.number).await?;

        let mut timeline: Vec<TimelineEvent> = Vec::new();
        for raw in &raw_timeline {
            if let Some(event) = raw.to_timeline_event()? {
                timeline.push(event);
            }
        }

        let reviews = raw_reviews
            .iter()
            .map(|r| r.to_review_event())
            .collect::<common::Result<Vec<ReviewEvent>>>()?;

        Ok(pickup::calculate_pickup_time(
            &pr.to_pull_request(),
            &timeline,
            &reviews,
        ))
    }
}
