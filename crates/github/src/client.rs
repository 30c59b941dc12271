//! GitHub REST API client for fetching PRs, reviews, and timeline events

use chrono::{DateTime, Utc};
use common::models::{PullRequest, ReviewEvent, TimelineEvent, TimelineEventKind};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Rate limited, retry after {retry_after} seconds")]
    RateLimited { retry_after: u64 },
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("GitHub API error: {status} - {message}")]
    Api { status: u16, message: String },
}

/// GitHub API client
pub struct GitHubClient {
    client: reqwest::Client,
    token: Option<String>,
}

/// PR as returned by GitHub API
#[derive(Debug, Deserialize)]
pub struct GithubPr {
    pub number: i32,
    pub html_url: String,
    pub draft: bool,
    pub user: GithubUser,
    pub base: GithubBase,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Base branch of a PR as returned by GitHub API
#[derive(Debug, Deserialize)]
pub struct GithubBase {
    #[serde(rename = "ref")]
    pub ref_name: String,
    pub repo: GithubBaseRepo,
}

/// Repository of a PR base branch as returned by GitHub API
#[derive(Debug, Deserialize)]
pub struct GithubBaseRepo {
    pub name: String,
    pub owner: GithubUser,
}

/// Review as returned by GitHub API
#[derive(Debug, Deserialize)]
pub struct GithubReview {
    pub id: i64,
    pub state: String,
    /// Null for reviews still in the `PENDING` state
    pub submitted_at: Option<DateTime<Utc>>,
}

/// Issue timeline entry as returned by GitHub API.
///
/// The timeline mixes many entry shapes; commit entries in particular
/// carry neither an `event` name nor a `created_at`.
#[derive(Debug, Deserialize)]
pub struct GithubTimelineEvent {
    #[serde(default)]
    pub event: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// User as returned by GitHub API
#[derive(Debug, Deserialize)]
pub struct GithubUser {
    pub login: String,
}

impl GithubPr {
    /// Snapshot the wire PR into the domain model
    pub fn to_pull_request(&self) -> PullRequest {
        PullRequest {
            number: self.number,
            url: self.html_url.clone(),
            created_at: self.created_at,
            is_draft: self.draft,
            author_login: self.user.login.clone(),
            target_branch: self.base.ref_name.clone(),
            repo_owner: self.base.repo.owner.login.clone(),
            repo_name: self.base.repo.name.clone(),
        }
    }
}

impl GithubReview {
    /// Validate and convert into a domain review event.
    ///
    /// A review without a submission timestamp cannot participate in
    /// duration arithmetic, so it is a caller defect, not a skip.
    pub fn to_review_event(&self) -> common::Result<ReviewEvent> {
        let submitted_at = self.submitted_at.ok_or_else(|| {
            common::Error::InvalidInput(format!("review {} has no submitted_at", self.id))
        })?;
        Ok(ReviewEvent { submitted_at })
    }
}

impl GithubTimelineEvent {
    /// Validate and convert into a domain timeline event.
    ///
    /// Entries that are not timestamped lifecycle events (commits and
    /// the like) yield `Ok(None)`. A `ready_for_review` entry missing
    /// its timestamp is malformed input and fails fast.
    pub fn to_timeline_event(&self) -> common::Result<Option<TimelineEvent>> {
        let kind = TimelineEventKind::from_event_name(&self.event);
        match (kind, self.created_at) {
            (TimelineEventKind::ReadyForReview, None) => Err(common::Error::InvalidInput(
                "ready_for_review event has no created_at".to_string(),
            )),
            (_, None) => Ok(None),
            (kind, Some(occurred_at)) => Ok(Some(TimelineEvent { kind, occurred_at })),
        }
    }
}

impl GitHubClient {
    pub fn new(token: Option<String>) -> Self {
        let client = reqwest::Client::new();
        Self { client, token }
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("pickup-metrics/0.1"));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        if let Some(ref token) = self.token {
            if let Ok(val) = HeaderValue::from_str(&format!("Bearer {}", token)) {
                headers.insert(AUTHORIZATION, val);
            }
        }
        headers
    }

    async fn get<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, ClientError> {
        debug!("GET {}", url);
        let resp = self.client.get(url).headers(self.headers()).send().await?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(url.to_string()));
        }
        if status == reqwest::StatusCode::FORBIDDEN
            || status == reqwest::StatusCode::TOO_MANY_REQUESTS
        {
            let retry_after = resp
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            return Err(ClientError::RateLimited { retry_after });
        }
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp.json().await?)
    }

    /// Fetch every page of a list endpoint
    async fn get_paginated<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        per_page: u32,
    ) -> Result<Vec<T>, ClientError> {
        let sep = if url.contains('?') { '&' } else { '?' };
        let mut all = Vec::new();
        let mut page = 1u32;

        loop {
            let page_url = format!("{}{}page={}&per_page={}", url, sep, page, per_page);
            let items: Vec<T> = self.get(&page_url).await?;
            let count = items.len() as u32;
            all.extend(items);

            if count < per_page {
                break;
            }
            page += 1;

            // Safety: don't fetch more than 50 pages per endpoint
            if page > 50 {
                warn!("Hit pagination limit of 50 pages for {}", url);
                break;
            }
        }

        Ok(all)
    }

    /// Fetch PRs, paginated. GitHub returns them sorted by updated desc.
    pub async fn list_prs(
        &self,
        owner: &str,
        repo: &str,
        state: &str, // "all", "open", "closed"
        page: u32,
        per_page: u32,
    ) -> Result<Vec<GithubPr>, ClientError> {
        let url = format!(
            "https://api.github.com/repos/{}/{}/pulls?state={}&page={}&per_page={}&sort=updated&direction=desc",
            owner, repo, state, page, per_page
        );
        self.get(&url).await
    }

    /// Fetch all reviews for a PR
    pub async fn list_reviews(
        &self,
        owner: &str,
        repo: &str,
        pr_number: i32,
    ) -> Result<Vec<GithubReview>, ClientError> {
        let url = format!(
            "https://api.github.com/repos/{}/{}/pulls/{}/reviews",
            owner, repo, pr_number
        );
        self.get_paginated(&url, 100).await
    }

    /// Fetch all timeline events for a PR (PRs share the issues timeline)
    pub async fn list_timeline_events(
        &self,
        owner: &str,
        repo: &str,
        pr_number: i32,
    ) -> Result<Vec<GithubTimelineEvent>, ClientError> {
        let url = format!(
            "https://api.github.com/repos/{}/{}/issues/{}/timeline",
            owner, repo, pr_number
        );
        self.get_paginated(&url, 100).await
    }

    /// Fetch all PRs updated since a given date, handling pagination
    pub async fn fetch_prs_since(
        &self,
        owner: &str,
        repo: &str,
        since: Option<DateTime<Utc>>,
        max_age_days: u32,
    ) -> Result<Vec<GithubPr>, ClientError> {
        let cutoff =
            since.unwrap_or_else(|| Utc::now() - chrono::Duration::days(max_age_days as i64));

        let mut all_prs = Vec::new();
        let mut page = 1u32;
        let per_page = 100u32;

        loop {
            info!("Fetching PRs page {} for {}/{}", page, owner, repo);
            let prs = self.list_prs(owner, repo, "all", page, per_page).await?;

            if prs.is_empty() {
                break;
            }

            // PRs are sorted by updated desc, so once we hit old ones, stop
            let mut should_stop = false;
            for pr in prs {
                if pr.updated_at >= cutoff {
                    all_prs.push(pr);
                } else {
                    should_stop = true;
                    break;
                }
            }

            if should_stop {
                debug!("Reached PRs older than cutoff, stopping pagination");
                break;
            }

            page += 1;

            // Safety: don't fetch more than 50 pages (5000 PRs)
            if page > 50 {
                warn!("Hit pagination limit of 50 pages");
                break;
            }
        }

        info!("Fetched {} PRs total for {}/{}", all_prs.len(), owner, repo);
        Ok(all_prs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_client_creation() {
        let client = GitHubClient::new(None);
        assert!(client.token.is_none());

        let client = GitHubClient::new(Some("test".to_string()));
        assert_eq!(client.token, Some("test".to_string()));
    }

    #[test]
    fn test_review_conversion() {
        let submitted = Utc.with_ymd_and_hms(2023, 5, 10, 11, 30, 0).unwrap();
        let review = GithubReview {
            id: 1,
            state: "APPROVED".to_string(),
            submitted_at: Some(submitted),
        };

        let event = review.to_review_event().unwrap();
        assert_eq!(event.submitted_at, submitted);
    }

    #[test]
    fn test_review_missing_submitted_at_is_invalid() {
        let review = GithubReview {
            id: 7,
            state: "PENDING".to_string(),
            submitted_at: None,
        };

        let err = review.to_review_event().unwrap_err();
        assert!(matches!(err, common::Error::InvalidInput(_)));
    }

    #[test]
    fn test_timeline_conversion_ready_for_review() {
        let at = Utc.with_ymd_and_hms(2023, 5, 11, 10, 0, 0).unwrap();
        let raw = GithubTimelineEvent {
            event: "ready_for_review".to_string(),
            created_at: Some(at),
        };

        let event = raw.to_timeline_event().unwrap().unwrap();
        assert_eq!(event.kind, TimelineEventKind::ReadyForReview);
        assert_eq!(event.occurred_at, at);
    }

    #[test]
    fn test_timeline_conversion_ready_for_review_without_timestamp_is_invalid() {
        let raw = GithubTimelineEvent {
            event: "ready_for_review".to_string(),
            created_at: None,
        };

        assert!(raw.to_timeline_event().is_err());
    }

    #[test]
    fn test_timeline_conversion_skips_untimestamped_entries() {
        // Commit entries carry no event name and no created_at
        let raw = GithubTimelineEvent {
            event: String::new(),
            created_at: None,
        };

        assert!(raw.to_timeline_event().unwrap().is_none());
    }

    #[test]
    fn test_timeline_conversion_other_kinds() {
        let at = Utc.with_ymd_and_hms(2023, 5, 11, 10, 0, 0).unwrap();
        let raw = GithubTimelineEvent {
            event: "labeled".to_string(),
            created_at: Some(at),
        };

        let event = raw.to_timeline_event().unwrap().unwrap();
        assert_eq!(event.kind, TimelineEventKind::Other);
    }
}
