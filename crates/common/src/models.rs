//! Domain models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Metric type tag carried by every [`PickupMetric`].
pub const METRIC_TYPE_FIRST_REVIEW: &str = "time_to_first_review";

/// Snapshot of a pull request at fetch time.
///
/// The snapshot's `is_draft` flag is a fallback only: when the timeline
/// carries a `ready_for_review` event, the event log wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: i32,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub is_draft: bool,
    pub author_login: String,
    pub target_branch: String,
    pub repo_owner: String,
    pub repo_name: String,
}

impl PullRequest {
    /// "owner/name" form used in metric records
    pub fn repository(&self) -> String {
        format!("{}/{}", self.repo_owner, self.repo_name)
    }
}

/// Lifecycle event kinds the metric cares about.
///
/// GitHub's timeline carries many more event names; everything that is
/// not a draft transition collapses into `Other`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TimelineEventKind {
    ReadyForReview,
    ConvertToDraft,
    Other,
}

impl TimelineEventKind {
    /// Map a GitHub timeline event name to a kind
    pub fn from_event_name(name: &str) -> Self {
        match name {
            "ready_for_review" => Self::ReadyForReview,
            "convert_to_draft" => Self::ConvertToDraft,
            _ => Self::Other,
        }
    }
}

/// A timestamped lifecycle event on a pull request.
///
/// Input order carries no meaning; consumers order by `occurred_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub kind: TimelineEventKind,
    pub occurred_at: DateTime<Utc>,
}

/// A submitted review on a pull request. Input order carries no meaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewEvent {
    pub submitted_at: DateTime<Utc>,
}

/// Provenance of a resolved ready time
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReadyEventType {
    /// PR was created in a reviewable state and never flipped via events
    #[serde(rename = "PR creation (not draft)")]
    PrCreation,
    /// Latest `ready_for_review` timeline event
    #[serde(rename = "ready_for_review event")]
    ReadyForReview,
}

impl ReadyEventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PrCreation => "PR creation (not draft)",
            Self::ReadyForReview => "ready_for_review event",
        }
    }
}

impl std::fmt::Display for ReadyEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time-to-first-review record for one pull request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupMetric {
    pub metric_type: String,
    /// "owner/name"
    pub repository: String,
    pub pr_number: i32,
    pub pr_url: String,
    pub pr_creator: String,
    pub target_branch: String,
    pub ready_time: DateTime<Utc>,
    pub first_review_time: DateTime<Utc>,
    /// UTC calendar date of `first_review_time`
    pub review_date: NaiveDate,
    /// Business seconds between ready and first review; never negative
    pub pickup_time_seconds: i64,
    pub ready_event_type: ReadyEventType,
}
