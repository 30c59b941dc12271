//! Time-to-first-review (pickup time) computation

use chrono::{DateTime, Utc};
use common::models::{
    PickupMetric, PullRequest, ReadyEventType, ReviewEvent, TimelineEvent, TimelineEventKind,
    METRIC_TYPE_FIRST_REVIEW,
};

use crate::business_time::business_seconds_between;

/// Resolve the instant a PR most recently became ready for review.
///
/// A PR may flip between draft and ready several times; only the latest
/// `ready_for_review` event reflects the state reviewers actually saw,
/// so when any such event exists its maximum `occurred_at` wins and
/// intervening `convert_to_draft` events are ignored. The event log
/// also overrides the snapshot draft flag: a PR flagged draft at fetch
/// time with a recorded `ready_for_review` event is still ready as of
/// that event. Without any such event, a PR created in a reviewable
/// state was ready at creation, and a draft-created PR has no ready
/// time at all.
pub fn resolve_ready_time(
    pr: &PullRequest,
    timeline: &[TimelineEvent],
) -> Option<(DateTime<Utc>, ReadyEventType)> {
    let latest_ready = timeline
        .iter()
        .filter(|e| e.kind == TimelineEventKind::ReadyForReview)
        .map(|e| e.occurred_at)
        .max();

    match latest_ready {
        Some(at) => Some((at, ReadyEventType::ReadyForReview)),
        None if !pr.is_draft => Some((pr.created_at, ReadyEventType::PrCreation)),
        None => None,
    }
}

/// Earliest review submission, if any. Later reviews are irrelevant.
pub fn first_review_time(reviews: &[ReviewEvent]) -> Option<DateTime<Utc>> {
    reviews.iter().map(|r| r.submitted_at).min()
}

/// Compute the pickup-time metric for one pull request.
///
/// Returns `None` when the PR never became ready or was never
/// reviewed; that is a normal outcome, not an error. A first review
/// predating the resolved ready time (review before a later
/// `ready_for_review` event, or host clock skew) yields a metric with
/// zero pickup seconds.
pub fn calculate_pickup_time(
    pr: &PullRequest,
    timeline: &[TimelineEvent],
    reviews: &[ReviewEvent],
) -> Option<PickupMetric> {
    let (ready_time, ready_event_type) = resolve_ready_time(pr, timeline)?;
    let first_review_time = first_review_time(reviews)?;

    Some(PickupMetric {
        metric_type: METRIC_TYPE_FIRST_REVIEW.to_string(),
        repository: pr.repository(),
        pr_number: pr.number,
        pr_url: pr.url.clone(),
        pr_creator: pr.author_login.clone(),
        target_branch: pr.target_branch.clone(),
        ready_time,
        first_review_time,
        review_date: first_review_time.date_naive(),
        pickup_time_seconds: business_seconds_between(ready_time, first_review_time),
        ready_event_type,
    })
}
