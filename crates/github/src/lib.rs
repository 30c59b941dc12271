//! GitHub API client for fetching PRs, reviews, and timeline events

pub mod client;

pub use client::{
    ClientError, GitHubClient, GithubBase, GithubBaseRepo, GithubPr, GithubReview,
    GithubTimelineEvent, GithubUser,
};
