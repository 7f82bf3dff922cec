//! Fetched repository metadata.
//!
//! Each of the four API calls is stored as its own result so one failed call
//! never hides the data of the others. Accessors degrade to empty data when a
//! call failed or the provider omitted a field.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::types::{
    Endpoint, UpstreamError, UpstreamFailure, json_bool, json_i64, json_str, json_truthy,
};

/// Outcome of a single metadata call
pub type ApiResult = std::result::Result<Value, UpstreamError>;

/// Raw metadata for one analysis run
#[derive(Debug, Clone)]
pub struct ProjectMetadata {
    pub repository: ApiResult,
    pub recent_commits: ApiResult,
    pub issues: ApiResult,
    pub contributors: ApiResult,
}

impl ProjectMetadata {
    /// Metadata where no call was issued (invalid reference)
    pub fn unavailable() -> Self {
        let missing = |endpoint| Err(UpstreamError::new(endpoint, UpstreamFailure::NotRequested));
        Self {
            repository: missing(Endpoint::Repository),
            recent_commits: missing(Endpoint::Commits),
            issues: missing(Endpoint::Issues),
            contributors: missing(Endpoint::Contributors),
        }
    }

    /// Errors of all failed calls, in endpoint order
    pub fn failures(&self) -> Vec<&UpstreamError> {
        [
            &self.repository,
            &self.recent_commits,
            &self.issues,
            &self.contributors,
        ]
        .into_iter()
        .filter_map(|r| r.as_ref().err())
        .collect()
    }

    /// Repository document, if the repository call succeeded
    pub fn repository(&self) -> Option<&Value> {
        self.repository.as_ref().ok().filter(|v| v.is_object())
    }

    pub fn commits(&self) -> &[Value] {
        as_slice(&self.recent_commits)
    }

    pub fn open_issues(&self) -> &[Value] {
        as_slice(&self.issues)
    }

    pub fn contributor_list(&self) -> &[Value] {
        as_slice(&self.contributors)
    }

    pub fn contributor_count(&self) -> usize {
        self.contributor_list().len()
    }

    pub fn stars(&self) -> i64 {
        self.repository()
            .map(|r| json_i64(r, "stargazers_count", 0))
            .unwrap_or(0)
    }

    pub fn forks(&self) -> i64 {
        self.repository()
            .map(|r| json_i64(r, "forks_count", 0))
            .unwrap_or(0)
    }

    pub fn is_archived(&self) -> bool {
        self.repo_flag("archived")
    }

    pub fn has_wiki(&self) -> bool {
        self.repo_flag("has_wiki")
    }

    pub fn has_issues(&self) -> bool {
        self.repo_flag("has_issues")
    }

    /// Non-empty repository description
    pub fn has_description(&self) -> bool {
        self.repository()
            .and_then(|r| json_str(r, "description"))
            .is_some_and(|d| !d.is_empty())
    }

    /// License present and truthy; an empty license object counts as none
    pub fn has_license(&self) -> bool {
        self.repository()
            .and_then(|r| r.get("license"))
            .is_some_and(json_truthy)
    }

    pub fn primary_language(&self) -> Option<&str> {
        self.repository().and_then(|r| json_str(r, "language"))
    }

    pub fn owner_login(&self) -> Option<&str> {
        self.repository()
            .and_then(|r| r.get("owner"))
            .and_then(|o| json_str(o, "login"))
    }

    fn repo_flag(&self, key: &str) -> bool {
        self.repository()
            .map(|r| json_bool(r, key, false))
            .unwrap_or(false)
    }
}

fn as_slice(result: &ApiResult) -> &[Value] {
    match result {
        Ok(Value::Array(items)) => items.as_slice(),
        _ => &[],
    }
}

/// Author timestamp of a commit record (`commit.author.date`).
///
/// Returns `None` when the field is absent or not ISO-8601.
pub fn commit_author_date(commit: &Value) -> Option<DateTime<Utc>> {
    let raw = commit
        .get("commit")?
        .get("author")?
        .get("date")?
        .as_str()?;
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|d| d.with_timezone(&Utc))
}
