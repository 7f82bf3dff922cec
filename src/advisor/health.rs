//! Health scoring.
//!
//! Weighted sum of four independently capped contributions, clamped to
//! `[0, 100]`. A failed repository call scores 0.

use chrono::{DateTime, Utc};

use crate::constants::health::{self as weights, maintenance};
use crate::github::{ProjectMetadata, commit_author_date};

/// Health scorer with an injectable recent-activity window
#[derive(Debug, Clone, Copy)]
pub struct HealthScorer {
    window_days: i64,
    commit_sample: usize,
}

impl Default for HealthScorer {
    fn default() -> Self {
        Self::new(
            weights::DEFAULT_RECENT_WINDOW_DAYS,
            weights::DEFAULT_COMMIT_SAMPLE,
        )
    }
}

impl HealthScorer {
    pub fn new(window_days: i64, commit_sample: usize) -> Self {
        Self {
            window_days,
            commit_sample,
        }
    }

    /// Score metadata as of `now`
    pub fn score(&self, metadata: &ProjectMetadata, now: DateTime<Utc>) -> f64 {
        if metadata.repository().is_none() {
            return 0.0;
        }

        let stars = metadata.stars().max(0) as f64;
        let star_points = (stars / weights::STARS_DIVISOR).min(weights::STARS_CAP);

        let recent = self.recent_commit_count(metadata, now) as f64;
        let activity_points = (recent * weights::POINTS_PER_RECENT_COMMIT).min(weights::ACTIVITY_CAP);

        let contributor_points = (metadata.contributor_count() as f64).min(weights::CONTRIBUTORS_CAP);

        let maintenance_points = [
            (!metadata.is_archived(), maintenance::NOT_ARCHIVED),
            (metadata.has_wiki(), maintenance::HAS_WIKI),
            (metadata.has_issues(), maintenance::HAS_ISSUES),
            (metadata.has_description(), maintenance::HAS_DESCRIPTION),
            (metadata.has_license(), maintenance::HAS_LICENSE),
        ]
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, points)| points)
        .sum::<f64>();

        (star_points + activity_points + contributor_points + maintenance_points)
            .clamp(0.0, weights::MAX_SCORE)
    }

    /// Recent commits among the sampled most recent commits
    pub fn recent_commit_count(&self, metadata: &ProjectMetadata, now: DateTime<Utc>) -> usize {
        metadata
            .commits()
            .iter()
            .take(self.commit_sample)
            .filter(|c| self.is_recent(commit_author_date(c), now))
            .count()
    }

    /// Unparseable or missing dates are never recent
    fn is_recent(&self, date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
        date.is_some_and(|d| (now - d).num_days() <= self.window_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Endpoint, UpstreamError};
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;
    use serde_json::{Value, json};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn commit_at(date: DateTime<Utc>) -> Value {
        json!({"commit": {"author": {"date": date.to_rfc3339()}}})
    }

    fn metadata(repo: Value, commits: Vec<Value>, contributors: usize) -> ProjectMetadata {
        ProjectMetadata {
            repository: Ok(repo),
            recent_commits: Ok(Value::Array(commits)),
            issues: Ok(json!([])),
            contributors: Ok(Value::Array(vec![json!({}); contributors])),
        }
    }

    fn healthy_repo(stars: i64) -> Value {
        json!({
            "stargazers_count": stars,
            "archived": false,
            "has_wiki": true,
            "has_issues": true,
            "description": "x",
            "license": {"key": "mit"}
        })
    }

    #[test]
    fn test_failed_repository_scores_zero() {
        let mut m = metadata(healthy_repo(5000), vec![commit_at(now())], 10);
        m.repository = Err(UpstreamError::status(Endpoint::Repository, 404));
        assert_eq!(HealthScorer::default().score(&m, now()), 0.0);
    }

    #[test]
    fn test_worked_example() {
        let commits = vec![commit_at(now()); 3];
        let m = metadata(healthy_repo(5000), commits, 10);
        // 20 (stars capped) + 7.5 (3 recent) + 10 (contributors) + 35 (maintenance)
        assert_eq!(HealthScorer::default().score(&m, now()), 72.5);
    }

    #[test]
    fn test_archived_loses_ten_points() {
        let mut repo = healthy_repo(0);
        let active = HealthScorer::default().score(&metadata(repo.clone(), vec![], 0), now());
        repo["archived"] = json!(true);
        let archived = HealthScorer::default().score(&metadata(repo, vec![], 0), now());
        assert_eq!(active - archived, 10.0);
    }

    #[test]
    fn test_only_sampled_commits_count() {
        let commits = vec![commit_at(now()); 15];
        let m = metadata(json!({}), commits, 0);
        let scorer = HealthScorer::default();
        assert_eq!(scorer.recent_commit_count(&m, now()), 10);
        // 10 recent * 2.5 = 25, capped at 25
        assert_eq!(scorer.score(&m, now()), 25.0 + 10.0);
    }

    #[test]
    fn test_recent_window_boundary() {
        let scorer = HealthScorer::default();
        let commits = vec![
            commit_at(now() - Duration::days(30)),
            commit_at(now() - Duration::days(31)),
            json!({"commit": {"author": {"date": "not a date"}}}),
            json!({}),
        ];
        let m = metadata(json!({}), commits, 0);
        assert_eq!(scorer.recent_commit_count(&m, now()), 1);
    }

    #[test]
    fn test_failed_side_calls_contribute_nothing() {
        let mut m = metadata(json!({"archived": true}), vec![], 0);
        m.recent_commits = Err(UpstreamError::status(Endpoint::Commits, 500));
        m.contributors = Err(UpstreamError::transport(Endpoint::Contributors, "reset"));
        assert_eq!(HealthScorer::default().score(&m, now()), 0.0);
    }

    #[test]
    fn test_extreme_stars_are_clamped() {
        let commits = vec![commit_at(now()); 10];
        let m = metadata(healthy_repo(10_000_000), commits, 500);
        assert_eq!(HealthScorer::default().score(&m, now()), 100.0);
    }

    proptest! {
        #[test]
        fn prop_score_within_bounds(
            stars in any::<i64>(),
            contributors in 0usize..300,
            recent in 0usize..20,
            archived in any::<bool>(),
            has_wiki in any::<bool>(),
        ) {
            let repo = json!({
                "stargazers_count": stars,
                "archived": archived,
                "has_wiki": has_wiki,
                "has_issues": true,
                "description": "d",
                "license": {}
            });
            let m = metadata(repo, vec![commit_at(now()); recent], contributors);
            let score = HealthScorer::default().score(&m, now());
            prop_assert!((0.0..=100.0).contains(&score));
        }
    }
}
