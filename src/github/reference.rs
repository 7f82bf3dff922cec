//! Repository reference parsing.

use url::Url;

use crate::types::{AgentError, Result};

/// Owner/repository pair extracted from a repository URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoReference {
    pub owner: String,
    pub repo: String,
}

impl RepoReference {
    /// Parse `https://<host>/<owner>/<repo>[/...]`.
    ///
    /// Fails with `InvalidReference` when the URL does not parse, the host is
    /// not `expected_host`, the path has fewer than two segments, or the
    /// repository name is empty once `.git` is stripped.
    pub fn parse(url: &str, expected_host: &str) -> Result<Self> {
        let parsed =
            Url::parse(url.trim()).map_err(|e| AgentError::invalid_reference(url, e.to_string()))?;

        match parsed.host_str() {
            Some(host) if host.eq_ignore_ascii_case(expected_host) => {}
            Some(host) => {
                return Err(AgentError::invalid_reference(
                    url,
                    format!("expected host {}, got {}", expected_host, host),
                ));
            }
            None => return Err(AgentError::invalid_reference(url, "missing host")),
        }

        let mut segments = parsed
            .path_segments()
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty());

        let (Some(owner), Some(repo)) = (segments.next(), segments.next()) else {
            return Err(AgentError::invalid_reference(
                url,
                "path must contain an owner and a repository",
            ));
        };

        let repo = repo.strip_suffix(".git").unwrap_or(repo);
        if repo.is_empty() {
            return Err(AgentError::invalid_reference(url, "repository name is empty"));
        }

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    /// API URL for the repository, relative to `api_base`
    pub fn api_url(&self, api_base: &str) -> String {
        format!(
            "{}/repos/{}/{}",
            api_base.trim_end_matches('/'),
            self.owner,
            self.repo
        )
    }
}

impl std::fmt::Display for RepoReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_url() {
        let reference = RepoReference::parse("https://github.com/pytorch/vision", "github.com")
            .unwrap();
        assert_eq!(reference.owner, "pytorch");
        assert_eq!(reference.repo, "vision");
        assert_eq!(reference.to_string(), "pytorch/vision");
    }

    #[test]
    fn test_parse_extra_segments_and_git_suffix() {
        let reference = RepoReference::parse(
            "https://github.com/vllm-project/vllm.git/tree/main",
            "github.com",
        )
        .unwrap();
        assert_eq!(reference.owner, "vllm-project");
        assert_eq!(reference.repo, "vllm");
    }

    #[test]
    fn test_parse_wrong_host() {
        let err = RepoReference::parse("https://gitlab.com/foo/bar", "github.com").unwrap_err();
        assert!(matches!(err, AgentError::InvalidReference { .. }));
    }

    #[test]
    fn test_parse_too_few_segments() {
        let err = RepoReference::parse("https://github.com/pytorch", "github.com").unwrap_err();
        assert!(matches!(err, AgentError::InvalidReference { .. }));

        let err = RepoReference::parse("https://github.com/", "github.com").unwrap_err();
        assert!(matches!(err, AgentError::InvalidReference { .. }));
    }

    #[test]
    fn test_parse_empty_repository_name() {
        let err = RepoReference::parse("https://github.com/a/.git", "github.com").unwrap_err();
        match err {
            AgentError::InvalidReference { reason, .. } => {
                assert_eq!(reason, "repository name is empty")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_not_a_url() {
        let err = RepoReference::parse("pytorch/vision", "github.com").unwrap_err();
        assert!(matches!(err, AgentError::InvalidReference { .. }));
    }

    #[test]
    fn test_api_url() {
        let reference = RepoReference {
            owner: "a".to_string(),
            repo: "b".to_string(),
        };
        assert_eq!(
            reference.api_url("https://api.github.com/"),
            "https://api.github.com/repos/a/b"
        );
    }
}
