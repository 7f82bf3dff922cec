//! GitHub REST client
//!
//! Issues the four read-only metadata calls concurrently and turns every
//! failure into an error marker. No retries, no pagination.

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::metadata::{ApiResult, ProjectMetadata};
use super::reference::RepoReference;
use crate::config::GithubConfig;
use crate::types::{AgentError, Endpoint, Result, UpstreamError, UpstreamFailure};

/// Repository metadata fetcher with secure token handling
pub struct GitHubClient {
    /// Token stored securely - never exposed in logs or debug output
    token: Option<SecretString>,
    config: GithubConfig,
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("api_base", &self.config.api_base)
            .field("host", &self.config.host)
            .finish()
    }
}

impl GitHubClient {
    pub fn new(config: GithubConfig, token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()).map(SecretString::from),
            config,
        }
    }

    /// Parse a repository URL against the configured host
    pub fn parse_reference(&self, url: &str) -> Result<RepoReference> {
        RepoReference::parse(url, &self.config.host)
    }

    /// Fetch all metadata for a repository URL.
    ///
    /// Fails only with `InvalidReference`; individual call failures are stored
    /// in the returned metadata.
    pub async fn fetch(&self, url: &str) -> Result<ProjectMetadata> {
        let reference = self.parse_reference(url)?;
        self.fetch_reference(&reference).await
    }

    /// Fetch all metadata for an already parsed reference
    pub async fn fetch_reference(&self, reference: &RepoReference) -> Result<ProjectMetadata> {
        info!("Fetching repository metadata for {}", reference);

        // One connection pool per run, dropped once all four calls settle
        let client = self.build_client()?;
        let base = reference.api_url(&self.config.api_base);
        let start = Instant::now();

        let (repository, recent_commits, issues, contributors) = tokio::join!(
            self.call(&client, &base, Endpoint::Repository),
            self.call(&client, &base, Endpoint::Commits),
            self.call(&client, &base, Endpoint::Issues),
            self.call(&client, &base, Endpoint::Contributors),
        );

        let metadata = ProjectMetadata {
            repository,
            recent_commits,
            issues,
            contributors,
        };

        let failures = metadata.failures();
        debug!(
            "Metadata calls settled in {:?} ({} failed)",
            start.elapsed(),
            failures.len()
        );

        let rate_limited = failures
            .iter()
            .any(|f| matches!(f.http_status(), Some(403 | 429)));
        if rate_limited && self.token.is_none() {
            warn!("GitHub rate limit likely exceeded; set GITHUB_TOKEN for a higher limit");
        }

        Ok(metadata)
    }

    fn build_client(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder().user_agent(&self.config.user_agent);
        if let Some(secs) = self.config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder
            .build()
            .map_err(|e| AgentError::Http(format!("Failed to create HTTP client: {}", e)))
    }

    async fn call(&self, client: &reqwest::Client, base: &str, endpoint: Endpoint) -> ApiResult {
        let url = format!("{}{}", base, endpoint.path_suffix());
        debug!("GET {}", url);

        let mut request = client
            .get(&url)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token.expose_secret());
        }

        let result = match request.send().await {
            Ok(response) if response.status() == StatusCode::OK => response
                .json::<Value>()
                .await
                .map_err(|e| UpstreamError::new(endpoint, UpstreamFailure::Decode(e.to_string()))),
            Ok(response) => Err(UpstreamError::status(endpoint, response.status().as_u16())),
            Err(e) => Err(UpstreamError::transport(endpoint, e.to_string())),
        };

        if let Err(e) = &result {
            warn!("Metadata call failed: {}", e);
        }

        result
    }
}
