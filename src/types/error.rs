//! Unified Error Type System
//!
//! Centralized error types for the advisor agents and the compliance linter.
//!
//! ## Propagation
//!
//! - **InvalidReference**: malformed repository URL, surfaced to the user
//! - **UpstreamError**: one metadata call failed; carried as data inside
//!   `ProjectMetadata`, never raised
//! - **Persistence**: report output location not writable, aborts the run
//! - **LintFailed**: raised only at the CLI boundary so the process exits 1
//!
//! Lint rule violations and unavailable external tools are never errors;
//! they are accumulated as outcomes by the linter.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Upstream Error
// =============================================================================

/// Which repository metadata call an upstream failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Repository,
    Commits,
    Issues,
    Contributors,
}

impl Endpoint {
    pub const ALL: [Endpoint; 4] = [
        Endpoint::Repository,
        Endpoint::Commits,
        Endpoint::Issues,
        Endpoint::Contributors,
    ];

    /// Path suffix below `/repos/{owner}/{repo}`
    pub fn path_suffix(&self) -> &'static str {
        match self {
            Self::Repository => "",
            Self::Commits => "/commits",
            Self::Issues => "/issues",
            Self::Contributors => "/contributors",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Repository => write!(f, "repository"),
            Self::Commits => write!(f, "recent_commits"),
            Self::Issues => write!(f, "issues"),
            Self::Contributors => write!(f, "contributors"),
        }
    }
}

/// Why a single metadata call produced no data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamFailure {
    /// Non-200 HTTP status
    Status(u16),
    /// Connection, TLS or timeout failure
    Transport(String),
    /// Body was not valid JSON
    Decode(String),
    /// Call never issued because the repository reference was invalid
    NotRequested,
}

/// Error marker for one metadata call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamError {
    pub endpoint: Endpoint,
    pub failure: UpstreamFailure,
}

impl UpstreamError {
    pub fn new(endpoint: Endpoint, failure: UpstreamFailure) -> Self {
        Self { endpoint, failure }
    }

    pub fn status(endpoint: Endpoint, status: u16) -> Self {
        Self::new(endpoint, UpstreamFailure::Status(status))
    }

    pub fn transport(endpoint: Endpoint, message: impl Into<String>) -> Self {
        Self::new(endpoint, UpstreamFailure::Transport(message.into()))
    }

    /// HTTP status when the failure came from the server
    pub fn http_status(&self) -> Option<u16> {
        match self.failure {
            UpstreamFailure::Status(code) => Some(code),
            _ => None,
        }
    }
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.failure {
            UpstreamFailure::Status(code) => write!(f, "[{}] HTTP {}", self.endpoint, code),
            UpstreamFailure::Transport(msg) => write!(f, "[{}] {}", self.endpoint, msg),
            UpstreamFailure::Decode(msg) => {
                write!(f, "[{}] invalid JSON body: {}", self.endpoint, msg)
            }
            UpstreamFailure::NotRequested => write!(f, "[{}] not requested", self.endpoint),
        }
    }
}

impl std::error::Error for UpstreamError {}

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum AgentError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // -------------------------------------------------------------------------
    // Advisor Errors
    // -------------------------------------------------------------------------
    #[error("Invalid repository reference '{url}': {reason}")]
    InvalidReference { url: String, reason: String },

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("Cannot write report to {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Linter Errors
    // -------------------------------------------------------------------------
    #[error("Parse error in {path}: {message}")]
    Parse { message: String, path: String },

    #[error("Agent '{0}' not found")]
    AgentNotFound(String),

    #[error("External tool error: {0}")]
    Tool(String),

    #[error("Linting failed: {failed} of {total} agent(s) did not pass")]
    LintFailed { failed: usize, total: usize },

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Interrupted by user")]
    Interrupted,
}

pub type Result<T> = std::result::Result<T, AgentError>;

impl AgentError {
    /// Create an invalid reference error
    pub fn invalid_reference(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidReference {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create a persistence error for the given path
    pub fn persistence(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Persistence {
            path: path.into(),
            source,
        }
    }

    /// Whether the run should report this as a user interrupt
    pub fn is_interrupt(&self) -> bool {
        matches!(self, Self::Interrupted)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_display() {
        assert_eq!(Endpoint::Repository.to_string(), "repository");
        assert_eq!(Endpoint::Commits.to_string(), "recent_commits");
        assert_eq!(Endpoint::Contributors.path_suffix(), "/contributors");
        assert_eq!(Endpoint::Repository.path_suffix(), "");
    }

    #[test]
    fn test_upstream_error_display() {
        let err = UpstreamError::status(Endpoint::Issues, 404);
        assert_eq!(err.to_string(), "[issues] HTTP 404");
        assert_eq!(err.http_status(), Some(404));

        let err = UpstreamError::transport(Endpoint::Commits, "connection refused");
        assert_eq!(err.to_string(), "[recent_commits] connection refused");
        assert_eq!(err.http_status(), None);
    }

    #[test]
    fn test_invalid_reference_display() {
        let err = AgentError::invalid_reference("https://gitlab.com/foo/bar", "unexpected host");
        assert_eq!(
            err.to_string(),
            "Invalid repository reference 'https://gitlab.com/foo/bar': unexpected host"
        );
    }

    #[test]
    fn test_persistence_display() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = AgentError::persistence("/readonly/report.md", io);
        assert!(err.to_string().starts_with("Cannot write report to /readonly/report.md"));
    }

    #[test]
    fn test_interrupt_classification() {
        assert!(AgentError::Interrupted.is_interrupt());
        assert!(!AgentError::Config("x".to_string()).is_interrupt());
    }
}
