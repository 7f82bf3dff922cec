//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Supports global (~/.config/dotagents/) and project (.dotagents/) level configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{github, health, lint, report};
use crate::types::{AgentError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Repository hosting API settings
    pub github: GithubConfig,

    /// Voting advisor settings
    pub advisor: AdvisorConfig,

    /// Compliance linter settings
    pub lint: LintConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            github: GithubConfig::default(),
            advisor: AdvisorConfig::default(),
            lint: LintConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `AgentError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        if self.github.host.trim().is_empty() {
            return Err(AgentError::Config(
                "github.host must not be empty".to_string(),
            ));
        }

        if self.github.api_base.trim().is_empty() {
            return Err(AgentError::Config(
                "github.api_base must not be empty".to_string(),
            ));
        }

        if self.github.timeout_secs == Some(0) {
            return Err(AgentError::Config(
                "github.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.advisor.recent_window_days < 0 {
            return Err(AgentError::Config(format!(
                "advisor.recent_window_days must not be negative, got {}",
                self.advisor.recent_window_days
            )));
        }

        if self.lint.tool_timeout_secs == 0 {
            return Err(AgentError::Config(
                "lint.tool_timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.lint.prompt_file.is_empty() || self.lint.implementation_file.is_empty() {
            return Err(AgentError::Config(
                "lint.prompt_file and lint.implementation_file must be set".to_string(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// GitHub Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// Host repository URLs must point at
    pub host: String,

    /// REST API root
    pub api_base: String,

    /// User agent header value
    pub user_agent: String,

    /// Optional request timeout; the HTTP client default applies when unset
    pub timeout_secs: Option<u64>,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            host: github::DEFAULT_HOST.to_string(),
            api_base: github::DEFAULT_API_BASE.to_string(),
            user_agent: github::USER_AGENT.to_string(),
            timeout_secs: None,
        }
    }
}

// =============================================================================
// Advisor Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Directory saved analyses are written to
    pub output_dir: PathBuf,

    /// Analyst label printed in panels and the report footer
    pub analyst: String,

    /// Research consultant the consultation notes are addressed to
    pub consultant: String,

    /// Commits newer than this many days count as recent
    pub recent_window_days: i64,

    /// Number of most recent commits inspected for activity
    pub recent_commit_sample: usize,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(report::DEFAULT_OUTPUT_DIR),
            analyst: "PyTorch TAC Member, Red Hat".to_string(),
            consultant: "IBM Research".to_string(),
            recent_window_days: health::DEFAULT_RECENT_WINDOW_DAYS,
            recent_commit_sample: health::DEFAULT_COMMIT_SAMPLE,
        }
    }
}

// =============================================================================
// Lint Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Directory holding agent packages
    pub agents_dir: PathBuf,

    /// Required prompt document name
    pub prompt_file: String,

    /// Required implementation file name
    pub implementation_file: String,

    /// Timeout per external tool invocation
    pub tool_timeout_secs: u64,

    /// Extensions allowed for extra files (lowercase, without dot)
    pub allowed_extensions: Vec<String>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            agents_dir: PathBuf::from(lint::DEFAULT_AGENTS_DIR),
            prompt_file: lint::PROMPT_FILE.to_string(),
            implementation_file: lint::IMPLEMENTATION_FILE.to_string(),
            tool_timeout_secs: lint::TOOL_TIMEOUT_SECS,
            allowed_extensions: lint::ALLOWED_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }
}
