//! dotagents - Advisor agents and an agent package linter
//!
//! Two independent tools share this crate:
//!
//! - **TAC advisor**: fetches public repository metadata, scores project
//!   health, derives competitive and portfolio assessments, and writes a
//!   markdown voting recommendation.
//! - **Compliance linter**: checks agent packages (a prompt document plus a
//!   Python implementation) against structure, content, syntax and formatting
//!   gates.
//!
//! ## Quick Start
//!
//! ```ignore
//! use dotagents::{GitHubClient, HealthScorer, ProjectAnalyzer, RecommendationAssembler};
//!
//! let config = dotagents::ConfigLoader::load()?;
//! let analyzer = ProjectAnalyzer::new(
//!     GitHubClient::new(config.github.clone(), None),
//!     HealthScorer::new(30, 10),
//! );
//! let analysis = analyzer
//!     .analyze("vLLM", "https://github.com/vllm-project/vllm", "LLM serving engine")
//!     .await?;
//! let recommendation = RecommendationAssembler::from_config(&config.advisor)
//!     .assemble(&analysis, None);
//! ```
//!
//! ## Modules
//!
//! - [`github`]: repository reference parsing and metadata fetching
//! - [`advisor`]: health scoring, assessments and recommendation reports
//! - [`lint`]: agent package gates and external formatting tools
//! - [`ux`]: UX design guidance documents
//! - [`config`]: layered configuration

pub mod advisor;
pub mod cli;
pub mod config;
pub mod constants;
pub mod github;
pub mod lint;
pub mod types;
pub mod ux;

// =============================================================================
// Core Re-exports
// =============================================================================

pub use config::{AdvisorConfig, Config, ConfigLoader, GithubConfig, LintConfig};
pub use types::{AgentError, Result};

// =============================================================================
// Advisor Re-exports
// =============================================================================

pub use advisor::{
    Confidence, Decision, HealthScorer, ProjectAnalysis, ProjectAnalyzer,
    RecommendationAssembler, ReportWriter, VotingRecommendation,
};
pub use github::{GitHubClient, ProjectMetadata, RepoReference};

// =============================================================================
// Linter Re-exports
// =============================================================================

pub use lint::{AgentLinter, CodeTool, ExternalTool, LintReport, LintResult, ToolOutcome};

pub use ux::UxCollaborator;
