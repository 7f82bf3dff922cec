//! PyTorch TAC voting advisor.
//!
//! ```text
//! GitHubClient ──▶ ProjectMetadata ──▶ HealthScorer
//!                                  └─▶ generators (competition, overlap,
//!                                      strategy, risk, merit, engagement,
//!                                      credibility)
//!                                          │
//!                      ProjectAnalysis ◀───┘
//!                             │
//!              RecommendationAssembler ──▶ VotingRecommendation ──▶ ReportWriter
//! ```

pub mod analysis;
pub mod assessment;
pub mod competition;
pub mod health;
pub mod overlap;
pub mod recommendation;
pub mod report;
pub mod rules;
pub mod strategy;

pub use analysis::{ProjectAnalysis, ProjectAnalyzer};
pub use health::HealthScorer;
pub use recommendation::{Confidence, Decision, RecommendationAssembler, VotingRecommendation};
pub use report::ReportWriter;
