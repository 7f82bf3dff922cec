//! Project analysis pipeline: fetch, score and run every generator.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::assessment::{CommunityEngagement, MaintainerCredibility, RiskAssessment, TechnicalMerit};
use super::competition::CompetitionAnalysis;
use super::health::HealthScorer;
use super::overlap::PortfolioOverlap;
use super::strategy::StrategicRecommendation;
use crate::github::{GitHubClient, ProjectMetadata};
use crate::types::{AgentError, Result};

/// Derived analysis of one project, immutable once built
#[derive(Debug, Clone)]
pub struct ProjectAnalysis {
    pub name: String,
    pub description: String,
    pub repository_url: String,
    pub health_score: f64,
    pub competition: CompetitionAnalysis,
    pub overlap: PortfolioOverlap,
    pub strategy: StrategicRecommendation,
    pub risk: RiskAssessment,
    pub merit: TechnicalMerit,
    pub engagement: CommunityEngagement,
    pub credibility: MaintainerCredibility,
}

pub struct ProjectAnalyzer {
    client: GitHubClient,
    scorer: HealthScorer,
}

impl ProjectAnalyzer {
    pub fn new(client: GitHubClient, scorer: HealthScorer) -> Self {
        Self { client, scorer }
    }

    /// Fetch metadata and analyze the project as of now.
    ///
    /// An invalid repository reference is logged and analyzed as if every
    /// metadata call had failed.
    pub async fn analyze(
        &self,
        name: &str,
        repository_url: &str,
        description: &str,
    ) -> Result<ProjectAnalysis> {
        info!("Analyzing project: {}", name);

        let metadata = match self.client.fetch(repository_url).await {
            Ok(metadata) => metadata,
            Err(e @ AgentError::InvalidReference { .. }) => {
                warn!("{}; continuing without repository metadata", e);
                ProjectMetadata::unavailable()
            }
            Err(e) => return Err(e),
        };

        Ok(self.build(name, repository_url, description, &metadata, Utc::now()))
    }

    /// Pure analysis of already fetched metadata
    pub fn build(
        &self,
        name: &str,
        repository_url: &str,
        description: &str,
        metadata: &ProjectMetadata,
        now: DateTime<Utc>,
    ) -> ProjectAnalysis {
        let health_score = self.scorer.score(metadata, now);
        let competition = CompetitionAnalysis::assess(name, description);
        let overlap = PortfolioOverlap::assess(description);
        let strategy = StrategicRecommendation::assess(health_score, &competition, &overlap);
        let risk = RiskAssessment::assess(metadata, &competition);

        ProjectAnalysis {
            name: name.to_string(),
            description: description.to_string(),
            repository_url: repository_url.to_string(),
            health_score,
            merit: TechnicalMerit::assess(metadata, description),
            engagement: CommunityEngagement::assess(metadata),
            credibility: MaintainerCredibility::assess(metadata),
            competition,
            overlap,
            strategy,
            risk,
        }
    }
}
