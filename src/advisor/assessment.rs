//! Metadata-driven assessments: risk, technical merit, community engagement
//! and maintainer credibility.
//!
//! Each assessment is a small decision table over metadata fields. Absent
//! data falls through to the documented default phrase.

use std::fmt;

use super::competition::CompetitionAnalysis;
use super::rules::{KeywordRule, all_matches};
use crate::constants::thresholds;
use crate::github::ProjectMetadata;

// =============================================================================
// Risk
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Risk {
    Archived,
    BusFactor,
    CompetitivePressure,
}

impl fmt::Display for Risk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Archived => write!(f, "Project is archived"),
            Self::BusFactor => write!(f, "Bus factor - too few contributors"),
            Self::CompetitivePressure => {
                write!(f, "High competitive pressure may limit adoption")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskAssessment {
    pub risks: Vec<Risk>,
}

impl RiskAssessment {
    pub fn assess(metadata: &ProjectMetadata, competition: &CompetitionAnalysis) -> Self {
        let checks = [
            (metadata.is_archived(), Risk::Archived),
            (
                metadata.contributor_count() < thresholds::MIN_CONTRIBUTORS,
                Risk::BusFactor,
            ),
            (
                competition.is_highly_competitive(),
                Risk::CompetitivePressure,
            ),
        ];

        Self {
            risks: checks
                .into_iter()
                .filter_map(|(triggered, risk)| triggered.then_some(risk))
                .collect(),
        }
    }

    pub fn has(&self, risk: Risk) -> bool {
        self.risks.contains(&risk)
    }
}

impl fmt::Display for RiskAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.risks.is_empty() {
            return write!(f, "**Risk Assessment**: Low risk profile");
        }
        write!(f, "**Risk Assessment**:")?;
        for risk in &self.risks {
            write!(f, "\n- {}", risk)?;
        }
        Ok(())
    }
}

// =============================================================================
// Technical Merit
// =============================================================================

const MERIT_RULES: &[KeywordRule<&str>] = &[
    KeywordRule::any(&["performance"], "Performance-focused"),
    KeywordRule::any(&["scalable"], "Scalability considerations"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechnicalMerit {
    pub factors: Vec<&'static str>,
}

impl TechnicalMerit {
    pub fn assess(metadata: &ProjectMetadata, description: &str) -> Self {
        let description = description.to_lowercase();
        let mut factors = Vec::new();

        if metadata.primary_language() == Some("Python") {
            factors.push("Python-based (PyTorch ecosystem aligned)");
        }
        factors.extend(all_matches(MERIT_RULES, &description).copied());

        if factors.is_empty() {
            factors.push("Standard implementation approach");
        }

        Self { factors }
    }
}

impl fmt::Display for TechnicalMerit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "**Technical Merit**:")?;
        for factor in &self.factors {
            write!(f, "\n- {}", factor)?;
        }
        Ok(())
    }
}

// =============================================================================
// Community Engagement
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngagementLevel {
    High,
    Medium,
    Low,
}

impl fmt::Display for EngagementLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommunityEngagement {
    pub level: EngagementLevel,
    pub stars: i64,
    pub forks: i64,
    pub open_issues: usize,
}

impl CommunityEngagement {
    pub fn assess(metadata: &ProjectMetadata) -> Self {
        let stars = metadata.stars();
        let forks = metadata.forks();

        let level = if stars > thresholds::ENGAGEMENT_HIGH_STARS
            || forks > thresholds::ENGAGEMENT_HIGH_FORKS
        {
            EngagementLevel::High
        } else if stars > thresholds::ENGAGEMENT_MEDIUM_STARS
            || forks > thresholds::ENGAGEMENT_MEDIUM_FORKS
        {
            EngagementLevel::Medium
        } else {
            EngagementLevel::Low
        };

        Self {
            level,
            stars,
            forks,
            open_issues: metadata.open_issues().len(),
        }
    }
}

impl fmt::Display for CommunityEngagement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "**Community Engagement**: {} ({} stars, {} forks, {} open issues)",
            self.level, self.stars, self.forks, self.open_issues
        )
    }
}

// =============================================================================
// Maintainer Credibility
// =============================================================================

/// Well-known organizations in the AI/ML space
const CREDIBLE_ORGS: &[&str] = &[
    "pytorch",
    "facebook",
    "google",
    "microsoft",
    "nvidia",
    "huggingface",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredibilityLevel {
    High,
    Medium,
    Unknown,
}

impl fmt::Display for CredibilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "High - established organization"),
            Self::Medium => write!(f, "Medium - active contributor base"),
            Self::Unknown => write!(f, "Unknown - requires investigation"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintainerCredibility {
    pub level: CredibilityLevel,
    pub owner: String,
}

impl MaintainerCredibility {
    pub fn assess(metadata: &ProjectMetadata) -> Self {
        let owner = metadata.owner_login().unwrap_or("Unknown").to_string();
        let owner_lower = owner.to_lowercase();

        let level = if CREDIBLE_ORGS.iter().any(|org| owner_lower.contains(org)) {
            CredibilityLevel::High
        } else if metadata.contributor_count() >= thresholds::CREDIBLE_CONTRIBUTORS {
            CredibilityLevel::Medium
        } else {
            CredibilityLevel::Unknown
        };

        Self { level, owner }
    }
}

impl fmt::Display for MaintainerCredibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "**Maintainer Credibility**: {} (Owner: {})",
            self.level, self.owner
        )
    }
}
