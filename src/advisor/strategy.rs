//! Strategic recommendation.
//!
//! Combines the health score with the structured competition and overlap
//! results into one overall verdict.

use std::fmt;

use super::competition::CompetitionAnalysis;
use super::overlap::{ConcernLevel, PortfolioOverlap};
use crate::constants::thresholds;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthFactor {
    Strong,
    Moderate,
    Weak,
}

impl HealthFactor {
    pub fn from_score(score: f64) -> Self {
        if score >= thresholds::HEALTH_STRONG {
            Self::Strong
        } else if score >= thresholds::HEALTH_MODERATE {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Strong => "Strong project health supports adoption",
            Self::Moderate => "Moderate health, requires monitoring",
            Self::Weak => "Weak project health raises sustainability concerns",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompetitivePressure {
    High,
    Medium,
}

impl fmt::Display for CompetitivePressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
        }
    }
}

/// Overall verdict for ecosystem inclusion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Favorable,
    Neutral,
    Unfavorable,
}

impl Verdict {
    /// Favorable needs health >= 60 and low overlap concern; neutral needs health >= 40
    pub fn decide(score: f64, concern: ConcernLevel) -> Self {
        if score >= thresholds::FAVORABLE && concern == ConcernLevel::Low {
            Self::Favorable
        } else if score >= thresholds::NEUTRAL {
            Self::Neutral
        } else {
            Self::Unfavorable
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Favorable => write!(f, "**FAVORABLE** for ecosystem inclusion"),
            Self::Neutral => write!(f, "**NEUTRAL** - requires deeper analysis"),
            Self::Unfavorable => write!(f, "**UNFAVORABLE** - significant concerns"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategicRecommendation {
    pub health_factor: HealthFactor,
    pub competitive_pressure: CompetitivePressure,
    pub overlap_concern: ConcernLevel,
    pub verdict: Verdict,
}

impl StrategicRecommendation {
    pub fn assess(
        health_score: f64,
        competition: &CompetitionAnalysis,
        overlap: &PortfolioOverlap,
    ) -> Self {
        let overlap_concern = overlap.concern();
        Self {
            health_factor: HealthFactor::from_score(health_score),
            competitive_pressure: if competition.is_highly_competitive() {
                CompetitivePressure::High
            } else {
                CompetitivePressure::Medium
            },
            overlap_concern,
            verdict: Verdict::decide(health_score, overlap_concern),
        }
    }
}

impl fmt::Display for StrategicRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let concern = match self.overlap_concern {
            ConcernLevel::Low => "Low",
            ConcernLevel::MediumToHigh => "High",
        };
        writeln!(f, "**Strategic Recommendation:**")?;
        writeln!(f, "- **Health Factor**: {}", self.health_factor.description())?;
        writeln!(f, "- **Competitive Pressure**: {}", self.competitive_pressure)?;
        writeln!(f, "- **Portfolio Overlap**: {} concern level", concern)?;
        write!(f, "- **Overall**: {}", self.verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assess(score: f64, description: &str) -> StrategicRecommendation {
        StrategicRecommendation::assess(
            score,
            &CompetitionAnalysis::assess("X", description),
            &PortfolioOverlap::assess(description),
        )
    }

    #[test]
    fn test_health_factor_buckets() {
        assert_eq!(HealthFactor::from_score(75.0), HealthFactor::Strong);
        assert_eq!(HealthFactor::from_score(74.9), HealthFactor::Moderate);
        assert_eq!(HealthFactor::from_score(50.0), HealthFactor::Moderate);
        assert_eq!(HealthFactor::from_score(49.9), HealthFactor::Weak);
        assert_eq!(HealthFactor::from_score(0.0), HealthFactor::Weak);
    }

    #[test]
    fn test_verdict_boundaries() {
        assert_eq!(Verdict::decide(60.0, ConcernLevel::Low), Verdict::Favorable);
        assert_eq!(Verdict::decide(59.9, ConcernLevel::Low), Verdict::Neutral);
        assert_eq!(Verdict::decide(90.0, ConcernLevel::MediumToHigh), Verdict::Neutral);
        assert_eq!(Verdict::decide(40.0, ConcernLevel::Low), Verdict::Neutral);
        assert_eq!(Verdict::decide(39.9, ConcernLevel::Low), Verdict::Unfavorable);
        assert_eq!(Verdict::decide(0.0, ConcernLevel::Low), Verdict::Unfavorable);
    }

    #[test]
    fn test_render() {
        let rec = assess(80.0, "model serving");
        assert_eq!(
            rec.to_string(),
            "**Strategic Recommendation:**\n\
             - **Health Factor**: Strong project health supports adoption\n\
             - **Competitive Pressure**: High\n\
             - **Portfolio Overlap**: High concern level\n\
             - **Overall**: **NEUTRAL** - requires deeper analysis"
        );
    }

    #[test]
    fn test_generic_library_is_favorable_when_healthy() {
        let rec = assess(80.0, "a generic library");
        assert_eq!(rec.verdict, Verdict::Favorable);
        assert_eq!(rec.competitive_pressure, CompetitivePressure::Medium);
    }
}
