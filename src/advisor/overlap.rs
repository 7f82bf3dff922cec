//! Portfolio overlap analysis against the Red Hat / IBM AI portfolio.

use std::fmt;

use super::rules::{KeywordRule, all_matches, first_match};

const OVERLAP_RULES: &[KeywordRule<&str>] = &[
    KeywordRule::any(&["serving", "deployment"], "OpenShift AI serving capabilities"),
    KeywordRule::any(&["training", "distributed"], "CodeFlare distributed training"),
    KeywordRule::all(&["model", "language"], "Granite model ecosystem"),
];

const SYNERGY_RULES: &[KeywordRule<Synergy>] = &[KeywordRule::any(&["pytorch"], Synergy::High)];

/// Strategic concern raised by portfolio overlap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcernLevel {
    Low,
    MediumToHigh,
}

impl fmt::Display for ConcernLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::MediumToHigh => write!(f, "Medium to High"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Synergy {
    High,
    Medium,
}

impl fmt::Display for Synergy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
        }
    }
}

/// Overlap analysis for one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioOverlap {
    pub overlaps: Vec<&'static str>,
    pub synergy: Synergy,
}

impl PortfolioOverlap {
    pub fn assess(description: &str) -> Self {
        let description = description.to_lowercase();
        Self {
            overlaps: all_matches(OVERLAP_RULES, &description).copied().collect(),
            synergy: first_match(SYNERGY_RULES, &description)
                .copied()
                .unwrap_or(Synergy::Medium),
        }
    }

    pub fn concern(&self) -> ConcernLevel {
        if self.overlaps.is_empty() {
            ConcernLevel::Low
        } else {
            ConcernLevel::MediumToHigh
        }
    }
}

impl fmt::Display for PortfolioOverlap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "**Portfolio Overlap Analysis:**")?;
        if self.overlaps.is_empty() {
            writeln!(f, "- **Direct overlaps**: Minimal identified")?;
        } else {
            writeln!(f, "- **Direct overlaps**: {}", self.overlaps.join(", "))?;
        }
        writeln!(f, "- **Strategic concern**: {}", self.concern())?;
        writeln!(f, "- **Synergy potential**: {}", self.synergy)
    }
}
