//! Voting recommendation assembly.
//!
//! Turns a `ProjectAnalysis` into the decision, confidence, executive summary,
//! key factors, stakeholder alignments and consultation notes. The decision is
//! taken from the structured strategic verdict.

use std::fmt;

use super::analysis::ProjectAnalysis;
use super::assessment::{CredibilityLevel, Risk};
use super::overlap::ConcernLevel;
use super::rules::{KeywordRule, first_match};
use super::strategy::Verdict;
use crate::config::AdvisorConfig;
use crate::constants::thresholds;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
    Abstain,
}

impl Decision {
    pub fn from_verdict(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Favorable => Self::Approve,
            Verdict::Unfavorable => Self::Reject,
            Verdict::Neutral => Self::Abstain,
        }
    }

    /// Strategic alignment label used in the executive summary
    pub fn alignment_label(&self) -> &'static str {
        match self {
            Self::Approve => "Favorable",
            Self::Reject => "Concerning",
            Self::Abstain => "Neutral",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Approve => write!(f, "APPROVE"),
            Self::Reject => write!(f, "REJECT"),
            Self::Abstain => write!(f, "ABSTAIN"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn from_score(score: f64) -> Self {
        if score >= thresholds::CONFIDENCE_HIGH {
            Self::High
        } else if score >= thresholds::CONFIDENCE_MEDIUM {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "HIGH"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::Low => write!(f, "LOW"),
        }
    }
}

/// Final recommendation record for one project
#[derive(Debug, Clone)]
pub struct VotingRecommendation {
    pub project_name: String,
    pub decision: Decision,
    pub confidence: Confidence,
    pub executive_summary: String,
    pub key_factors: Vec<String>,
    pub red_hat_alignment: String,
    pub ibm_alignment: String,
    pub consultation_notes: String,
}

// =============================================================================
// Stakeholder alignment tables
// =============================================================================

#[derive(Debug, Clone, Copy)]
struct Alignment {
    point: &'static str,
    score: &'static str,
}

const RED_HAT_RULES: &[KeywordRule<Alignment>] = &[
    KeywordRule::any(
        &["serving"],
        Alignment {
            point: "Aligns with OpenShift AI serving strategy",
            score: "High",
        },
    ),
    KeywordRule::any(
        &["pytorch"],
        Alignment {
            point: "Supports PyTorch ecosystem that powers RHOAI",
            score: "Medium-High",
        },
    ),
];

const RED_HAT_DEFAULT: Alignment = Alignment {
    point: "General AI ecosystem benefit",
    score: "Medium",
};

const IBM_RULES: &[KeywordRule<Alignment>] = &[
    KeywordRule::any(
        &["research"],
        Alignment {
            point: "Aligns with IBM Research priorities",
            score: "High",
        },
    ),
    KeywordRule::any(
        &["enterprise"],
        Alignment {
            point: "Supports Watson and enterprise AI",
            score: "Medium-High",
        },
    ),
];

const IBM_DEFAULT: Alignment = Alignment {
    point: "Contributes to broader AI ecosystem",
    score: "Medium",
};

fn render_alignment(
    title: &str,
    rules: &[KeywordRule<Alignment>],
    default: Alignment,
    description: &str,
) -> String {
    let alignment = first_match(rules, &description.to_lowercase())
        .copied()
        .unwrap_or(default);
    format!(
        "**{} Strategic Alignment:**\n- {}\n- **Score**: {} alignment\n",
        title, alignment.point, alignment.score
    )
}

// =============================================================================
// Assembler
// =============================================================================

/// Builds recommendations with the configured analyst and consultant labels
#[derive(Debug, Clone)]
pub struct RecommendationAssembler {
    analyst: String,
    consultant: String,
}

impl RecommendationAssembler {
    pub fn new(analyst: impl Into<String>, consultant: impl Into<String>) -> Self {
        Self {
            analyst: analyst.into(),
            consultant: consultant.into(),
        }
    }

    pub fn from_config(config: &AdvisorConfig) -> Self {
        Self::new(&config.analyst, &config.consultant)
    }

    pub fn analyst(&self) -> &str {
        &self.analyst
    }

    pub fn consultant(&self) -> &str {
        &self.consultant
    }

    pub fn assemble(
        &self,
        analysis: &ProjectAnalysis,
        context: Option<&str>,
    ) -> VotingRecommendation {
        let decision = Decision::from_verdict(analysis.strategy.verdict);
        let confidence = Confidence::from_score(analysis.health_score);

        VotingRecommendation {
            project_name: analysis.name.clone(),
            decision,
            confidence,
            executive_summary: self.executive_summary(analysis, decision, context),
            key_factors: key_factors(analysis),
            red_hat_alignment: render_alignment(
                "Red Hat",
                RED_HAT_RULES,
                RED_HAT_DEFAULT,
                &analysis.description,
            ),
            ibm_alignment: render_alignment("IBM", IBM_RULES, IBM_DEFAULT, &analysis.description),
            consultation_notes: self.consultation_notes(analysis, decision, confidence),
        }
    }

    fn executive_summary(
        &self,
        analysis: &ProjectAnalysis,
        decision: Decision,
        context: Option<&str>,
    ) -> String {
        let vote_context = context
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(|c| format!("## Vote Context\n\n{}\n\n", c))
            .unwrap_or_default();

        // Trailing double spaces are markdown line breaks
        let header = format!(
            "**Recommendation**: {}  \n**Project Health Score**: {:.1}/100  \n**Strategic Alignment**: {}",
            decision,
            analysis.health_score,
            decision.alignment_label()
        );
        let footer = format!(
            "*Analysis prepared for {}*  \n*In consultation with {}*",
            self.analyst, self.consultant
        );

        format!(
            "# PyTorch TAC Voting Recommendation: {name}

## Executive Summary

{header}

## Key Assessment

{strategy}

## Competition & Portfolio Impact

{competition}

{overlap}

## Risk Profile

{risk}

## Technical Assessment

{merit}

{engagement}

{credibility}

{vote_context}## Strategic Context

This analysis considers Red Hat's AI strategy, IBM Research priorities, and PyTorch ecosystem health. The recommendation aligns with our portfolio strategy while supporting the broader PyTorch community mission.

---
{footer}
",
            name = analysis.name,
            header = header,
            strategy = analysis.strategy,
            competition = analysis.competition,
            overlap = analysis.overlap,
            risk = analysis.risk,
            merit = analysis.merit,
            engagement = analysis.engagement,
            credibility = analysis.credibility,
            vote_context = vote_context,
            footer = footer,
        )
    }

    fn consultation_notes(
        &self,
        analysis: &ProjectAnalysis,
        decision: Decision,
        confidence: Confidence,
    ) -> String {
        let strength = if analysis.health_score >= thresholds::CONSULTATION_STRONG {
            "Strong"
        } else {
            "Weak"
        };

        format!(
            "**Consultation Notes for {consultant}:**

**Recommended Discussion Points:**
1. Project health score: {score:.1}/100 - {strength}
2. IBM Research alignment opportunities
3. Potential collaboration with Watson/Granite teams
4. Long-term maintenance sustainability

**Questions for IBM Research Perspective:**
- Does this align with current IBM AI research priorities?
- Any known collaborations or conflicts with existing IBM projects?
- Resource commitment implications for IBM?

**Recommended Vote:** {decision}
**Confidence Level:** {confidence}

*This analysis supports your decision-making as the official IBM voting representative.*
",
            consultant = self.consultant,
            score = analysis.health_score,
            strength = strength,
            decision = decision,
            confidence = confidence,
        )
    }
}

/// One-line observations gated by thresholds and structured flags
fn key_factors(analysis: &ProjectAnalysis) -> Vec<String> {
    let score = analysis.health_score;
    let mut factors = Vec::new();

    if score >= thresholds::CONFIDENCE_HIGH {
        factors.push(format!("Strong project health ({:.1}/100)", score));
    } else if score <= thresholds::WEAK_HEALTH_FACTOR {
        factors.push(format!("Weak project health ({:.1}/100)", score));
    }

    let flags = [
        (
            analysis.overlap.concern() == ConcernLevel::MediumToHigh,
            "Significant portfolio overlap concerns",
        ),
        (
            analysis.competition.is_highly_competitive(),
            "Operates in highly competitive market",
        ),
        (
            analysis.credibility.level == CredibilityLevel::High,
            "Credible maintainer organization",
        ),
        (
            analysis.risk.has(Risk::Archived),
            "Project maintenance risks identified",
        ),
    ];
    factors.extend(
        flags
            .into_iter()
            .filter(|(triggered, _)| *triggered)
            .map(|(_, factor)| factor.to_string()),
    );

    factors
}
