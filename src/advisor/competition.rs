//! Competitive landscape analysis.

use std::fmt;

use super::rules::{KeywordRule, all_matches, first_match};

/// Competitor set for one domain category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompetitorCategory {
    pub category: &'static str,
    pub competitors: &'static [&'static str],
}

/// Known competitive areas in the ML ecosystem, in report order
const CATEGORY_RULES: &[KeywordRule<CompetitorCategory>] = &[
    KeywordRule::any(
        &["inference"],
        CompetitorCategory {
            category: "Inference",
            competitors: &["TensorRT", "ONNX Runtime", "TensorFlow Lite"],
        },
    ),
    KeywordRule::any(
        &["training"],
        CompetitorCategory {
            category: "Training",
            competitors: &["Horovod", "DeepSpeed", "FairScale"],
        },
    ),
    KeywordRule::any(
        &["deployment"],
        CompetitorCategory {
            category: "Deployment",
            competitors: &["TorchServe", "MLflow", "Kubeflow"],
        },
    ),
    KeywordRule::any(
        &["optimization"],
        CompetitorCategory {
            category: "Optimization",
            competitors: &["TensorRT", "Intel OpenVINO", "Apache TVM"],
        },
    ),
    KeywordRule::any(
        &["distributed"],
        CompetitorCategory {
            category: "Distributed",
            competitors: &["Ray", "Dask", "Horovod"],
        },
    ),
];

/// Overall market position bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketPosition {
    HighlyCompetitive,
    ResearchFocused,
    Moderate,
}

impl MarketPosition {
    pub fn description(&self) -> &'static str {
        match self {
            Self::HighlyCompetitive => "Highly competitive space with established players",
            Self::ResearchFocused => "Research-focused, lower competitive pressure",
            Self::Moderate => "Moderate competitive landscape",
        }
    }
}

const POSITION_RULES: &[KeywordRule<MarketPosition>] = &[
    KeywordRule::any(
        &["inference", "serving", "deployment"],
        MarketPosition::HighlyCompetitive,
    ),
    KeywordRule::any(&["research", "experimental"], MarketPosition::ResearchFocused),
];

/// Competition analysis for one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompetitionAnalysis {
    pub project_name: String,
    pub categories: Vec<CompetitorCategory>,
    pub position: MarketPosition,
}

impl CompetitionAnalysis {
    pub fn assess(project_name: &str, description: &str) -> Self {
        let description = description.to_lowercase();
        Self {
            project_name: project_name.to_string(),
            categories: all_matches(CATEGORY_RULES, &description).copied().collect(),
            position: first_match(POSITION_RULES, &description)
                .copied()
                .unwrap_or(MarketPosition::Moderate),
        }
    }

    pub fn is_highly_competitive(&self) -> bool {
        self.position == MarketPosition::HighlyCompetitive
    }
}

impl fmt::Display for CompetitionAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "**Competition Analysis for {}:**", self.project_name)?;
        for category in &self.categories {
            writeln!(
                f,
                "- **{}**: Competes with {}",
                category.category,
                category.competitors.join(", ")
            )?;
        }
        write!(f, "\n**Market Position**: {}", self.position.description())
    }
}
