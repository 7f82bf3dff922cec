//! Check outcomes and their per-gate fold.

use std::fmt;

/// Result of one compliance check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Pass,
    Fail(String),
    Warn(String),
}

impl CheckOutcome {
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail(_))
    }

    /// `Pass` when `ok`, otherwise `Fail(message)`
    pub fn require(ok: bool, message: impl Into<String>) -> Self {
        if ok { Self::Pass } else { Self::Fail(message.into()) }
    }

    /// `Pass` when `ok`, otherwise `Warn(message)`
    pub fn recommend(ok: bool, message: impl Into<String>) -> Self {
        if ok { Self::Pass } else { Self::Warn(message.into()) }
    }
}

/// The four compliance gates, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    Structure,
    Prompt,
    Implementation,
    Quality,
}

impl Gate {
    pub const ALL: [Gate; 4] = [
        Gate::Structure,
        Gate::Prompt,
        Gate::Implementation,
        Gate::Quality,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Structure => "Structure",
            Self::Prompt => "Prompt",
            Self::Implementation => "Implementation",
            Self::Quality => "Code Quality",
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// All check outcomes of one gate.
///
/// The gate fails if any check failed; warnings are collected but never
/// affect pass/fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateReport {
    pub gate: Gate,
    pub outcomes: Vec<CheckOutcome>,
}

impl GateReport {
    pub fn new(gate: Gate) -> Self {
        Self {
            gate,
            outcomes: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: CheckOutcome) -> &mut Self {
        self.outcomes.push(outcome);
        self
    }

    pub fn fail(&mut self, message: impl Into<String>) -> &mut Self {
        self.push(CheckOutcome::Fail(message.into()))
    }

    pub fn warn(&mut self, message: impl Into<String>) -> &mut Self {
        self.push(CheckOutcome::Warn(message.into()))
    }

    pub fn passed(&self) -> bool {
        !self.outcomes.iter().any(CheckOutcome::is_fail)
    }

    pub fn failures(&self) -> impl Iterator<Item = &str> {
        self.outcomes.iter().filter_map(|o| match o {
            CheckOutcome::Fail(m) => Some(m.as_str()),
            _ => None,
        })
    }

    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.outcomes.iter().filter_map(|o| match o {
            CheckOutcome::Warn(m) => Some(m.as_str()),
            _ => None,
        })
    }
}
