//! Global Constants
//!
//! Centralized constants for scoring, thresholds and linting.
//! All magic numbers should be defined here with documentation.

/// Health score weights and caps
pub mod health {
    /// Upper bound of the health score
    pub const MAX_SCORE: f64 = 100.0;

    /// Stars are divided by this before capping
    pub const STARS_DIVISOR: f64 = 100.0;

    /// Maximum points from stars
    pub const STARS_CAP: f64 = 20.0;

    /// Points per recent commit
    pub const POINTS_PER_RECENT_COMMIT: f64 = 2.5;

    /// Maximum points from recent activity
    pub const ACTIVITY_CAP: f64 = 25.0;

    /// Maximum points from contributors (one point each)
    pub const CONTRIBUTORS_CAP: f64 = 20.0;

    /// Maintenance indicator points
    pub mod maintenance {
        pub const NOT_ARCHIVED: f64 = 10.0;
        pub const HAS_WIKI: f64 = 5.0;
        pub const HAS_ISSUES: f64 = 5.0;
        pub const HAS_DESCRIPTION: f64 = 5.0;
        pub const HAS_LICENSE: f64 = 10.0;
    }

    /// Only this many of the most recent commits are inspected
    pub const DEFAULT_COMMIT_SAMPLE: usize = 10;

    /// A commit within this many days counts as recent
    pub const DEFAULT_RECENT_WINDOW_DAYS: i64 = 30;
}

/// Decision thresholds
pub mod thresholds {
    /// Health factor: strong at or above
    pub const HEALTH_STRONG: f64 = 75.0;
    /// Health factor: moderate at or above
    pub const HEALTH_MODERATE: f64 = 50.0;

    /// Overall verdict: favorable at or above (with low overlap concern)
    pub const FAVORABLE: f64 = 60.0;
    /// Overall verdict: neutral at or above
    pub const NEUTRAL: f64 = 40.0;

    /// Confidence: high at or above
    pub const CONFIDENCE_HIGH: f64 = 70.0;
    /// Confidence: medium at or above
    pub const CONFIDENCE_MEDIUM: f64 = 40.0;

    /// Key factor: weak health at or below
    pub const WEAK_HEALTH_FACTOR: f64 = 30.0;

    /// Consultation notes: "Strong" at or above
    pub const CONSULTATION_STRONG: f64 = 60.0;

    /// Community engagement: high when stars or forks exceed these
    pub const ENGAGEMENT_HIGH_STARS: i64 = 1000;
    pub const ENGAGEMENT_HIGH_FORKS: i64 = 100;

    /// Community engagement: medium when stars or forks exceed these
    pub const ENGAGEMENT_MEDIUM_STARS: i64 = 100;
    pub const ENGAGEMENT_MEDIUM_FORKS: i64 = 20;

    /// Maintainer credibility: medium at or above this many contributors
    pub const CREDIBLE_CONTRIBUTORS: usize = 10;

    /// Risk: bus factor below this many contributors
    pub const MIN_CONTRIBUTORS: usize = 3;
}

/// Repository hosting constants
pub mod github {
    /// Expected host of repository URLs
    pub const DEFAULT_HOST: &str = "github.com";

    /// REST API root
    pub const DEFAULT_API_BASE: &str = "https://api.github.com";

    /// User agent sent with every request (the API rejects requests without one)
    pub const USER_AGENT: &str = concat!("dotagents/", env!("CARGO_PKG_VERSION"));
}

/// Compliance linter constants
pub mod lint {
    /// Default directory holding agent packages
    pub const DEFAULT_AGENTS_DIR: &str = "agents";

    /// Prompt document every package must contain
    pub const PROMPT_FILE: &str = "prompt.md";

    /// Implementation file every package must contain
    pub const IMPLEMENTATION_FILE: &str = "agent.py";

    /// Timeout for each external tool invocation (seconds)
    pub const TOOL_TIMEOUT_SECS: u64 = 30;

    /// Extensions permitted for extra files without a warning
    pub const ALLOWED_EXTENSIONS: &[&str] = &[
        "png", "jpg", "jpeg", "gif", "svg", "md", "txt", "json", "yaml", "yml",
    ];

    /// Interpreter directive the implementation file must start with
    pub const SHEBANG: &str = "#!/usr/bin/env python3";

    /// flake8 error classes checked by the quality gate
    pub const FLAKE8_SELECT: &str = "E9,F63,F7,F82";

    /// flake8 maximum line length (matches black)
    pub const FLAKE8_MAX_LINE_LENGTH: u32 = 88;
}

/// Report output constants
pub mod report {
    /// Default output directory for saved analyses
    pub const DEFAULT_OUTPUT_DIR: &str = "./analysis";

    /// Timestamp format used in report file names
    pub const FILE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
}
