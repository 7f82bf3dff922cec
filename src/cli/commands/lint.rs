//! Lint Command
//!
//! Check agent packages for compliance.
//!
//! Usage:
//!   dotagents lint [-a NAME] [-f] [--agents-dir DIR]

use std::path::PathBuf;

use crate::cli::ui::{Output, report};
use crate::config::ConfigLoader;
use crate::lint::{AgentLinter, RunIssue};
use crate::types::{AgentError, Result};

pub async fn run(
    agent: Option<String>,
    fix: bool,
    agents_dir: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let config = ConfigLoader::load()?.lint;
    let out = Output::new();

    let agents_dir = agents_dir.unwrap_or_else(|| config.agents_dir.clone());
    let mut linter = AgentLinter::new(config, agents_dir)?;

    if fix {
        out.header("Fixing formatting");
        let outcomes = linter.fix_formatting().await;
        report::render_fix_outcomes(&out, &outcomes);
    }

    out.header(&format!("Linting agents in {}", linter.agents_dir().display()));
    let result = match agent.as_deref() {
        Some(name) => linter.lint_agent(name).await,
        None => linter.lint_all().await,
    };

    report::render_lint_report(&out, &result, verbose);

    if result.passed() {
        return Ok(());
    }

    let failed = result.failed_count();
    let total = result.results.len();
    match result.issue {
        Some(RunIssue::AgentNotFound(name)) => Err(AgentError::AgentNotFound(name)),
        Some(issue @ RunIssue::MissingAgentsDir(_)) => {
            Err(AgentError::InvalidInput(issue.to_string()))
        }
        _ => Err(AgentError::LintFailed { failed, total }),
    }
}
