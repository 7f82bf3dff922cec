//! External code-quality tools.
//!
//! Every formatter and linter sits behind the `CodeTool` capability so the
//! "missing or hung tool is a warning" policy lives in one place: a tool that
//! cannot be spawned or times out reports `Unavailable`, never a failure.

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use crate::constants::lint;
use crate::types::{AgentError, Result};

/// Outcome of checking one file with one tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutcome {
    Conformant,
    /// The tool ran and rejected the file
    NonConformant(String),
    /// The tool could not be run (missing binary, timeout)
    Unavailable(String),
}

#[async_trait]
pub trait CodeTool: Send + Sync {
    fn name(&self) -> &str;

    /// Check a file without modifying it
    async fn check(&self, file: &Path) -> ToolOutcome;

    /// Whether `fix` rewrites files
    fn supports_fix(&self) -> bool {
        false
    }

    /// Rewrite the file in place
    async fn fix(&self, _file: &Path) -> Result<()> {
        Err(AgentError::Tool(format!("{} cannot fix files", self.name())))
    }
}

/// A command-line tool invoked as `<program> <args..> <file>`
#[derive(Debug, Clone)]
pub struct ExternalTool {
    program: &'static str,
    check_args: Vec<String>,
    fix_args: Option<Vec<String>>,
    /// Failure message when the file is rejected
    violation: &'static str,
    /// Append the tool's stdout to the violation message
    report_output: bool,
    /// Completes "Could not run ..."
    check_label: &'static str,
    timeout: Duration,
}

impl ExternalTool {
    pub fn black(timeout: Duration) -> Self {
        Self {
            program: "black",
            check_args: vec!["--check".to_string()],
            fix_args: Some(vec![]),
            violation: "Code not formatted with Black",
            report_output: false,
            check_label: "Black formatter check",
            timeout,
        }
    }

    pub fn isort(timeout: Duration) -> Self {
        Self {
            program: "isort",
            check_args: vec!["--check-only".to_string()],
            fix_args: Some(vec![]),
            violation: "Imports not sorted with isort",
            report_output: false,
            check_label: "isort check",
            timeout,
        }
    }

    /// flake8 restricted to syntax errors and undefined names
    pub fn flake8(timeout: Duration) -> Self {
        Self {
            program: "flake8",
            check_args: vec![
                format!("--max-line-length={}", lint::FLAKE8_MAX_LINE_LENGTH),
                format!("--select={}", lint::FLAKE8_SELECT),
                "--show-source".to_string(),
            ],
            fix_args: None,
            violation: "flake8 linting errors",
            report_output: true,
            check_label: "flake8 check",
            timeout,
        }
    }

    /// The standard quality toolchain, in gate order
    pub fn standard_set(timeout: Duration) -> Vec<Box<dyn CodeTool>> {
        vec![
            Box::new(Self::black(timeout)),
            Box::new(Self::isort(timeout)),
            Box::new(Self::flake8(timeout)),
        ]
    }

    async fn run(&self, args: &[String], file: &Path) -> Result<std::process::Output> {
        debug!("Running {} {:?} {}", self.program, args, file.display());

        let child = Command::new(self.program)
            .args(args)
            .arg(file)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| AgentError::Tool(format!("Failed to spawn {}: {}", self.program, e)))?;

        timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| {
                AgentError::Tool(format!(
                    "{} timed out after {}s",
                    self.program,
                    self.timeout.as_secs()
                ))
            })?
            .map_err(|e| AgentError::Tool(format!("{} execution failed: {}", self.program, e)))
    }
}

#[async_trait]
impl CodeTool for ExternalTool {
    fn name(&self) -> &str {
        self.program
    }

    async fn check(&self, file: &Path) -> ToolOutcome {
        let output = match self.run(&self.check_args, file).await {
            Ok(output) => output,
            Err(e) => {
                debug!("{}", e);
                return ToolOutcome::Unavailable(format!("Could not run {}", self.check_label));
            }
        };

        if output.status.success() {
            return ToolOutcome::Conformant;
        }

        if self.report_output {
            let stdout = String::from_utf8_lossy(&output.stdout);
            ToolOutcome::NonConformant(format!("{} - {}", self.violation, stdout.trim_end()))
        } else {
            ToolOutcome::NonConformant(self.violation.to_string())
        }
    }

    fn supports_fix(&self) -> bool {
        self.fix_args.is_some()
    }

    async fn fix(&self, file: &Path) -> Result<()> {
        let Some(args) = &self.fix_args else {
            return Err(AgentError::Tool(format!("{} cannot fix files", self.program)));
        };

        let output = self.run(args, file).await?;
        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(AgentError::Tool(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_set_order() {
        let tools = ExternalTool::standard_set(Duration::from_secs(1));
        let names: Vec<_> = tools.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["black", "isort", "flake8"]);
        assert!(tools[0].supports_fix());
        assert!(tools[1].supports_fix());
        assert!(!tools[2].supports_fix());
    }

    #[test]
    fn test_flake8_arguments() {
        let tool = ExternalTool::flake8(Duration::from_secs(1));
        assert_eq!(
            tool.check_args,
            vec![
                "--max-line-length=88",
                "--select=E9,F63,F7,F82",
                "--show-source"
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_binary_is_unavailable() {
        let mut tool = ExternalTool::black(Duration::from_secs(5));
        tool.program = "dotagents-no-such-formatter";

        let outcome = tool.check(Path::new("agent.py")).await;
        assert_eq!(
            outcome,
            ToolOutcome::Unavailable("Could not run Black formatter check".to_string())
        );
        assert!(tool.fix(Path::new("agent.py")).await.is_err());
    }

    #[tokio::test]
    async fn test_flake8_cannot_fix() {
        let tool = ExternalTool::flake8(Duration::from_secs(1));
        assert!(matches!(
            tool.fix(Path::new("agent.py")).await,
            Err(AgentError::Tool(_))
        ));
    }
}
