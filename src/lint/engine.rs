//! Agent package linter.
//!
//! Packages are linted sequentially in sorted name order. Each package runs
//! all four gates regardless of earlier outcomes; a package passes when every
//! gate passes and the run passes when every package does.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::gates::{check_implementation, check_prompt, check_quality, check_structure};
use super::outcome::GateReport;
use super::syntax::PythonSyntax;
use super::tools::{CodeTool, ExternalTool};
use crate::config::LintConfig;
use crate::types::{Result, log_filter_warn};

/// Lint outcome of one agent package
#[derive(Debug, Clone)]
pub struct LintResult {
    pub agent: String,
    pub structure: GateReport,
    pub prompt: GateReport,
    pub implementation: GateReport,
    pub quality: GateReport,
}

impl LintResult {
    /// Gate reports in evaluation order
    pub fn gates(&self) -> [&GateReport; 4] {
        [
            &self.structure,
            &self.prompt,
            &self.implementation,
            &self.quality,
        ]
    }

    pub fn passed(&self) -> bool {
        self.gates().iter().all(|g| g.passed())
    }

    /// Failure messages prefixed with the agent name
    pub fn errors(&self) -> Vec<String> {
        self.gates()
            .iter()
            .flat_map(|g| g.failures())
            .map(|m| format!("{}: {}", self.agent, m))
            .collect()
    }

    /// Warning messages prefixed with the agent name
    pub fn warnings(&self) -> Vec<String> {
        self.gates()
            .iter()
            .flat_map(|g| g.warnings())
            .map(|m| format!("{}: {}", self.agent, m))
            .collect()
    }
}

/// Run-level condition outside any single package
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunIssue {
    MissingAgentsDir(PathBuf),
    NoAgents(PathBuf),
    AgentNotFound(String),
}

impl RunIssue {
    /// Errors fail the run; `NoAgents` is only a warning
    pub fn is_error(&self) -> bool {
        !matches!(self, Self::NoAgents(_))
    }
}

impl std::fmt::Display for RunIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingAgentsDir(dir) => write!(f, "{} directory not found", dir.display()),
            Self::NoAgents(_) => write!(f, "No agent directories found"),
            Self::AgentNotFound(name) => write!(f, "Agent '{}' not found", name),
        }
    }
}

/// Aggregated result of one lint run
#[derive(Debug, Clone, Default)]
pub struct LintReport {
    pub results: Vec<LintResult>,
    pub issue: Option<RunIssue>,
}

impl LintReport {
    pub fn passed(&self) -> bool {
        !self.issue.as_ref().is_some_and(RunIssue::is_error)
            && self.results.iter().all(LintResult::passed)
    }

    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| !r.passed()).count()
    }

    pub fn errors(&self) -> Vec<String> {
        self.results.iter().flat_map(LintResult::errors).collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.results.iter().flat_map(LintResult::warnings).collect()
    }

    fn with_issue(issue: RunIssue) -> Self {
        Self {
            results: Vec::new(),
            issue: Some(issue),
        }
    }
}

/// Outcome of the destructive formatting pre-pass for one package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutcome {
    pub agent: String,
    pub result: std::result::Result<(), String>,
}

pub struct AgentLinter {
    config: LintConfig,
    agents_dir: PathBuf,
    tools: Vec<Box<dyn CodeTool>>,
    syntax: PythonSyntax,
}

impl AgentLinter {
    /// Linter with the standard black / isort / flake8 toolchain
    pub fn new(config: LintConfig, agents_dir: impl Into<PathBuf>) -> Result<Self> {
        let tools = ExternalTool::standard_set(Duration::from_secs(config.tool_timeout_secs));
        Self::with_tools(config, agents_dir, tools)
    }

    pub fn with_tools(
        config: LintConfig,
        agents_dir: impl Into<PathBuf>,
        tools: Vec<Box<dyn CodeTool>>,
    ) -> Result<Self> {
        Ok(Self {
            config,
            agents_dir: agents_dir.into(),
            tools,
            syntax: PythonSyntax::new()?,
        })
    }

    pub fn agents_dir(&self) -> &Path {
        &self.agents_dir
    }

    /// Lint every package directory in sorted name order
    pub async fn lint_all(&mut self) -> LintReport {
        let packages = match self.package_dirs() {
            Ok(packages) => packages,
            Err(issue) => return LintReport::with_issue(issue),
        };

        if packages.is_empty() {
            warn!("No agent directories found in {}", self.agents_dir.display());
            return LintReport::with_issue(RunIssue::NoAgents(self.agents_dir.clone()));
        }

        info!("Linting {} agent package(s)", packages.len());
        let mut report = LintReport::default();
        for dir in packages {
            report.results.push(self.lint_package(&dir).await);
        }
        report
    }

    /// Lint a single named package
    pub async fn lint_agent(&mut self, name: &str) -> LintReport {
        let dir = self.agents_dir.join(name);
        if !dir.is_dir() {
            return LintReport::with_issue(RunIssue::AgentNotFound(name.to_string()));
        }

        LintReport {
            results: vec![self.lint_package(&dir).await],
            issue: None,
        }
    }

    pub async fn lint_package(&mut self, dir: &Path) -> LintResult {
        let agent = super::gates::package_name(dir);
        info!("Linting agent: {}", agent);

        let structure = check_structure(dir, &self.config);
        let prompt = check_prompt(dir, &self.config);
        let implementation = check_implementation(dir, &self.config, &mut self.syntax);
        let quality = check_quality(dir, &self.config, &self.tools).await;

        let result = LintResult {
            agent,
            structure,
            prompt,
            implementation,
            quality,
        };
        for gate in result.gates() {
            debug!(
                "{} / {}: {}",
                result.agent,
                gate.gate,
                if gate.passed() { "ok" } else { "fail" }
            );
        }
        result
    }

    /// Run every fix-capable tool in place on each implementation file.
    ///
    /// Failures are reported per package and never abort the pass.
    pub async fn fix_formatting(&self) -> Vec<FixOutcome> {
        let packages = match self.package_dirs() {
            Ok(packages) => packages,
            Err(issue) => {
                warn!("Skipping formatting fixes: {}", issue);
                return Vec::new();
            }
        };

        let mut outcomes = Vec::new();
        for dir in packages {
            let file = dir.join(&self.config.implementation_file);
            if !file.is_file() {
                continue;
            }

            let mut result = Ok(());
            for tool in self.tools.iter().filter(|t| t.supports_fix()) {
                if let Err(e) = tool.fix(&file).await {
                    result = Err(e.to_string());
                    break;
                }
            }

            outcomes.push(FixOutcome {
                agent: super::gates::package_name(&dir),
                result,
            });
        }
        outcomes
    }

    fn package_dirs(&self) -> std::result::Result<Vec<PathBuf>, RunIssue> {
        let missing = || RunIssue::MissingAgentsDir(self.agents_dir.clone());
        let entries = fs::read_dir(&self.agents_dir).map_err(|_| missing())?;

        let mut dirs: Vec<PathBuf> = entries
            .filter_map(|e| log_filter_warn(e, "Skipping unreadable directory entry"))
            .map(|e| e.path())
            .filter(|p| p.is_dir())
            .collect();
        dirs.sort();
        Ok(dirs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::scaffold::{AgentTemplate, create_agent};
    use crate::lint::tools::ToolOutcome;
    use crate::types::AgentError;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    /// Tool returning a fixed outcome and recording the files it touched
    struct FakeTool {
        name: &'static str,
        outcome: ToolOutcome,
        fix_fails: bool,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl FakeTool {
        fn boxed(name: &'static str, outcome: ToolOutcome) -> Box<dyn CodeTool> {
            Box::new(Self {
                name,
                outcome,
                fix_fails: false,
                calls: Arc::default(),
            })
        }
    }

    #[async_trait]
    impl CodeTool for FakeTool {
        fn name(&self) -> &str {
            self.name
        }

        async fn check(&self, file: &Path) -> ToolOutcome {
            self.calls
                .lock()
                .unwrap()
                .push(format!("check {}", file.display()));
            self.outcome.clone()
        }

        fn supports_fix(&self) -> bool {
            true
        }

        async fn fix(&self, file: &Path) -> Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("{} {}", self.name, file.display()));
            if self.fix_fails {
                Err(AgentError::Tool(format!("{} failed", self.name)))
            } else {
                Ok(())
            }
        }
    }

    fn conformant() -> Vec<Box<dyn CodeTool>> {
        vec![FakeTool::boxed("fmt", ToolOutcome::Conformant)]
    }

    fn scaffold(root: &Path, name: &str) -> PathBuf {
        let template = AgentTemplate::new(name, None).unwrap();
        create_agent(root, &LintConfig::default(), &template).unwrap()
    }

    fn linter(root: &Path, tools: Vec<Box<dyn CodeTool>>) -> AgentLinter {
        AgentLinter::with_tools(LintConfig::default(), root, tools).unwrap()
    }

    #[tokio::test]
    async fn test_missing_agents_dir_fails_run() {
        let temp = TempDir::new().unwrap();
        let mut linter = linter(&temp.path().join("agents"), conformant());

        let report = linter.lint_all().await;
        assert!(matches!(report.issue, Some(RunIssue::MissingAgentsDir(_))));
        assert!(!report.passed());
    }

    #[tokio::test]
    async fn test_empty_agents_dir_passes_with_warning() {
        let temp = TempDir::new().unwrap();
        let mut linter = linter(temp.path(), conformant());

        let report = linter.lint_all().await;
        assert!(matches!(report.issue, Some(RunIssue::NoAgents(_))));
        assert!(report.passed());
    }

    #[tokio::test]
    async fn test_all_packages_in_sorted_order() {
        let temp = TempDir::new().unwrap();
        scaffold(temp.path(), "zeta");
        scaffold(temp.path(), "alpha");
        fs::write(temp.path().join("README.md"), "not a package").unwrap();

        let mut linter = linter(temp.path(), conformant());
        let report = linter.lint_all().await;

        let names: Vec<_> = report.results.iter().map(|r| r.agent.as_str()).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
        assert!(report.passed(), "{:?}", report.errors());
    }

    #[tokio::test]
    async fn test_non_kebab_package_still_runs_other_gates() {
        let temp = TempDir::new().unwrap();
        let good = scaffold(temp.path(), "my-agent");
        fs::rename(&good, temp.path().join("MyAgent")).unwrap();

        let calls = Arc::new(Mutex::new(Vec::new()));
        let tool = FakeTool {
            name: "fmt",
            outcome: ToolOutcome::Conformant,
            fix_fails: false,
            calls: calls.clone(),
        };
        let mut linter = linter(temp.path(), vec![Box::new(tool)]);
        let report = linter.lint_agent("MyAgent").await;

        let result = &report.results[0];
        assert!(!result.structure.passed());
        assert!(result.prompt.passed());
        assert!(result.implementation.passed());
        assert!(result.quality.passed());
        assert!(!report.passed());
        assert_eq!(
            report.errors(),
            vec!["MyAgent: Directory name should use kebab-case"]
        );
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_entry_point_still_runs_quality() {
        let temp = TempDir::new().unwrap();
        let dir = scaffold(temp.path(), "worker");
        let agent = fs::read_to_string(dir.join("agent.py")).unwrap();
        fs::write(
            dir.join("agent.py"),
            agent.replace("if __name__ == \"__main__\":\n    main()\n", ""),
        )
        .unwrap();

        let tools = vec![FakeTool::boxed(
            "black",
            ToolOutcome::NonConformant("Code not formatted with Black".to_string()),
        )];
        let mut linter = linter(temp.path(), tools);
        let report = linter.lint_agent("worker").await;

        assert_eq!(
            report.errors(),
            vec![
                "worker: Missing main entry point",
                "worker: Code not formatted with Black",
            ]
        );
        assert_eq!(report.failed_count(), 1);
    }

    #[tokio::test]
    async fn test_unavailable_tool_is_warning() {
        let temp = TempDir::new().unwrap();
        scaffold(temp.path(), "worker");

        let tools = vec![FakeTool::boxed(
            "flake8",
            ToolOutcome::Unavailable("Could not run flake8 check".to_string()),
        )];
        let mut linter = linter(temp.path(), tools);
        let report = linter.lint_all().await;

        assert!(report.passed());
        assert_eq!(report.warnings(), vec!["worker: Could not run flake8 check"]);
    }

    #[tokio::test]
    async fn test_unknown_agent() {
        let temp = TempDir::new().unwrap();
        let mut linter = linter(temp.path(), conformant());

        let report = linter.lint_agent("ghost").await;
        assert_eq!(
            report.issue,
            Some(RunIssue::AgentNotFound("ghost".to_string()))
        );
        assert!(!report.passed());
    }

    #[tokio::test]
    async fn test_fix_pass_runs_formatters_in_order() {
        let temp = TempDir::new().unwrap();
        scaffold(temp.path(), "alpha");
        fs::create_dir(temp.path().join("empty")).unwrap();

        let calls = Arc::new(Mutex::new(Vec::new()));
        let tools: Vec<Box<dyn CodeTool>> = vec![
            Box::new(FakeTool {
                name: "black",
                outcome: ToolOutcome::Conformant,
                fix_fails: false,
                calls: calls.clone(),
            }),
            Box::new(FakeTool {
                name: "isort",
                outcome: ToolOutcome::Conformant,
                fix_fails: true,
                calls: calls.clone(),
            }),
        ];
        let linter = linter(temp.path(), tools);

        let outcomes = linter.fix_formatting().await;
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].agent, "alpha");
        assert_eq!(
            outcomes[0].result,
            Err("External tool error: isort failed".to_string())
        );

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert!(calls[0].starts_with("black "));
        assert!(calls[1].starts_with("isort "));
    }
}
