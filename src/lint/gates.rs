//! The four compliance gates.
//!
//! Gates never short-circuit each other: each one reads what it needs from
//! disk and reports a missing input as its own failure.

use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

use super::outcome::{CheckOutcome, Gate, GateReport};
use super::syntax::PythonSyntax;
use super::tools::{CodeTool, ToolOutcome};
use crate::config::LintConfig;

static KEBAB_CASE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("kebab-case regex")
});

/// Required prompt sections with their report names
static PROMPT_SECTIONS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?i)#+.*Agent.*Metadata", "Agent Metadata section"),
        (r"(?i)#+.*Usage.*Examples?", "Usage Examples section"),
        (r"(?i)#+.*Agent.*Prompt", "Agent Prompt section"),
    ]
    .into_iter()
    .map(|(pattern, name)| {
        #[allow(clippy::expect_used)]
        let re = Regex::new(pattern).expect("prompt section regex");
        (re, name)
    })
    .collect()
});

/// Required metadata fields, as `**field**...:` or `field:`
static METADATA_FIELDS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    ["name", "model", "description"]
        .into_iter()
        .map(|field| {
            #[allow(clippy::expect_used)]
            let re = Regex::new(&format!(r"(?i)\*\*{field}\*\*.*:|{field}:"))
                .expect("metadata field regex");
            (re, field)
        })
        .collect()
});

static STRUCTURED_EXAMPLES: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"(?is)Context.*User.*Assistant.*Commentary").expect("examples regex")
});

pub fn is_kebab_case(name: &str) -> bool {
    KEBAB_CASE.is_match(name)
}

// =============================================================================
// Structure
// =============================================================================

/// Directory name and file inventory
pub fn check_structure(package_dir: &Path, config: &LintConfig) -> GateReport {
    let mut report = GateReport::new(Gate::Structure);
    let name = package_name(package_dir);

    let files = match list_files(package_dir) {
        Ok(files) => files,
        Err(e) => {
            report.fail(format!("Cannot read package directory - {}", e));
            return report;
        }
    };

    for required in [&config.prompt_file, &config.implementation_file] {
        report.push(CheckOutcome::require(
            files.contains(required.as_str()),
            format!("Missing required file '{}'", required),
        ));
    }

    report.push(CheckOutcome::require(
        is_kebab_case(&name),
        "Directory name should use kebab-case",
    ));

    let extras = files
        .iter()
        .filter(|f| **f != config.prompt_file && **f != config.implementation_file);
    for file in extras {
        if !has_allowed_extension(file, &config.allowed_extensions) {
            report.warn(format!(
                "Unexpected file '{}' (consider documenting purpose)",
                file
            ));
        }
    }

    report
}

fn list_files(dir: &Path) -> std::io::Result<BTreeSet<String>> {
    let mut files = BTreeSet::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        // Follows symlinks, like the content gates' `is_file` checks
        if entry.path().is_file() {
            files.insert(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(files)
}

fn has_allowed_extension(file: &str, allowed: &[String]) -> bool {
    Path::new(file)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| allowed.iter().any(|a| a.eq_ignore_ascii_case(ext)))
}

// =============================================================================
// Prompt content
// =============================================================================

pub fn check_prompt(package_dir: &Path, config: &LintConfig) -> GateReport {
    let mut report = GateReport::new(Gate::Prompt);
    let Some(content) = read_required(package_dir, &config.prompt_file, &mut report) else {
        return report;
    };
    check_prompt_content(&content, &config.prompt_file, &mut report);
    report
}

pub fn check_prompt_content(content: &str, prompt_file: &str, report: &mut GateReport) {
    for (pattern, section) in PROMPT_SECTIONS.iter() {
        report.push(CheckOutcome::require(
            pattern.is_match(content),
            format!("Missing {} in {}", section, prompt_file),
        ));
    }

    for (pattern, field) in METADATA_FIELDS.iter() {
        report.push(CheckOutcome::require(
            pattern.is_match(content),
            format!("Missing '{}' metadata in {}", field, prompt_file),
        ));
    }

    report.push(CheckOutcome::recommend(
        STRUCTURED_EXAMPLES.is_match(content),
        "Usage examples should follow Context/User/Assistant/Commentary format",
    ));
}

// =============================================================================
// Implementation content
// =============================================================================

pub fn check_implementation(
    package_dir: &Path,
    config: &LintConfig,
    syntax: &mut PythonSyntax,
) -> GateReport {
    let mut report = GateReport::new(Gate::Implementation);
    let Some(content) = read_required(package_dir, &config.implementation_file, &mut report)
    else {
        return report;
    };
    check_implementation_content(&content, syntax, &mut report);
    report
}

pub fn check_implementation_content(
    content: &str,
    syntax: &mut PythonSyntax,
    report: &mut GateReport,
) {
    report
        .push(CheckOutcome::require(
            content.starts_with(crate::constants::lint::SHEBANG),
            "Missing proper Python shebang",
        ))
        .push(CheckOutcome::require(
            content.matches("\"\"\"").count() >= 2,
            "Missing module docstring",
        ))
        .push(CheckOutcome::require(
            content.contains("import click") || content.contains("from click import"),
            "Should use Click framework for CLI",
        ))
        .push(CheckOutcome::require(
            content.contains("if __name__ ==") && content.contains("__main__"),
            "Missing main entry point",
        ))
        .push(CheckOutcome::require(
            content.contains("@click.command()") || content.contains("@click.group()"),
            "Missing Click command decorator",
        ))
        .push(CheckOutcome::recommend(
            content.contains("--help") || content.contains("help="),
            "Should include help documentation",
        ));

    if let Some(err) = syntax.check(content) {
        report.fail(format!("Python syntax error - {}", err));
    }
}

// =============================================================================
// Code quality
// =============================================================================

/// Run every tool against the implementation file.
///
/// `NonConformant` fails the gate; `Unavailable` only warns.
pub async fn check_quality(
    package_dir: &Path,
    config: &LintConfig,
    tools: &[Box<dyn CodeTool>],
) -> GateReport {
    let mut report = GateReport::new(Gate::Quality);
    let file = package_dir.join(&config.implementation_file);

    if !file.is_file() {
        report.fail(format!(
            "Code quality not checked, {} file missing",
            config.implementation_file
        ));
        return report;
    }

    for tool in tools {
        let outcome = tool.check(&file).await;
        debug!("{} on {}: {:?}", tool.name(), file.display(), outcome);
        report.push(match outcome {
            ToolOutcome::Conformant => CheckOutcome::Pass,
            ToolOutcome::NonConformant(detail) => CheckOutcome::Fail(detail),
            ToolOutcome::Unavailable(reason) => CheckOutcome::Warn(reason),
        });
    }

    report
}

// =============================================================================
// Helpers
// =============================================================================

pub fn package_name(package_dir: &Path) -> String {
    package_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn read_required(dir: &Path, file: &str, report: &mut GateReport) -> Option<String> {
    let path = dir.join(file);
    if !path.is_file() {
        report.fail(format!("{} file missing", file));
        return None;
    }
    match fs::read_to_string(&path) {
        Ok(content) => Some(content),
        Err(e) => {
            report.fail(format!("Cannot read {} - {}", file, e));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tempfile::TempDir;

    const VALID_PROMPT: &str = "# Example Agent\n\n## Agent Metadata\n\n**Name**: example\n**Model**: sonnet\n**Description**: Does things\n\n## Usage Examples\n\nContext: c\nUser: u\nAssistant: a\nCommentary: m\n\n## Agent Prompt\n\nYou are helpful.\n";

    const VALID_AGENT: &str = "#!/usr/bin/env python3\n\"\"\"\nExample agent.\n\"\"\"\n\nimport click\n\n\n@click.command()\n@click.option(\"--name\", help=\"Who to greet\")\ndef main(name):\n    click.echo(name)\n\n\nif __name__ == \"__main__\":\n    main()\n";

    fn package(root: &TempDir, name: &str, files: &[(&str, &str)]) -> std::path::PathBuf {
        let dir = root.path().join(name);
        fs::create_dir_all(&dir).unwrap();
        for (file, content) in files {
            fs::write(dir.join(file), content).unwrap();
        }
        dir
    }

    struct FixedTool(ToolOutcome);

    #[async_trait]
    impl CodeTool for FixedTool {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn check(&self, _file: &Path) -> ToolOutcome {
            self.0.clone()
        }
    }

    #[test]
    fn test_kebab_case() {
        assert!(is_kebab_case("pytorch-tac"));
        assert!(is_kebab_case("uxd2"));
        assert!(!is_kebab_case("MyAgent"));
        assert!(!is_kebab_case("my--agent"));
        assert!(!is_kebab_case("-agent"));
        assert!(!is_kebab_case("my_agent"));
        assert!(!is_kebab_case(""));
    }

    #[test]
    fn test_structure_reports_every_violation() {
        let root = TempDir::new().unwrap();
        let dir = package(&root, "MyAgent", &[("notes.bin", "")]);

        let report = check_structure(&dir, &LintConfig::default());
        let failures: Vec<_> = report.failures().collect();
        assert_eq!(
            failures,
            vec![
                "Missing required file 'prompt.md'",
                "Missing required file 'agent.py'",
                "Directory name should use kebab-case",
            ]
        );
        assert_eq!(
            report.warnings().collect::<Vec<_>>(),
            vec!["Unexpected file 'notes.bin' (consider documenting purpose)"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_structure_follows_symlinked_files() {
        let root = TempDir::new().unwrap();
        let shared = root.path().join("shared-prompt.md");
        fs::write(&shared, VALID_PROMPT).unwrap();
        let dir = package(&root, "linked-agent", &[("agent.py", VALID_AGENT)]);
        std::os::unix::fs::symlink(&shared, dir.join("prompt.md")).unwrap();

        let config = LintConfig::default();
        let report = check_structure(&dir, &config);
        assert_eq!(report.failures().count(), 0);
        assert!(check_prompt(&dir, &config).passed());
    }

    #[test]
    fn test_structure_allows_documented_extras() {
        let root = TempDir::new().unwrap();
        let dir = package(
            &root,
            "good-agent",
            &[
                ("prompt.md", ""),
                ("agent.py", ""),
                ("README.md", ""),
                ("diagram.PNG", ""),
            ],
        );
        fs::create_dir(dir.join("assets")).unwrap();

        let report = check_structure(&dir, &LintConfig::default());
        assert!(report.passed());
        assert_eq!(report.warnings().count(), 0);
    }

    #[test]
    fn test_prompt_valid() {
        let mut report = GateReport::new(Gate::Prompt);
        check_prompt_content(VALID_PROMPT, "prompt.md", &mut report);
        assert!(report.passed());
        assert_eq!(report.warnings().count(), 0);
    }

    #[test]
    fn test_prompt_plain_field_labels_and_missing_sections() {
        let content = "name: a\nmodel: b\ndescription: c\n\n## Agent Prompt\n";
        let mut report = GateReport::new(Gate::Prompt);
        check_prompt_content(content, "prompt.md", &mut report);

        assert_eq!(
            report.failures().collect::<Vec<_>>(),
            vec![
                "Missing Agent Metadata section in prompt.md",
                "Missing Usage Examples section in prompt.md",
            ]
        );
        assert_eq!(
            report.warnings().collect::<Vec<_>>(),
            vec!["Usage examples should follow Context/User/Assistant/Commentary format"]
        );
    }

    #[test]
    fn test_prompt_missing_field() {
        let content = VALID_PROMPT.replace("**Model**: sonnet\n", "");
        let mut report = GateReport::new(Gate::Prompt);
        check_prompt_content(&content, "prompt.md", &mut report);
        assert_eq!(
            report.failures().collect::<Vec<_>>(),
            vec!["Missing 'model' metadata in prompt.md"]
        );
    }

    #[test]
    fn test_prompt_file_missing() {
        let root = TempDir::new().unwrap();
        let dir = package(&root, "a", &[]);
        let report = check_prompt(&dir, &LintConfig::default());
        assert_eq!(
            report.failures().collect::<Vec<_>>(),
            vec!["prompt.md file missing"]
        );
    }

    #[test]
    fn test_implementation_valid() {
        let mut syntax = PythonSyntax::new().unwrap();
        let mut report = GateReport::new(Gate::Implementation);
        check_implementation_content(VALID_AGENT, &mut syntax, &mut report);
        assert!(report.passed(), "{:?}", report);
        assert_eq!(report.warnings().count(), 0);
    }

    #[test]
    fn test_implementation_missing_entry_point() {
        let content = VALID_AGENT.replace("if __name__ == \"__main__\":\n    main()\n", "");
        let mut syntax = PythonSyntax::new().unwrap();
        let mut report = GateReport::new(Gate::Implementation);
        check_implementation_content(&content, &mut syntax, &mut report);
        assert_eq!(
            report.failures().collect::<Vec<_>>(),
            vec!["Missing main entry point"]
        );
    }

    #[test]
    fn test_implementation_help_is_warning_only() {
        let content = VALID_AGENT.replace(", help=\"Who to greet\"", "");
        let mut syntax = PythonSyntax::new().unwrap();
        let mut report = GateReport::new(Gate::Implementation);
        check_implementation_content(&content, &mut syntax, &mut report);
        assert!(report.passed());
        assert_eq!(
            report.warnings().collect::<Vec<_>>(),
            vec!["Should include help documentation"]
        );
    }

    #[test]
    fn test_implementation_syntax_error() {
        let content = format!("{}\ndef broken(:\n", VALID_AGENT);
        let mut syntax = PythonSyntax::new().unwrap();
        let mut report = GateReport::new(Gate::Implementation);
        check_implementation_content(&content, &mut syntax, &mut report);
        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        assert!(failures[0].starts_with("Python syntax error - "));
    }

    fn syntax_failures(content: &str) -> Vec<String> {
        let mut syntax = PythonSyntax::new().unwrap();
        let mut report = GateReport::new(Gate::Implementation);
        check_implementation_content(content, &mut syntax, &mut report);
        report.failures().map(str::to_string).collect()
    }

    #[test]
    fn test_implementation_bad_dedent() {
        let content = format!("{}\n\ndef helper():\n    x = 1\n  y = x\n", VALID_AGENT);
        assert_eq!(
            syntax_failures(&content),
            vec![
                "Python syntax error - unindent does not match any outer indentation level (line 21, column 2)"
            ]
        );
    }

    #[test]
    fn test_implementation_unexpected_indent() {
        let content = VALID_AGENT.replace("\nimport click\n", "\nimport click\n    import os\n");
        let failures = syntax_failures(&content);
        assert_eq!(failures.len(), 1);
        assert!(failures[0].starts_with("Python syntax error - unexpected indent"));
    }

    #[test]
    fn test_implementation_python2_print() {
        let content = VALID_AGENT.replace("    click.echo(name)\n", "    print 'x'\n");
        let failures = syntax_failures(&content);
        assert_eq!(failures.len(), 1);
        assert!(failures[0].starts_with("Python syntax error - Missing parentheses in call to 'print'"));
    }

    #[tokio::test]
    async fn test_quality_policy() {
        let root = TempDir::new().unwrap();
        let dir = package(&root, "a", &[("agent.py", VALID_AGENT)]);
        let tools: Vec<Box<dyn CodeTool>> = vec![
            Box::new(FixedTool(ToolOutcome::Conformant)),
            Box::new(FixedTool(ToolOutcome::Unavailable(
                "Could not run isort check".to_string(),
            ))),
        ];

        let report = check_quality(&dir, &LintConfig::default(), &tools).await;
        assert!(report.passed());
        assert_eq!(
            report.warnings().collect::<Vec<_>>(),
            vec!["Could not run isort check"]
        );

        let failing: Vec<Box<dyn CodeTool>> = vec![Box::new(FixedTool(
            ToolOutcome::NonConformant("Code not formatted with Black".to_string()),
        ))];
        let report = check_quality(&dir, &LintConfig::default(), &failing).await;
        assert!(!report.passed());
    }

    #[tokio::test]
    async fn test_quality_without_implementation_fails() {
        let root = TempDir::new().unwrap();
        let dir = package(&root, "a", &[]);
        let report = check_quality(&dir, &LintConfig::default(), &[]).await;
        assert!(!report.passed());
    }
}
