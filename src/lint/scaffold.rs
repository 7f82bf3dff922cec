//! New agent package scaffolding from built-in templates.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::gates::is_kebab_case;
use crate::config::LintConfig;
use crate::types::{AgentError, Result};

const PROMPT_TEMPLATE: &str = include_str!("templates/prompt.md");
const AGENT_TEMPLATE: &str = include_str!("templates/agent.py");

const DEFAULT_DESCRIPTION: &str = "Describe what this agent does and the value it provides.";

/// Placeholder values for one package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentTemplate {
    pub name: String,
    pub title: String,
    pub class_name: String,
    pub description: String,
}

impl AgentTemplate {
    pub fn new(name: &str, description: Option<&str>) -> Result<Self> {
        if !is_kebab_case(name) {
            return Err(AgentError::InvalidInput(format!(
                "Agent name '{}' should use kebab-case",
                name
            )));
        }

        let words: Vec<String> = name.split('-').map(capitalize).collect();
        let description = description
            .map(|d| d.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

        Ok(Self {
            name: name.to_string(),
            title: words.join(" "),
            class_name: format!("{}Agent", words.concat()),
            description,
        })
    }

    pub fn render_prompt(&self) -> String {
        self.render(PROMPT_TEMPLATE, &self.description)
    }

    pub fn render_agent(&self) -> String {
        // Keep the description from closing the docstring
        self.render(AGENT_TEMPLATE, &self.description.replace('"', "'"))
    }

    fn render(&self, template: &str, description: &str) -> String {
        template
            .replace("{{name}}", &self.name)
            .replace("{{title}}", &self.title)
            .replace("{{class_name}}", &self.class_name)
            .replace("{{description}}", description)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Create `<agents_dir>/<name>/` with a prompt document and implementation.
///
/// Never overwrites an existing package.
pub fn create_agent(
    agents_dir: &Path,
    config: &LintConfig,
    template: &AgentTemplate,
) -> Result<PathBuf> {
    let dir = agents_dir.join(&template.name);
    if dir.exists() {
        return Err(AgentError::InvalidInput(format!(
            "Agent package already exists: {}",
            dir.display()
        )));
    }

    fs::create_dir_all(&dir)?;
    fs::write(dir.join(&config.prompt_file), template.render_prompt())?;
    fs::write(dir.join(&config.implementation_file), template.render_agent())?;

    info!("Created agent package {}", dir.display());
    Ok(dir)
}
