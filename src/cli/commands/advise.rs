//! TAC Advisor Command
//!
//! Analyze a candidate project and print a voting recommendation.
//!
//! Usage:
//!   dotagents tac-advisor <PROJECT_NAME> <REPOSITORY_URL> [-d DESC] [-c CTX] [-o DIR]

use chrono::Local;
use std::path::PathBuf;
use tracing::info;

use crate::advisor::{
    HealthScorer, ProjectAnalyzer, RecommendationAssembler, ReportWriter, VotingRecommendation,
};
use crate::cli::ui::{Output, report};
use crate::config::{ConfigLoader, GithubConfig};
use crate::github::GitHubClient;
use crate::types::{AgentError, Result};

pub struct AdviseOptions {
    pub project_name: String,
    pub repository_url: String,
    pub description: Option<String>,
    pub context: Option<String>,
    pub output: Option<PathBuf>,
    pub github_token: Option<String>,
    pub save: bool,
}

pub async fn run(options: AdviseOptions) -> Result<()> {
    let config = ConfigLoader::load()?;
    let out = Output::new();

    let assembler = RecommendationAssembler::from_config(&config.advisor);
    let analyzer = ProjectAnalyzer::new(
        github_client(config.github, options.github_token.clone()),
        HealthScorer::new(
            config.advisor.recent_window_days,
            config.advisor.recent_commit_sample,
        ),
    );

    out.info(&format!("Analyzing {}...", options.project_name));
    let description = options.description.as_deref().unwrap_or_default();

    let analysis = tokio::select! {
        analysis = analyzer.analyze(&options.project_name, &options.repository_url, description) => analysis?,
        _ = tokio::signal::ctrl_c() => return Err(AgentError::Interrupted),
    };

    let recommendation = assembler.assemble(&analysis, options.context.as_deref());
    report::render_recommendation(
        &out,
        &recommendation,
        assembler.analyst(),
        assembler.consultant(),
    );

    if options.save {
        let dir = options.output.unwrap_or(config.advisor.output_dir);
        save(&out, &ReportWriter::new(dir), &recommendation, assembler.analyst())?;
    } else {
        info!("Skipping report persistence (--no-save)");
    }

    Ok(())
}

fn github_client(config: GithubConfig, token: Option<String>) -> GitHubClient {
    let token = token.filter(|t| !t.trim().is_empty());
    if token.is_none() {
        info!("No GitHub token configured; using unauthenticated rate limits");
    }
    GitHubClient::new(config, token)
}

fn save(
    out: &Output,
    writer: &ReportWriter,
    recommendation: &VotingRecommendation,
    analyst: &str,
) -> Result<()> {
    let path = writer.save(recommendation, analyst, Local::now())?;
    println!();
    out.success(&format!("Analysis saved to: {}", path.display()));
    Ok(())
}
