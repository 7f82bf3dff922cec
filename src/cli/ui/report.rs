//! Console rendering of recommendations and lint runs.

use console::{Color, style};

use super::output::Output;
use crate::advisor::{Decision, VotingRecommendation};
use crate::lint::{FixOutcome, Gate, LintReport, LintResult};

pub fn decision_color(decision: Decision) -> Color {
    match decision {
        Decision::Approve => Color::Green,
        Decision::Reject => Color::Red,
        Decision::Abstain => Color::Yellow,
    }
}

/// Decision panel, key factors, summary, alignment and consultation
pub fn render_recommendation(
    out: &Output,
    recommendation: &VotingRecommendation,
    analyst: &str,
    consultant: &str,
) {
    let color = decision_color(recommendation.decision);
    let decision = format!(
        "Project:    {}\nDecision:   {}\nConfidence: {}\nAnalyst:    {}",
        recommendation.project_name,
        style(recommendation.decision).fg(color).bold(),
        recommendation.confidence,
        analyst
    );
    println!();
    out.panel("TAC Voting Recommendation", &decision, color);

    let rows: Vec<Vec<String>> = recommendation
        .key_factors
        .iter()
        .enumerate()
        .map(|(i, factor)| vec![(i + 1).to_string(), factor.clone()])
        .collect();
    out.table("Key Factors", &["#", "Factor"], &rows);

    out.section("Executive Summary");
    println!("{}", recommendation.executive_summary.trim_end());
    println!();

    let alignment = format!(
        "{}\n\n{}",
        recommendation.red_hat_alignment.trim_end(),
        recommendation.ibm_alignment.trim_end()
    );
    out.panel("Strategic Alignment", &alignment, Color::Blue);
    println!();

    out.panel(
        &format!("{} Consultation", consultant),
        &recommendation.consultation_notes,
        Color::Magenta,
    );
}

pub fn status_cell(passed: bool) -> String {
    if passed {
        "✅ Pass".to_string()
    } else {
        "❌ Fail".to_string()
    }
}

/// One table row per package: name, each gate, overall
pub fn lint_row(result: &LintResult) -> Vec<String> {
    let mut row = Vec::with_capacity(Gate::ALL.len() + 2);
    row.push(result.agent.clone());
    row.extend(result.gates().iter().map(|g| status_cell(g.passed())));
    row.push(status_cell(result.passed()));
    row
}

pub fn render_fix_outcomes(out: &Output, outcomes: &[FixOutcome]) {
    for outcome in outcomes {
        match &outcome.result {
            Ok(()) => out.success(&format!("Fixed formatting for {}", outcome.agent)),
            Err(e) => out.warning(&format!("Could not fix {}: {}", outcome.agent, e)),
        }
    }
}

pub fn render_lint_report(out: &Output, report: &LintReport, verbose: bool) {
    if let Some(issue) = &report.issue {
        if issue.is_error() {
            out.error(&issue.to_string());
        } else {
            out.warning(&issue.to_string());
        }
    }

    if !report.results.is_empty() {
        let mut headers = vec!["Agent"];
        headers.extend(Gate::ALL.iter().map(Gate::label));
        headers.push("Overall");

        let rows: Vec<Vec<String>> = report.results.iter().map(lint_row).collect();
        out.table("Agent Lint Results", &headers, &rows);
    }

    if verbose {
        for result in &report.results {
            out.section(&result.agent);
            for gate in result.gates() {
                println!("  {:<15} {}", gate.gate.label(), status_cell(gate.passed()));
                for message in gate.failures() {
                    println!("    {} {}", style("✗").red(), message);
                }
                for message in gate.warnings() {
                    println!("    {} {}", style("⚠").yellow(), message);
                }
            }
        }
    }

    let errors = report.errors();
    if !errors.is_empty() {
        println!("\n{}", style("Errors:").red().bold());
        for error in &errors {
            println!("  • {}", error);
        }
    }

    let warnings = report.warnings();
    if !warnings.is_empty() {
        println!("\n{}", style("Warnings:").yellow().bold());
        for warning in &warnings {
            println!("  • {}", warning);
        }
    }

    println!();
    if report.passed() {
        println!("{}", style("🎉 All checks passed!").green().bold());
    } else {
        println!("{}", style("💥 Linting failed!").red().bold());
    }
}
