//! Markdown persistence of voting recommendations.

use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::recommendation::VotingRecommendation;
use crate::constants::report;
use crate::types::{AgentError, Result, sanitize_file_stem};

/// Writes one markdown document per run into an output directory
#[derive(Debug, Clone)]
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// `<output>/<sanitized project name>_<YYYYMMDD_HHMMSS>.md`
    pub fn report_path(&self, project_name: &str, now: DateTime<Local>) -> PathBuf {
        let stem = sanitize_file_stem(project_name);
        let stamp = now.format(report::FILE_TIMESTAMP_FORMAT);
        self.output_dir.join(format!("{}_{}.md", stem, stamp))
    }

    /// Render the persisted document layout
    pub fn render_document(
        recommendation: &VotingRecommendation,
        analyst: &str,
        generated: DateTime<Local>,
    ) -> String {
        let mut doc = String::with_capacity(recommendation.executive_summary.len() * 2);
        doc.push_str(&recommendation.executive_summary);
        doc.push_str("\n\n## Strategic Alignment Details\n\n");
        doc.push_str(&recommendation.red_hat_alignment);
        doc.push_str("\n\n");
        doc.push_str(&recommendation.ibm_alignment);
        doc.push_str("\n\n## IBM Research Consultation\n\n");
        doc.push_str(&recommendation.consultation_notes);
        doc.push_str("\n\n## Analysis Metadata\n\n");
        doc.push_str(&format!("- **Generated**: {}\n", generated.to_rfc3339()));
        doc.push_str(&format!("- **Analyst**: {}\n", analyst));
        doc.push_str(&format!("- **Recommendation**: {}\n", recommendation.decision));
        doc.push_str(&format!("- **Confidence**: {}\n", recommendation.confidence));
        doc
    }

    /// Save the recommendation, creating the output directory if needed
    pub fn save(
        &self,
        recommendation: &VotingRecommendation,
        analyst: &str,
        now: DateTime<Local>,
    ) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)
            .map_err(|e| AgentError::persistence(&self.output_dir, e))?;

        let path = self.report_path(&recommendation.project_name, now);
        debug!("Writing report to {}", path.display());

        let document = Self::render_document(recommendation, analyst, now);
        fs::write(&path, document).map_err(|e| AgentError::persistence(&path, e))?;

        info!("Analysis saved to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::recommendation::{Confidence, Decision};
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn recommendation(name: &str) -> VotingRecommendation {
        VotingRecommendation {
            project_name: name.to_string(),
            decision: Decision::Abstain,
            confidence: Confidence::Medium,
            executive_summary: "# Summary".to_string(),
            key_factors: vec![],
            red_hat_alignment: "**Red Hat Strategic Alignment:**\n".to_string(),
            ibm_alignment: "**IBM Strategic Alignment:**\n".to_string(),
            consultation_notes: "**Consultation Notes**".to_string(),
        }
    }

    fn at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 4, 5, 6, 7).unwrap()
    }

    #[test]
    fn test_report_path_is_sanitized() {
        let writer = ReportWriter::new("/out");
        let path = writer.report_path("My Project/v2", at());
        assert_eq!(path, PathBuf::from("/out/My_Project_v2_20250304_050607.md"));
    }

    #[test]
    fn test_render_document_layout() {
        let doc = ReportWriter::render_document(&recommendation("P"), "Analyst", at());
        let order = [
            "# Summary",
            "## Strategic Alignment Details",
            "**Red Hat Strategic Alignment:**",
            "**IBM Strategic Alignment:**",
            "## IBM Research Consultation",
            "**Consultation Notes**",
            "## Analysis Metadata",
            "- **Analyst**: Analyst\n",
            "- **Recommendation**: ABSTAIN\n",
            "- **Confidence**: MEDIUM\n",
        ];
        let mut cursor = 0;
        for part in order {
            let pos = doc[cursor..].find(part).expect(part);
            cursor += pos + part.len();
        }
        assert!(doc.contains("- **Generated**: 2025-03-04T05:06:07"));
    }

    #[test]
    fn test_save_creates_directory() {
        let temp = TempDir::new().unwrap();
        let writer = ReportWriter::new(temp.path().join("nested/analysis"));

        let path = writer.save(&recommendation("Engine"), "A", at()).unwrap();

        assert!(path.exists());
        assert_eq!(path.file_name().unwrap(), "Engine_20250304_050607.md");
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Summary"));
    }

    #[test]
    fn test_unwritable_location_is_persistence_error() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("file");
        fs::write(&blocker, "not a directory").unwrap();

        let writer = ReportWriter::new(blocker.join("analysis"));
        let err = writer.save(&recommendation("P"), "A", at()).unwrap_err();
        assert!(matches!(err, AgentError::Persistence { .. }));
    }
}
