//! Evaluation report types with JSON persistence and baseline comparison.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::evaluation::{evaluate, Evaluation};
use crate::model::RuleSet;
use crate::parser::ScoreSheet;

/// Evaluated results for one score sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Summary of the evaluated sheet.
    pub sheet: SheetSummary,
    /// Rule set the sheet was evaluated under.
    pub rule_set: RuleSet,
    /// Per-student verdicts, in sheet order.
    pub results: Vec<StudentResult>,
    pub passed_count: usize,
    pub failed_count: usize,
}

/// Summary of a score sheet (without the raw scores).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetSummary {
    pub id: String,
    pub name: String,
    pub student_count: usize,
}

/// One student's verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentResult {
    pub student_id: String,
    pub name: String,
    pub evaluation: Evaluation,
}

impl EvaluationReport {
    /// Evaluate every student on the sheet.
    pub fn from_sheet(sheet: &ScoreSheet) -> Self {
        let results: Vec<StudentResult> = sheet
            .students
            .iter()
            .map(|student| StudentResult {
                student_id: student.id.clone(),
                name: student.name.clone(),
                evaluation: evaluate(sheet.rule_set, &student.scores),
            })
            .collect();

        let passed_count = results.iter().filter(|r| r.evaluation.passed).count();
        let failed_count = results.len() - passed_count;

        EvaluationReport {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            sheet: SheetSummary {
                id: sheet.id.clone(),
                name: sheet.name.clone(),
                student_count: sheet.students.len(),
            },
            rule_set: sheet.rule_set,
            results,
            passed_count,
            failed_count,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: EvaluationReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Compare this report against an earlier one of the same cohort
    /// (e.g. the previous mock exam), keyed by student id.
    pub fn compare(&self, baseline: &EvaluationReport) -> ProgressReport {
        use std::collections::{HashMap, HashSet};

        let baseline_map: HashMap<&str, &StudentResult> = baseline
            .results
            .iter()
            .map(|r| (r.student_id.as_str(), r))
            .collect();

        let mut dropped = Vec::new();
        let mut improved = Vec::new();
        let mut unchanged = 0usize;
        let mut new_students = 0usize;

        for current in &self.results {
            let Some(base) = baseline_map.get(current.student_id.as_str()) else {
                new_students += 1;
                continue;
            };

            let transition = Transition {
                student_id: current.student_id.clone(),
                name: current.name.clone(),
                baseline_total: base.evaluation.total_score,
                current_total: current.evaluation.total_score,
            };
            match (base.evaluation.passed, current.evaluation.passed) {
                (true, false) => dropped.push(transition),
                (false, true) => improved.push(transition),
                _ => unchanged += 1,
            }
        }

        let current_ids: HashSet<&str> = self
            .results
            .iter()
            .map(|r| r.student_id.as_str())
            .collect();
        let removed_students = baseline
            .results
            .iter()
            .filter(|r| !current_ids.contains(r.student_id.as_str()))
            .count();

        ProgressReport {
            dropped,
            improved,
            unchanged,
            new_students,
            removed_students,
        }
    }
}

/// Result of comparing two reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Students who passed the baseline but fail now.
    pub dropped: Vec<Transition>,
    /// Students who failed the baseline but pass now.
    pub improved: Vec<Transition>,
    /// Students whose verdict did not change.
    pub unchanged: usize,
    /// Students in the current report but not the baseline.
    pub new_students: usize,
    /// Students in the baseline but not the current report.
    pub removed_students: usize,
}

/// A verdict change for one student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transition {
    pub student_id: String,
    pub name: String,
    pub baseline_total: u32,
    pub current_total: u32,
}

impl ProgressReport {
    /// Format the comparison as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "**Summary:** {} dropped to fail, {} newly passing, {} unchanged\n\n",
            self.dropped.len(),
            self.improved.len(),
            self.unchanged
        ));

        if !self.dropped.is_empty() {
            md.push_str("### Dropped to fail\n\n");
            md.push_str("| Student | Baseline | Current |\n");
            md.push_str("|---------|----------|--------|\n");
            for t in &self.dropped {
                md.push_str(&format!(
                    "| {} | {} | {} |\n",
                    t.name, t.baseline_total, t.current_total
                ));
            }
            md.push('\n');
        }

        if !self.improved.is_empty() {
            md.push_str("### Newly passing\n\n");
            md.push_str("| Student | Baseline | Current |\n");
            md.push_str("|---------|----------|--------|\n");
            for t in &self.improved {
                md.push_str(&format!(
                    "| {} | {} | {} |\n",
                    t.name, t.baseline_total, t.current_total
                ));
            }
        }

        md
    }

    /// Returns true if any student dropped from pass to fail.
    pub fn has_drops(&self) -> bool {
        !self.dropped.is_empty()
    }
}
