//! Core data model types for seiseki.
//!
//! These are the fundamental types the rest of the system passes around:
//! rule sets and section scores for the evaluation engine, and tasks for
//! the timeline projector.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A named family of pass/fail thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSet {
    /// End-of-lesson test: four sections of 25 points each.
    Lesson,
    /// Comprehensive test, same shape as `Lesson`.
    Comprehensive,
    /// General placement test, same shape as `Lesson`.
    General,
    /// JLPT mock exam: three sections of 60 points, level-dependent total.
    Jlpt(JlptLevel),
}

impl RuleSet {
    /// Build a rule set from a textual tag plus an optional level.
    ///
    /// The level is required for `"jlpt"` and ignored for every other tag.
    pub fn from_tag(tag: &str, level: Option<&str>) -> Result<Self, ParseError> {
        match tag.to_lowercase().as_str() {
            "lesson" => Ok(RuleSet::Lesson),
            "comprehensive" => Ok(RuleSet::Comprehensive),
            "general" => Ok(RuleSet::General),
            "jlpt" => {
                let level = level.ok_or(ParseError::MissingLevel)?;
                Ok(RuleSet::Jlpt(level.parse()?))
            }
            other => Err(ParseError::UnknownRuleSet(other.to_string())),
        }
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleSet::Lesson => write!(f, "lesson"),
            RuleSet::Comprehensive => write!(f, "comprehensive"),
            RuleSet::General => write!(f, "general"),
            RuleSet::Jlpt(level) => write!(f, "jlpt {level}"),
        }
    }
}

/// JLPT certification levels, hardest last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JlptLevel {
    N5,
    N4,
    N3,
    N2,
    N1,
}

impl fmt::Display for JlptLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JlptLevel::N5 => write!(f, "N5"),
            JlptLevel::N4 => write!(f, "N4"),
            JlptLevel::N3 => write!(f, "N3"),
            JlptLevel::N2 => write!(f, "N2"),
            JlptLevel::N1 => write!(f, "N1"),
        }
    }
}

impl FromStr for JlptLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "n5" => Ok(JlptLevel::N5),
            "n4" => Ok(JlptLevel::N4),
            "n3" => Ok(JlptLevel::N3),
            "n2" => Ok(JlptLevel::N2),
            "n1" => Ok(JlptLevel::N1),
            other => Err(ParseError::UnknownLevel(other.to_string())),
        }
    }
}

/// Raw section scores for one student on one test.
///
/// The engine evaluates these exactly as given: no clamping, no range
/// checks. Callers own input sanity.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SectionScores {
    pub vocab: u32,
    pub grammar: u32,
    /// Absent on JLPT-style sheets, where reading is merged into grammar.
    #[serde(default)]
    pub reading: Option<u32>,
    pub listening: u32,
}

/// A unit of work on the staff task board.
///
/// Owned by whichever screen loads it; the timeline projector only reads
/// tasks, never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub assignee_id: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Completion reported by the assignee. The timeline projector ignores
    /// this; its estimate is elapsed-time only.
    #[serde(default)]
    pub progress: Option<u8>,
    pub created_at: NaiveDate,
    #[serde(default)]
    pub report: Option<TaskReport>,
}

/// Completion report filed by the assignee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskReport {
    pub completed_at: NaiveDate,
    pub content: String,
}

/// Task lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    Accepted,
    InProgress,
    Completed,
    Verified,
    NotStarted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_set_from_tag() {
        assert_eq!(RuleSet::from_tag("lesson", None).unwrap(), RuleSet::Lesson);
        assert_eq!(
            RuleSet::from_tag("General", None).unwrap(),
            RuleSet::General
        );
        assert_eq!(
            RuleSet::from_tag("jlpt", Some("N5")).unwrap(),
            RuleSet::Jlpt(JlptLevel::N5)
        );
        // level is ignored for non-jlpt rule sets
        assert_eq!(
            RuleSet::from_tag("lesson", Some("N5")).unwrap(),
            RuleSet::Lesson
        );
        assert_eq!(
            RuleSet::from_tag("jlpt", None),
            Err(ParseError::MissingLevel)
        );
        assert!(matches!(
            RuleSet::from_tag("midterm", None),
            Err(ParseError::UnknownRuleSet(_))
        ));
    }

    #[test]
    fn jlpt_level_display_and_parse() {
        assert_eq!(JlptLevel::N5.to_string(), "N5");
        assert_eq!("n3".parse::<JlptLevel>().unwrap(), JlptLevel::N3);
        assert_eq!("N1".parse::<JlptLevel>().unwrap(), JlptLevel::N1);
        assert!("n6".parse::<JlptLevel>().is_err());
    }

    #[test]
    fn section_scores_reading_defaults_to_none() {
        let scores: SectionScores =
            serde_json::from_str(r#"{"vocab": 30, "grammar": 40, "listening": 25}"#).unwrap();
        assert_eq!(scores.reading, None);
        assert_eq!(scores.grammar, 40);
    }

    #[test]
    fn task_serde_roundtrip() {
        let task = Task {
            id: "task-1".into(),
            title: "Draft N5 vocabulary quiz".into(),
            description: String::new(),
            assignee_id: Some("gv01".into()),
            status: TaskStatus::InProgress,
            priority: TaskPriority::High,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 10),
            due_date: NaiveDate::from_ymd_opt(2024, 1, 14),
            progress: Some(40),
            created_at: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
            report: None,
        };
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"in_progress\""));
        let deserialized: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.status, TaskStatus::InProgress);
        assert_eq!(deserialized.due_date, task.due_date);
    }

    #[test]
    fn task_optional_fields_default() {
        let json = r#"{
            "id": "t",
            "title": "Grade homework",
            "status": "pending",
            "priority": "low",
            "created_at": "2024-01-09"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert!(task.start_date.is_none());
        assert!(task.due_date.is_none());
        assert!(task.report.is_none());
        assert_eq!(task.description, "");
    }
}
