//! TOML score-sheet parser.
//!
//! Loads class test sessions from TOML files and directories, and validates
//! them before evaluation.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::evaluation::{FOUR_SECTION_MAX, JLPT_SECTION_MAX};
use crate::model::{RuleSet, SectionScores};

/// Intermediate TOML structure for score-sheet files.
#[derive(Debug, Deserialize)]
struct TomlSheetFile {
    sheet: TomlSheetHeader,
    #[serde(default)]
    students: Vec<TomlStudent>,
}

#[derive(Debug, Deserialize)]
struct TomlSheetHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    rule_set: String,
    #[serde(default)]
    level: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TomlStudent {
    id: String,
    name: String,
    scores: SectionScores,
}

/// A class test session: one rule set, many students.
#[derive(Debug, Clone)]
pub struct ScoreSheet {
    pub id: String,
    pub name: String,
    pub description: String,
    pub rule_set: RuleSet,
    pub students: Vec<StudentEntry>,
}

/// One student's row on a score sheet.
#[derive(Debug, Clone)]
pub struct StudentEntry {
    pub id: String,
    pub name: String,
    pub scores: SectionScores,
}

/// Parse a single TOML file into a `ScoreSheet`.
pub fn parse_score_sheet(path: &Path) -> Result<ScoreSheet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read score sheet: {}", path.display()))?;

    parse_score_sheet_str(&content, path)
}

/// Parse a TOML string into a `ScoreSheet` (useful for testing).
pub fn parse_score_sheet_str(content: &str, source_path: &Path) -> Result<ScoreSheet> {
    let parsed: TomlSheetFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let rule_set = RuleSet::from_tag(&parsed.sheet.rule_set, parsed.sheet.level.as_deref())
        .with_context(|| format!("invalid rule set in {}", source_path.display()))?;

    let students = parsed
        .students
        .into_iter()
        .map(|s| StudentEntry {
            id: s.id,
            name: s.name,
            scores: s.scores,
        })
        .collect();

    Ok(ScoreSheet {
        id: parsed.sheet.id,
        name: parsed.sheet.name,
        description: parsed.sheet.description,
        rule_set,
        students,
    })
}

/// Recursively load all `.toml` score sheets from a directory.
pub fn load_sheet_directory(dir: &Path) -> Result<Vec<ScoreSheet>> {
    let mut sheets = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            sheets.extend(load_sheet_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_score_sheet(&path) {
                Ok(sheet) => sheets.push(sheet),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(sheets)
}

/// A warning from score-sheet validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The student ID (if applicable).
    pub student_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a score sheet for common issues.
///
/// Warnings never block evaluation; the engine evaluates scores exactly as
/// given, so this is where suspicious input gets surfaced instead.
pub fn validate_score_sheet(sheet: &ScoreSheet) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Check for duplicate student IDs
    let mut seen_ids = std::collections::HashSet::new();
    for student in &sheet.students {
        if !seen_ids.insert(&student.id) {
            warnings.push(ValidationWarning {
                student_id: Some(student.id.clone()),
                message: format!("duplicate student ID: {}", student.id),
            });
        }
    }

    // Check for empty names
    for student in &sheet.students {
        if student.name.trim().is_empty() {
            warnings.push(ValidationWarning {
                student_id: Some(student.id.clone()),
                message: "student name is empty".into(),
            });
        }
    }

    let jlpt = matches!(sheet.rule_set, RuleSet::Jlpt(_));
    let section_max = if jlpt {
        JLPT_SECTION_MAX
    } else {
        FOUR_SECTION_MAX
    };

    for student in &sheet.students {
        let scores = &student.scores;
        let mut sections = vec![
            ("vocab", scores.vocab),
            ("grammar", scores.grammar),
            ("listening", scores.listening),
        ];
        if !jlpt {
            sections.push(("reading", scores.reading.unwrap_or(0)));
        }
        for (name, score) in sections {
            if score > section_max {
                warnings.push(ValidationWarning {
                    student_id: Some(student.id.clone()),
                    message: format!(
                        "{name} score {score} exceeds the section maximum of {section_max}"
                    ),
                });
            }
        }

        if jlpt && scores.reading.is_some() {
            warnings.push(ValidationWarning {
                student_id: Some(student.id.clone()),
                message: "reading score is ignored on jlpt sheets (merged into grammar)".into(),
            });
        }
        if !jlpt && scores.reading.is_none() {
            warnings.push(ValidationWarning {
                student_id: Some(student.id.clone()),
                message: "reading score missing; it will be evaluated as 0".into(),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::JlptLevel;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[sheet]
id = "n5-mock-03"
name = "N5 Mock Exam 3"
description = "Third practice run"
rule_set = "jlpt"
level = "N5"

[[students]]
id = "sv001"
name = "Nguyen Van An"

[students.scores]
vocab = 38
grammar = 41
listening = 30

[[students]]
id = "sv002"
name = "Tran Thi Binh"

[students.scores]
vocab = 22
grammar = 35
listening = 17
"#;

    #[test]
    fn parse_valid_toml() {
        let sheet = parse_score_sheet_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(sheet.id, "n5-mock-03");
        assert_eq!(sheet.rule_set, RuleSet::Jlpt(JlptLevel::N5));
        assert_eq!(sheet.students.len(), 2);
        assert_eq!(sheet.students[0].scores.vocab, 38);
        assert_eq!(sheet.students[1].scores.reading, None);
    }

    #[test]
    fn parse_four_section_sheet() {
        let toml = r#"
[sheet]
id = "week4"
name = "Week 4 Lesson Test"
rule_set = "lesson"

[[students]]
id = "sv001"
name = "Le Van Cuong"

[students.scores]
vocab = 20
grammar = 18
reading = 15
listening = 17
"#;
        let sheet = parse_score_sheet_str(toml, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(sheet.rule_set, RuleSet::Lesson);
        assert_eq!(sheet.description, "");
        assert_eq!(sheet.students[0].scores.reading, Some(15));
    }

    #[test]
    fn jlpt_sheet_without_level_fails() {
        let toml = r#"
[sheet]
id = "x"
name = "X"
rule_set = "jlpt"
"#;
        let err = parse_score_sheet_str(toml, &PathBuf::from("test.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("requires a level"));
    }

    #[test]
    fn unknown_rule_set_fails() {
        let toml = r#"
[sheet]
id = "x"
name = "X"
rule_set = "midterm"
"#;
        assert!(parse_score_sheet_str(toml, &PathBuf::from("test.toml")).is_err());
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        assert!(parse_score_sheet_str(bad, &PathBuf::from("bad.toml")).is_err());
    }

    #[test]
    fn validate_duplicate_ids() {
        let toml = r#"
[sheet]
id = "dupes"
name = "Dupes"
rule_set = "jlpt"
level = "N4"

[[students]]
id = "same"
name = "First"

[students.scores]
vocab = 30
grammar = 30
listening = 30

[[students]]
id = "same"
name = "Second"

[students.scores]
vocab = 30
grammar = 30
listening = 30
"#;
        let sheet = parse_score_sheet_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_score_sheet(&sheet);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate")));
    }

    #[test]
    fn validate_score_above_section_max() {
        let toml = r#"
[sheet]
id = "hot"
name = "Hot"
rule_set = "lesson"

[[students]]
id = "sv001"
name = "An"

[students.scores]
vocab = 30
grammar = 18
reading = 15
listening = 17
"#;
        let sheet = parse_score_sheet_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_score_sheet(&sheet);
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("vocab score 30 exceeds")));
    }

    #[test]
    fn validate_reading_on_jlpt_sheet() {
        let toml = r#"
[sheet]
id = "x"
name = "X"
rule_set = "jlpt"
level = "N5"

[[students]]
id = "sv001"
name = "An"

[students.scores]
vocab = 30
grammar = 30
reading = 20
listening = 30
"#;
        let sheet = parse_score_sheet_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_score_sheet(&sheet);
        assert!(warnings.iter().any(|w| w.message.contains("ignored")));
    }

    #[test]
    fn validate_missing_reading_on_lesson_sheet() {
        let toml = r#"
[sheet]
id = "x"
name = "X"
rule_set = "lesson"

[[students]]
id = "sv001"
name = "An"

[students.scores]
vocab = 20
grammar = 18
listening = 17
"#;
        let sheet = parse_score_sheet_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_score_sheet(&sheet);
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("reading score missing")));
    }

    #[test]
    fn valid_sheet_has_no_warnings() {
        let sheet = parse_score_sheet_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        assert!(validate_score_sheet(&sheet).is_empty());
    }

    #[test]
    fn load_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("mock.toml"), VALID_TOML).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a sheet").unwrap();
        std::fs::write(dir.path().join("broken.toml"), "not [valid").unwrap();

        let sheets = load_sheet_directory(dir.path()).unwrap();
        assert_eq!(sheets.len(), 1);
        assert_eq!(sheets[0].id, "n5-mock-03");
    }

    #[test]
    fn load_directory_rejects_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("mock.toml");
        std::fs::write(&file, VALID_TOML).unwrap();
        assert!(load_sheet_directory(&file).is_err());
    }
}
