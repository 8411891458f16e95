//! Pass/fail evaluation engine.
//!
//! Classifies a set of section scores under a named rule set and explains
//! the verdict with per-section diagnostics. Pure functions throughout:
//! out-of-range scores are evaluated as-is, never rejected or clamped.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{JlptLevel, RuleSet, SectionScores};

/// Section maximum for the four-section rule sets.
pub const FOUR_SECTION_MAX: u32 = 25;
/// Total score required to pass a four-section test.
pub const FOUR_SECTION_TOTAL_MIN: u32 = 70;
/// Section maximum for JLPT-style tests.
pub const JLPT_SECTION_MAX: u32 = 60;
/// Per-section minimum for JLPT, the same at every level.
pub const JLPT_SECTION_MIN: u32 = 19;

impl JlptLevel {
    /// Total score required to pass at this level.
    pub fn total_threshold(self) -> u32 {
        match self {
            JlptLevel::N5 => 80,
            JlptLevel::N4 => 90,
            JlptLevel::N3 => 95,
            JlptLevel::N2 => 90,
            JlptLevel::N1 => 100,
        }
    }
}

/// Verdict for one student's scores under one rule set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub passed: bool,
    pub total_score: u32,
    pub total_max_score: u32,
    /// Comma-joined fragments for each failed check; empty when passed.
    pub reason: String,
    /// Per-section breakdown, keyed by section name.
    pub details: BTreeMap<String, SectionDetail>,
}

/// One section's score against its own threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDetail {
    pub score: u32,
    pub max: u32,
    pub passed: bool,
}

/// Evaluate `scores` under `rule_set`.
///
/// Checks run in a fixed order — total, vocab, grammar, reading (four-section
/// rule sets only), listening — and every failed check contributes one
/// fragment to `reason`. `passed` is true iff every check passed.
pub fn evaluate(rule_set: RuleSet, scores: &SectionScores) -> Evaluation {
    match rule_set {
        RuleSet::Jlpt(level) => evaluate_jlpt(level, scores),
        RuleSet::Lesson | RuleSet::Comprehensive | RuleSet::General => {
            evaluate_four_section(scores)
        }
    }
}

fn evaluate_four_section(scores: &SectionScores) -> Evaluation {
    let reading = scores.reading.unwrap_or(0);
    let total = scores.vocab + scores.grammar + reading + scores.listening;

    let sections = [
        ("vocab", "Vocabulary", scores.vocab),
        ("grammar", "Grammar", scores.grammar),
        ("reading", "Reading", reading),
        ("listening", "Listening", scores.listening),
    ];

    let mut reasons = Vec::new();
    if total < FOUR_SECTION_TOTAL_MIN {
        reasons.push(format!(
            "total score {total} below the required {FOUR_SECTION_TOTAL_MIN}"
        ));
    }

    let mut details = BTreeMap::new();
    for (key, label, score) in sections {
        // Exact integer compare: a tie at half the max passes, no rounding.
        let section_ok = 2 * score >= FOUR_SECTION_MAX;
        if !section_ok {
            reasons.push(format!("{label} below half of its maximum"));
        }
        details.insert(
            key.to_string(),
            SectionDetail {
                score,
                max: FOUR_SECTION_MAX,
                passed: section_ok,
            },
        );
    }

    Evaluation {
        passed: reasons.is_empty(),
        total_score: total,
        total_max_score: 4 * FOUR_SECTION_MAX,
        reason: reasons.join(", "),
        details,
    }
}

fn evaluate_jlpt(level: JlptLevel, scores: &SectionScores) -> Evaluation {
    // Reading is merged into grammar upstream and carries no section of
    // its own here.
    let total = scores.vocab + scores.grammar + scores.listening;
    let threshold = level.total_threshold();

    let sections = [
        ("vocab", "Vocabulary", scores.vocab),
        ("grammar", "Grammar", scores.grammar),
        ("listening", "Listening", scores.listening),
    ];

    let mut reasons = Vec::new();
    if total < threshold {
        reasons.push(format!(
            "total score {total} below the {level} requirement of {threshold}"
        ));
    }

    let mut details = BTreeMap::new();
    for (key, label, score) in sections {
        let section_ok = score >= JLPT_SECTION_MIN;
        if !section_ok {
            reasons.push(format!(
                "{label} below the section minimum of {JLPT_SECTION_MIN}"
            ));
        }
        details.insert(
            key.to_string(),
            SectionDetail {
                score,
                max: JLPT_SECTION_MAX,
                passed: section_ok,
            },
        );
    }

    Evaluation {
        passed: reasons.is_empty(),
        total_score: total,
        total_max_score: 3 * JLPT_SECTION_MAX,
        reason: reasons.join(", "),
        details,
    }
}
