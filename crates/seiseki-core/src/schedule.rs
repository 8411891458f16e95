//! Schedule descriptor codec.
//!
//! Round-trips between the compact display form of a class schedule
//! (`"T2 - Tiết 3, T4 - Tiết 5"`) and a structured, editable list of
//! day/period entries.
//!
//! Parsing is an ordered strategy rather than one combined matcher, so the
//! fallback semantics stay auditable:
//! 1. canonical per-segment form — one `<day> - Tiết <n>` per comma segment;
//! 2. legacy combined-day form over the whole original string
//!    (`"T2, T4, T6 - Tiết 1"`) — one entry per day, all sharing the slot;
//! 3. a single empty placeholder row.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ParseError;

/// Weekday tokens as they appear in schedule strings.
///
/// `T2`..`T7` are Monday through Saturday, `CN` is Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    T2,
    T3,
    T4,
    T5,
    T6,
    T7,
    CN,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::T2,
        Weekday::T3,
        Weekday::T4,
        Weekday::T5,
        Weekday::T6,
        Weekday::T7,
        Weekday::CN,
    ];

    /// Full Vietnamese display name.
    pub fn label(self) -> &'static str {
        match self {
            Weekday::T2 => "Thứ 2",
            Weekday::T3 => "Thứ 3",
            Weekday::T4 => "Thứ 4",
            Weekday::T5 => "Thứ 5",
            Weekday::T6 => "Thứ 6",
            Weekday::T7 => "Thứ 7",
            Weekday::CN => "Chủ nhật",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Weekday::T2 => "T2",
            Weekday::T3 => "T3",
            Weekday::T4 => "T4",
            Weekday::T5 => "T5",
            Weekday::T6 => "T6",
            Weekday::T7 => "T7",
            Weekday::CN => "CN",
        };
        write!(f, "{token}")
    }
}

impl FromStr for Weekday {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "t2" => Ok(Weekday::T2),
            "t3" => Ok(Weekday::T3),
            "t4" => Ok(Weekday::T4),
            "t5" => Ok(Weekday::T5),
            "t6" => Ok(Weekday::T6),
            "t7" => Ok(Weekday::T7),
            "cn" => Ok(Weekday::CN),
            other => Err(ParseError::UnknownWeekday(other.to_string())),
        }
    }
}

/// One editable schedule row.
///
/// The id is opaque, used only for row keying in editing UIs; it never
/// appears in the serialized form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: Uuid,
    pub day: Option<Weekday>,
    pub slot: Option<u32>,
}

impl ScheduleEntry {
    pub fn new(day: Weekday, slot: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            day: Some(day),
            slot: Some(slot),
        }
    }

    /// An empty row for the UI to fill in.
    pub fn placeholder() -> Self {
        Self {
            id: Uuid::new_v4(),
            day: None,
            slot: None,
        }
    }

    /// Complete entries are the only ones that serialize.
    pub fn is_complete(&self) -> bool {
        self.day.is_some() && self.slot.is_some()
    }
}

/// The keyword between day and period number, matched case-insensitively.
const PERIOD_KEYWORD: &str = "tiết";

/// Strip `keyword` from the start of `s`, ignoring case.
fn strip_keyword<'a>(s: &'a str, keyword: &str) -> Option<&'a str> {
    let mut chars = s.char_indices();
    for expected in keyword.chars() {
        let (_, found) = chars.next()?;
        if !found.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    Some(chars.as_str())
}

/// Match one canonical `<day> - Tiết <n>` segment. The dash is optional and
/// whitespace is free around every token.
fn parse_segment(segment: &str) -> Option<(Weekday, u32)> {
    let segment = segment.trim();
    let day_end = segment
        .find(|c: char| c.is_whitespace() || c == '-')
        .unwrap_or(segment.len());
    let day = segment[..day_end].parse::<Weekday>().ok()?;

    let mut rest = segment[day_end..].trim_start();
    rest = rest.strip_prefix('-').unwrap_or(rest).trim_start();

    let digits = strip_keyword(rest, PERIOD_KEYWORD)?.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().map(|slot| (day, slot))
}

/// Match the legacy combined-day form over the whole string:
/// `<day>(, <day>)* - Tiết <n>`. Every listed day shares the slot.
fn parse_legacy(input: &str) -> Option<Vec<(Weekday, u32)>> {
    let segments: Vec<&str> = input.split(',').collect();
    let (last, leading) = segments.split_last()?;
    let (final_day, slot) = parse_segment(last)?;

    let mut days = Vec::with_capacity(segments.len());
    for segment in leading {
        days.push(segment.trim().parse::<Weekday>().ok()?);
    }
    days.push(final_day);

    Some(days.into_iter().map(|day| (day, slot)).collect())
}

/// Parse a schedule display string into editable entries.
///
/// Unparseable input degrades to a single empty placeholder row rather than
/// an error: the editing UI always needs at least one row. Each returned
/// entry carries a fresh id.
pub fn parse(input: &str) -> Vec<ScheduleEntry> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return vec![ScheduleEntry::placeholder()];
    }

    let mut entries: Vec<ScheduleEntry> = trimmed
        .split(',')
        .filter_map(parse_segment)
        .map(|(day, slot)| ScheduleEntry::new(day, slot))
        .collect();

    // The legacy fallback only runs when no segment matched canonically,
    // and it matches the original whole string. A string mixing both forms
    // therefore resolves through the canonical branch and drops the legacy
    // remainder; stored data has always been one form or the other.
    if entries.is_empty() {
        if let Some(parsed) = parse_legacy(trimmed) {
            entries = parsed
                .into_iter()
                .map(|(day, slot)| ScheduleEntry::new(day, slot))
                .collect();
        }
    }

    if entries.is_empty() {
        entries.push(ScheduleEntry::placeholder());
    }
    entries
}

/// Serialize entries back to the canonical display form.
///
/// Incomplete rows are skipped; the relative order of complete rows is
/// preserved. All-incomplete input serializes to `""`.
pub fn serialize(entries: &[ScheduleEntry]) -> String {
    let parts: Vec<String> = entries
        .iter()
        .filter_map(|entry| match (entry.day, entry.slot) {
            (Some(day), Some(slot)) => Some(format!("{day} - Tiết {slot}")),
            _ => None,
        })
        .collect();
    parts.join(", ")
}

/// Editable schedule backed by the codec.
///
/// Maintains the invariant that there is always at least one row to edit.
#[derive(Debug, Clone)]
pub struct ScheduleEditor {
    entries: Vec<ScheduleEntry>,
}

impl ScheduleEditor {
    /// Start editing from a stored display string.
    pub fn parse(input: &str) -> Self {
        Self {
            entries: parse(input),
        }
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// Set the day of the row with `id`. Returns false if no such row.
    pub fn set_day(&mut self, id: Uuid, day: Option<Weekday>) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.day = day;
                true
            }
            None => false,
        }
    }

    /// Set the period of the row with `id`. Returns false if no such row.
    pub fn set_slot(&mut self, id: Uuid, slot: Option<u32>) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.slot = slot;
                true
            }
            None => false,
        }
    }

    /// Append a fresh empty row and return its id.
    pub fn add_row(&mut self) -> Uuid {
        let entry = ScheduleEntry::placeholder();
        let id = entry.id;
        self.entries.push(entry);
        id
    }

    /// Remove the row with `id`. Removing the last remaining row replaces
    /// it with a fresh placeholder so the editor never goes empty.
    pub fn remove_row(&mut self, id: Uuid) {
        self.entries.retain(|e| e.id != id);
        if self.entries.is_empty() {
            self.entries.push(ScheduleEntry::placeholder());
        }
    }

    /// The canonical display string for the current rows.
    pub fn display_string(&self) -> String {
        serialize(&self.entries)
    }
}
