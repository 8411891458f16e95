//! Teacher assignment codec.
//!
//! Maps display strings like `"Yamada (Kanji), Sato (Hội thoại)"` onto
//! editable rows of teacher + subject. Subjects are stored as lookup keys
//! and displayed through a fixed label table; unknown labels survive
//! round-trips as raw text. Unlike the schedule codec there is no legacy
//! form: a bare name with no parenthesized subject is kept as a partial
//! row for the UI to finish, not discarded.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Subject key → display label.
pub const SUBJECTS: &[(&str, &str)] = &[
    ("kanji", "Kanji"),
    ("vocab", "Từ vựng"),
    ("grammar", "Ngữ pháp"),
    ("listening", "Nghe hiểu"),
    ("conversation", "Hội thoại"),
    ("reading", "Đọc hiểu"),
];

/// Display label for a subject key. Unknown keys display as themselves.
pub fn subject_label(key: &str) -> &str {
    SUBJECTS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
        .unwrap_or(key)
}

/// Subject key for a display label. Unknown labels are kept raw.
fn subject_key(label: &str) -> &str {
    SUBJECTS
        .iter()
        .find(|(_, l)| *l == label)
        .map(|(key, _)| *key)
        .unwrap_or(label)
}

/// One editable assignment row. The id is opaque and never serialized
/// into the display form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentEntry {
    pub id: Uuid,
    pub teacher: String,
    /// Subject key; empty for a partial row.
    pub subject: String,
}

impl AssignmentEntry {
    pub fn new(teacher: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            teacher: teacher.into(),
            subject: subject.into(),
        }
    }

    /// An empty row for the UI to fill in.
    pub fn placeholder() -> Self {
        Self::new("", "")
    }

    /// Complete entries are the only ones that serialize.
    pub fn is_complete(&self) -> bool {
        !self.teacher.is_empty() && !self.subject.is_empty()
    }
}

/// Match one `<teacher> (<label>)` segment.
fn parse_segment(segment: &str) -> Option<(&str, &str)> {
    let open = segment.rfind('(')?;
    let rest = &segment[open + 1..];
    let close = rest.rfind(')')?;
    // Nothing may follow the closing parenthesis.
    if !rest[close + 1..].trim().is_empty() {
        return None;
    }
    let teacher = segment[..open].trim();
    if teacher.is_empty() {
        return None;
    }
    Some((teacher, rest[..close].trim()))
}

/// Parse an assignment display string into editable entries.
///
/// Blank input degrades to a single empty placeholder row; segments without
/// a parenthesized subject become partial rows.
pub fn parse(input: &str) -> Vec<AssignmentEntry> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return vec![AssignmentEntry::placeholder()];
    }

    let entries: Vec<AssignmentEntry> = trimmed
        .split(',')
        .filter_map(|segment| {
            let segment = segment.trim();
            if segment.is_empty() {
                return None;
            }
            Some(match parse_segment(segment) {
                Some((teacher, label)) => AssignmentEntry::new(teacher, subject_key(label)),
                None => AssignmentEntry::new(segment, ""),
            })
        })
        .collect();

    if entries.is_empty() {
        return vec![AssignmentEntry::placeholder()];
    }
    entries
}

/// Serialize entries back to the display form, skipping incomplete rows.
pub fn serialize(entries: &[AssignmentEntry]) -> String {
    let parts: Vec<String> = entries
        .iter()
        .filter(|entry| entry.is_complete())
        .map(|entry| format!("{} ({})", entry.teacher, subject_label(&entry.subject)))
        .collect();
    parts.join(", ")
}

/// Editable assignment list backed by the codec, with the same
/// always-at-least-one-row invariant as the schedule editor.
#[derive(Debug, Clone)]
pub struct AssignmentEditor {
    entries: Vec<AssignmentEntry>,
}

impl AssignmentEditor {
    /// Start editing from a stored display string.
    pub fn parse(input: &str) -> Self {
        Self {
            entries: parse(input),
        }
    }

    pub fn entries(&self) -> &[AssignmentEntry] {
        &self.entries
    }

    /// Set the teacher name of the row with `id`. Returns false if no such row.
    pub fn set_teacher(&mut self, id: Uuid, teacher: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.teacher = teacher.into();
                true
            }
            None => false,
        }
    }

    /// Set the subject key of the row with `id`. Returns false if no such row.
    pub fn set_subject(&mut self, id: Uuid, subject: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.subject = subject.into();
                true
            }
            None => false,
        }
    }

    /// Append a fresh empty row and return its id.
    pub fn add_row(&mut self) -> Uuid {
        let entry = AssignmentEntry::placeholder();
        let id = entry.id;
        self.entries.push(entry);
        id
    }

    /// Remove the row with `id`, replacing the last remaining row with a
    /// fresh placeholder.
    pub fn remove_row(&mut self, id: Uuid) {
        self.entries.retain(|e| e.id != id);
        if self.entries.is_empty() {
            self.entries.push(AssignmentEntry::placeholder());
        }
    }

    /// The display string for the current rows.
    pub fn display_string(&self) -> String {
        serialize(&self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_labels_to_keys() {
        let entries = parse("Yamada (Kanji), Sato (Hội thoại)");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].teacher, "Yamada");
        assert_eq!(entries[0].subject, "kanji");
        assert_eq!(entries[1].teacher, "Sato");
        assert_eq!(entries[1].subject, "conversation");
    }

    #[test]
    fn round_trip_reproduces_labels() {
        let input = "Yamada (Kanji), Sato (Hội thoại)";
        assert_eq!(serialize(&parse(input)), input);
    }

    #[test]
    fn unknown_label_round_trips_raw() {
        let entries = parse("Bùi (Sơ cấp 1)");
        assert_eq!(entries[0].subject, "Sơ cấp 1");
        assert_eq!(serialize(&entries), "Bùi (Sơ cấp 1)");
    }

    #[test]
    fn bare_name_kept_as_partial_row() {
        let entries = parse("Yamada (Kanji), Tanaka");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].teacher, "Tanaka");
        assert_eq!(entries[1].subject, "");
        assert!(!entries[1].is_complete());
        // the partial row does not serialize
        assert_eq!(serialize(&entries), "Yamada (Kanji)");
    }

    #[test]
    fn blank_input_degrades_to_placeholder() {
        for input in ["", "  ", " , "] {
            let entries = parse(input);
            assert_eq!(entries.len(), 1, "input {input:?}");
            assert!(entries[0].teacher.is_empty());
            assert!(entries[0].subject.is_empty());
        }
    }

    #[test]
    fn serialize_all_incomplete_is_empty() {
        assert_eq!(serialize(&[AssignmentEntry::placeholder()]), "");
        assert_eq!(serialize(&[AssignmentEntry::new("Tanaka", "")]), "");
    }

    #[test]
    fn subject_label_lookup() {
        assert_eq!(subject_label("grammar"), "Ngữ pháp");
        assert_eq!(subject_label("not-a-key"), "not-a-key");
    }

    #[test]
    fn editor_mutations() {
        let mut editor = AssignmentEditor::parse("Yamada (Kanji)");
        let id = editor.entries()[0].id;

        assert!(editor.set_teacher(id, "Suzuki"));
        assert!(editor.set_subject(id, "reading"));
        assert_eq!(editor.display_string(), "Suzuki (Đọc hiểu)");

        let new_id = editor.add_row();
        editor.set_teacher(new_id, "Pham");
        // incomplete until the subject lands
        assert_eq!(editor.display_string(), "Suzuki (Đọc hiểu)");
        editor.set_subject(new_id, "listening");
        assert_eq!(
            editor.display_string(),
            "Suzuki (Đọc hiểu), Pham (Nghe hiểu)"
        );
    }

    #[test]
    fn editor_never_goes_empty() {
        let mut editor = AssignmentEditor::parse("Yamada (Kanji)");
        let id = editor.entries()[0].id;
        editor.remove_row(id);

        assert_eq!(editor.entries().len(), 1);
        assert!(!editor.entries()[0].is_complete());
        assert_eq!(editor.display_string(), "");
    }
}
