//! The `seiseki schedule` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use seiseki_core::{assignment, schedule};

pub fn execute(input: &str, assignments: bool) -> Result<()> {
    if assignments {
        let entries = assignment::parse(input);

        let mut table = Table::new();
        table.set_header(vec!["Teacher", "Subject"]);
        for entry in &entries {
            let subject = if entry.subject.is_empty() {
                "-".to_string()
            } else {
                assignment::subject_label(&entry.subject).to_string()
            };
            table.add_row(vec![Cell::new(&entry.teacher), Cell::new(subject)]);
        }
        println!("{table}");
        println!("Canonical: {:?}", assignment::serialize(&entries));
    } else {
        let entries = schedule::parse(input);

        let mut table = Table::new();
        table.set_header(vec!["Day", "Period"]);
        for entry in &entries {
            let day = entry
                .day
                .map(|d| format!("{d} ({})", d.label()))
                .unwrap_or_else(|| "-".to_string());
            let slot = entry
                .slot
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string());
            table.add_row(vec![Cell::new(day), Cell::new(slot)]);
        }
        println!("{table}");
        println!("Canonical: {:?}", schedule::serialize(&entries));
    }

    Ok(())
}
