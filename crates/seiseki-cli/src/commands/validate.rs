//! The `seiseki validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(sheet_path: PathBuf) -> Result<()> {
    let sheets = if sheet_path.is_dir() {
        seiseki_core::parser::load_sheet_directory(&sheet_path)?
    } else {
        vec![seiseki_core::parser::parse_score_sheet(&sheet_path)?]
    };

    let mut total_warnings = 0;

    for sheet in &sheets {
        println!(
            "Score sheet: {} ({} students)",
            sheet.name,
            sheet.students.len()
        );

        let warnings = seiseki_core::parser::validate_score_sheet(sheet);
        for w in &warnings {
            let prefix = w
                .student_id
                .as_ref()
                .map(|id| format!("  [{id}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All score sheets valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
