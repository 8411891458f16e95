//! The `seiseki compare` command.

use std::path::PathBuf;

use anyhow::Result;

use seiseki_core::report::EvaluationReport;

pub fn execute(
    baseline_path: PathBuf,
    current_path: PathBuf,
    fail_on_drop: bool,
    format: String,
) -> Result<()> {
    let baseline = EvaluationReport::load_json(&baseline_path)?;
    let current = EvaluationReport::load_json(&current_path)?;

    let progress = current.compare(&baseline);

    match format.as_str() {
        "markdown" | "md" => {
            println!("{}", progress.to_markdown());
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&progress)?);
        }
        _ => {
            // text format
            println!(
                "Comparison: {} dropped to fail, {} newly passing, {} unchanged",
                progress.dropped.len(),
                progress.improved.len(),
                progress.unchanged
            );

            if !progress.dropped.is_empty() {
                println!("\nDropped to fail:");
                for t in &progress.dropped {
                    println!(
                        "  {} ({}) {} -> {}",
                        t.name, t.student_id, t.baseline_total, t.current_total
                    );
                }
            }

            if !progress.improved.is_empty() {
                println!("\nNewly passing:");
                for t in &progress.improved {
                    println!(
                        "  {} ({}) {} -> {}",
                        t.name, t.student_id, t.baseline_total, t.current_total
                    );
                }
            }

            if progress.new_students > 0 {
                println!("\n{} new student(s)", progress.new_students);
            }
            if progress.removed_students > 0 {
                println!("{} removed student(s)", progress.removed_students);
            }
        }
    }

    if fail_on_drop && progress.has_drops() {
        std::process::exit(1);
    }

    Ok(())
}
