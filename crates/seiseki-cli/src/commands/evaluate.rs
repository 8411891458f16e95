//! The `seiseki evaluate` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use seiseki_core::parser;
use seiseki_core::report::EvaluationReport;
use seiseki_report::html::write_html_report;

pub fn execute(sheet_path: PathBuf, output: Option<PathBuf>, format: String) -> Result<()> {
    let sheets = if sheet_path.is_dir() {
        parser::load_sheet_directory(&sheet_path)?
    } else {
        vec![parser::parse_score_sheet(&sheet_path)?]
    };

    for sheet in &sheets {
        let report = EvaluationReport::from_sheet(sheet);
        print_summary(&report);

        let Some(output_dir) = &output else { continue };
        std::fs::create_dir_all(output_dir)?;
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");

        for fmt in format.split(',').map(str::trim) {
            match fmt {
                "text" => {}
                "json" => {
                    let path = output_dir.join(format!("{}-{timestamp}.json", report.sheet.id));
                    report.save_json(&path)?;
                    eprintln!("Report saved to: {}", path.display());
                }
                "html" => {
                    let path = output_dir.join(format!("{}-{timestamp}.html", report.sheet.id));
                    write_html_report(&report, &path)?;
                    eprintln!("HTML report: {}", path.display());
                }
                other => {
                    eprintln!("Unknown format: {other}");
                }
            }
        }
    }

    Ok(())
}

fn print_summary(report: &EvaluationReport) {
    println!(
        "{} [{}] — {} students, {} passed, {} failed",
        report.sheet.name,
        report.rule_set,
        report.sheet.student_count,
        report.passed_count,
        report.failed_count
    );

    let mut table = Table::new();
    table.set_header(vec!["Student", "Total", "Verdict", "Reason"]);

    for r in &report.results {
        table.add_row(vec![
            Cell::new(&r.name),
            Cell::new(format!(
                "{}/{}",
                r.evaluation.total_score, r.evaluation.total_max_score
            )),
            Cell::new(if r.evaluation.passed { "PASS" } else { "FAIL" }),
            Cell::new(&r.evaluation.reason),
        ]);
    }

    println!("{table}");
}
