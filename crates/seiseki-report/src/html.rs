//! HTML report generator.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use std::path::Path;

use anyhow::Result;

use seiseki_core::report::EvaluationReport;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML page from an evaluation report.
pub fn generate_html(report: &EvaluationReport) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>seiseki report — {}</title>\n",
        html_escape(&report.sheet.name)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>seiseki report</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">Sheet: <strong>{}</strong> | rule set {} | {} students | {}</p>\n",
        html_escape(&report.sheet.name),
        report.rule_set,
        report.sheet.student_count,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Summary
    let pass_rate = if report.results.is_empty() {
        0.0
    } else {
        report.passed_count as f64 / report.results.len() as f64 * 100.0
    };
    html.push_str("<section class=\"summary\">\n");
    html.push_str("<h2>Summary</h2>\n");
    html.push_str(&format!(
        "<p>{} passed, {} failed ({:.1}% pass rate)</p>\n",
        report.passed_count, report.failed_count, pass_rate
    ));
    html.push_str("</section>\n");

    // Per-student results
    html.push_str("<section class=\"results\">\n");
    html.push_str("<h2>Results</h2>\n");
    html.push_str("<table>\n");
    html.push_str(
        "<thead><tr><th>Student</th><th>Total</th><th>Verdict</th><th>Reason</th></tr></thead>\n",
    );
    html.push_str("<tbody>\n");

    for r in &report.results {
        let class = if r.evaluation.passed { "pass" } else { "fail" };
        let verdict = if r.evaluation.passed { "PASS" } else { "FAIL" };
        html.push_str(&format!(
            "<tr class=\"{}\"><td>{}</td><td>{}/{}</td><td>{}</td><td>{}</td></tr>\n",
            class,
            html_escape(&r.name),
            r.evaluation.total_score,
            r.evaluation.total_max_score,
            verdict,
            html_escape(&r.evaluation.reason)
        ));
    }

    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(report)
            .unwrap_or_default()
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &EvaluationReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --pass: #dcfce7; --fail: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --pass: #064e3b; --fail: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); }
.pass { background: var(--pass); }
.fail { background: var(--fail); }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
"#;
