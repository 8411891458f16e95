//! The `seiseki timeline` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use seiseki_core::model::Task;
use seiseki_core::timeline;
use seiseki_report::gantt::render_gantt;

pub fn execute(
    tasks_path: PathBuf,
    window_start: Option<NaiveDate>,
    today: Option<NaiveDate>,
    width: usize,
) -> Result<()> {
    let content = std::fs::read_to_string(&tasks_path)
        .with_context(|| format!("failed to read task list: {}", tasks_path.display()))?;
    let tasks: Vec<Task> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse task JSON: {}", tasks_path.display()))?;

    anyhow::ensure!(!tasks.is_empty(), "task list is empty");

    let today = today.unwrap_or_else(|| chrono::Utc::now().date_naive());
    let window_start = window_start
        .or_else(|| {
            tasks
                .iter()
                .map(|t| t.start_date.unwrap_or(t.created_at))
                .min()
        })
        .unwrap_or(today);

    print!("{}", render_gantt(&tasks, window_start, today, width));

    let overdue: Vec<&Task> = tasks
        .iter()
        .filter(|t| timeline::is_overdue(t, today))
        .collect();
    if !overdue.is_empty() {
        println!("\n{} overdue task(s):", overdue.len());
        for task in overdue {
            if let Some(due) = task.due_date {
                println!("  {} (due {due})", task.title);
            }
        }
    }

    Ok(())
}
