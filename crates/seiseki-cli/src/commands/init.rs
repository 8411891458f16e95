//! The `seiseki init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create an example score sheet
    std::fs::create_dir_all("score-sheets")?;
    let sheet_path = std::path::Path::new("score-sheets/example.toml");
    if sheet_path.exists() {
        println!("score-sheets/example.toml already exists, skipping.");
    } else {
        std::fs::write(sheet_path, EXAMPLE_SHEET)?;
        println!("Created score-sheets/example.toml");
    }

    // Create an example task board
    std::fs::create_dir_all("tasks")?;
    let tasks_path = std::path::Path::new("tasks/example.json");
    if tasks_path.exists() {
        println!("tasks/example.json already exists, skipping.");
    } else {
        std::fs::write(tasks_path, EXAMPLE_TASKS)?;
        println!("Created tasks/example.json");
    }

    println!("\nNext steps:");
    println!("  1. Run: seiseki validate --sheet score-sheets/example.toml");
    println!("  2. Run: seiseki evaluate --sheet score-sheets/example.toml");
    println!("  3. Run: seiseki timeline --tasks tasks/example.json");

    Ok(())
}

const EXAMPLE_SHEET: &str = r#"[sheet]
id = "n5-mock-01"
name = "N5 Mock Exam 1"
description = "First practice run before the December sitting"
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

const EXAMPLE_TASKS: &str = r#"[
  {
    "id": "task-1",
    "title": "Draft N5 vocabulary quiz",
    "description": "40 questions covering lessons 1-12",
    "assignee_id": "gv01",
    "status": "in_progress",
    "priority": "high",
    "start_date": "2024-01-10",
    "due_date": "2024-01-14",
    "created_at": "2024-01-08"
  },
  {
    "id": "task-2",
    "title": "Grade week 3 homework",
    "assignee_id": "gv02",
    "status": "pending",
    "priority": "medium",
    "due_date": "2024-01-12",
    "created_at": "2024-01-09"
  }
]
"#;
