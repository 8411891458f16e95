//! Plain-text Gantt rendering for task timelines.
//!
//! One row per task, positioned with the timeline projector. Meant for
//! terminal output: widths are character cells, one cell per day.

use chrono::NaiveDate;

use seiseki_core::model::Task;
use seiseki_core::timeline;

/// Render `tasks` as a fixed-width text chart.
///
/// The chart spans `width` day columns starting at `window_start`. Bars are
/// clipped to the window; overdue tasks get a `!` marker and the right
/// column shows the elapsed-time progress estimate. The ruler line marks
/// today's column with a `v`.
pub fn render_gantt(
    tasks: &[Task],
    window_start: NaiveDate,
    today: NaiveDate,
    width: usize,
) -> String {
    let width = width.max(7);
    let label_width = tasks
        .iter()
        .map(|t| t.title.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(8, 28);

    let mut out = String::new();
    out.push_str(&format!("window starts {window_start}, today {today}\n"));

    let today_col = (today - window_start).num_days();
    let mut ruler: Vec<char> = std::iter::repeat('.').take(width).collect();
    if (0..width as i64).contains(&today_col) {
        ruler[today_col as usize] = 'v';
    }
    out.push_str(&format!(
        "{:label_width$}    {}\n",
        "",
        ruler.iter().collect::<String>()
    ));

    for task in tasks {
        let layout = timeline::layout(task, window_start, today);
        let overdue = timeline::is_overdue(task, today);

        let offset = (layout.offset_days.max(0) as usize).min(width);
        let len = (layout.duration_days.max(0) as usize).min(width - offset);

        let mut bar = String::with_capacity(width);
        bar.push_str(&" ".repeat(offset));
        bar.push_str(&"#".repeat(len));
        bar.push_str(&" ".repeat(width - offset - len));

        let title: String = task.title.chars().take(label_width).collect();
        let marker = if overdue { '!' } else { ' ' };
        out.push_str(&format!(
            "{title:<label_width$} {marker}  {bar}  {:>3}%\n",
            layout.progress_percent
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use seiseki_core::model::{TaskPriority, TaskStatus};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(title: &str, start: NaiveDate, due: NaiveDate, status: TaskStatus) -> Task {
        Task {
            id: title.to_lowercase().replace(' ', "-"),
            title: title.into(),
            description: String::new(),
            assignee_id: None,
            status,
            priority: TaskPriority::Medium,
            start_date: Some(start),
            due_date: Some(due),
            progress: None,
            created_at: start,
            report: None,
        }
    }

    #[test]
    fn renders_positioned_bars() {
        let tasks = vec![
            task(
                "Draft quiz",
                date(2024, 1, 10),
                date(2024, 1, 14),
                TaskStatus::InProgress,
            ),
            task(
                "Grade homework",
                date(2024, 1, 2),
                date(2024, 1, 4),
                TaskStatus::Pending,
            ),
        ];
        let chart = render_gantt(&tasks, date(2024, 1, 1), date(2024, 1, 12), 20);

        assert!(chart.contains("window starts 2024-01-01, today 2024-01-12"));
        // 9 leading day columns, then a 5-day bar
        assert!(chart.contains("Draft quiz"));
        assert!(chart.contains("         #####"));
        assert!(chart.contains(" 60%"));
        // overdue and unfinished
        assert!(chart.contains("Grade homework !"));
        assert!(chart.contains("100%"));
    }

    #[test]
    fn marks_today_on_the_ruler() {
        let tasks = vec![task(
            "Draft quiz",
            date(2024, 1, 10),
            date(2024, 1, 14),
            TaskStatus::InProgress,
        )];
        let chart = render_gantt(&tasks, date(2024, 1, 1), date(2024, 1, 3), 10);
        let ruler_line = chart.lines().nth(1).unwrap();
        assert_eq!(ruler_line.trim(), "..v.......");
    }

    #[test]
    fn clips_bars_to_the_window() {
        let tasks = vec![task(
            "Draft quiz",
            date(2024, 1, 1),
            date(2024, 3, 1),
            TaskStatus::InProgress,
        )];
        let chart = render_gantt(&tasks, date(2024, 1, 1), date(2024, 1, 2), 10);
        assert!(chart.contains("##########"));
        assert!(!chart.contains("###########"));
    }

    #[test]
    fn empty_task_list_renders_headers_only() {
        let chart = render_gantt(&[], date(2024, 1, 1), date(2024, 1, 2), 10);
        assert_eq!(chart.lines().count(), 2);
    }
}
