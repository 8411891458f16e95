//! Task timeline projector.
//!
//! Maps a task's temporal extent onto a view window in whole days, and
//! derives an elapsed-time completion estimate. Pixel mapping and colors
//! belong to the caller; everything here is day-granularity arithmetic.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{Task, TaskStatus};

/// Day-granularity placement of a task inside a view window.
///
/// Computed fresh from the task and two dates; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineLayout {
    /// Days from the window start to the rendered bar start; never negative.
    pub offset_days: i64,
    /// Rendered bar length in days; at least 1.
    pub duration_days: i64,
    /// Elapsed share of the task's own span, 0-100.
    pub progress_percent: u8,
}

/// Project `task` onto a window starting at `window_start`.
///
/// The task runs from `start_date` (falling back to `created_at`) through
/// `due_date` (falling back to `today`), as an inclusive span: a same-day
/// task is one day long. A task starting before the window keeps only its
/// in-window portion; the progress estimate still uses the full span.
pub fn layout(task: &Task, window_start: NaiveDate, today: NaiveDate) -> TimelineLayout {
    let start = task.start_date.unwrap_or(task.created_at);
    let end = task.due_date.unwrap_or(today);

    let mut offset_days = (start - window_start).num_days();
    let total_duration = (end - start).num_days() + 1;
    let mut duration_days = total_duration;

    if offset_days < 0 {
        duration_days += offset_days;
        offset_days = 0;
    }

    TimelineLayout {
        offset_days,
        duration_days: duration_days.max(1),
        progress_percent: elapsed_percent(start, total_duration, today),
    }
}

/// Elapsed-time estimate over the unclamped task span. This is not the
/// assignee's reported progress; it only measures calendar time.
fn elapsed_percent(start: NaiveDate, total_duration: i64, today: NaiveDate) -> u8 {
    let days_passed = (today - start).num_days() + 1;
    if days_passed <= 0 {
        0
    } else if days_passed >= total_duration {
        100
    } else {
        ((days_passed as f64 / total_duration as f64) * 100.0).round() as u8
    }
}

/// Whether the task is past due and still unfinished.
///
/// Kept separate from [`layout`]; callers use it for color-coding.
pub fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    let past_due = task.due_date.is_some_and(|due| today > due);
    past_due && !matches!(task.status, TaskStatus::Completed | TaskStatus::Verified)
}
