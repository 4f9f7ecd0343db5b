//! Defaulting and clamping of raw task fields before scoring.
//!
//! Nothing here fails: missing or malformed values are replaced so that every
//! task in a batch still produces a scored result.

use chrono::NaiveDate;

use crate::models::{DueDate, TaskInput};

/// Estimated hours used when the field is missing, non-positive or not finite.
pub const DEFAULT_ESTIMATED_HOURS: f64 = 0.5;
/// Importance used when the field is missing.
pub const DEFAULT_IMPORTANCE: i64 = 5;
pub const MIN_IMPORTANCE: i64 = 1;
pub const MAX_IMPORTANCE: i64 = 10;

/// A task with every field defaulted and clamped.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedTask<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub due_date: Option<NaiveDate>,
    pub estimated_hours: f64,
    pub importance: i64,
    pub dependencies: &'a [String],
}

impl<'a> NormalizedTask<'a> {
    pub fn from_input(task: &'a TaskInput) -> Self {
        Self {
            id: &task.id,
            title: &task.title,
            due_date: task.due_date.as_ref().and_then(parse_due_date),
            estimated_hours: normalize_hours(task.estimated_hours),
            importance: normalize_importance(task.importance),
            dependencies: &task.dependencies,
        }
    }

    /// Whole days from `today` until the due date (negative when overdue).
    pub fn days_left(&self, today: NaiveDate) -> Option<i64> {
        self.due_date.map(|due| (due - today).num_days())
    }
}

/// Resolve a due date to a calendar date. Unparsable strings become `None`.
pub fn parse_due_date(due: &DueDate) -> Option<NaiveDate> {
    match due {
        DueDate::Date(date) => Some(*date),
        DueDate::Text(text) => text.parse::<NaiveDate>().ok(),
    }
}

pub fn normalize_hours(hours: Option<f64>) -> f64 {
    match hours {
        Some(h) if h.is_finite() && h > 0.0 => h,
        _ => DEFAULT_ESTIMATED_HOURS,
    }
}

pub fn normalize_importance(importance: Option<i64>) -> i64 {
    importance
        .unwrap_or(DEFAULT_IMPORTANCE)
        .clamp(MIN_IMPORTANCE, MAX_IMPORTANCE)
}
