//! Core data types for task ranking.

use chrono::NaiveDate;
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

use crate::records::lenient;

/// Scores at or above this are labelled `High`.
pub const HIGH_PRIORITY_THRESHOLD: f64 = 75.0;
/// Scores at or above this (and below `HIGH_PRIORITY_THRESHOLD`) are `Medium`.
pub const MEDIUM_PRIORITY_THRESHOLD: f64 = 50.0;
/// Tasks estimated at or under this many hours count as low effort.
pub const LOW_EFFORT_HOURS: f64 = 2.0;
/// Upper bound (inclusive) of the `Medium` effort label.
pub const MEDIUM_EFFORT_HOURS: f64 = 5.0;

/// A due date as it arrives from the collaborator: a native date or a string.
///
/// Strings are parsed as ISO-8601 `YYYY-MM-DD` during normalization; anything
/// unparsable is treated as no due date.
#[derive(Clone, Debug, PartialEq, Eq, FromPyObject, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DueDate {
    Date(NaiveDate),
    Text(String),
}

impl ToPyObject for DueDate {
    fn to_object(&self, py: Python<'_>) -> PyObject {
        match self {
            DueDate::Date(date) => date.to_object(py),
            DueDate::Text(text) => text.to_object(py),
        }
    }
}

impl IntoPy<PyObject> for DueDate {
    fn into_py(self, py: Python<'_>) -> PyObject {
        self.to_object(py)
    }
}

impl From<NaiveDate> for DueDate {
    fn from(date: NaiveDate) -> Self {
        DueDate::Date(date)
    }
}

/// A task record to be ranked. Every field except `id` is optional in spirit;
/// malformed values are defaulted during normalization rather than rejected.
#[pyclass]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskInput {
    #[pyo3(get, set)]
    #[serde(default, deserialize_with = "lenient")]
    pub id: String,
    #[pyo3(get, set)]
    #[serde(default, deserialize_with = "lenient")]
    pub title: String,
    #[pyo3(get, set)]
    #[serde(default, deserialize_with = "lenient")]
    pub due_date: Option<DueDate>,
    #[pyo3(get, set)]
    #[serde(default, deserialize_with = "lenient")]
    pub estimated_hours: Option<f64>,
    #[pyo3(get, set)]
    #[serde(default, deserialize_with = "lenient")]
    pub importance: Option<i64>,
    /// IDs of tasks that must happen before this one (predecessors).
    #[pyo3(get, set)]
    #[serde(default, deserialize_with = "lenient")]
    pub dependencies: Vec<String>,
}

#[pymethods]
impl TaskInput {
    #[new]
    #[pyo3(signature = (
        id,
        title=None,
        due_date=None,
        estimated_hours=None,
        importance=None,
        dependencies=None
    ))]
    fn new(
        id: String,
        title: Option<String>,
        due_date: Option<DueDate>,
        estimated_hours: Option<f64>,
        importance: Option<i64>,
        dependencies: Option<Vec<String>>,
    ) -> Self {
        Self {
            id,
            title: title.unwrap_or_default(),
            due_date,
            estimated_hours,
            importance,
            dependencies: dependencies.unwrap_or_default(),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "TaskInput(id={:?}, due_date={:?}, hours={:?}, importance={:?}, deps={})",
            self.id,
            self.due_date,
            self.estimated_hours,
            self.importance,
            self.dependencies.len()
        )
    }
}

/// Priority label derived from the final 0-100 score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorityLabel {
    High,
    Medium,
    Low,
}

impl PriorityLabel {
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_PRIORITY_THRESHOLD {
            PriorityLabel::High
        } else if score >= MEDIUM_PRIORITY_THRESHOLD {
            PriorityLabel::Medium
        } else {
            PriorityLabel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityLabel::High => "High",
            PriorityLabel::Medium => "Medium",
            PriorityLabel::Low => "Low",
        }
    }
}

impl std::fmt::Display for PriorityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task after normalization and scoring.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredTask {
    #[pyo3(get)]
    pub id: String,
    #[pyo3(get)]
    pub title: String,
    #[pyo3(get)]
    pub due_date: Option<NaiveDate>,
    #[pyo3(get)]
    pub estimated_hours: f64,
    #[pyo3(get)]
    pub importance: i64,
    #[pyo3(get)]
    pub dependencies: Vec<String>,
    /// Composite score in [0, 100], rounded to two decimals.
    #[pyo3(get)]
    pub score: f64,
    pub priority: PriorityLabel,
    #[pyo3(get)]
    pub explanation: String,
    #[pyo3(get)]
    pub in_cycle: bool,
}

#[pymethods]
impl ScoredTask {
    #[getter(priority)]
    fn py_priority(&self) -> &'static str {
        self.priority.as_str()
    }

    fn __repr__(&self) -> String {
        format!(
            "ScoredTask(id={:?}, score={:.2}, priority={}, in_cycle={})",
            self.id, self.score, self.priority, self.in_cycle
        )
    }
}

/// One of the top suggestions, with the reason it was picked.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    #[pyo3(get)]
    pub id: String,
    #[pyo3(get)]
    pub title: String,
    #[pyo3(get)]
    pub score: f64,
    pub priority: PriorityLabel,
    #[pyo3(get)]
    pub why: String,
}

#[pymethods]
impl Suggestion {
    #[getter(priority)]
    fn py_priority(&self) -> &'static str {
        self.priority.as_str()
    }

    fn __repr__(&self) -> String {
        format!("Suggestion(id={:?}, why={:?})", self.id, self.why)
    }
}
