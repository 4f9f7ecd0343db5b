//! Rust implementation of the taskrank prioritization core.
//!
//! This module ranks task batches by a weighted blend of urgency, importance,
//! effort and dependency fan-out, penalizes tasks on circular dependency
//! chains, and explains each score in one sentence.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use chrono::NaiveDate;
use pyo3::prelude::*;
use std::collections::HashSet;

pub mod analysis;
mod config;
pub mod cycles;
mod error;
mod interner;
pub mod logging;
mod models;
pub mod normalize;
pub mod records;
pub mod scoring;
pub mod sorting;
pub mod suggest;

pub use analysis::{Analysis, AnalysisSlot};
pub use config::{ScoringConfig, Strategy, StrategyWeights};
pub use cycles::{detect_cycles, DependencyGraph};
pub use error::RankError;
pub use models::{DueDate, PriorityLabel, ScoredTask, Suggestion, TaskInput};
pub use records::{parse_request, AnalyzeRequest};
pub use scoring::{
    compute_scores, compute_scores_at, compute_scores_with_config, dependency_score,
    effort_score, importance_score, urgency_score,
};
pub use sorting::{rank_tasks, RankKey};
pub use suggest::suggest_top;

/// Return the IDs of tasks that lie on a circular dependency chain.
#[pyfunction]
#[pyo3(name = "detect_cycles")]
fn py_detect_cycles(tasks: Vec<TaskInput>) -> HashSet<String> {
    detect_cycles(&tasks).into_iter().collect()
}

/// Score and rank a batch of tasks.
///
/// # Arguments
/// * `tasks` - List of TaskInput records
/// * `strategy` - Weight preset name; unknown names fall back to "Smart Balance"
/// * `today` - Reference date for urgency (defaults to the local date)
/// * `config` - Scoring tunables (defaults reproduce the standard ranking)
///
/// # Returns
/// * List of ScoredTask, best first, one per input task
///
/// # Raises
/// * TypeError if `tasks` is not a sequence of TaskInput
#[pyfunction]
#[pyo3(name = "compute_scores", signature = (tasks, strategy="Smart Balance", today=None, config=None))]
fn py_compute_scores(
    tasks: Vec<TaskInput>,
    strategy: &str,
    today: Option<NaiveDate>,
    config: Option<ScoringConfig>,
) -> Vec<ScoredTask> {
    let config = config.unwrap_or_default();
    let strategy = scoring::resolve_strategy(strategy, config.verbosity);
    let today = today.unwrap_or_else(scoring::local_today);
    compute_scores_with_config(&tasks, strategy, &config, today)
}

/// Top three suggestions from an already ranked list.
#[pyfunction]
#[pyo3(name = "suggest_top")]
fn py_suggest_top(results: Vec<ScoredTask>) -> Vec<Suggestion> {
    suggest_top(&results)
}

/// Parse a JSON task batch into (strategy, tasks).
///
/// # Raises
/// * ValueError if the payload is not JSON or holds no task sequence
#[pyfunction]
#[pyo3(name = "parse_request")]
fn py_parse_request(json: &str) -> PyResult<(String, Vec<TaskInput>)> {
    let request = parse_request(json)?;
    Ok((request.strategy, request.tasks))
}

/// Analyze/suggest pair holding the last analyzed batch (PyO3 wrapper).
#[pyclass(name = "TaskAnalyzer")]
pub struct PyTaskAnalyzer {
    slot: AnalysisSlot,
}

#[pymethods]
impl PyTaskAnalyzer {
    #[new]
    #[pyo3(signature = (config=None))]
    fn new(config: Option<ScoringConfig>) -> Self {
        Self {
            slot: AnalysisSlot::with_config(config.unwrap_or_default()),
        }
    }

    /// Score a batch and remember it for `suggest`.
    #[pyo3(signature = (tasks, strategy="Smart Balance", today=None))]
    fn analyze(
        &self,
        tasks: Vec<TaskInput>,
        strategy: &str,
        today: Option<NaiveDate>,
    ) -> Vec<ScoredTask> {
        let today = today.unwrap_or_else(scoring::local_today);
        self.slot.analyze(&tasks, strategy, today).tasks.clone()
    }

    /// Top three tasks of the last analysis.
    ///
    /// # Raises
    /// * ValueError if nothing has been analyzed yet, or the last batch was empty
    fn suggest(&self) -> PyResult<Vec<Suggestion>> {
        Ok(self.slot.suggest()?)
    }

    #[getter]
    fn last_strategy(&self) -> Option<&'static str> {
        self.slot.latest().map(|a| a.strategy.name())
    }

    #[getter]
    fn config(&self) -> ScoringConfig {
        self.slot.config().clone()
    }

    #[getter]
    fn analyzed_on(&self) -> Option<NaiveDate> {
        self.slot.latest().map(|a| a.analyzed_on)
    }

    fn __repr__(&self) -> String {
        match self.slot.latest() {
            Some(a) => format!(
                "TaskAnalyzer(strategy={:?}, tasks={}, analyzed_on={})",
                a.strategy.name(),
                a.tasks.len(),
                a.analyzed_on
            ),
            None => "TaskAnalyzer(empty)".to_string(),
        }
    }
}

/// The taskrank.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core data types
    m.add_class::<TaskInput>()?;
    m.add_class::<ScoredTask>()?;
    m.add_class::<Suggestion>()?;
    m.add_class::<PyTaskAnalyzer>()?;

    // Config types
    m.add_class::<ScoringConfig>()?;

    // Algorithms
    m.add_function(wrap_pyfunction!(py_detect_cycles, m)?)?;
    m.add_function(wrap_pyfunction!(py_compute_scores, m)?)?;
    m.add_function(wrap_pyfunction!(py_suggest_top, m)?)?;
    m.add_function(wrap_pyfunction!(py_parse_request, m)?)?;

    Ok(())
}
