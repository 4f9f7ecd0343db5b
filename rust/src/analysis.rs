//! Last-analyzed-batch state for the suggestion flow.
//!
//! A host service analyzes a batch on one request and asks for suggestions on
//! a later one. `AnalysisSlot` holds the most recent analysis with
//! last-write-wins semantics. It is an ordinary value owned by the host, so
//! separate hosts (or tests) never share it implicitly.

use chrono::NaiveDate;
use serde::Serialize;
use std::sync::{Arc, PoisonError, RwLock};

use crate::config::{ScoringConfig, Strategy};
use crate::error::RankError;
use crate::log_summary;
use crate::models::{ScoredTask, Suggestion, TaskInput};
use crate::scoring::{compute_scores_with_config, resolve_strategy};
use crate::suggest::suggest_top;

/// A ranked batch together with the parameters it was computed under.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Analysis {
    /// Strategy actually applied (unknown names resolve to Smart Balance).
    pub strategy: Strategy,
    /// Reference date urgency was measured against.
    pub analyzed_on: NaiveDate,
    pub tasks: Vec<ScoredTask>,
}

/// Single-slot store of the latest analysis.
///
/// Reads and writes go through a lock, so a `suggest` always observes the
/// last fully completed `store`.
#[derive(Debug, Default)]
pub struct AnalysisSlot {
    last: RwLock<Option<Arc<Analysis>>>,
    config: ScoringConfig,
}

impl AnalysisSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ScoringConfig) -> Self {
        Self {
            last: RwLock::new(None),
            config,
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a batch, remember it as the latest analysis, and return it.
    ///
    /// Scoring runs outside the lock; only the final swap is serialized.
    pub fn analyze(&self, tasks: &[TaskInput], strategy: &str, today: NaiveDate) -> Arc<Analysis> {
        let strategy = resolve_strategy(strategy, self.config.verbosity);
        let analysis = Analysis {
            strategy,
            analyzed_on: today,
            tasks: compute_scores_with_config(tasks, strategy, &self.config, today),
        };
        self.store(analysis)
    }

    /// Replace the stored analysis.
    pub fn store(&self, analysis: Analysis) -> Arc<Analysis> {
        let analysis = Arc::new(analysis);
        let mut last = self.last.write().unwrap_or_else(PoisonError::into_inner);
        *last = Some(Arc::clone(&analysis));
        log_summary!(
            self.config.verbosity,
            "Stored analysis of {} tasks ({})",
            analysis.tasks.len(),
            analysis.strategy
        );
        analysis
    }

    /// The most recently stored analysis, if any.
    pub fn latest(&self) -> Option<Arc<Analysis>> {
        self.last
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Top suggestions from the latest analysis.
    ///
    /// An analysis of an empty batch counts as nothing analyzed.
    pub fn suggest(&self) -> Result<Vec<Suggestion>, RankError> {
        let analysis = self
            .latest()
            .filter(|analysis| !analysis.tasks.is_empty())
            .ok_or(RankError::NothingAnalyzed)?;
        Ok(suggest_top(&analysis.tasks))
    }
}
