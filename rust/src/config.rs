//! Configuration types for the ranking engine.

use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

/// Relative influence of each sub-score on the composite score.
///
/// Every preset sums to 1.0 so the composite stays in [0, 1] before scaling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrategyWeights {
    pub urgency: f64,
    pub importance: f64,
    pub effort: f64,
    pub dependency: f64,
}

/// Named weight preset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    #[default]
    #[serde(rename = "Smart Balance")]
    SmartBalance,
    #[serde(rename = "Fastest Wins")]
    FastestWins,
    #[serde(rename = "High Impact")]
    HighImpact,
    #[serde(rename = "Deadline Driven")]
    DeadlineDriven,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::SmartBalance,
        Strategy::FastestWins,
        Strategy::HighImpact,
        Strategy::DeadlineDriven,
    ];

    /// Look up a preset by its display name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Look up a preset by name, falling back to Smart Balance for unknown names.
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::SmartBalance => "Smart Balance",
            Strategy::FastestWins => "Fastest Wins",
            Strategy::HighImpact => "High Impact",
            Strategy::DeadlineDriven => "Deadline Driven",
        }
    }

    pub fn weights(&self) -> StrategyWeights {
        let (urgency, importance, effort, dependency) = match self {
            Strategy::SmartBalance => (0.35, 0.30, 0.20, 0.15),
            Strategy::FastestWins => (0.15, 0.15, 0.60, 0.10),
            Strategy::HighImpact => (0.25, 0.55, 0.05, 0.15),
            Strategy::DeadlineDriven => (0.70, 0.15, 0.05, 0.10),
        };
        StrategyWeights {
            urgency,
            importance,
            effort,
            dependency,
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Tunables for scoring. Defaults reproduce the standard ranking exactly.
#[pyclass]
#[derive(Clone, Debug, PartialEq)]
pub struct ScoringConfig {
    /// Multiplier applied to the composite of tasks on a dependency cycle
    #[pyo3(get, set)]
    pub cycle_penalty: f64,
    /// Urgency sub-score for tasks without a due date
    #[pyo3(get, set)]
    pub no_due_date_urgency: f64,
    /// Days out at which urgency decays to zero
    #[pyo3(get, set)]
    pub urgency_horizon_days: f64,
    /// Estimated hours at which the effort sub-score reaches zero
    #[pyo3(get, set)]
    pub effort_ceiling_hours: f64,
    /// Number of blocked tasks that earns the full dependency sub-score
    #[pyo3(get, set)]
    pub full_credit_blocks: f64,
    /// Verbosity level: 0=silent, 1=summary, 2=tasks, 3=debug
    #[pyo3(get, set)]
    pub verbosity: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            cycle_penalty: 0.75,
            no_due_date_urgency: 0.2,
            urgency_horizon_days: 30.0,
            effort_ceiling_hours: 8.0,
            full_credit_blocks: 3.0,
            verbosity: 0,
        }
    }
}

#[pymethods]
impl ScoringConfig {
    #[new]
    #[pyo3(signature = (
        cycle_penalty=None,
        no_due_date_urgency=None,
        urgency_horizon_days=None,
        effort_ceiling_hours=None,
        full_credit_blocks=None,
        verbosity=None
    ))]
    fn new(
        cycle_penalty: Option<f64>,
        no_due_date_urgency: Option<f64>,
        urgency_horizon_days: Option<f64>,
        effort_ceiling_hours: Option<f64>,
        full_credit_blocks: Option<f64>,
        verbosity: Option<u8>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            cycle_penalty: cycle_penalty.unwrap_or(defaults.cycle_penalty),
            no_due_date_urgency: no_due_date_urgency.unwrap_or(defaults.no_due_date_urgency),
            urgency_horizon_days: urgency_horizon_days.unwrap_or(defaults.urgency_horizon_days),
            effort_ceiling_hours: effort_ceiling_hours.unwrap_or(defaults.effort_ceiling_hours),
            full_credit_blocks: full_credit_blocks.unwrap_or(defaults.full_credit_blocks),
            verbosity: verbosity.unwrap_or(defaults.verbosity),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "ScoringConfig(cycle_penalty={}, urgency_horizon_days={}, effort_ceiling_hours={}, verbosity={})",
            self.cycle_penalty, self.urgency_horizon_days, self.effort_ceiling_hours, self.verbosity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_sum_to_one() {
        for strategy in Strategy::ALL {
            let w = strategy.weights();
            let total = w.urgency + w.importance + w.effort + w.dependency;
            assert!((total - 1.0).abs() < 1e-9, "{} sums to {}", strategy, total);
        }
    }

    #[test]
    fn test_strategy_names_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(Strategy::parse(strategy.name()), Some(strategy));
        }
    }

    #[test]
    fn test_unknown_strategy_falls_back_to_smart_balance() {
        assert_eq!(Strategy::parse("Random Pick"), None);
        assert_eq!(Strategy::from_name("Random Pick"), Strategy::SmartBalance);
        // Names are matched exactly
        assert_eq!(Strategy::from_name("fastest wins"), Strategy::SmartBalance);
    }

    #[test]
    fn test_deadline_driven_weights() {
        let w = Strategy::DeadlineDriven.weights();
        assert!((w.urgency - 0.70).abs() < 1e-9);
        assert!((w.effort - 0.05).abs() < 1e-9);
    }

    #[test]
    fn test_config_defaults() {
        let config = ScoringConfig::default();
        assert!((config.cycle_penalty - 0.75).abs() < 1e-9);
        assert!((config.no_due_date_urgency - 0.2).abs() < 1e-9);
        assert!((config.urgency_horizon_days - 30.0).abs() < 1e-9);
        assert_eq!(config.verbosity, 0);
    }

    #[test]
    fn test_config_new_keeps_defaults_for_missing() {
        let config = ScoringConfig::new(Some(0.5), None, None, None, None, Some(2));
        assert!((config.cycle_penalty - 0.5).abs() < 1e-9);
        assert!((config.effort_ceiling_hours - 8.0).abs() < 1e-9);
        assert_eq!(config.verbosity, 2);
    }
}
