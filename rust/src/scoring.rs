//! Composite priority scoring.
//!
//! Each task gets four sub-scores in [0, 1]:
//! - urgency: linear decay from 1.0 (due today or overdue) to 0.0 at the horizon
//! - importance: user importance 1..10 mapped linearly onto 0..1
//! - effort: shorter estimates score higher, zero at the effort ceiling
//! - dependency: how many tasks in the batch list this one as a predecessor
//!
//! The strategy weights blend them, cycle members are penalized, and the
//! result is scaled to 0-100.

use chrono::{Local, NaiveDate};
use rustc_hash::FxHashSet;

use crate::config::{ScoringConfig, Strategy, StrategyWeights};
use crate::cycles::DependencyGraph;
use crate::models::{
    PriorityLabel, ScoredTask, TaskInput, LOW_EFFORT_HOURS, MEDIUM_EFFORT_HOURS,
};
use crate::normalize::{normalize_hours, normalize_importance, NormalizedTask};
use crate::sorting::rank_tasks;
use crate::{log_summary, log_tasks};

/// Urgency from whole days until the due date (`None` = no due date).
pub fn urgency_score(days_left: Option<i64>, config: &ScoringConfig) -> f64 {
    match days_left {
        None => config.no_due_date_urgency,
        Some(days) if days <= 0 => 1.0,
        Some(days) => {
            let horizon = config.urgency_horizon_days;
            ((horizon - days as f64) / horizon).clamp(0.0, 1.0)
        }
    }
}

/// Importance mapped from 1..10 onto 0..1. Missing counts as 5.
pub fn importance_score(importance: Option<i64>) -> f64 {
    (normalize_importance(importance) - 1) as f64 / 9.0
}

/// Effort score: 1.0 for trivial tasks, 0.0 at or past the effort ceiling.
pub fn effort_score(hours: Option<f64>, config: &ScoringConfig) -> f64 {
    let hours = normalize_hours(hours);
    let ceiling = config.effort_ceiling_hours;
    ((ceiling - hours) / ceiling).clamp(0.0, 1.0)
}

/// Fan-out score, capped once the task blocks `full_credit_blocks` others.
pub fn dependency_score(blocks_count: usize, config: &ScoringConfig) -> f64 {
    (blocks_count as f64 / config.full_credit_blocks).min(1.0)
}

/// Round to two decimal places, exact ties to even.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Weighted blend of the four sub-scores.
fn weighted_sum(weights: StrategyWeights, u: f64, i: f64, e: f64, d: f64) -> f64 {
    weights.urgency * u + weights.importance * i + weights.effort * e + weights.dependency * d
}

fn urgency_phrase(days_left: Option<i64>) -> String {
    match days_left {
        None => "no due date".to_string(),
        Some(days) if days < 0 => format!("past due by {} days", -days),
        Some(0) => "due today".to_string(),
        Some(days) => format!("due in {} days", days),
    }
}

fn effort_label(hours: f64) -> &'static str {
    if hours <= LOW_EFFORT_HOURS {
        "Low"
    } else if hours <= MEDIUM_EFFORT_HOURS {
        "Medium"
    } else {
        "High"
    }
}

/// One-sentence rationale for a task's score.
pub fn explain(
    task: &NormalizedTask<'_>,
    days_left: Option<i64>,
    blocks_count: usize,
    in_cycle: bool,
) -> String {
    let blocks = if blocks_count > 0 {
        format!("blocks {} tasks", blocks_count)
    } else {
        "blocks no tasks".to_string()
    };

    let mut explanation = format!(
        "{}; importance {}/10; {} effort; {}",
        urgency_phrase(days_left),
        task.importance,
        effort_label(task.estimated_hours),
        blocks
    );
    if in_cycle {
        explanation.push_str("; circular dependency detected");
    }
    explanation
}

/// Score one normalized task given its batch context.
pub fn score_normalized(
    task: &NormalizedTask<'_>,
    blocks_count: usize,
    in_cycle: bool,
    weights: StrategyWeights,
    config: &ScoringConfig,
    today: NaiveDate,
) -> ScoredTask {
    let days_left = task.days_left(today);

    let u = urgency_score(days_left, config);
    let i = importance_score(Some(task.importance));
    let e = effort_score(Some(task.estimated_hours), config);
    let d = dependency_score(blocks_count, config);

    let mut base = weighted_sum(weights, u, i, e, d);
    if in_cycle {
        base *= config.cycle_penalty;
    }
    let score = round2(base * 100.0).clamp(0.0, 100.0);

    log_tasks!(
        config.verbosity,
        "  {:?}: U={:.3} I={:.3} E={:.3} D={:.3}{} -> {:.2}",
        task.id,
        u,
        i,
        e,
        d,
        if in_cycle { " (cycle)" } else { "" },
        score
    );

    ScoredTask {
        id: task.id.to_string(),
        title: task.title.to_string(),
        due_date: task.due_date,
        estimated_hours: task.estimated_hours,
        importance: task.importance,
        dependencies: task.dependencies.to_vec(),
        score,
        priority: PriorityLabel::from_score(score),
        explanation: explain(task, days_left, blocks_count, in_cycle),
        in_cycle,
    }
}

/// Resolve a strategy name, logging when an unknown name falls back.
pub fn resolve_strategy(name: &str, verbosity: u8) -> Strategy {
    Strategy::parse(name).unwrap_or_else(|| {
        log_tasks!(
            verbosity,
            "Unknown strategy {:?}, using {}",
            name,
            Strategy::default()
        );
        Strategy::default()
    })
}

/// Score and rank a batch with explicit configuration and reference date.
///
/// Returns one entry per input task, ordered best first.
pub fn compute_scores_with_config(
    tasks: &[TaskInput],
    strategy: Strategy,
    config: &ScoringConfig,
    today: NaiveDate,
) -> Vec<ScoredTask> {
    if tasks.is_empty() {
        return Vec::new();
    }

    let graph = DependencyGraph::from_tasks(tasks);
    let cycle_members: FxHashSet<String> = graph.cycle_members(config.verbosity);
    let weights = strategy.weights();

    log_summary!(
        config.verbosity,
        "Scoring {} tasks with {} as of {} ({} on dependency cycles)",
        tasks.len(),
        strategy,
        today,
        cycle_members.len()
    );
    if !cycle_members.is_empty() {
        let mut members: Vec<&str> = cycle_members.iter().map(String::as_str).collect();
        members.sort_unstable();
        log_summary!(config.verbosity, "Cycle members: {:?}", members);
    }

    let mut scored: Vec<ScoredTask> = tasks
        .iter()
        .map(|task| {
            let normalized = NormalizedTask::from_input(task);
            score_normalized(
                &normalized,
                graph.blocks_count(&task.id),
                cycle_members.contains(&task.id),
                weights,
                config,
                today,
            )
        })
        .collect();

    rank_tasks(&mut scored);

    log_summary!(
        config.verbosity,
        "Ranking: {:?}",
        scored.iter().map(|t| t.id.as_str()).collect::<Vec<_>>()
    );

    scored
}

/// Score and rank a batch against a fixed reference date.
pub fn compute_scores_at(tasks: &[TaskInput], strategy: &str, today: NaiveDate) -> Vec<ScoredTask> {
    let config = ScoringConfig::default();
    let strategy = resolve_strategy(strategy, config.verbosity);
    compute_scores_with_config(tasks, strategy, &config, today)
}

/// The local calendar date, read once per scoring call.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Score and rank a batch against the local calendar date.
pub fn compute_scores(tasks: &[TaskInput], strategy: &str) -> Vec<ScoredTask> {
    compute_scores_at(tasks, strategy, local_today())
}
