//! Top-N suggestions drawn from an already ranked batch.

use crate::models::{ScoredTask, Suggestion, HIGH_PRIORITY_THRESHOLD, LOW_EFFORT_HOURS};

/// How many tasks a suggestion pass returns.
pub const SUGGESTION_COUNT: usize = 3;

fn rationale(rank: usize, task: &ScoredTask) -> String {
    let mut why = format!("Ranked #{} with score {:.2}", rank, task.score);
    if task.score >= HIGH_PRIORITY_THRESHOLD {
        why.push_str(" - high priority task");
    }
    if let Some(due) = task.due_date {
        why.push_str(&format!(", due {}", due));
    }
    if task.estimated_hours <= LOW_EFFORT_HOURS {
        why.push_str(" and low effort");
    }
    why
}

/// Pick the first three entries of a ranked list and say why each was chosen.
///
/// The input must already be in ranking order; nothing is re-scored here.
pub fn suggest_top(ranked: &[ScoredTask]) -> Vec<Suggestion> {
    ranked
        .iter()
        .take(SUGGESTION_COUNT)
        .enumerate()
        .map(|(i, task)| Suggestion {
            id: task.id.clone(),
            title: task.title.clone(),
            score: task.score,
            priority: task.priority,
            why: rationale(i + 1, task),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriorityLabel;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn make_scored(id: &str, score: f64, due: Option<NaiveDate>, hours: f64) -> ScoredTask {
        ScoredTask {
            id: id.to_string(),
            title: format!("Task {}", id),
            due_date: due,
            estimated_hours: hours,
            importance: 5,
            dependencies: vec![],
            score,
            priority: PriorityLabel::from_score(score),
            explanation: String::new(),
            in_cycle: false,
        }
    }

    #[test]
    fn test_takes_first_three_in_order() {
        let ranked = vec![
            make_scored("a", 90.0, None, 4.0),
            make_scored("b", 70.0, None, 4.0),
            make_scored("c", 60.0, None, 4.0),
            make_scored("d", 50.0, None, 4.0),
        ];
        let ids: Vec<String> = suggest_top(&ranked).into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_fewer_than_three() {
        let ranked = vec![make_scored("only", 42.0, None, 4.0)];
        assert_eq!(suggest_top(&ranked).len(), 1);
        assert!(suggest_top(&[]).is_empty());
    }

    #[test]
    fn test_rationale_clauses() {
        let due = NaiveDate::from_ymd_opt(2025, 11, 30);
        let ranked = vec![
            make_scored("hot", 82.5, due, 1.5),
            make_scored("plain", 60.0, None, 4.0),
            make_scored("cheap", 40.0, None, 2.0),
        ];
        let suggestions = suggest_top(&ranked);

        assert_eq!(
            suggestions[0].why,
            "Ranked #1 with score 82.50 - high priority task, due 2025-11-30 and low effort"
        );
        assert_eq!(suggestions[1].why, "Ranked #2 with score 60.00");
        assert_eq!(suggestions[2].why, "Ranked #3 with score 40.00 and low effort");
        assert_eq!(suggestions[0].priority, PriorityLabel::High);
        assert_eq!(suggestions[0].title, "Task hot");
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let ranked = vec![make_scored("edge", 75.0, None, 3.0)];
        assert_eq!(
            suggest_top(&ranked)[0].why,
            "Ranked #1 with score 75.00 - high priority task"
        );
    }
}
