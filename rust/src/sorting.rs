//! Deterministic ordering of scored tasks.
//!
//! Keys, most significant first:
//! - score, descending
//! - importance, descending
//! - due date, ascending (undated tasks after all dated ones)
//! - estimated hours, ascending
//! - task ID, ascending

use chrono::NaiveDate;
use std::cmp::Ordering;

use crate::models::ScoredTask;

/// Sort key for a scored task. Lower sorts first.
#[derive(Debug, Clone, PartialEq)]
pub struct RankKey<'a> {
    pub score: f64,
    pub importance: i64,
    pub due_date: NaiveDate,
    pub estimated_hours: f64,
    pub task_id: &'a str,
}

impl<'a> RankKey<'a> {
    pub fn of(task: &'a ScoredTask) -> Self {
        Self {
            score: task.score,
            importance: task.importance,
            due_date: task.due_date.unwrap_or(NaiveDate::MAX),
            estimated_hours: task.estimated_hours,
            task_id: &task.id,
        }
    }
}

/// Compare f64 values for sorting, treating incomparable values as equal.
fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

impl Eq for RankKey<'_> {}

impl Ord for RankKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_f64(other.score, self.score)
            .then(other.importance.cmp(&self.importance))
            .then(self.due_date.cmp(&other.due_date))
            .then(cmp_f64(self.estimated_hours, other.estimated_hours))
            .then(self.task_id.cmp(other.task_id))
    }
}

impl PartialOrd for RankKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sort scored tasks into ranking order (best first).
///
/// The sort is stable, so records with fully identical keys keep input order.
pub fn rank_tasks(tasks: &mut [ScoredTask]) {
    tasks.sort_by(|a, b| RankKey::of(a).cmp(&RankKey::of(b)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriorityLabel;
    use pretty_assertions::assert_eq;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn make_scored(
        id: &str,
        score: f64,
        importance: i64,
        due_date: Option<NaiveDate>,
        hours: f64,
    ) -> ScoredTask {
        ScoredTask {
            id: id.to_string(),
            title: String::new(),
            due_date,
            estimated_hours: hours,
            importance,
            dependencies: vec![],
            score,
            priority: PriorityLabel::from_score(score),
            explanation: String::new(),
            in_cycle: false,
        }
    }

    fn order(tasks: &[ScoredTask]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_higher_score_first() {
        let mut tasks = vec![
            make_scored("low", 40.0, 5, None, 1.0),
            make_scored("high", 80.0, 5, None, 1.0),
            make_scored("mid", 60.0, 5, None, 1.0),
        ];
        rank_tasks(&mut tasks);
        assert_eq!(order(&tasks), vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_importance_breaks_score_ties() {
        let mut tasks = vec![
            make_scored("meh", 50.0, 3, None, 1.0),
            make_scored("vital", 50.0, 9, None, 1.0),
        ];
        rank_tasks(&mut tasks);
        assert_eq!(order(&tasks), vec!["vital", "meh"]);
    }

    #[test]
    fn test_earlier_due_date_then_undated() {
        let mut tasks = vec![
            make_scored("undated", 50.0, 5, None, 1.0),
            make_scored("later", 50.0, 5, Some(make_date(2025, 3, 1)), 1.0),
            make_scored("sooner", 50.0, 5, Some(make_date(2025, 2, 1)), 1.0),
        ];
        rank_tasks(&mut tasks);
        assert_eq!(order(&tasks), vec!["sooner", "later", "undated"]);
    }

    #[test]
    fn test_fewer_hours_then_id() {
        let due = Some(make_date(2025, 2, 1));
        let mut tasks = vec![
            make_scored("b_long", 50.0, 5, due, 4.0),
            make_scored("b_short", 50.0, 5, due, 1.0),
            make_scored("a_short", 50.0, 5, due, 1.0),
        ];
        rank_tasks(&mut tasks);
        assert_eq!(order(&tasks), vec!["a_short", "b_short", "b_long"]);
    }

    #[test]
    fn test_id_is_final_tiebreaker() {
        let mut tasks = vec![
            make_scored("task_b", 50.0, 5, None, 2.0),
            make_scored("task_a", 50.0, 5, None, 2.0),
        ];
        rank_tasks(&mut tasks);
        assert_eq!(order(&tasks), vec!["task_a", "task_b"]);
    }

    #[test]
    fn test_identical_keys_keep_input_order() {
        let mut first = make_scored("same", 50.0, 5, None, 2.0);
        first.title = "first".to_string();
        let mut second = make_scored("same", 50.0, 5, None, 2.0);
        second.title = "second".to_string();

        let mut tasks = vec![first, second];
        rank_tasks(&mut tasks);
        assert_eq!(tasks[0].title, "first");
        assert_eq!(tasks[1].title, "second");
    }

    #[test]
    fn test_key_ordering_direct() {
        let a = make_scored("a", 70.0, 5, None, 1.0);
        let b = make_scored("b", 60.0, 9, Some(make_date(2025, 1, 1)), 0.5);
        assert!(RankKey::of(&a) < RankKey::of(&b));
        assert_eq!(RankKey::of(&a).cmp(&RankKey::of(&a)), Ordering::Equal);
    }
}
