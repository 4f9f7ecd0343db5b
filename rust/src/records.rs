//! JSON boundary for task batches.
//!
//! Accepts either a bare array of task records or an analyze request object
//! (`{"strategy": ..., "tasks": [...]}`). Individual fields of the wrong type
//! are defaulted; only a payload that is not a task sequence is rejected.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::config::Strategy;
use crate::error::RankError;
use crate::models::TaskInput;

/// Deserialize a field, falling back to its default when the value has the
/// wrong shape.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// A batch of tasks and the strategy to rank them with.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalyzeRequest {
    pub strategy: String,
    pub tasks: Vec<TaskInput>,
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn parse_tasks(value: Value) -> Result<Vec<TaskInput>, RankError> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(_) => Ok(serde_json::from_value::<TaskInput>(item)?),
                other => Err(RankError::NotASequence(value_kind(&other))),
            })
            .collect(),
        other => Err(RankError::NotASequence(value_kind(&other))),
    }
}

/// Parse a task batch from JSON text.
pub fn parse_request(json: &str) -> Result<AnalyzeRequest, RankError> {
    let value: Value = serde_json::from_str(json)?;
    match value {
        Value::Object(mut fields) => {
            let strategy = match fields.remove("strategy") {
                Some(Value::String(name)) => name,
                _ => Strategy::default().name().to_string(),
            };
            let tasks = fields.remove("tasks").unwrap_or(Value::Null);
            Ok(AnalyzeRequest {
                strategy,
                tasks: parse_tasks(tasks)?,
            })
        }
        other => Ok(AnalyzeRequest {
            strategy: Strategy::default().name().to_string(),
            tasks: parse_tasks(other)?,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DueDate;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_request_object() {
        let json = r#"{
            "strategy": "Smart Balance",
            "tasks": [
                {"id": "t1", "title": "Fix login bug", "due_date": "2025-11-30",
                 "estimated_hours": 3, "importance": 8, "dependencies": []},
                {"id": "t2", "title": "Write tests", "due_date": "2025-11-28",
                 "estimated_hours": 2, "importance": 7, "dependencies": ["t1"]}
            ]
        }"#;
        let request = parse_request(json).unwrap();

        assert_eq!(request.strategy, "Smart Balance");
        assert_eq!(request.tasks.len(), 2);
        assert_eq!(
            request.tasks[0].due_date,
            Some(DueDate::Date(NaiveDate::from_ymd_opt(2025, 11, 30).unwrap()))
        );
        assert_eq!(request.tasks[0].estimated_hours, Some(3.0));
        assert_eq!(request.tasks[1].dependencies, vec!["t1"]);
    }

    #[test]
    fn test_parse_bare_array_uses_default_strategy() {
        let request = parse_request(r#"[{"id": "a"}]"#).unwrap();
        assert_eq!(request.strategy, "Smart Balance");
        assert_eq!(request.tasks[0].id, "a");
        assert_eq!(request.tasks[0].importance, None);
    }

    #[test]
    fn test_wrong_field_types_are_defaulted() {
        let json = r#"[{
            "id": "odd",
            "due_date": "someday",
            "estimated_hours": "lots",
            "importance": "high",
            "dependencies": "a,b"
        }]"#;
        let task = &parse_request(json).unwrap().tasks[0];

        assert_eq!(task.due_date, Some(DueDate::Text("someday".to_string())));
        assert_eq!(task.estimated_hours, None);
        assert_eq!(task.importance, None);
        assert!(task.dependencies.is_empty());
    }

    #[test]
    fn test_null_fields() {
        let json = r#"[{"id": "n", "due_date": null, "estimated_hours": null}]"#;
        let task = &parse_request(json).unwrap().tasks[0];
        assert_eq!(task.due_date, None);
        assert_eq!(task.estimated_hours, None);
    }

    #[test]
    fn test_not_a_sequence() {
        assert!(matches!(
            parse_request(r#""tasks""#),
            Err(RankError::NotASequence("string"))
        ));
        assert!(matches!(
            parse_request(r#"{"tasks": {"id": "a"}}"#),
            Err(RankError::NotASequence("object"))
        ));
        assert!(matches!(
            parse_request(r#"{"strategy": "High Impact"}"#),
            Err(RankError::NotASequence("null"))
        ));
        assert!(matches!(
            parse_request(r#"[{"id": "a"}, 7]"#),
            Err(RankError::NotASequence("number"))
        ));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(parse_request("[{"), Err(RankError::Payload(_))));
    }

    #[test]
    fn test_parsed_batch_scores() {
        let request = parse_request(
            r#"{"strategy": "Deadline Driven", "tasks": [
                {"id": "late", "due_date": "2025-05-30", "estimated_hours": 6},
                {"id": "open", "estimated_hours": 1, "importance": 9}
            ]}"#,
        )
        .unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let results = crate::compute_scores_at(&request.tasks, &request.strategy, today);

        assert_eq!(results[0].id, "late");
        assert_eq!(
            results[0].explanation,
            "past due by 2 days; importance 5/10; High effort; blocks no tasks"
        );
    }
}
