use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One task as supplied by the task store.
///
/// The engine only reads `completed`; `id` is carried for the caller's
/// convenience and never interpreted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TaskRecord {
    #[serde(default)]
    pub id: Value,
    /// Missing or falsy values mean "incomplete".
    #[serde(default, deserialize_with = "truthy")]
    pub completed: bool,
}

impl TaskRecord {
    pub fn new(completed: bool) -> Self {
        Self {
            id: Value::Null,
            completed,
        }
    }
}

/// Parse an ordered task list from a JSON array.
pub fn parse_tasks(json: &str) -> Result<Vec<TaskRecord>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Coerce any JSON value the way a script host would test it in a condition.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_records() {
        let tasks = parse_tasks(r#"[
            { "id": 1, "completed": true },
            { "id": "b", "completed": false }
        ]"#)
        .unwrap();
        assert_eq!(tasks.len(), 2);
        assert!(tasks[0].completed);
        assert!(!tasks[1].completed);
        assert_eq!(tasks[1].id, Value::String("b".into()));
    }

    #[test]
    fn missing_flag_is_incomplete() {
        let tasks = parse_tasks(r#"[{ "id": 7 }, {}]"#).unwrap();
        assert!(tasks.iter().all(|t| !t.completed));
    }

    #[test]
    fn non_boolean_flags_use_truthiness() {
        let tasks = parse_tasks(
            r#"[
                { "completed": 0 },
                { "completed": 1 },
                { "completed": "" },
                { "completed": "yes" },
                { "completed": null },
                { "completed": {} }
            ]"#,
        )
        .unwrap();
        let flags: Vec<bool> = tasks.iter().map(|t| t.completed).collect();
        assert_eq!(flags, vec![false, true, false, true, false, true]);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let tasks = parse_tasks(r#"[{ "id": 1, "text": "water plants", "completed": true }]"#).unwrap();
        assert!(tasks[0].completed);
    }

    #[test]
    fn non_array_is_an_error() {
        assert!(parse_tasks(r#"{ "completed": true }"#).is_err());
    }
}
