use super::StorageError;
use crate::domain::Task;
use std::collections::HashSet;

/// Serialize the whole collection into the blob format (a JSON array of task records)
pub fn encode_tasks(tasks: &[Task]) -> Result<String, StorageError> {
    serde_json::to_string_pretty(tasks).map_err(StorageError::Encode)
}

/// Parse a blob back into tasks. All-or-nothing: one bad record rejects the blob.
pub fn decode_tasks(blob: &str) -> Result<Vec<Task>, StorageError> {
    let tasks: Vec<Task> = serde_json::from_str(blob).map_err(StorageError::Decode)?;
    validate_tasks(&tasks)?;
    Ok(tasks)
}

/// Records must satisfy the same rules the store keeps: unique ids, a
/// non-blank title, and `completedAt` present exactly when completed.
fn validate_tasks(tasks: &[Task]) -> Result<(), StorageError> {
    let mut seen = HashSet::with_capacity(tasks.len());
    for task in tasks {
        let reason = if !seen.insert(task.id) {
            Some("duplicate id")
        } else if task.title.trim().is_empty() {
            Some("blank title")
        } else if task.completed && task.completed_at.is_none() {
            Some("completed without completedAt")
        } else if !task.completed && task.completed_at.is_some() {
            Some("completedAt on an active task")
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(StorageError::Invalid { id: task.id, reason });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Priority;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_encoded_record_layout() {
        let mut task = Task::new("Water plants", Priority::High, None).unwrap();
        task.toggle();
        let blob = encode_tasks(&[task]).unwrap();

        assert!(blob.contains("\"createdAt\""));
        assert!(blob.contains("\"completedAt\""));
        assert!(blob.contains("\"priority\": \"high\""));
        assert!(!blob.contains("\"description\""));
    }

    #[test]
    fn test_decode_restores_timestamps() {
        let blob = r#"[
            {
                "id": "5f1c1f4e-6a2b-4f0e-9a57-1c2d3e4f5a6b",
                "title": "Prune roses",
                "description": "Before the frost",
                "priority": "critical",
                "completed": true,
                "createdAt": "2024-03-01T09:30:00+00:00",
                "completedAt": "2024-03-02T10:00:00.000Z"
            }
        ]"#;

        let tasks = decode_tasks(blob).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Prune roses");
        assert_eq!(tasks[0].priority, Priority::Critical);
        assert_eq!(tasks[0].created_at.timestamp(), 1_709_285_400);
        assert!(tasks[0].completed_at.is_some());
    }

    #[test]
    fn test_decode_rejects_malformed_blob() {
        assert!(matches!(
            decode_tasks("{not json"),
            Err(StorageError::Decode(_))
        ));
    }

    #[test]
    fn test_decode_is_all_or_nothing() {
        let blob = r#"[
            {"id": "5f1c1f4e-6a2b-4f0e-9a57-1c2d3e4f5a6b", "title": "Good", "priority": "low",
             "completed": false, "createdAt": "2024-03-01T09:30:00Z"},
            {"id": "not-a-uuid", "title": "Bad", "priority": "low",
             "completed": false, "createdAt": "yesterday"}
        ]"#;
        assert!(decode_tasks(blob).is_err());
    }

    fn record(id: &str, title: &str, completed: bool, completed_at: Option<&str>) -> String {
        let completed_at = completed_at
            .map(|t| format!(r#", "completedAt": "{}""#, t))
            .unwrap_or_default();
        format!(
            r#"{{"id": "{}", "title": "{}", "priority": "low", "completed": {}, "createdAt": "2024-03-01T09:30:00Z"{}}}"#,
            id, title, completed, completed_at
        )
    }

    const ID_A: &str = "5f1c1f4e-6a2b-4f0e-9a57-1c2d3e4f5a6b";
    const ID_B: &str = "0c9d8e7f-1a2b-4c3d-8e5f-6a7b8c9d0e1f";

    fn invalid_reason(records: &[String]) -> &'static str {
        match decode_tasks(&format!("[{}]", records.join(","))) {
            Err(StorageError::Invalid { reason, .. }) => reason,
            other => panic!("expected invalid blob, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_rejects_completed_without_timestamp() {
        let reason = invalid_reason(&[record(ID_A, "Prune", true, None)]);
        assert_eq!(reason, "completed without completedAt");
    }

    #[test]
    fn test_decode_rejects_timestamp_on_active_task() {
        let reason = invalid_reason(&[record(ID_A, "Prune", false, Some("2024-03-02T10:00:00Z"))]);
        assert_eq!(reason, "completedAt on an active task");
    }

    #[test]
    fn test_decode_rejects_blank_title() {
        let reason = invalid_reason(&[record(ID_A, "   ", false, None)]);
        assert_eq!(reason, "blank title");
    }

    #[test]
    fn test_decode_rejects_duplicate_ids() {
        let reason = invalid_reason(&[
            record(ID_A, "Prune", false, None),
            record(ID_A, "Dup", false, None),
        ]);
        assert_eq!(reason, "duplicate id");
    }

    #[test]
    fn test_decode_accepts_consistent_records() {
        let tasks = decode_tasks(&format!(
            "[{},{}]",
            record(ID_A, "Prune", true, Some("2024-03-02T10:00:00Z")),
            record(ID_B, "Weed", false, None)
        ))
        .unwrap();
        assert_eq!(tasks.len(), 2);
    }

    #[test]
    fn test_encode_decode_preserves_order() {
        let tasks = vec![
            Task::new("First", Priority::Low, None).unwrap(),
            Task::new("Second", Priority::Medium, Some("notes")).unwrap(),
        ];
        let decoded = decode_tasks(&encode_tasks(&tasks).unwrap()).unwrap();
        assert_eq!(decoded, tasks);
    }
}
