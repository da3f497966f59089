//! The task record every scoring and export operation reads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A task as entered by the user.
///
/// The three effort attributes are on a 1-5 scale. The crate does not
/// enforce the bounds; callers validate before persisting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, opaque and stable
    pub id: String,
    /// Display name
    pub name: String,
    /// Project registry key. May reference a key absent from the
    /// registry; display sites fall back to "Other".
    pub project: String,
    /// How much the task matters (1-5)
    pub importance: u8,
    /// How long the task takes (1-5)
    pub length: u8,
    /// How hard the task is (1-5)
    pub difficulty: u8,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM`, kept as entered. The
    /// calendar lookup compares this string verbatim, so a deadline
    /// with a time component never matches a date-only query.
    #[serde(default)]
    pub deadline: Option<String>,
}

impl Task {
    /// Whether a deadline is set at all.
    pub fn has_deadline(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn task_serialization_roundtrip() {
        let task = Task {
            id: "t-1".to_string(),
            name: "Write slides".to_string(),
            project: "talks".to_string(),
            importance: 4,
            length: 2,
            difficulty: 3,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
            deadline: Some("2024-03-15T09:00".to_string()),
        };

        let json = serde_json::to_string(&task).unwrap();
        let decoded: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, task);
    }

    #[test]
    fn deadline_field_is_optional_in_stored_documents() {
        let json = r#"{
            "id": "t-2",
            "name": "Tidy inbox",
            "project": "other",
            "importance": 1,
            "length": 1,
            "difficulty": 1,
            "created_at": "2024-03-01T09:00:00Z"
        }"#;
        let decoded: Task = serde_json::from_str(json).unwrap();
        assert!(!decoded.has_deadline());
    }
}
