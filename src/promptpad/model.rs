use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current time truncated to millisecond precision — the finest the
/// persisted format represents, so in-memory timestamps always round-trip
/// exactly through the file.
pub fn now() -> DateTime<Utc> {
    let now = Utc::now();
    now.with_nanosecond(now.nanosecond() / 1_000_000 * 1_000_000)
        .unwrap_or(now)
}

/// One prompt entry: free text under a two-level Group/Subgroup
/// classification. Both classification labels may be empty; the subgroup is
/// only meaningful within its group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Opaque unique id. Freshly created records get a UUID v4, but any
    /// non-empty string read from disk is kept as-is.
    pub id: String,
    pub group: String,
    pub subgroup: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record {
    pub fn new(group: String, subgroup: String, title: String, content: String) -> Self {
        let now = now();
        Self {
            id: Uuid::new_v4().to_string(),
            group,
            subgroup,
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// The uniqueness key: no two records in a store may share it.
    pub fn key(&self) -> RecordKey {
        RecordKey::new(&self.group, &self.subgroup, &self.title)
    }
}

/// Trimmed, lowercased (group, subgroup, title) triple used for duplicate
/// detection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    group: String,
    subgroup: String,
    title: String,
}

impl RecordKey {
    pub fn new(group: &str, subgroup: &str, title: &str) -> Self {
        Self {
            group: normalize(group),
            subgroup: normalize(subgroup),
            title: normalize(title),
        }
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_stamps_id_and_equal_timestamps() {
        let r = Record::new("Work".into(), "Emails".into(), "T".into(), "C".into());
        assert!(!r.id.is_empty());
        assert_eq!(r.created_at, r.updated_at);
    }

    #[test]
    fn key_ignores_case_and_surrounding_whitespace() {
        assert_eq!(
            RecordKey::new(" Work ", "Emails", "Greeting"),
            RecordKey::new("work", " EMAILS", "greeting ")
        );
        assert_ne!(
            RecordKey::new("Work", "Emails", "Greeting"),
            RecordKey::new("Work", "", "Greeting")
        );
    }
}
