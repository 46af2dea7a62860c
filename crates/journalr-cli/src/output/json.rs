//! JSON output formatting for entries.

use journalr_core::Entry;

/// Convert an entry to JSON for output.
pub fn entry_json(entry: &Entry) -> serde_json::Value {
    serde_json::json!({
        "id": entry.id,
        "text": entry.text,
        "entry_date": entry.entry_date,
        "created_date": entry.created_date,
        "tags": entry.tags,
    })
}

/// Convert multiple entries to JSON array for output.
pub fn entries_json(entries: &[Entry]) -> Vec<serde_json::Value> {
    entries.iter().map(entry_json).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_entry_json_fields() {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let entry = Entry::new("amber-falcon-42", "hello", date)
            .with_created_date(date)
            .with_tags(vec!["x".to_string()]);

        let value = entry_json(&entry);

        assert_eq!(value["id"], "amber-falcon-42");
        assert_eq!(value["text"], "hello");
        assert_eq!(value["entry_date"], "2024-01-01T09:00:00Z");
        assert_eq!(value["tags"][0], "x");
    }
}
