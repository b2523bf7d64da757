//! Persisted registry layout.
//!
//! ```text
//! { "custom_statistics": [ {
//!     "key": "bbstats:kills",
//!     "display_name": "Kills",
//!     "owner_name": "alice",
//!     "format": "default",
//!     "maintainers": ["alice"],
//!     "scores": { "bob": 3 }
//! } ] }
//! ```
//!
//! Reading is lenient per field: a value of the wrong type reads as missing,
//! a non-object record reads as an empty record, and a non-integer score is
//! dropped. Whether a record is usable is decided by the registry on load.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The whole persisted registry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    #[serde(default, deserialize_with = "lenient_records")]
    pub custom_statistics: Vec<StatisticRecord>,
}

/// One persisted statistic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub key: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub display_name: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub owner_name: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub format: Option<String>,

    #[serde(default, deserialize_with = "lenient_strings")]
    pub maintainers: Vec<String>,

    #[serde(default, deserialize_with = "lenient_scores")]
    pub scores: BTreeMap<String, i32>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(value) => Some(value),
        _ => None,
    })
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(values) => values
            .into_iter()
            .filter_map(|value| match value {
                Value::String(value) => Some(value),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_scores<'de, D>(deserializer: D) -> Result<BTreeMap<String, i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(entries) => entries
            .into_iter()
            .filter_map(|(subject, score)| {
                let score = score.as_i64().and_then(|score| i32::try_from(score).ok())?;
                Some((subject, score))
            })
            .collect(),
        _ => BTreeMap::new(),
    })
}

fn lenient_records<'de, D>(deserializer: D) -> Result<Vec<StatisticRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(values) => values
            .into_iter()
            .map(|value| serde_json::from_value(value).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_types_read_as_missing() {
        let snapshot: RegistrySnapshot = serde_json::from_str(
            r#"{ "custom_statistics": [
                { "key": "bbstats:a", "display_name": 7, "owner_name": "alice",
                  "maintainers": ["alice", 3], "scores": { "bob": 2, "eve": "x", "big": 9999999999 } },
                42
            ] }"#,
        )
        .unwrap();

        assert_eq!(snapshot.custom_statistics.len(), 2);
        let first = &snapshot.custom_statistics[0];
        assert_eq!(first.display_name, None);
        assert_eq!(first.maintainers, ["alice".to_string()]);
        assert_eq!(first.scores.len(), 1);
        assert_eq!(snapshot.custom_statistics[1], StatisticRecord::default());
    }

    #[test]
    fn missing_list_is_empty() {
        let snapshot: RegistrySnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.custom_statistics.is_empty());
    }

    #[test]
    fn writes_every_field() {
        let record = StatisticRecord {
            key: Some("bbstats:a".into()),
            display_name: Some("A".into()),
            owner_name: Some("alice".into()),
            format: Some("default".into()),
            maintainers: vec!["alice".into()],
            scores: BTreeMap::new(),
        };
        let json = serde_json::to_value(&record).unwrap();
        for field in ["key", "display_name", "owner_name", "format", "maintainers", "scores"] {
            assert!(json.get(field).is_some(), "missing {field}");
        }
    }
}
