//! Per-statistic score storage.

use std::collections::BTreeMap;

use crate::subject::is_blank;

/// Mapping from subject name to integer score.
///
/// Reads of an absent subject yield `0` without creating an entry, so the
/// table (and its persisted form) only grows for subjects that were written.
/// Arithmetic wraps on overflow, matching 32-bit integer scores.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ScoreTable {
    scores: BTreeMap<String, i32>,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the score for `subject`, or `0` if none was recorded.
    pub fn get(&self, subject: &str) -> i32 {
        self.scores.get(subject).copied().unwrap_or(0)
    }

    /// Stores `value` and returns it. A blank subject is ignored and yields `0`.
    pub fn set(&mut self, subject: &str, value: i32) -> i32 {
        if is_blank(subject) {
            return 0;
        }
        self.scores.insert(subject.to_owned(), value);
        value
    }

    /// Adds `delta` to the current score and returns the new value.
    pub fn add(&mut self, subject: &str, delta: i32) -> i32 {
        let current = self.get(subject);
        self.set(subject, current.wrapping_add(delta))
    }

    /// Subtracts `delta` from the current score and returns the new value.
    pub fn remove(&mut self, subject: &str, delta: i32) -> i32 {
        self.add(subject, delta.wrapping_neg())
    }

    /// Sets the score back to `0`. The entry is kept.
    pub fn reset(&mut self, subject: &str) -> i32 {
        self.set(subject, 0)
    }

    /// Returns true if a score was ever written for `subject`.
    pub fn contains(&self, subject: &str) -> bool {
        self.scores.contains_key(subject)
    }

    /// Copies every recorded `(subject, score)` pair. Callers sort as needed.
    pub fn snapshot(&self) -> Vec<(String, i32)> {
        self.scores
            .iter()
            .map(|(subject, score)| (subject.clone(), *score))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> + '_ {
        self.scores
            .iter()
            .map(|(subject, score)| (subject.as_str(), *score))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl FromIterator<(String, i32)> for ScoreTable {
    fn from_iter<I: IntoIterator<Item = (String, i32)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (subject, score) in iter {
            table.set(&subject, score);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_subject_reads_zero_without_entry() {
        let table = ScoreTable::new();
        assert_eq!(table.get("carol"), 0);
        assert!(table.is_empty());
    }

    #[test]
    fn arithmetic_accumulates() {
        let mut table = ScoreTable::new();
        assert_eq!(table.add("bob", 5), 5);
        assert_eq!(table.add("bob", -2), 3);
        assert_eq!(table.remove("bob", 4), -1);
        assert_eq!(table.reset("bob"), 0);
        assert!(table.contains("bob"));
    }

    #[test]
    fn blank_subject_is_ignored() {
        let mut table = ScoreTable::new();
        assert_eq!(table.set("", 10), 0);
        assert_eq!(table.add("", 10), 0);
        assert!(table.is_empty());
    }

    #[test]
    fn overflow_wraps() {
        let mut table = ScoreTable::new();
        table.set("max", i32::MAX);
        assert_eq!(table.add("max", 1), i32::MIN);
        assert_eq!(table.remove("min", i32::MIN), i32::MIN);
    }

    #[test]
    fn collects_skipping_blank_subjects() {
        let table: ScoreTable = vec![("a".to_string(), 1), (String::new(), 2)]
            .into_iter()
            .collect();
        assert_eq!(table.snapshot(), vec![("a".to_string(), 1)]);
    }
}
