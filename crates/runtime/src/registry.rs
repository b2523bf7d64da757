//! The live collection of custom statistics.
//!
//! A [`StatisticRegistry`] is constructed once by the host and passed by
//! reference into command and rendering handlers. Every mutation that must be
//! persisted sets the dirty flag; the persistence consumer clears it after a
//! successful flush.

use stats_core::{CustomStatistic, KeyError, Pertainability, StatFormat, StatisticKey, is_blank};

use crate::caller::Caller;
use crate::error::RegistryError;
use crate::repository::{RegistrySnapshot, StatisticRecord};

/// Outcome of rebuilding a registry from a snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

#[derive(Clone, Debug)]
pub struct StatisticRegistry {
    statistics: Vec<CustomStatistic>,
    namespace: String,
    dirty: bool,
}

impl Default for StatisticRegistry {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAMESPACE)
    }
}

impl StatisticRegistry {
    /// Namespace custom statistics are created under unless configured.
    pub const DEFAULT_NAMESPACE: &'static str = "bbstats";

    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            statistics: Vec::new(),
            namespace: namespace.into(),
            dirty: false,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Resolves a bare path into this registry's namespace.
    pub fn key_for(&self, path: &str) -> Result<StatisticKey, KeyError> {
        StatisticKey::new(self.namespace.as_str(), path)
    }

    // ========================================================================
    // Creation / deletion
    // ========================================================================

    /// Registers a new statistic. Only key uniqueness is enforced here.
    pub fn create(
        &mut self,
        key: StatisticKey,
        display_name: impl Into<String>,
        owner: impl Into<String>,
    ) -> Result<&CustomStatistic, RegistryError> {
        if self.find(&key).is_some() {
            return Err(RegistryError::AlreadyExists { key });
        }

        self.statistics
            .push(CustomStatistic::new(key, display_name, owner));
        self.dirty = true;

        let index = self.statistics.len() - 1;
        Ok(&self.statistics[index])
    }

    /// Same as [`create`](Self::create) with a path in this registry's namespace.
    pub fn create_path(
        &mut self,
        path: &str,
        display_name: impl Into<String>,
        owner: impl Into<String>,
    ) -> Result<&CustomStatistic, RegistryError> {
        let key = self.key_for(path)?;
        self.create(key, display_name, owner)
    }

    pub fn delete(&mut self, key: &StatisticKey) -> Result<CustomStatistic, RegistryError> {
        let index = self
            .statistics
            .iter()
            .position(|statistic| statistic.key() == key)
            .ok_or_else(|| RegistryError::NotFound { key: key.clone() })?;

        self.dirty = true;
        Ok(self.statistics.remove(index))
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    pub fn find(&self, key: &StatisticKey) -> Option<&CustomStatistic> {
        self.statistics
            .iter()
            .find(|statistic| statistic.key() == key)
    }

    /// Looks up a path in this registry's namespace.
    pub fn find_path(&self, path: &str) -> Option<&CustomStatistic> {
        let key = self.key_for(path).ok()?;
        self.find(&key)
    }

    /// Mutable access without touching the dirty flag.
    pub fn find_mut(&mut self, key: &StatisticKey) -> Option<&mut CustomStatistic> {
        self.statistics
            .iter_mut()
            .find(|statistic| statistic.key() == key)
    }

    /// Applies `f` to the statistic under `key` and marks the registry dirty.
    pub fn modify<R>(
        &mut self,
        key: &StatisticKey,
        f: impl FnOnce(&mut CustomStatistic) -> R,
    ) -> Option<R> {
        let statistic = self.find_mut(key)?;
        let result = f(statistic);
        self.dirty = true;
        Some(result)
    }

    /// Every statistic, in insertion order.
    pub fn list_all(&self) -> &[CustomStatistic] {
        &self.statistics
    }

    /// Statistics `subject` pertains to under `mode`, in insertion order.
    pub fn list_for(&self, subject: &str, mode: Pertainability) -> Vec<&CustomStatistic> {
        self.statistics
            .iter()
            .filter(|statistic| statistic.pertains(subject, mode))
            .collect()
    }

    /// Like [`list_for`](Self::list_for), with elevated callers seeing everything.
    pub fn list_for_caller(&self, caller: &Caller, mode: Pertainability) -> Vec<&CustomStatistic> {
        self.statistics
            .iter()
            .filter(|statistic| caller.pertains(statistic, mode))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.statistics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statistics.is_empty()
    }

    // ========================================================================
    // Dirty tracking
    // ========================================================================

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    // ========================================================================
    // Persistence round-trip
    // ========================================================================

    pub fn serialize(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            custom_statistics: self.statistics.iter().map(to_record).collect(),
        }
    }

    /// Rebuilds a registry from `snapshot`.
    ///
    /// Malformed records and records repeating an earlier key are skipped and
    /// logged; the rest still load. The result starts clean.
    pub fn deserialize(
        snapshot: &RegistrySnapshot,
        namespace: impl Into<String>,
    ) -> (Self, LoadReport) {
        let mut registry = Self::new(namespace);
        let mut report = LoadReport::default();

        for (index, record) in snapshot.custom_statistics.iter().enumerate() {
            let statistic = match from_record(record) {
                Ok(statistic) => statistic,
                Err(reason) => {
                    tracing::error!(
                        target: "runtime::registry",
                        index,
                        key = record.key.as_deref().unwrap_or("<missing>"),
                        reason,
                        "Failed to load custom statistic"
                    );
                    report.skipped += 1;
                    continue;
                }
            };

            if registry.find(statistic.key()).is_some() {
                tracing::warn!(
                    target: "runtime::registry",
                    index,
                    key = %statistic.key(),
                    "Skipping duplicate custom statistic"
                );
                report.skipped += 1;
                continue;
            }

            registry.statistics.push(statistic);
            report.loaded += 1;
        }

        (registry, report)
    }
}

fn to_record(statistic: &CustomStatistic) -> StatisticRecord {
    StatisticRecord {
        key: Some(statistic.key().to_string()),
        display_name: Some(statistic.display_name().to_string()),
        owner_name: Some(statistic.owner().to_string()),
        format: Some(statistic.format().name().to_string()),
        maintainers: statistic.maintainers().to_vec(),
        scores: statistic.scores().iter().map(|(subject, score)| (subject.to_string(), score)).collect(),
    }
}

fn from_record(record: &StatisticRecord) -> Result<CustomStatistic, &'static str> {
    let raw_key = record.key.as_deref().ok_or("missing key")?;
    let display_name = record
        .display_name
        .as_deref()
        .filter(|name| !is_blank(name))
        .ok_or("missing display_name")?;
    let owner = record
        .owner_name
        .as_deref()
        .filter(|owner| !is_blank(owner))
        .ok_or("missing owner_name")?;
    let key = StatisticKey::try_parse(raw_key).ok_or("unparseable key")?;

    let mut statistic = CustomStatistic::new(key, display_name, owner);
    statistic.set_format(
        record
            .format
            .as_deref()
            .map(StatFormat::from_name_or_default)
            .unwrap_or_default(),
    );
    statistic.restore_maintainers(&record.maintainers);
    for (subject, score) in &record.scores {
        statistic.set_score(subject, *score);
    }

    Ok(statistic)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(path: &str) -> StatisticKey {
        StatisticKey::new("bbstats", path).unwrap()
    }

    #[test]
    fn create_then_find() {
        let mut registry = StatisticRegistry::default();
        registry.create(key("kills"), "Kills", "alice").unwrap();

        let statistic = registry.find_path("kills").unwrap();
        assert_eq!(statistic.display_name(), "Kills");
        assert_eq!(statistic.owner(), "alice");
        assert_eq!(statistic.maintainers(), ["alice".to_string()]);
        assert!(registry.is_dirty());
    }

    #[test]
    fn duplicate_key_is_rejected() {
        let mut registry = StatisticRegistry::default();
        registry.create(key("kills"), "Kills", "alice").unwrap();
        registry.clear_dirty();

        let err = registry.create(key("kills"), "Other", "bob").unwrap_err();
        assert_eq!(err, RegistryError::AlreadyExists { key: key("kills") });
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_dirty());
    }

    #[test]
    fn create_path_rejects_bad_characters() {
        let mut registry = StatisticRegistry::default();
        let err = registry.create_path("Kills!", "Kills", "alice").unwrap_err();
        assert!(matches!(err, RegistryError::InvalidKey(KeyError::InvalidPath { .. })));
        assert!(registry.is_empty());
    }

    #[test]
    fn delete_marks_dirty() {
        let mut registry = StatisticRegistry::default();
        registry.create(key("kills"), "Kills", "alice").unwrap();
        registry.clear_dirty();

        let removed = registry.delete(&key("kills")).unwrap();
        assert_eq!(removed.key(), &key("kills"));
        assert!(registry.is_dirty());
        assert!(matches!(
            registry.delete(&key("kills")),
            Err(RegistryError::NotFound { .. })
        ));
    }

    #[test]
    fn modify_marks_dirty_only_when_found() {
        let mut registry = StatisticRegistry::default();
        registry.create(key("kills"), "Kills", "alice").unwrap();
        registry.clear_dirty();

        assert_eq!(registry.modify(&key("deaths"), |s| s.add_score("bob", 1)), None);
        assert!(!registry.is_dirty());

        assert_eq!(registry.modify(&key("kills"), |s| s.add_score("bob", 1)), Some(1));
        assert!(registry.is_dirty());
    }

    #[test]
    fn list_for_follows_pertainability() {
        let mut registry = StatisticRegistry::default();
        registry.create(key("a"), "A", "alice").unwrap();
        registry.create(key("b"), "B", "bob").unwrap();
        registry.modify(&key("b"), |s| s.add_maintainer("alice"));

        let paths = |list: Vec<&CustomStatistic>| -> Vec<String> {
            list.iter().map(|s| s.key().path().to_string()).collect()
        };

        assert_eq!(paths(registry.list_for("alice", Pertainability::Owns)), ["a"]);
        assert_eq!(paths(registry.list_for("alice", Pertainability::Maintains)), ["a", "b"]);
        assert_eq!(paths(registry.list_for("carol", Pertainability::All)), ["a", "b"]);
        assert!(registry.list_for("carol", Pertainability::Maintains).is_empty());

        assert_eq!(registry.list_for_caller(&Caller::console(), Pertainability::Owns).len(), 2);
        assert!(
            registry
                .list_for_caller(&Caller { subject: None, elevated: false }, Pertainability::Owns)
                .is_empty()
        );
    }

    #[test]
    fn round_trip_preserves_statistics() {
        let mut registry = StatisticRegistry::default();
        registry.create(key("kills"), "Kills", "alice").unwrap();
        registry.create(key("walked"), "Walked", "bob").unwrap();
        registry.modify(&key("kills"), |s| {
            s.add_maintainer("carol");
            s.set_owner("dave");
            s.add_score("bob", 3);
            s.set_format(StatFormat::Time);
        });

        let (loaded, report) = StatisticRegistry::deserialize(&registry.serialize(), "bbstats");
        assert_eq!(report, LoadReport { loaded: 2, skipped: 0 });
        assert!(!loaded.is_dirty());

        let kills = loaded.find(&key("kills")).unwrap();
        assert_eq!(kills.owner(), "dave");
        assert_eq!(kills.maintainers(), ["alice", "carol", "dave"]);

        for (before, after) in registry.list_all().iter().zip(loaded.list_all()) {
            assert_eq!(before.key(), after.key());
            assert_eq!(before.display_name(), after.display_name());
            assert_eq!(before.owner(), after.owner());
            assert_eq!(before.maintainers(), after.maintainers());
            assert_eq!(before.format(), after.format());
            assert_eq!(before.scores(), after.scores());
        }
    }

    #[test]
    fn malformed_and_duplicate_records_are_skipped() {
        let good = StatisticRecord {
            key: Some("bbstats:kills".into()),
            display_name: Some("Kills".into()),
            owner_name: Some("alice".into()),
            format: Some("no_such_format".into()),
            ..Default::default()
        };
        let snapshot = RegistrySnapshot {
            custom_statistics: vec![
                StatisticRecord { owner_name: None, ..good.clone() },
                good.clone(),
                StatisticRecord { key: Some("Bad Key".into()), ..good.clone() },
                StatisticRecord { display_name: Some(String::new()), ..good.clone() },
                good.clone(),
            ],
        };

        let (registry, report) = StatisticRegistry::deserialize(&snapshot, "bbstats");
        assert_eq!(report, LoadReport { loaded: 1, skipped: 4 });
        let statistic = registry.find(&key("kills")).unwrap();
        assert_eq!(statistic.format(), StatFormat::Default);
        assert_eq!(statistic.maintainers(), ["alice".to_string()]);
    }
}
