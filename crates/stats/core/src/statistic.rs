//! A single player-defined statistic.

use crate::format::StatFormat;
use crate::icon::DisplayIcon;
use crate::key::StatisticKey;
use crate::pertain::Pertainability;
use crate::score::ScoreTable;
use crate::subject::is_blank;

/// One named statistic with its ownership, display metadata and scores.
///
/// Setters never panic or raise. They return `false` when the input is blank
/// or the requested state already holds, leaving the statistic untouched.
///
/// # Invariants
///
/// - `key` never changes after construction.
/// - The owner is always present in `maintainers` and cannot be removed from
///   it while they remain owner.
/// - `maintainers` keeps insertion order and holds no duplicates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomStatistic {
    key: StatisticKey,
    display_name: String,
    owner: String,
    maintainers: Vec<String>,
    scores: ScoreTable,
    display_icon: Option<DisplayIcon>,
    format: StatFormat,
}

impl CustomStatistic {
    /// Creates a statistic owned (and maintained) by `owner`.
    pub fn new(key: StatisticKey, display_name: impl Into<String>, owner: impl Into<String>) -> Self {
        let owner = owner.into();
        Self {
            key,
            display_name: display_name.into(),
            maintainers: vec![owner.clone()],
            owner,
            scores: ScoreTable::new(),
            display_icon: None,
            format: StatFormat::Default,
        }
    }

    // ------------------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------------------

    pub fn key(&self) -> &StatisticKey {
        &self.key
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn maintainers(&self) -> &[String] {
        &self.maintainers
    }

    pub fn format(&self) -> StatFormat {
        self.format
    }

    /// Returns the explicit icon, or the owner's head when none is set.
    pub fn display_icon(&self) -> DisplayIcon {
        self.display_icon
            .clone()
            .unwrap_or_else(|| DisplayIcon::player_head(&self.owner))
    }

    /// Returns true if an icon was set explicitly.
    pub fn has_explicit_icon(&self) -> bool {
        self.display_icon.is_some()
    }

    /// Transfers ownership. The new owner joins the maintainers if needed.
    pub fn set_owner(&mut self, subject: &str) -> bool {
        if is_blank(subject) || self.owner == subject {
            return false;
        }
        self.owner = subject.to_owned();
        if !self.is_maintainer(subject) {
            self.maintainers.push(subject.to_owned());
        }
        true
    }

    pub fn set_display_name(&mut self, name: &str) -> bool {
        if is_blank(name) {
            return false;
        }
        self.display_name = name.to_owned();
        true
    }

    pub fn set_format(&mut self, format: StatFormat) -> bool {
        self.format = format;
        true
    }

    /// Sets the icon. `None` restores the derived default.
    pub fn set_display_icon(&mut self, icon: Option<DisplayIcon>) -> bool {
        self.display_icon = icon;
        true
    }

    pub fn add_maintainer(&mut self, subject: &str) -> bool {
        if is_blank(subject) || self.is_maintainer(subject) {
            return false;
        }
        self.maintainers.push(subject.to_owned());
        true
    }

    /// Removes a maintainer. Refuses unknown subjects and the current owner.
    pub fn remove_maintainer(&mut self, subject: &str) -> bool {
        if is_blank(subject) || self.owner == subject {
            return false;
        }
        let before = self.maintainers.len();
        self.maintainers.retain(|maintainer| maintainer != subject);
        self.maintainers.len() != before
    }

    /// Replaces the maintainers with `subjects` in the given order.
    ///
    /// Blank and repeated names are dropped. The owner is put first if the
    /// list does not already name them.
    pub fn restore_maintainers<I, S>(&mut self, subjects: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut maintainers: Vec<String> = Vec::new();
        for subject in subjects {
            let subject = subject.as_ref();
            if !is_blank(subject) && !maintainers.iter().any(|known| known == subject) {
                maintainers.push(subject.to_owned());
            }
        }
        if !maintainers.contains(&self.owner) {
            maintainers.insert(0, self.owner.clone());
        }
        self.maintainers = maintainers;
    }

    pub fn is_maintainer(&self, subject: &str) -> bool {
        self.maintainers.iter().any(|maintainer| maintainer == subject)
    }

    pub fn is_owner(&self, subject: &str) -> bool {
        self.owner == subject
    }

    /// Returns true if `subject` stands in the `mode` relation to this statistic.
    pub fn pertains(&self, subject: &str, mode: Pertainability) -> bool {
        match mode {
            Pertainability::All => true,
            Pertainability::Maintains => self.is_maintainer(subject),
            Pertainability::Owns => self.is_owner(subject),
        }
    }

    // ------------------------------------------------------------------------
    // Scores
    // ------------------------------------------------------------------------

    pub fn scores(&self) -> &ScoreTable {
        &self.scores
    }

    pub fn get_score(&self, subject: &str) -> i32 {
        self.scores.get(subject)
    }

    pub fn set_score(&mut self, subject: &str, value: i32) -> i32 {
        self.scores.set(subject, value)
    }

    pub fn add_score(&mut self, subject: &str, delta: i32) -> i32 {
        self.scores.add(subject, delta)
    }

    pub fn remove_score(&mut self, subject: &str, delta: i32) -> i32 {
        self.scores.remove(subject, delta)
    }

    pub fn reset_score(&mut self, subject: &str) -> i32 {
        self.scores.reset(subject)
    }

    /// Score for `subject` rendered with this statistic's format.
    pub fn formatted_score(&self, subject: &str) -> String {
        self.format.format(self.get_score(subject))
    }

    pub fn scores_snapshot(&self) -> Vec<(String, i32)> {
        self.scores.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kills() -> CustomStatistic {
        let key = StatisticKey::new("ns", "kills").unwrap();
        CustomStatistic::new(key, "Kills", "alice")
    }

    #[test]
    fn creation_seeds_owner_as_maintainer() {
        let stat = kills();
        assert_eq!(stat.key().to_string(), "ns:kills");
        assert_eq!(stat.display_name(), "Kills");
        assert_eq!(stat.owner(), "alice");
        assert_eq!(stat.maintainers(), ["alice".to_string()]);
        assert_eq!(stat.format(), StatFormat::Default);
    }

    #[test]
    fn scores_accumulate_per_subject() {
        let mut stat = kills();
        stat.add_score("bob", 5);
        stat.add_score("bob", -2);
        assert_eq!(stat.get_score("bob"), 3);
        assert_eq!(stat.get_score("carol"), 0);
        assert_eq!(stat.reset_score("bob"), 0);
        assert_eq!(stat.scores_snapshot(), vec![("bob".to_string(), 0)]);
    }

    #[test]
    fn owner_cannot_be_removed_as_maintainer() {
        let mut stat = kills();
        assert!(stat.add_maintainer("bob"));
        assert!(!stat.add_maintainer("bob"));
        assert!(!stat.remove_maintainer("alice"));
        assert!(stat.is_maintainer("alice"));
        assert!(stat.remove_maintainer("bob"));
        assert!(!stat.remove_maintainer("bob"));
        assert!(!stat.remove_maintainer(""));
    }

    #[test]
    fn ownership_transfer() {
        let mut stat = kills();
        assert!(!stat.set_owner("alice"));
        assert!(!stat.set_owner(""));
        assert!(stat.set_owner("dave"));
        assert!(stat.pertains("dave", Pertainability::Owns));
        assert!(stat.pertains("dave", Pertainability::Maintains));
        assert!(!stat.pertains("alice", Pertainability::Owns));
        assert!(stat.pertains("alice", Pertainability::Maintains));
        assert!(stat.remove_maintainer("alice"));
    }

    #[test]
    fn restored_maintainers_keep_their_order() {
        let mut stat = kills();
        stat.restore_maintainers(["bob", "alice", "", "bob", "carol"]);
        assert_eq!(stat.maintainers(), ["bob", "alice", "carol"]);

        stat.restore_maintainers(["carol"]);
        assert_eq!(stat.maintainers(), ["alice", "carol"]);
    }

    #[test]
    fn pertains_all_is_unconditional() {
        let stat = kills();
        assert!(stat.pertains("stranger", Pertainability::All));
        assert!(!stat.pertains("stranger", Pertainability::Maintains));
    }

    #[test]
    fn display_metadata() {
        let mut stat = kills();
        assert!(!stat.set_display_name(""));
        assert!(stat.set_display_name("Mob Kills"));
        assert_eq!(stat.display_icon(), DisplayIcon::player_head("alice"));

        stat.set_display_icon(Some(DisplayIcon::item("minecraft:diamond_sword")));
        assert!(stat.has_explicit_icon());
        stat.set_display_icon(None);
        assert_eq!(stat.display_icon().label(), "alice's Head");

        stat.set_format(StatFormat::Distance);
        stat.set_score("bob", 250);
        assert_eq!(stat.formatted_score("bob"), "2.50 m");
    }
}
