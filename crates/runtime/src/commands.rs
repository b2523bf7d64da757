//! Command-layer operations over the live registry.
//!
//! Parsing is left to the front-end. Every operation here takes an already
//! resolved [`Caller`] plus plain arguments, never panics or raises, and
//! reports through a [`CommandOutcome`]: an integer result code (0 means
//! failure for mutating commands) and the feedback lines to show.
//!
//! Statistic lookups take a key path and resolve it in the registry
//! namespace. Authorization runs before argument validation, so an
//! unauthorized caller never learns whether a target name was valid.

use stats_core::{
    CustomStatistic, DisplayIcon, ErrorSeverity, Pertainability, StatFormat, StatisticKey,
    is_blank, is_valid_subject_name,
};

use crate::caller::Caller;
use crate::error::RegistryError;
use crate::registry::StatisticRegistry;

/// One line of command output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub text: String,
    pub is_error: bool,
    /// Also relayed to other operators, as state-changing results are.
    pub broadcast: bool,
}

impl Feedback {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
            broadcast: false,
        }
    }

    pub fn broadcast(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
            broadcast: true,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
            broadcast: false,
        }
    }
}

/// Result of a command: a result code plus feedback lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandOutcome {
    pub code: i32,
    pub feedback: Vec<Feedback>,
    /// Set on failure.
    pub severity: Option<ErrorSeverity>,
}

impl CommandOutcome {
    pub fn success(code: i32, feedback: Feedback) -> Self {
        Self {
            code,
            feedback: vec![feedback],
            severity: None,
        }
    }

    pub fn failure(severity: ErrorSeverity, message: impl Into<String>) -> Self {
        Self {
            code: 0,
            feedback: vec![Feedback::error(message)],
            severity: Some(severity),
        }
    }

    /// Appends another feedback line.
    pub fn with(mut self, feedback: Feedback) -> Self {
        self.feedback.push(feedback);
        self
    }

    pub fn is_success(&self) -> bool {
        self.severity.is_none()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.feedback.iter().map(|feedback| feedback.text.as_str())
    }
}

const NO_PERMISSION: &str = "You do not have permission to use this command.";
const INVALID_KEY: &str = "Stat keys must only have a-z, 0-9, and underscore as characters!";
const NOT_A_PLAYER: &str = "Not a valid player!";
const NO_TARGETS: &str = "No player was found";

/// Command handlers bound to one registry.
pub struct StatisticCommands<'a> {
    registry: &'a mut StatisticRegistry,
}

impl<'a> StatisticCommands<'a> {
    pub fn new(registry: &'a mut StatisticRegistry) -> Self {
        Self { registry }
    }

    // ========================================================================
    // stats
    // ========================================================================

    /// Registers a new statistic. Elevated callers only.
    pub fn create(
        &mut self,
        caller: &Caller,
        path: &str,
        display_name: &str,
        owner: &str,
    ) -> CommandOutcome {
        if !caller.elevated {
            return CommandOutcome::failure(ErrorSeverity::Authorization, NO_PERMISSION);
        }
        if !is_valid_subject_name(owner) {
            return CommandOutcome::failure(ErrorSeverity::Validation, NOT_A_PLAYER);
        }
        if !StatisticKey::is_valid_path(path) {
            return CommandOutcome::failure(ErrorSeverity::Validation, INVALID_KEY);
        }
        if is_blank(display_name) {
            return CommandOutcome::failure(
                ErrorSeverity::Validation,
                "Display name cannot be empty",
            );
        }

        match self.registry.create_path(path, display_name, owner) {
            Ok(statistic) => {
                tracing::info!(key = %statistic.key(), owner, "Created custom statistic");
                CommandOutcome::success(
                    1,
                    Feedback::broadcast(format!("Created new custom stat [{display_name}]")),
                )
            }
            Err(RegistryError::AlreadyExists { .. }) => CommandOutcome::failure(
                ErrorSeverity::Validation,
                "A custom statistic already exists by that name",
            ),
            Err(RegistryError::InvalidKey(_)) | Err(RegistryError::NotFound { .. }) => {
                CommandOutcome::failure(ErrorSeverity::Validation, INVALID_KEY)
            }
        }
    }

    /// Removes a statistic. Elevated callers only.
    pub fn delete(&mut self, caller: &Caller, path: &str) -> CommandOutcome {
        if !caller.elevated {
            return CommandOutcome::failure(ErrorSeverity::Authorization, NO_PERMISSION);
        }
        let Some(key) = self.registry.find_path(path).map(|s| s.key().clone()) else {
            return unknown_statistic(path);
        };

        match self.registry.delete(&key) {
            Ok(statistic) => {
                tracing::info!(key = %key, "Deleted custom statistic");
                CommandOutcome::success(
                    1,
                    Feedback::broadcast(format!(
                        "Deleted custom stat [{}]",
                        statistic.display_name()
                    )),
                )
            }
            Err(_) => unknown_statistic(path),
        }
    }

    pub fn list(&self) -> CommandOutcome {
        let statistics = self.registry.list_all();
        if statistics.is_empty() {
            return CommandOutcome::success(1, Feedback::info("There are no custom stats"));
        }

        let names: Vec<&str> = statistics.iter().map(|s| s.display_name()).collect();
        CommandOutcome::success(
            1,
            Feedback::info(format!(
                "There are {} custom stat(s): [{}]",
                statistics.len(),
                names.join("], [")
            )),
        )
    }

    pub fn get(&self, caller: &Caller, path: &str) -> CommandOutcome {
        self.view(caller, path, Pertainability::All, |statistic| {
            CommandOutcome::success(
                1,
                Feedback::info(format!(
                    "[{}] has the following properties:",
                    statistic.display_name()
                )),
            )
            .with(Feedback::info(format!("- Owner: {}", statistic.owner())))
            .with(Feedback::info(format!(
                "- Maintainer(s): {}",
                statistic.maintainers().join(", ")
            )))
            .with(Feedback::info(format!(
                "- Display Item: {}",
                statistic.display_icon().label()
            )))
            .with(Feedback::info(format!(
                "- Number format: {}",
                statistic.format().name()
            )))
        })
    }

    /// Key paths the caller may address under `mode`, for completion.
    pub fn suggest_keys(&self, caller: &Caller, mode: Pertainability) -> Vec<String> {
        self.registry
            .list_for_caller(caller, mode)
            .into_iter()
            .map(|statistic| statistic.key().path().to_string())
            .collect()
    }

    // ========================================================================
    // players
    // ========================================================================

    /// Returns the target's score as the result code.
    pub fn players_get(&self, caller: &Caller, path: &str, target: &str) -> CommandOutcome {
        self.view(caller, path, Pertainability::Maintains, |statistic| {
            if !is_valid_subject_name(target) {
                return CommandOutcome::failure(ErrorSeverity::Validation, NOT_A_PLAYER);
            }
            let score = statistic.get_score(target);
            CommandOutcome::success(
                score,
                Feedback::info(format!(
                    "{target} has a [{}] score of {score}",
                    statistic.display_name()
                )),
            )
        })
    }

    /// Lists every recorded score, highest first.
    pub fn players_list(&self, caller: &Caller, path: &str) -> CommandOutcome {
        self.view(caller, path, Pertainability::Maintains, |statistic| {
            let mut scores = statistic.scores_snapshot();
            scores.sort_by_key(|(_, score)| std::cmp::Reverse(*score));

            if scores.is_empty() {
                return CommandOutcome::success(
                    0,
                    Feedback::info(format!(
                        "[{}] has no player scores",
                        statistic.display_name()
                    )),
                );
            }

            let header = Feedback::info(format!(
                "[{}] has the following scores:",
                statistic.display_name()
            ));
            scores.iter().enumerate().fold(
                CommandOutcome::success(scores.len() as i32, header),
                |outcome, (index, (subject, score))| {
                    outcome.with(Feedback::info(format!("#{}: {subject}: {score}", index + 1)))
                },
            )
        })
    }

    /// Adds `amount` (default 1) to each target.
    pub fn players_add(
        &mut self,
        caller: &Caller,
        path: &str,
        targets: &[&str],
        amount: Option<i32>,
    ) -> CommandOutcome {
        let amount = amount.unwrap_or(1);
        self.update(caller, path, Pertainability::Maintains, |statistic| {
            if let Err(outcome) = validate_targets(targets) {
                return outcome;
            }
            let last = targets
                .iter()
                .fold(0, |_, target| statistic.add_score(target, amount));
            let name = statistic.display_name();

            match targets {
                [target] => CommandOutcome::success(
                    last,
                    Feedback::broadcast(format!("Added {amount} to {target}'s [{name}] stat")),
                ),
                _ => CommandOutcome::success(
                    targets.len() as i32,
                    Feedback::broadcast(format!(
                        "Added {amount} to [{name}] for {} players",
                        targets.len()
                    )),
                ),
            }
        })
    }

    /// Subtracts `amount` (default 1) from each target.
    pub fn players_remove(
        &mut self,
        caller: &Caller,
        path: &str,
        targets: &[&str],
        amount: Option<i32>,
    ) -> CommandOutcome {
        let amount = amount.unwrap_or(1);
        self.update(caller, path, Pertainability::Maintains, |statistic| {
            if let Err(outcome) = validate_targets(targets) {
                return outcome;
            }
            let last = targets
                .iter()
                .fold(0, |_, target| statistic.remove_score(target, amount));
            let name = statistic.display_name();

            match targets {
                [target] => CommandOutcome::success(
                    last,
                    Feedback::broadcast(format!(
                        "Subtracted {amount} from {target}'s [{name}] stat"
                    )),
                ),
                _ => CommandOutcome::success(
                    targets.len() as i32,
                    Feedback::broadcast(format!(
                        "Subtracted {amount} from [{name}] for {} players",
                        targets.len()
                    )),
                ),
            }
        })
    }

    pub fn players_set(
        &mut self,
        caller: &Caller,
        path: &str,
        targets: &[&str],
        value: i32,
    ) -> CommandOutcome {
        self.update(caller, path, Pertainability::Maintains, |statistic| {
            if let Err(outcome) = validate_targets(targets) {
                return outcome;
            }
            let last = targets
                .iter()
                .fold(0, |_, target| statistic.set_score(target, value));
            let name = statistic.display_name();

            match targets {
                [target] => CommandOutcome::success(
                    last,
                    Feedback::broadcast(format!("Set {target}'s [{name}] stat to {value}")),
                ),
                _ => CommandOutcome::success(
                    targets.len() as i32,
                    Feedback::broadcast(format!(
                        "Set [{name}] for {} players to {value}",
                        targets.len()
                    )),
                ),
            }
        })
    }

    pub fn players_reset(&mut self, caller: &Caller, path: &str, targets: &[&str]) -> CommandOutcome {
        self.update(caller, path, Pertainability::Maintains, |statistic| {
            if let Err(outcome) = validate_targets(targets) {
                return outcome;
            }
            for target in targets {
                statistic.reset_score(target);
            }
            let name = statistic.display_name();

            match targets {
                [target] => CommandOutcome::success(
                    1,
                    Feedback::broadcast(format!("Reset {target}'s [{name}] stat to 0")),
                ),
                _ => CommandOutcome::success(
                    targets.len() as i32,
                    Feedback::broadcast(format!(
                        "Reset [{name}] for {} players to 0",
                        targets.len()
                    )),
                ),
            }
        })
    }

    // ========================================================================
    // stats modify
    // ========================================================================

    pub fn set_display_name(&mut self, caller: &Caller, path: &str, name: &str) -> CommandOutcome {
        self.update(caller, path, Pertainability::Owns, |statistic| {
            if !statistic.set_display_name(name) {
                return CommandOutcome::failure(
                    ErrorSeverity::Validation,
                    format!("Failed to change the display name of {}", statistic.key()),
                );
            }
            CommandOutcome::success(
                1,
                Feedback::broadcast(format!(
                    "Changed the display name of {} to [{}]",
                    statistic.key(),
                    statistic.display_name()
                )),
            )
        })
    }

    /// Uses `item_id` as the statistic's icon.
    pub fn set_display_icon(&mut self, caller: &Caller, path: &str, item_id: &str) -> CommandOutcome {
        self.update(caller, path, Pertainability::Owns, |statistic| {
            if is_blank(item_id) {
                return CommandOutcome::failure(
                    ErrorSeverity::Validation,
                    "A display item is required for that!",
                );
            }
            let icon = DisplayIcon::item(item_id);
            let label = icon.label();
            statistic.set_display_icon(Some(icon));
            CommandOutcome::success(
                1,
                Feedback::broadcast(format!(
                    "Set the display item for [{}] to [{label}]",
                    statistic.display_name()
                )),
            )
        })
    }

    /// Falls back to the owner's head.
    pub fn reset_display_icon(&mut self, caller: &Caller, path: &str) -> CommandOutcome {
        self.update(caller, path, Pertainability::Owns, |statistic| {
            statistic.set_display_icon(None);
            CommandOutcome::success(
                1,
                Feedback::broadcast(format!(
                    "Reset the display item for [{}]",
                    statistic.display_name()
                )),
            )
        })
    }

    pub fn set_format(&mut self, caller: &Caller, path: &str, format_name: &str) -> CommandOutcome {
        self.update(caller, path, Pertainability::Owns, |statistic| {
            let Some(format) = StatFormat::by_name(format_name) else {
                return CommandOutcome::failure(ErrorSeverity::Validation, "Invalid format!");
            };
            statistic.set_format(format);
            CommandOutcome::success(
                1,
                Feedback::broadcast(format!(
                    "Set the number format for [{}] to {}",
                    statistic.display_name(),
                    format.name()
                )),
            )
        })
    }

    pub fn add_maintainer(&mut self, caller: &Caller, path: &str, subject: &str) -> CommandOutcome {
        self.update(caller, path, Pertainability::Owns, |statistic| {
            if !is_valid_subject_name(subject) {
                return CommandOutcome::failure(ErrorSeverity::Validation, NOT_A_PLAYER);
            }
            if !statistic.add_maintainer(subject) {
                return CommandOutcome::failure(
                    ErrorSeverity::Validation,
                    "Player is already a maintainer!",
                );
            }
            CommandOutcome::success(
                1,
                Feedback::broadcast(format!(
                    "Added {subject} to the list of maintainers for custom stat [{}]",
                    statistic.display_name()
                )),
            )
        })
    }

    pub fn remove_maintainer(&mut self, caller: &Caller, path: &str, subject: &str) -> CommandOutcome {
        self.update(caller, path, Pertainability::Owns, |statistic| {
            if !is_valid_subject_name(subject) {
                return CommandOutcome::failure(ErrorSeverity::Validation, NOT_A_PLAYER);
            }
            if !statistic.is_maintainer(subject) {
                return CommandOutcome::failure(
                    ErrorSeverity::Validation,
                    format!(
                        "{subject} is not a maintainer for [{}]",
                        statistic.display_name()
                    ),
                );
            }
            if !statistic.remove_maintainer(subject) {
                return CommandOutcome::failure(
                    ErrorSeverity::Validation,
                    "Cannot remove the custom stat owner from the list of maintainers!",
                );
            }
            CommandOutcome::success(
                1,
                Feedback::broadcast(format!(
                    "Removed {subject} from the list of maintainers for custom stat [{}]",
                    statistic.display_name()
                )),
            )
        })
    }

    pub fn transfer_owner(&mut self, caller: &Caller, path: &str, subject: &str) -> CommandOutcome {
        self.update(caller, path, Pertainability::Owns, |statistic| {
            if !is_valid_subject_name(subject) {
                return CommandOutcome::failure(ErrorSeverity::Validation, NOT_A_PLAYER);
            }
            if !statistic.set_owner(subject) {
                return CommandOutcome::failure(
                    ErrorSeverity::Validation,
                    "Player is already the owner!",
                );
            }
            CommandOutcome::success(
                1,
                Feedback::broadcast(format!(
                    "Changed owner of custom stat [{}] to {subject}",
                    statistic.display_name()
                )),
            )
        })
    }

    // ========================================================================
    // Lookup + authorization
    // ========================================================================

    fn view(
        &self,
        caller: &Caller,
        path: &str,
        mode: Pertainability,
        action: impl FnOnce(&CustomStatistic) -> CommandOutcome,
    ) -> CommandOutcome {
        let Some(statistic) = self.registry.find_path(path) else {
            return unknown_statistic(path);
        };
        if !caller.pertains(statistic, mode) {
            return denied(statistic, mode);
        }
        action(statistic)
    }

    /// Like `view`, marking the registry dirty when `action` succeeds.
    fn update(
        &mut self,
        caller: &Caller,
        path: &str,
        mode: Pertainability,
        action: impl FnOnce(&mut CustomStatistic) -> CommandOutcome,
    ) -> CommandOutcome {
        let Ok(key) = self.registry.key_for(path) else {
            return unknown_statistic(path);
        };
        let Some(statistic) = self.registry.find_mut(&key) else {
            return unknown_statistic(path);
        };
        if !caller.pertains(statistic, mode) {
            return denied(statistic, mode);
        }

        let outcome = action(statistic);
        if outcome.is_success() {
            self.registry.mark_dirty();
        }
        outcome
    }
}

fn unknown_statistic(path: &str) -> CommandOutcome {
    CommandOutcome::failure(
        ErrorSeverity::Validation,
        format!("Unknown custom stat '{path}'"),
    )
}

fn denied(statistic: &CustomStatistic, mode: Pertainability) -> CommandOutcome {
    let outcome = CommandOutcome::failure(ErrorSeverity::Authorization, mode.denial_message());
    match mode {
        Pertainability::Owns => outcome.with(Feedback::error(format!(
            "This custom stat is owned by {}.",
            statistic.owner()
        ))),
        Pertainability::Maintains | Pertainability::All => outcome,
    }
}

/// At least one target, each a valid player name; the first bad one aborts.
fn validate_targets(targets: &[&str]) -> Result<(), CommandOutcome> {
    if targets.is_empty() {
        return Err(CommandOutcome::failure(ErrorSeverity::Validation, NO_TARGETS));
    }
    match targets.iter().find(|target| !is_valid_subject_name(target)) {
        Some(target) => Err(CommandOutcome::failure(
            ErrorSeverity::Validation,
            format!("{target} is not a valid player!"),
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> StatisticRegistry {
        let mut registry = StatisticRegistry::default();
        registry.create_path("kills", "Kills", "alice").unwrap();
        registry.clear_dirty();
        registry
    }

    #[test]
    fn unknown_key_is_reported() {
        let mut registry = registry();
        let mut commands = StatisticCommands::new(&mut registry);
        let outcome = commands.players_add(&Caller::console(), "deaths", &["bob"], None);
        assert_eq!(outcome.code, 0);
        assert_eq!(outcome.lines().collect::<Vec<_>>(), ["Unknown custom stat 'deaths'"]);
    }

    #[test]
    fn owner_only_denial_names_the_owner() {
        let mut registry = registry();
        let mut commands = StatisticCommands::new(&mut registry);
        let outcome = commands.set_format(&Caller::player("bob"), "kills", "time");
        assert_eq!(outcome.severity, Some(ErrorSeverity::Authorization));
        assert_eq!(
            outcome.lines().collect::<Vec<_>>(),
            [
                "Only the owner of a custom stat can do that.",
                "This custom stat is owned by alice."
            ]
        );
        assert!(!registry.is_dirty());
    }

    #[test]
    fn failed_validation_leaves_registry_clean() {
        let mut registry = registry();
        let mut commands = StatisticCommands::new(&mut registry);
        let outcome = commands.set_format(&Caller::player("alice"), "kills", "nope");
        assert_eq!(outcome.lines().collect::<Vec<_>>(), ["Invalid format!"]);
        assert!(!registry.is_dirty());
    }

    #[test]
    fn single_and_multi_target_codes() {
        let mut registry = registry();
        let mut commands = StatisticCommands::new(&mut registry);
        let alice = Caller::player("alice");

        let single = commands.players_add(&alice, "kills", &["bob"], Some(5));
        assert_eq!(single.code, 5);
        assert_eq!(single.feedback[0].text, "Added 5 to bob's [Kills] stat");
        assert!(single.feedback[0].broadcast);

        let multi = commands.players_add(&alice, "kills", &["bob", "carol"], None);
        assert_eq!(multi.code, 2);
        assert_eq!(multi.feedback[0].text, "Added 1 to [Kills] for 2 players");

        let bad = commands.players_add(&alice, "kills", &["bob", "not valid"], None);
        assert_eq!(bad.lines().collect::<Vec<_>>(), ["not valid is not a valid player!"]);
        assert!(registry.is_dirty());
        assert_eq!(registry.find_path("kills").unwrap().get_score("bob"), 6);
    }

    #[test]
    fn empty_target_list_is_rejected() {
        let mut registry = registry();
        let mut commands = StatisticCommands::new(&mut registry);
        let alice = Caller::player("alice");

        for outcome in [
            commands.players_add(&alice, "kills", &[], None),
            commands.players_remove(&alice, "kills", &[], Some(2)),
            commands.players_set(&alice, "kills", &[], 7),
            commands.players_reset(&alice, "kills", &[]),
        ] {
            assert!(!outcome.is_success());
            assert_eq!(outcome.severity, Some(ErrorSeverity::Validation));
            assert_eq!(outcome.lines().collect::<Vec<_>>(), ["No player was found"]);
        }
        assert!(!registry.is_dirty());
    }
}
