use stats_core::{CustomStatistic, Pertainability};

/// Whoever invokes a registry or command operation.
///
/// Elevated callers (operators, the console, command blocks) pass every
/// pertainability check. A caller without a subject and without elevation
/// pertains to nothing except under [`Pertainability::All`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Caller {
    pub subject: Option<String>,
    pub elevated: bool,
}

impl Caller {
    /// A regular player.
    pub fn player(name: impl Into<String>) -> Self {
        Self {
            subject: Some(name.into()),
            elevated: false,
        }
    }

    /// A player with operator privileges.
    pub fn operator(name: impl Into<String>) -> Self {
        Self {
            subject: Some(name.into()),
            elevated: true,
        }
    }

    /// The server console. Elevated, with no subject of its own.
    pub fn console() -> Self {
        Self {
            subject: None,
            elevated: true,
        }
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Returns true if this caller may act on `statistic` under `mode`.
    pub fn pertains(&self, statistic: &CustomStatistic, mode: Pertainability) -> bool {
        if self.elevated || mode == Pertainability::All {
            return true;
        }
        self.subject()
            .is_some_and(|subject| statistic.pertains(subject, mode))
    }
}
