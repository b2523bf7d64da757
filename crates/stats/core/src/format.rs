//! Number formats a statistic can be displayed with.

/// Fixed catalog of score formatters.
///
/// Names are stable and persisted; an unknown name falls back to
/// [`StatFormat::Default`] via [`StatFormat::from_name_or_default`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatFormat {
    /// Plain integer with thousands grouping.
    #[default]
    Default,
    /// Value scaled by 0.1.
    DivideByTen,
    /// Centimetres.
    Distance,
    /// Game ticks (20 per second).
    Time,
}

impl StatFormat {
    /// Every format, in suggestion order.
    pub const ALL: [StatFormat; 4] = [
        StatFormat::Default,
        StatFormat::DivideByTen,
        StatFormat::Distance,
        StatFormat::Time,
    ];

    /// Looks up a format by name, returning `None` for unknown names.
    pub fn by_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    /// Looks up a format by name, falling back to the default formatter.
    pub fn from_name_or_default(name: &str) -> Self {
        Self::by_name(name).unwrap_or_default()
    }

    /// All format names, used for command suggestions.
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(|format| format.name())
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::DivideByTen => "divide_by_ten",
            Self::Distance => "distance",
            Self::Time => "time",
        }
    }

    /// Renders a raw score.
    pub fn format(&self, value: i32) -> String {
        match self {
            Self::Default => group_thousands(value),
            Self::DivideByTen => format!("{:.2}", f64::from(value) * 0.1),
            Self::Distance => {
                let metres = f64::from(value) / 100.0;
                let kilometres = metres / 1000.0;
                if kilometres > 0.5 {
                    format!("{kilometres:.2} km")
                } else if metres > 0.5 {
                    format!("{metres:.2} m")
                } else {
                    format!("{value} cm")
                }
            }
            Self::Time => {
                let seconds = f64::from(value) / 20.0;
                let minutes = seconds / 60.0;
                let hours = minutes / 60.0;
                let days = hours / 24.0;
                let years = days / 365.0;
                if years > 0.5 {
                    format!("{years:.2} y")
                } else if days > 0.5 {
                    format!("{days:.2} d")
                } else if hours > 0.5 {
                    format!("{hours:.2} h")
                } else if minutes > 0.5 {
                    format!("{minutes:.2} m")
                } else if seconds > 0.5 {
                    format!("{seconds:.2} s")
                } else {
                    format!("{value} t")
                }
            }
        }
    }
}

fn group_thousands(value: i32) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
