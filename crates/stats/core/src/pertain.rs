/// How a subject relates to a statistic.
///
/// The three modes are exhaustive: `All` always pertains, `Maintains` requires
/// membership in the maintainer set, `Owns` requires being the owner. Since the
/// owner is always a maintainer, `Owns` implies `Maintains`.
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
pub enum Pertainability {
    #[default]
    All,
    Maintains,
    Owns,
}

impl Pertainability {
    /// Message shown when a caller lacks this standing.
    pub const fn denial_message(&self) -> &'static str {
        match self {
            Self::Owns => "Only the owner of a custom stat can do that.",
            Self::Maintains => "Only maintainers of a custom stat can do that.",
            Self::All => "An unexpected error appeared.",
        }
    }
}
