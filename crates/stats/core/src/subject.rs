//! Subject (player name) helpers.
//!
//! The model itself only rejects blank subjects. Username validation is a
//! caller concern and is exposed here so every caller applies the same rules.

/// Longest accepted player name.
pub const MAX_SUBJECT_NAME_LEN: usize = 16;

/// Returns true for an empty name. Whitespace is not trimmed.
pub fn is_blank(subject: &str) -> bool {
    subject.is_empty()
}

/// Returns true if `name` satisfies username rules: 1 to 16 characters of
/// `[A-Za-z0-9_]`.
pub fn is_valid_subject_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_SUBJECT_NAME_LEN
        && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_rules() {
        assert!(is_valid_subject_name("alice"));
        assert!(is_valid_subject_name("Steve_2"));
        assert!(!is_valid_subject_name(""));
        assert!(!is_valid_subject_name("has space"));
        assert!(!is_valid_subject_name("seventeen_chars__"));
        assert!(!is_valid_subject_name("@e[type=pig]"));
    }
}
