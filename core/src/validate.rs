//! Descriptor table validation.
//!
//! The parser trusts its descriptors and resolves collisions by scan order.
//! Validation is an optional caller-side check that catches tables whose
//! entries could never match, or would be shadowed by an earlier entry.
//!
//! # Examples
//!
//! ```
//! use optscan_core::*;
//!
//! let options = [
//!     OptionDescriptor::flag(Some('v'), Some("verbose")),
//!     OptionDescriptor::with_value(Some('o'), Some("output")),
//! ];
//! assert!(validate_options(&options).is_empty());
//!
//! // Invalid: word form carries its own hyphens
//! let bad = [OptionDescriptor::flag(None, Some("--verbose"))];
//! assert!(!validate_options(&bad).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::OptionDescriptor;

/// Descriptor validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The table has no descriptors at all.
    #[error("option table is empty")]
    EmptyTable,
    /// A descriptor has neither a letter nor a word.
    #[error("option {0} must define a letter or a word")]
    MissingName(usize),
    /// Letter reserved by the argument syntax (`-`, `=` or whitespace).
    #[error("invalid option letter: {0:?}")]
    InvalidShort(char),
    /// Word that the tokenizer can never produce for this option.
    #[error("invalid option word: {0:?}")]
    InvalidWord(String),
    /// Two descriptors share a letter; the later one is unreachable.
    #[error("duplicate option letter: -{0}")]
    DuplicateShort(char),
    /// Two descriptors share a word; the later one is unreachable.
    #[error("duplicate option word: --{0}")]
    DuplicateWord(String),
}

/// Validates a descriptor table.
///
/// Stops at the first problem found, so the returned list holds at most one
/// error.
///
/// # Examples
///
/// ```
/// use optscan_core::*;
///
/// let options = [
///     OptionDescriptor::flag(Some('a'), None),
///     OptionDescriptor::flag(Some('a'), Some("all")),
/// ];
/// assert_eq!(
///     validate_options(&options),
///     vec![ValidationError::DuplicateShort('a')]
/// );
/// ```
pub fn validate_options(options: &[OptionDescriptor]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if options.is_empty() {
        errors.push(ValidationError::EmptyTable);
        return errors;
    }

    let mut seen_letters = HashSet::new();
    let mut seen_words = HashSet::new();

    for (index, option) in options.iter().enumerate() {
        if option.short.is_none() && option.word.is_none() {
            errors.push(ValidationError::MissingName(index));
            return errors;
        }

        if let Some(letter) = option.short {
            if letter == '-' || letter == '=' || letter.is_whitespace() {
                errors.push(ValidationError::InvalidShort(letter));
                return errors;
            }
            if !seen_letters.insert(letter) {
                errors.push(ValidationError::DuplicateShort(letter));
                return errors;
            }
        }

        if let Some(word) = &option.word {
            if !is_valid_word(word) {
                errors.push(ValidationError::InvalidWord(word.clone()));
                return errors;
            }
            if !seen_words.insert(word.as_str()) {
                errors.push(ValidationError::DuplicateWord(word.clone()));
                return errors;
            }
        }
    }

    errors
}

fn is_valid_word(word: &str) -> bool {
    !word.is_empty()
        && !word.starts_with('-')
        && !word.contains('=')
        && !word.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_table() {
        assert_eq!(validate_options(&[]), vec![ValidationError::EmptyTable]);
    }

    #[test]
    fn test_validate_rejects_unnamed_option() {
        let options = [
            OptionDescriptor::flag(Some('a'), None),
            OptionDescriptor::with_value(None, None),
        ];
        assert_eq!(
            validate_options(&options),
            vec![ValidationError::MissingName(1)]
        );
    }

    #[test]
    fn test_validate_rejects_bad_letters() {
        let options = [OptionDescriptor::flag(Some('-'), None)];
        assert_eq!(
            validate_options(&options),
            vec![ValidationError::InvalidShort('-')]
        );

        let options = [OptionDescriptor::flag(Some(' '), None)];
        assert_eq!(
            validate_options(&options),
            vec![ValidationError::InvalidShort(' ')]
        );

        let options = [
            OptionDescriptor::flag(Some('a'), None),
            OptionDescriptor::with_value(Some('='), None),
        ];
        assert_eq!(
            validate_options(&options),
            vec![ValidationError::InvalidShort('=')]
        );
    }

    #[test]
    fn test_validate_rejects_bad_words() {
        for word in ["", "-x", "key=value", "two words"] {
            let options = [OptionDescriptor::flag(None, Some(word))];
            assert_eq!(
                validate_options(&options),
                vec![ValidationError::InvalidWord(word.to_string())],
                "{word:?}"
            );
        }
    }

    #[test]
    fn test_validate_rejects_duplicate_word() {
        let options = [
            OptionDescriptor::flag(Some('a'), Some("all")),
            OptionDescriptor::with_value(Some('b'), Some("all")),
        ];
        assert_eq!(
            validate_options(&options),
            vec![ValidationError::DuplicateWord("all".to_string())]
        );
    }

    #[test]
    fn test_validate_accepts_valid_table() {
        let options = [
            OptionDescriptor::flag(Some('a'), None),
            OptionDescriptor::with_value(Some('b'), None),
            OptionDescriptor::flag(None, Some("dword")),
            OptionDescriptor::with_optional_value(Some('f'), Some("fword")),
        ];
        assert!(validate_options(&options).is_empty());
    }
}
