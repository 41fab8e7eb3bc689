//! Syntactic classification of a single raw argument.
//!
//! Classification looks only at the argument itself. Whether the *next*
//! argument is consumed as a value is decided by the parser.
//!
//! Recognized forms:
//!
//! | Argument          | Token                                   |
//! |-------------------|-----------------------------------------|
//! | `-a`              | short `a`, no value                     |
//! | `-aVALUE`         | short `a`, value `VALUE`                |
//! | `--word`          | word `word`, no value                   |
//! | `--word=VALUE`    | word `word`, value `VALUE`              |
//! | `--`              | separator                               |
//! | `-`, `---x`, `x`  | free argument                           |

/// Classification of one raw argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifiedToken<'a> {
    /// Positional argument.
    Free,
    /// The `--` end-of-options marker.
    Separator,
    /// Single-letter option with an optional embedded value.
    Short {
        letter: char,
        value: Option<&'a str>,
    },
    /// Word option with an optional embedded value.
    Word {
        label: &'a str,
        value: Option<&'a str>,
    },
}

impl ClassifiedToken<'_> {
    /// Returns `true` for short and word options.
    pub fn is_option(&self) -> bool {
        matches!(self, Self::Short { .. } | Self::Word { .. })
    }

    /// Returns the embedded value, if the token carries one.
    pub fn embedded_value(&self) -> Option<&str> {
        match self {
            Self::Short { value, .. } | Self::Word { value, .. } => *value,
            Self::Free | Self::Separator => None,
        }
    }
}

/// Classifies a single argument.
///
/// # Examples
///
/// ```
/// use optscan_core::{ClassifiedToken, classify};
///
/// assert_eq!(classify("file"), ClassifiedToken::Free);
/// assert_eq!(classify("--"), ClassifiedToken::Separator);
/// assert_eq!(
///     classify("-bVAL"),
///     ClassifiedToken::Short { letter: 'b', value: Some("VAL") }
/// );
/// assert_eq!(
///     classify("--name=VAL"),
///     ClassifiedToken::Word { label: "name", value: Some("VAL") }
/// );
/// ```
pub fn classify(arg: &str) -> ClassifiedToken<'_> {
    let Some(rest) = arg.strip_prefix('-') else {
        return ClassifiedToken::Free;
    };

    let mut chars = rest.chars();
    match chars.next() {
        None => ClassifiedToken::Free,
        Some('-') => classify_word(&rest[1..]),
        Some(letter) => {
            let value = chars.as_str();
            ClassifiedToken::Short {
                letter,
                value: (!value.is_empty()).then_some(value),
            }
        }
    }
}

/// Classifies what follows a leading `--`.
fn classify_word(body: &str) -> ClassifiedToken<'_> {
    if body.is_empty() {
        return ClassifiedToken::Separator;
    }
    if body.starts_with('-') {
        return ClassifiedToken::Free;
    }

    // The last '=' splits label from value.
    match body.rsplit_once('=') {
        Some((label, value)) => ClassifiedToken::Word {
            label,
            value: Some(value),
        },
        None => ClassifiedToken::Word {
            label: body,
            value: None,
        },
    }
}
