//! Option descriptor and parse result definitions.
//!
//! This module defines the data model shared by the parser and the help
//! formatter. Descriptors are caller-supplied and read-only during a parse;
//! parsed values are aligned index-for-index with the descriptor slice they
//! were produced from.

use serde::{Deserialize, Serialize};

/// Whether an option accepts a value.
///
/// # Examples
///
/// ```
/// use optscan_core::ValuePolicy;
///
/// assert_eq!(ValuePolicy::default(), ValuePolicy::NoValue);
/// assert!(ValuePolicy::ValueOptional.takes_value());
/// assert!(!ValuePolicy::NoValue.takes_value());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ValuePolicy {
    /// Switch-like option (the default).
    #[default]
    #[serde(rename = "none")]
    NoValue,
    /// Option must be followed by a value.
    #[serde(rename = "required")]
    ValueRequired,
    /// Option may carry a value.
    #[serde(rename = "optional")]
    ValueOptional,
}

impl ValuePolicy {
    /// Returns `true` for every policy except [`NoValue`](ValuePolicy::NoValue).
    pub fn takes_value(self) -> bool {
        !matches!(self, ValuePolicy::NoValue)
    }
}

/// Descriptor of a single command-line option.
///
/// An option has an optional short letter (e.g. `-v`) and/or an optional word
/// form (e.g. `--verbose`), a [`ValuePolicy`], and an optional description
/// used by the help formatter. Letters and words are stored without their
/// leading hyphens.
///
/// # Examples
///
/// ```
/// use optscan_core::{OptionDescriptor, ValuePolicy};
///
/// let verbose = OptionDescriptor::flag(Some('v'), Some("verbose"))
///     .with_description("Print more output");
/// assert_eq!(verbose.display_name(), "--verbose");
/// assert!(!verbose.takes_value());
///
/// let output = OptionDescriptor::with_value(Some('o'), None);
/// assert_eq!(output.policy, ValuePolicy::ValueRequired);
/// assert_eq!(output.display_name(), "-o");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDescriptor {
    /// Single letter preceded by one hyphen (e.g. `'a'` for `-a`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short: Option<char>,
    /// Word preceded by two hyphens (e.g. `"all"` for `--all`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    /// Value policy of the option.
    #[serde(default)]
    pub policy: ValuePolicy,
    /// Description rendered in help output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl OptionDescriptor {
    /// Creates a descriptor with an explicit value policy.
    pub fn new(short: Option<char>, word: Option<&str>, policy: ValuePolicy) -> Self {
        Self {
            short,
            word: word.map(String::from),
            policy,
            description: None,
        }
    }

    /// Creates a switch-like option that takes no value.
    ///
    /// # Examples
    ///
    /// ```
    /// use optscan_core::OptionDescriptor;
    ///
    /// let all = OptionDescriptor::flag(Some('a'), Some("all"));
    /// assert_eq!(all.short, Some('a'));
    /// assert_eq!(all.word.as_deref(), Some("all"));
    /// assert!(!all.takes_value());
    /// ```
    pub fn flag(short: Option<char>, word: Option<&str>) -> Self {
        Self::new(short, word, ValuePolicy::NoValue)
    }

    /// Creates an option that requires a value.
    pub fn with_value(short: Option<char>, word: Option<&str>) -> Self {
        Self::new(short, word, ValuePolicy::ValueRequired)
    }

    /// Creates an option whose value is optional.
    pub fn with_optional_value(short: Option<char>, word: Option<&str>) -> Self {
        Self::new(short, word, ValuePolicy::ValueOptional)
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Returns `true` if the option accepts a value.
    pub fn takes_value(&self) -> bool {
        self.policy.takes_value()
    }

    /// Returns the name used in messages (word form preferred, falls back to
    /// the letter).
    ///
    /// # Examples
    ///
    /// ```
    /// use optscan_core::OptionDescriptor;
    ///
    /// assert_eq!(OptionDescriptor::flag(Some('q'), Some("quiet")).display_name(), "--quiet");
    /// assert_eq!(OptionDescriptor::flag(Some('q'), None).display_name(), "-q");
    /// assert_eq!(OptionDescriptor::flag(None, None).display_name(), "<unnamed>");
    /// ```
    pub fn display_name(&self) -> String {
        match (self.short, self.word.as_deref()) {
            (_, Some(word)) => format!("--{word}"),
            (Some(letter), None) => format!("-{letter}"),
            (None, None) => "<unnamed>".to_string(),
        }
    }
}

/// Value extracted for one descriptor.
///
/// `value` is only ever populated when `seen` is `true` and the matching
/// descriptor takes a value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedValue {
    /// Whether the option appeared anywhere in the arguments.
    pub seen: bool,
    /// Value that accompanied the option, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Result of a successful parse.
///
/// `values` is aligned with the descriptor slice given to the parser.
/// `free_args` holds indices into the original argument vector, in the order
/// they were encountered.
///
/// # Examples
///
/// ```
/// use optscan_core::{OptionDescriptor, parse};
///
/// let options = [
///     OptionDescriptor::flag(Some('a'), None),
///     OptionDescriptor::with_value(None, Some("name")),
/// ];
/// let args = ["prog", "-a", "--name=x", "file.txt"];
/// let outcome = parse(&args, &options).unwrap();
///
/// assert!(outcome.is_seen(0));
/// assert_eq!(outcome.value(1), Some("x"));
/// assert_eq!(outcome.free_args, vec![3]);
/// assert_eq!(outcome.free_arg_strings(&args), vec!["file.txt"]);
/// assert_eq!(outcome.free_args_with_sentinel(), vec![3, -1]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseOutcome {
    /// One slot per descriptor.
    pub values: Vec<ParsedValue>,
    /// Indices of free arguments in the argument vector.
    pub free_args: Vec<usize>,
}

/// Terminator written after the last free-argument index.
pub const FREE_ARGS_SENTINEL: isize = -1;

impl ParseOutcome {
    /// Returns `true` if the option at `index` was seen.
    pub fn is_seen(&self, index: usize) -> bool {
        self.values.get(index).is_some_and(|v| v.seen)
    }

    /// Returns the value captured for the option at `index`.
    pub fn value(&self, index: usize) -> Option<&str> {
        self.values.get(index).and_then(|v| v.value.as_deref())
    }

    /// Resolves free-argument indices against the argument vector they were
    /// parsed from.
    pub fn free_arg_strings<'a, S: AsRef<str>>(&self, args: &'a [S]) -> Vec<&'a str> {
        self.free_args
            .iter()
            .filter_map(|&i| args.get(i).map(AsRef::as_ref))
            .collect()
    }

    /// Returns the free-argument indices terminated by [`FREE_ARGS_SENTINEL`].
    pub fn free_args_with_sentinel(&self) -> Vec<isize> {
        self.free_args
            .iter()
            .map(|&i| i as isize)
            .chain(std::iter::once(FREE_ARGS_SENTINEL))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_constructors() {
        let flag = OptionDescriptor::flag(Some('v'), Some("verbose"))
            .with_description("Enable verbose output");

        assert_eq!(flag.short, Some('v'));
        assert_eq!(flag.word, Some("verbose".to_string()));
        assert_eq!(flag.policy, ValuePolicy::NoValue);
        assert_eq!(flag.description.as_deref(), Some("Enable verbose output"));

        let opt = OptionDescriptor::with_optional_value(None, Some("color"));
        assert!(opt.takes_value());
        assert_eq!(opt.display_name(), "--color");
    }

    #[test]
    fn test_descriptor_deserializes_with_defaults() {
        let desc: OptionDescriptor = serde_json::from_str(r#"{"word": "dry-run"}"#).unwrap();
        assert_eq!(desc, OptionDescriptor::flag(None, Some("dry-run")));

        let desc: OptionDescriptor =
            serde_json::from_str(r#"{"short": "o", "policy": "required"}"#).unwrap();
        assert_eq!(desc.short, Some('o'));
        assert_eq!(desc.policy, ValuePolicy::ValueRequired);
    }

    #[test]
    fn test_parsed_value_serialization_skips_empty_value() {
        let json = serde_json::to_string(&ParsedValue::default()).unwrap();
        assert_eq!(json, r#"{"seen":false}"#);
    }

    #[test]
    fn test_outcome_lookups_out_of_range() {
        let outcome = ParseOutcome::default();
        assert!(!outcome.is_seen(3));
        assert_eq!(outcome.value(3), None);
        assert_eq!(outcome.free_args_with_sentinel(), vec![-1]);
    }
}
