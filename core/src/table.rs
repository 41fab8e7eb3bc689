//! Option tables stored on disk.
//!
//! A table bundles descriptors with the metadata the help formatter needs and
//! the parser configuration to use.
//!
//! # Example YAML
//!
//! ```yaml
//! program: grep
//! free_args: [PATTERN, FILE, FILE]
//! parser:
//!   word_match: exact
//!   missing_value: error
//! options:
//!   - short: i
//!     word: ignore-case
//!     description: Ignore case distinctions
//!   - short: e
//!     word: regexp
//!     policy: required
//!     description: Use PATTERN for matching
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TableError;
use crate::help::render_help;
use crate::parser::{Parser, ParserConfig};
use crate::types::{OptionDescriptor, ParseOutcome};
use crate::validate::validate_options;

/// Descriptor table with help metadata and parser settings.
///
/// # Examples
///
/// ```
/// use optscan_core::OptionTable;
///
/// let table = OptionTable::from_yaml_str(
///     "program: tool\noptions:\n  - short: v\n    word: verbose\n",
/// )
/// .unwrap();
/// let outcome = table.parse(&["tool", "--verbose"]).unwrap();
/// assert!(outcome.is_seen(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionTable {
    /// Program name shown in the usage line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    /// Display names of free arguments for the usage line.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub free_args: Vec<String>,
    /// Option descriptors, in match order.
    pub options: Vec<OptionDescriptor>,
    /// Parser configuration.
    #[serde(default)]
    pub parser: ParserConfig,
}

impl OptionTable {
    /// Creates a table with default parser settings and no help metadata.
    pub fn new(options: Vec<OptionDescriptor>) -> Self {
        Self {
            program: None,
            free_args: Vec::new(),
            options,
            parser: ParserConfig::default(),
        }
    }

    /// Loads a table from a file. `.yml` and `.yaml` files are read as YAML,
    /// anything else as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](TableError::IoError) if the file cannot be read,
    /// or a [`YamlError`](TableError::YamlError) /
    /// [`JsonError`](TableError::JsonError) if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml"));

        if is_yaml {
            Self::from_yaml_str(&raw)
        } else {
            Self::from_json_str(&raw)
        }
    }

    /// Parses a table from YAML text.
    pub fn from_yaml_str(raw: &str) -> Result<Self, TableError> {
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Parses a table from JSON text.
    pub fn from_json_str(raw: &str) -> Result<Self, TableError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Checks the descriptors with [`validate_options`].
    ///
    /// # Errors
    ///
    /// Returns [`Invalid`](TableError::Invalid) with the first problem found.
    pub fn validate(&self) -> Result<(), TableError> {
        match validate_options(&self.options).into_iter().next() {
            Some(err) => Err(TableError::Invalid(err)),
            None => Ok(()),
        }
    }

    /// Returns a parser over this table's descriptors and configuration.
    pub fn parser(&self) -> Parser<'_> {
        Parser::with_config(&self.options, self.parser)
    }

    /// Parses `args` against this table.
    pub fn parse<S: AsRef<str>>(&self, args: &[S]) -> crate::Result<ParseOutcome> {
        self.parser().parse(args)
    }

    /// Renders help, using `fallback_program` when the table names no program.
    pub fn render_help(&self, fallback_program: &str) -> String {
        let program = self.program.as_deref().unwrap_or(fallback_program);
        let names: Vec<&str> = self.free_args.iter().map(String::as_str).collect();
        let free_arg_names = (!names.is_empty()).then_some(names.as_slice());
        render_help(program, free_arg_names, &self.options)
    }
}
