//! Minimal command-line option parsing and help rendering.
//!
//! This crate classifies raw arguments into short options (`-a`, `-aVALUE`),
//! word options (`--word`, `--word=VALUE`), the `--` separator and free
//! arguments, and matches options against a caller-supplied descriptor slice:
//!
//! - [`classify`] — syntactic classification of a single argument.
//! - [`Parser`] / [`parse`] — the left-to-right scan producing one
//!   [`ParsedValue`] per descriptor plus free-argument indices.
//! - [`render_help`] / [`write_help`] — usage line and aligned option listing
//!   built from the same descriptors.
//! - [`validate_options`] — optional table sanity checks.
//! - [`OptionTable`] — descriptors plus help metadata, loadable from
//!   YAML/JSON.
//!
//! There are no subcommands, multi-valued options or abbreviations. An option
//! given more than once keeps the last value supplied.
//!
//! # Example
//!
//! ```
//! use optscan_core::*;
//!
//! let options = [
//!     OptionDescriptor::flag(Some('v'), Some("verbose"))
//!         .with_description("Print more output"),
//!     OptionDescriptor::with_value(Some('o'), Some("output"))
//!         .with_description("Write to FILE"),
//! ];
//!
//! let args = ["prog", "-v", "--output=out.txt", "input.txt"];
//! let outcome = parse(&args, &options).unwrap();
//! assert!(outcome.is_seen(0));
//! assert_eq!(outcome.value(1), Some("out.txt"));
//! assert_eq!(outcome.free_arg_strings(&args), vec!["input.txt"]);
//!
//! let help = render_help("prog", Some(&["FILE"]), &options);
//! assert!(help.starts_with("Usage: prog [options] FILE\nOptions:\n"));
//! ```

mod error;
mod help;
mod parser;
mod table;
mod token;
mod types;
mod validate;

pub use error::{ParseError, Result, TableError};
pub use help::{DESCRIPTION_COLUMN, render_help, write_help};
pub use parser::{MissingValue, Parser, ParserConfig, WordMatch, parse};
pub use table::OptionTable;
pub use token::{ClassifiedToken, classify};
pub use types::*;
pub use validate::{ValidationError, validate_options};
