//! Usage and option listing generation.
//!
//! Output layout:
//!
//! ```text
//! Usage: my_program [options] FILE...
//! Options:
//!   -a                        a option without arg
//!   -f | --fword <value>      fword option with arg
//!   --a-rather-long-option-name [value]
//!                             description on its own line
//! ```
//!
//! Descriptions always start at [`DESCRIPTION_COLUMN`]. Nothing is wrapped.

use std::io;

use crate::types::{OptionDescriptor, ValuePolicy};

/// Zero-based column at which option descriptions start.
pub const DESCRIPTION_COLUMN: usize = 28;

/// Renders the help text into a string.
///
/// `free_arg_names` lists display names for positional arguments. When the
/// last two names are equal they collapse into `NAME...`, meaning "one or
/// more".
///
/// # Examples
///
/// ```
/// use optscan_core::{OptionDescriptor, render_help};
///
/// let options = [
///     OptionDescriptor::flag(Some('h'), Some("help")).with_description("Show help"),
///     OptionDescriptor::with_value(Some('o'), None).with_description("Output file"),
/// ];
/// let help = render_help("tool", Some(&["INPUT", "INPUT"]), &options);
///
/// assert_eq!(
///     help,
///     "Usage: tool [options] INPUT...\n\
///      Options:\n  \
///      -h | --help               Show help\n  \
///      -o <value>                Output file\n"
/// );
/// ```
pub fn render_help(
    program: &str,
    free_arg_names: Option<&[&str]>,
    options: &[OptionDescriptor],
) -> String {
    let mut out = usage_line(program, free_arg_names);
    out.push_str("Options:\n");
    for option in options {
        out.push_str(&option_line(option));
    }
    out
}

/// Writes the help text to `out`.
///
/// # Errors
///
/// Returns any error reported by the writer.
pub fn write_help<W: io::Write>(
    out: &mut W,
    program: &str,
    free_arg_names: Option<&[&str]>,
    options: &[OptionDescriptor],
) -> io::Result<()> {
    out.write_all(render_help(program, free_arg_names, options).as_bytes())?;
    out.flush()
}

fn usage_line(program: &str, free_arg_names: Option<&[&str]>) -> String {
    let mut line = format!("Usage: {program} [options]");

    match free_arg_names.unwrap_or_default() {
        [] => {}
        [head @ .., prev, last] if prev == last => {
            for name in head {
                line.push_str(&format!(" {name}"));
            }
            line.push_str(&format!(" {prev}..."));
        }
        names => {
            for name in names {
                line.push_str(&format!(" {name}"));
            }
        }
    }

    line.push('\n');
    line
}

fn option_line(option: &OptionDescriptor) -> String {
    let mut line = String::from("  ");

    if let Some(letter) = option.short {
        line.push_str(&format!("-{letter}"));
        if option.word.is_some() {
            line.push_str(" | ");
        }
    }
    if let Some(word) = &option.word {
        line.push_str(&format!("--{word}"));
    }
    match option.policy {
        ValuePolicy::ValueRequired => line.push_str(" <value>"),
        ValuePolicy::ValueOptional => line.push_str(" [value]"),
        ValuePolicy::NoValue => {}
    }

    if let Some(description) = &option.description {
        let column = line.chars().count();
        if column < DESCRIPTION_COLUMN - 1 {
            line.push_str(&" ".repeat(DESCRIPTION_COLUMN - column));
        } else {
            line.push('\n');
            line.push_str(&" ".repeat(DESCRIPTION_COLUMN));
        }
        line.push_str(description);
    }

    line.push('\n');
    line
}
