mod output;

use std::io::IsTerminal;

use optscan_core::{OptionDescriptor, OptionTable, ParseError, Parser, TableError, render_help};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::output::{OutputFormat, ParseReport, format_report};

const PROGRAM: &str = "optscan";
const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");
const LOG_ENV: &str = "OPTSCAN_LOG";

// Positions in `cli_options()`.
const TABLE: usize = 0;
const FORMAT: usize = 1;
const RENDER_HELP: usize = 2;
const CHECK: usize = 3;
const VERBOSE: usize = 4;
const VERSION: usize = 5;
const HELP: usize = 6;

fn cli_options() -> Vec<OptionDescriptor> {
    vec![
        OptionDescriptor::with_value(Some('t'), Some("table"))
            .with_description("Option table file (YAML or JSON)"),
        OptionDescriptor::with_value(Some('f'), Some("format"))
            .with_description("Output format: json, yaml or text"),
        OptionDescriptor::flag(None, Some("render-help"))
            .with_description("Print the table's help text instead of parsing"),
        OptionDescriptor::flag(None, Some("check")).with_description("Validate the table and exit"),
        OptionDescriptor::flag(Some('v'), Some("verbose"))
            .with_description("Log parser decisions to stderr"),
        OptionDescriptor::flag(Some('V'), Some("version")).with_description("Print version"),
        OptionDescriptor::flag(Some('h'), Some("help")).with_description("Print this help"),
    ]
}

/// Error message paired with the process exit code.
#[derive(Debug)]
struct Failure {
    code: i32,
    message: String,
}

impl Failure {
    fn usage(message: impl Into<String>) -> Self {
        Self {
            code: 1,
            message: message.into(),
        }
    }
}

impl From<TableError> for Failure {
    fn from(err: TableError) -> Self {
        Self::usage(err.to_string())
    }
}

impl From<ParseError> for Failure {
    fn from(err: ParseError) -> Self {
        Self {
            code: 1 + err.status(),
            message: err.to_string(),
        }
    }
}

fn main() {
    let argv: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    if let Err(failure) = run(&argv) {
        eprintln!("error: {}", failure.message);
        std::process::exit(failure.code);
    }
}

fn run(argv: &[String]) -> Result<(), Failure> {
    let options = cli_options();
    let cli = Parser::new(&options)
        .parse(argv)
        .map_err(|err| Failure::usage(format!("{err} (see --help)")))?;

    if cli.is_seen(HELP) {
        print!("{}", render_help(PROGRAM, Some(&["ARG", "ARG"]), &options));
        return Ok(());
    }
    if cli.is_seen(VERSION) {
        println!("{PROGRAM} {PACKAGE_VERSION}");
        return Ok(());
    }

    init_tracing(cli.is_seen(VERBOSE));

    let table_path = cli
        .value(TABLE)
        .ok_or_else(|| Failure::usage("missing required option --table (see --help)"))?;
    let format = cli
        .value(FORMAT)
        .unwrap_or("json")
        .parse::<OutputFormat>()
        .map_err(Failure::usage)?;

    let table = OptionTable::load(table_path)
        .map_err(|err| Failure::usage(format!("Failed to load '{table_path}': {err}")))?;
    debug!(path = table_path, options = table.options.len(), "Loaded option table");

    if cli.is_seen(CHECK) {
        table.validate()?;
        println!(
            "Table '{table_path}' is valid: {} option(s).",
            table.options.len()
        );
        return Ok(());
    }
    if let Err(err) = table.validate() {
        warn!(path = table_path, error = %err, "Option table has problems; first match wins");
    }

    if cli.is_seen(RENDER_HELP) {
        print!("{}", table.render_help(PROGRAM));
        return Ok(());
    }

    let target = cli.free_arg_strings(argv);
    let outcome = table.parse(&target)?;
    let report = ParseReport::new(&table, &target, &outcome);
    print!("{}", format_report(&report, format).map_err(Failure::usage)?);

    Ok(())
}

/// Installs a stderr subscriber. `-v` forces `debug`; otherwise the filter
/// comes from `OPTSCAN_LOG`, defaulting to `warn`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
