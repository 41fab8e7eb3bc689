use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn optscan_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_optscan"))
}

/// Writes a YAML option table to a temp file that is removed on drop.
fn write_table(yaml: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("failed to create table file");
    file.write_all(yaml.as_bytes())
        .expect("failed to write table file");
    file
}

fn grep_table() -> NamedTempFile {
    write_table(
        r#"program: grep
free_args: [PATTERN, FILE, FILE]
options:
  - short: i
    word: ignore-case
    description: Ignore case distinctions
  - short: e
    word: regexp
    policy: required
    description: Use PATTERN for matching
  - word: color
    policy: optional
    description: Colorize matches
"#,
    )
}

fn run(args: &[&str]) -> Output {
    Command::new(optscan_bin())
        .args(args)
        .env_remove("OPTSCAN_LOG")
        .output()
        .expect("failed to run optscan")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

#[test]
fn parse_outputs_json_report() {
    let table = grep_table();
    let path = table.path().to_str().unwrap();
    let output = run(&[
        "-t", path, "--", "grep", "-i", "--regexp=a.c", "notes.txt", "--color",
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let report: serde_json::Value = serde_json::from_str(&stdout(&output))
        .unwrap_or_else(|e| panic!("Invalid JSON output: {e}\n{}", stdout(&output)));

    assert_eq!(report["options"][0]["name"], "--ignore-case");
    assert_eq!(report["options"][0]["seen"], true);
    assert_eq!(report["options"][1]["value"], "a.c");
    assert_eq!(report["options"][2]["seen"], true);
    assert!(report["options"][2].get("value").is_none());
    assert_eq!(report["free_args"].as_array().unwrap().len(), 1);
    assert_eq!(report["free_args"][0]["index"], 3);
    assert_eq!(report["free_args"][0]["value"], "notes.txt");
}

#[test]
fn parse_outputs_yaml_and_text() {
    let table = grep_table();
    let path = table.path().to_str().unwrap();

    let output = run(&["--format", "yaml", "--table", path, "--", "grep", "-e", "x"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("--regexp"), "{}", stdout(&output));

    let output = run(&["-ftext", "-t", path, "grep", "file"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("--ignore-case  -\n"), "{text}");
    assert!(text.contains("[1] file\n"), "{text}");
}

#[test]
fn missing_value_exits_with_parse_status() {
    let table = grep_table();
    let path = table.path().to_str().unwrap();
    let output = run(&["-t", path, "--", "grep", "--regexp"]);

    assert_eq!(output.status.code(), Some(3));
    assert!(
        stderr(&output).contains("option '--regexp' at argument 1 requires a value"),
        "{}",
        stderr(&output)
    );
}

#[test]
fn empty_target_vector_is_a_precondition_failure() {
    let table = grep_table();
    let path = table.path().to_str().unwrap();
    let output = run(&["-t", path]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("argument vector is empty"));
}

// ---------------------------------------------------------------------------
// Table handling
// ---------------------------------------------------------------------------

#[test]
fn render_help_prints_table_help() {
    let table = grep_table();
    let path = table.path().to_str().unwrap();
    let output = run(&["--render-help", "-t", path]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Usage: grep [options] PATTERN FILE...\n\
         Options:\n\
         \x20 -i | --ignore-case        Ignore case distinctions\n\
         \x20 -e | --regexp <value>     Use PATTERN for matching\n\
         \x20 --color [value]           Colorize matches\n"
    );
}

#[test]
fn check_accepts_valid_and_rejects_invalid_tables() {
    let table = grep_table();
    let path = table.path().to_str().unwrap();
    let output = run(&["--check", "-t", path]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("is valid: 3 option(s)"));

    let bad = write_table("options:\n  - short: x\n  - short: x\n");
    let output = run(&["--check", "-t", bad.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("duplicate option letter: -x"));
}

#[test]
fn invalid_table_still_parses_with_warning() {
    let bad = write_table("options:\n  - short: x\n    word: ex\n  - short: x\n");
    let output = run(&["-t", bad.path().to_str().unwrap(), "--", "p", "-x"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("Option table has problems"));
    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["options"][0]["seen"], true);
    assert_eq!(report["options"][1]["seen"], false);
}

#[test]
fn missing_table_file_is_reported() {
    let output = run(&["-t", "/nonexistent/optscan-table.yaml", "--", "p"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to load '/nonexistent/optscan-table.yaml'"));
}

// ---------------------------------------------------------------------------
// Own options
// ---------------------------------------------------------------------------

#[test]
fn help_and_version() {
    let output = run(&["--help"]);
    assert!(output.status.success());
    let help = stdout(&output);
    assert!(help.starts_with("Usage: optscan [options] ARG...\nOptions:\n"), "{help}");
    assert!(help.contains("  -t | --table <value>      Option table file (YAML or JSON)\n"));

    let output = run(&["-V"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("optscan "));
}

#[test]
fn usage_errors() {
    let output = run(&["--", "p", "-x"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("missing required option --table"));

    let output = run(&["-t"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("requires a value"));

    let table = grep_table();
    let output = run(&["-f", "xml", "-t", table.path().to_str().unwrap(), "p"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("unknown output format 'xml'"));
}

#[test]
fn verbose_logs_dropped_options() {
    let table = grep_table();
    let path = table.path().to_str().unwrap();
    let output = run(&["-v", "-t", path, "--", "grep", "--unknown"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(
        stderr(&output).contains("Dropping unmatched option"),
        "{}",
        stderr(&output)
    );
}
