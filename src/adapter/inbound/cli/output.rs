//! Terminal output for the CLI.
//!
//! Human mode prints indented, colored lines to stdout. With `--json` every
//! line becomes one `{"type": ..., "payload": ...}` object instead, so a
//! script can filter for `brand` or `model` records. Errors and remedies
//! always go to stderr.

use std::fmt::Display;
use std::sync::RwLock;

use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::{json, Value};

/// Output flags taken from the global CLI options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    pub json: bool,
    pub quiet: bool,
    pub verbose: u8,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
        }
    }
}

static OUTPUT: RwLock<OutputConfig> = RwLock::new(OutputConfig::new(false, false, 0));

fn current() -> OutputConfig {
    match OUTPUT.read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

fn json_line(kind: &str, payload: Value) -> String {
    json!({ "type": kind, "payload": payload }).to_string()
}

/// Print `payload` as a JSON line, or run `human` unless `--quiet` is set.
fn emit(kind: &str, payload: Value, human: impl FnOnce()) {
    let config = current();
    if config.json {
        println!("{}", json_line(kind, payload));
    } else if !config.quiet {
        human();
    }
}

/// Apply the global CLI flags. Called once from `main`.
pub fn configure(config: OutputConfig) {
    match OUTPUT.write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

#[must_use]
pub fn is_json() -> bool {
    current().json
}

/// Number of `-v` flags given.
#[must_use]
pub fn verbosity() -> u8 {
    current().verbose
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    emit("field", json!({ "label": label, "value": value }), || {
        println!("  {:<14} {}", label.dimmed(), value);
    });
}

/// Print a catalog record: the serialized row in JSON mode, its `Display`
/// form otherwise.
pub fn record<T: Serialize + Display>(kind: &str, value: &T) {
    match serde_json::to_value(value) {
        Ok(payload) => emit(kind, payload, || println!("  {value}")),
        Err(e) => error(&format!("failed to encode {kind}: {e}")),
    }
}

/// Print the `Display` form of a record, only when `-v` is given.
pub fn detail(value: impl Display) {
    let config = current();
    if config.verbose > 0 && !config.json && !config.quiet {
        println!("  {}", value.dimmed());
    }
}

pub fn success(message: &str) {
    emit("success", json!({ "message": message }), || {
        println!("  {} {}", "✓".green(), message);
    });
}

/// Print a section header.
pub fn section(title: &str) {
    emit("section", json!({ "title": title }), || {
        println!();
        println!("{}", title.bold());
    });
}

/// Report that a listing matched nothing, e.g. `empty("models")`.
pub fn empty(what: &str) {
    emit("empty", json!({ "of": what }), || {
        println!("  {}", format!("no {what}").dimmed());
    });
}

/// Print a numbered follow-up step.
pub fn step(number: usize, message: &str) {
    emit("step", json!({ "number": number, "message": message }), || {
        println!("  {}. {}", number, message);
    });
}

/// Print an error line to stderr. Never suppressed by `--quiet`.
pub fn error(message: &str) {
    if is_json() {
        eprintln!("{}", json_line("error", json!({ "message": message })));
    } else {
        eprintln!("  {} {}", "×".red(), message);
    }
}

/// Print how to get past a rejected write, on stderr next to the error.
pub fn remedy(message: &str) {
    if is_json() {
        eprintln!("{}", json_line("remedy", json!({ "message": message })));
    } else {
        eprintln!("  {}: {}", "fix".cyan(), message);
    }
}

/// Render an optional column, `-` when the value is NULL.
pub fn optional(value: Option<impl Display>) -> String {
    match value {
        Some(value) => value.to_string(),
        None if is_json() => "-".to_string(),
        None => "-".dimmed().to_string(),
    }
}
