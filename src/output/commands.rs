//! Workflow command formatting.
//!
//! A workflow command is a stdout line of the form `::name::payload`; the
//! runner interprets it rather than showing it as plain log text. Payloads
//! must be escaped so embedded newlines cannot terminate the command early.

/// Escape a command payload: `%` → `%25`, `\r` → `%0D`, `\n` → `%0A`.
#[must_use]
pub fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a command property (names, key=value parts): payload escaping plus
/// `:` → `%3A` and `,` → `%2C`.
#[must_use]
pub fn escape_property(property: &str) -> String {
    escape_data(property)
        .replace(':', "%3A")
        .replace(',', "%2C")
}

/// Emit one workflow command on stdout.
pub fn issue(command: &str, message: &str) {
    println!("::{command}::{}", escape_data(message));
}

/// Emit a debug diagnostic (shown only when the workflow enables debug
/// logging).
pub fn debug(message: &str) {
    issue("debug", message);
}

/// Report the run as failed. Emitted at most once per run, by the entry
/// point; the exit code carries the pass/fail status alongside it.
pub fn error(message: &str) {
    issue("error", message);
}
