//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use crossterm::style::Stylize;
use keypass::settings::{MAX_LENGTH, MIN_LENGTH};
use keypass::GenerateError;

use super::quiet;

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{}", msg.yellow());
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

pub fn length_clamped(requested: usize, used: usize) {
    warn(&format!(
        "Warning: length {requested} is outside {MIN_LENGTH}-{MAX_LENGTH}, using {used}"
    ));
}

/// User-facing text for a failed generation.
pub fn generation_message(err: &GenerateError) -> String {
    match err {
        GenerateError::NoCharsets => "Select at least one character set.".to_string(),
        GenerateError::NotEnoughUniqueChars => {
            "Not enough unique characters for this length. Allow duplicates, allow look-alikes, or shorten the password.".to_string()
        }
        GenerateError::Random(e) => format!("Secure random source unavailable: {e}"),
    }
}

pub fn generation_failed(err: &GenerateError) {
    error(&generation_message(err));
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied() {
    if !quiet::enabled() {
        println!("*** -COPIED TO CLIPBOARD- ***");
    }
}

/// Print clipboard error - NOT suppressed (errors are always shown)
pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
}

/// Prompt user when clipboard is unavailable. Returns true to fallback to terminal, false to abort.
/// In quiet/non-interactive mode, silently falls back to terminal.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}
