//! Centralized warning and prompt messages for CLI output.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::style::Stylize;
use crossterm::tty::IsTty;

use passgen::pass::strength::Strength;

/// Suppresses warnings and prompts when set.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// True when quiet, or when stdin is not a terminal to answer prompts.
fn skip_prompt() -> bool {
    quiet() || !std::io::stdin().is_tty()
}

/// Warning to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{}", msg.yellow());
    }
}

/// Error to stderr (red) - always shown
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

pub fn urandom_unavailable() {
    warn("Warning: /dev/urandom could not be opened; refusing to fall back to a weaker source.");
}

pub fn entropy_summary(bits: f64, strength: Strength, source: &str, charset: usize) {
    if !quiet() {
        eprintln!(
            "Entropy: {:.1} bits ({}) \u{2022} Source: {} \u{2022} Charset: {} chars",
            bits, strength, source, charset
        );
    }
}

pub fn settings_saved(path: &str) {
    if !quiet() {
        eprintln!("Defaults saved \u{2192} {path}");
    }
}

pub fn clipboard_copied() {
    if !quiet() {
        println!("*** -COPIED TO CLIPBOARD- ***");
    }
}

/// Ask whether to print instead when the clipboard is unavailable. Quiet or
/// non-interactive runs fall back silently.
pub fn clipboard_fallback_prompt() -> bool {
    if skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        eprintln!();
        return true;
    }

    eprintln!("\nAborted.");
    false
}

pub fn passwords_written(count: usize, path: &str) {
    if !quiet() {
        println!("{count} password(s) \u{2192} {path}");
    }
}
