use crossterm::style::Stylize;

use passgen::settings::DEFAULT_MAX_LENGTH;

fn opt(flag: &str, desc: &str) {
    println!("  {}{}", format!("{flag:<24}").bold(), desc);
}

pub fn print_help() {
    println!("{} - random passwords with guaranteed character classes", "passgen".bold());
    println!();
    println!("USAGE:");
    println!("  passgen [OPTIONS]");
    println!();
    println!("Every selected class appears at least once when the length allows it.");
    println!("If the length is shorter than the number of classes, lowercase,");
    println!("uppercase, digits and symbols are guaranteed in that order.");
    println!();
    println!("PASSWORD:");
    opt("-l, --length <N>", "Characters per password (default: 12)");
    opt("-n, --number <N>", "How many passwords to generate (default: 1)");
    opt("    --no-lower", "Exclude lowercase letters");
    opt("    --no-upper", "Exclude uppercase letters");
    opt("    --no-digits", "Exclude digits");
    opt("    --no-symbols", "Exclude symbols (alias: --no-special)");
    println!();
    println!("OUTPUT:");
    opt("-o, --output [FILE]", "Append to file (default: passgen.txt)");
    opt("-b, --board", "Copy to clipboard instead of printing");
    opt("-e, --entropy", "Print an entropy estimate to stderr");
    opt("-q, --quiet", "Suppress everything except passwords");
    println!();
    println!("ENTROPY:");
    opt("-u, --urandom", "Read /dev/urandom instead of the OS generator");
    opt("    --seed <N>", "Deterministic output for testing; not secret");
    println!();
    println!("SETTINGS:");
    opt("    --save", "Store length, classes and count as defaults");
    println!(
        "  Maximum length is {} unless changed in the settings file.",
        DEFAULT_MAX_LENGTH
    );
    println!();
    println!("INFO:");
    opt("-h, --help", "Display this help message");
    opt("-v, --version", "Display version");
    println!();
    println!("Set PASSGEN_LOG=debug for diagnostic logging.");
}
