//! Settings file persistence.
//!
//! One line, comma separated, `|` escapes the next character:
//! `length,number,lower,upper,digits,symbols,max_length,output_file_path`

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use tracing::{debug, warn};

use super::Settings;

const FIELD_COUNT: usize = 8;

pub fn save(settings: &Settings) -> std::io::Result<()> {
    let path = get_path();
    if let Some(parent) = Path::new(&path).parent()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)?;

    file.write_all(encode(settings).as_bytes())?;
    debug!(path = %path, "settings saved");
    Ok(())
}

pub fn load(settings: &mut Settings) -> std::io::Result<()> {
    let path = get_path();
    if !Path::new(&path).exists() {
        return save(settings);
    }

    let file = OpenOptions::new().read(true).open(&path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if !decode(&line, settings) {
        warn!(path = %path, "malformed settings file, rewriting defaults");
        *settings = Settings::default();
        save(settings)?;
    }

    Ok(())
}

#[inline]
pub fn get_path() -> String {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    format!("{}/.config/passgen/settings", home)
}

fn encode(settings: &Settings) -> String {
    format!(
        "{},{},{},{},{},{},{},{}\n",
        settings.pass_length,
        settings.number_of_passwords,
        settings.include_lowercase,
        settings.include_uppercase,
        settings.include_digits,
        settings.include_symbols,
        settings.max_length,
        escape(&settings.output_file_path),
    )
}

/// Fill `settings` from a stored line. Fields that fail to parse keep their
/// current value. Returns false when the line has the wrong shape.
fn decode(line: &str, settings: &mut Settings) -> bool {
    let line = line.trim_end_matches(['\n', '\r']);
    if line.is_empty() {
        return false;
    }

    let parts = split_escaped(line, ',');
    if parts.len() != FIELD_COUNT {
        return false;
    }

    settings.pass_length = parts[0].parse().unwrap_or(settings.pass_length);
    settings.number_of_passwords = parts[1].parse().unwrap_or(settings.number_of_passwords);
    settings.include_lowercase = parts[2].parse().unwrap_or(settings.include_lowercase);
    settings.include_uppercase = parts[3].parse().unwrap_or(settings.include_uppercase);
    settings.include_digits = parts[4].parse().unwrap_or(settings.include_digits);
    settings.include_symbols = parts[5].parse().unwrap_or(settings.include_symbols);
    settings.max_length = parts[6].parse().unwrap_or(settings.max_length);
    settings.output_file_path = parts[7].clone();
    true
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == ',' || c == '|' {
            out.push('|');
        }
        out.push(c);
    }
    out
}

/// Split on `delimiter`, honouring `|` escapes. `n` delimiters always yield
/// `n + 1` fields.
fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    parts.push(current);
    parts
}
