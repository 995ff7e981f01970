//! RNG test binary - outputs random bytes to stdout for statistical testing.
//!
//! Usage:
//!   ./rng_test                   # OS generator
//!   ./rng_test --urandom         # /dev/urandom pooled source
//!   ./rng_test --seed 42         # seeded source
//!   ./rng_test --limit 64M       # stop after N bytes (K/M/G suffixes)
//!
//! Pipe to test suites:
//!   ./rng_test | dieharder -a -g 200
//!   ./rng_test | RNG_test stdin -tlmax 1TB

use std::io::{self, Write};
use std::process::ExitCode;

use passgen::entropy::{EntropySource, OsSource, SeededSource, UrandomSource};

/// Parse byte count with optional K, M, G suffix
fn parse_byte_count(s: &str) -> Option<usize> {
    let s = s.trim().to_uppercase();
    let (num_str, multiplier) = if let Some(n) = s.strip_suffix('K') {
        (n, 1024)
    } else if let Some(n) = s.strip_suffix('M') {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('G') {
        (n, 1024 * 1024 * 1024)
    } else {
        (s.as_str(), 1)
    };
    num_str.parse::<usize>().ok()?.checked_mul(multiplier)
}

fn write_bytes<W: Write>(
    source: &mut dyn EntropySource,
    out: &mut W,
    limit: Option<usize>,
) -> io::Result<()> {
    let mut buf = [0u8; 65536];
    let mut written: usize = 0;

    loop {
        for chunk in buf.chunks_exact_mut(8) {
            let v = source.next_u64().map_err(io::Error::other)?;
            chunk.copy_from_slice(&v.to_le_bytes());
        }

        let to_write = match limit {
            Some(limit) => {
                let remaining = limit.saturating_sub(written);
                if remaining == 0 {
                    break;
                }
                remaining.min(buf.len())
            }
            None => buf.len(),
        };

        if out.write_all(&buf[..to_write]).is_err() {
            // Reader hung up.
            return Ok(());
        }
        written += to_write;
    }

    out.flush()
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let mut limit = None;
    let mut seed = None;
    let mut urandom = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--urandom" => urandom = true,
            "--seed" => {
                i += 1;
                seed = args.get(i).and_then(|s| s.parse::<u64>().ok());
            }
            "--limit" => {
                i += 1;
                limit = args.get(i).and_then(|s| parse_byte_count(s));
            }
            arg => {
                eprintln!("Unknown argument: {arg}");
                return ExitCode::from(2);
            }
        }
        i += 1;
    }

    let mut source: Box<dyn EntropySource> = match (seed, urandom) {
        (Some(seed), _) => Box::new(SeededSource::new(seed)),
        (None, true) => match UrandomSource::open() {
            Ok(source) => Box::new(source),
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
        (None, false) => Box::new(OsSource::new()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match write_bytes(source.as_mut(), &mut out, limit) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
