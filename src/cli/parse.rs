use thiserror::Error;

use super::CliFlags;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Unknown argument: {0}")]
    UnknownArg(String),

    #[error("Missing value for {0}")]
    MissingValue(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-u" | "--urandom" => flags.urandom = true,
            "-b" | "--board" => flags.clipboard = true,
            "-e" | "--entropy" => flags.entropy = true,
            "--save" => flags.save = true,
            "--no-lower" => flags.no_lower = true,
            "--no-upper" => flags.no_upper = true,
            "--no-digits" => flags.no_digits = true,
            "--no-symbols" | "--no-special" => flags.no_symbols = true,
            "-l" | "--length" => {
                i += 1;
                flags.length = Some(number(args, i, arg)?);
            }
            "-n" | "--number" => {
                i += 1;
                flags.number = Some(number(args, i, arg)?);
            }
            "--seed" => {
                i += 1;
                flags.seed = Some(number(args, i, arg)?);
            }
            "-o" | "--output" => {
                // Path is optional; a following flag means "use the default".
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    i += 1;
                    flags.output = Some(args[i].clone());
                } else {
                    flags.output = Some(".".to_string());
                }
            }
            _ => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn number<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T, ParseError> {
    let value = args
        .get(i)
        .ok_or_else(|| ParseError::MissingValue(flag.to_string()))?;
    value
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passgen")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_generation_flags() {
        let flags = parse(&args(&["-l", "20", "-n", "3", "--no-symbols", "--no-upper"])).unwrap();
        assert_eq!(flags.length, Some(20));
        assert_eq!(flags.number, Some(3));
        assert!(flags.no_symbols && flags.no_upper);
        assert!(!flags.no_lower && !flags.no_digits);
    }

    #[test]
    fn negative_length_parses() {
        let flags = parse(&args(&["--length", "-4"])).unwrap();
        assert_eq!(flags.length, Some(-4));
    }

    #[test]
    fn output_path_is_optional() {
        let flags = parse(&args(&["-o", "-q"])).unwrap();
        assert_eq!(flags.output.as_deref(), Some("."));
        assert!(flags.quiet);

        let flags = parse(&args(&["--output", "keys.txt"])).unwrap();
        assert_eq!(flags.output.as_deref(), Some("keys.txt"));
    }

    #[test]
    fn seed_and_special_alias() {
        let flags = parse(&args(&["--seed", "99", "--no-special"])).unwrap();
        assert_eq!(flags.seed, Some(99));
        assert!(flags.no_symbols);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            parse(&args(&["-n", "many"])),
            Err(ParseError::InvalidNumber("many".into()))
        );
        assert_eq!(
            parse(&args(&["--hex"])),
            Err(ParseError::UnknownArg("--hex".into()))
        );
        assert_eq!(
            parse(&args(&["-l"])),
            Err(ParseError::MissingValue("-l".into()))
        );
    }
}
