//! CLI context - bundles settings, flags, and the request being served.

use std::path::PathBuf;

use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::debug;
use zeroize::Zeroize;

use passgen::entropy::{EntropySource, OsSource, SeededSource, UrandomSource};
use passgen::pass::{self, CharacterClass, GenerateError, GenerationRequest, charset, output, strength};
use passgen::settings::Settings;

use super::{CliError, CliFlags, print_help, prompts};

const DEFAULT_OUTPUT_FILE: &str = "passgen.txt";

/// Application context for one CLI invocation.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    request: GenerationRequest,
    count: usize,
    output: Option<PathBuf>,
}

impl Context {
    /// Parse arguments and load saved defaults.
    pub fn new(args: Vec<String>) -> Result<Self, CliError> {
        let flags = super::parse(&args)?;
        prompts::set_quiet(flags.quiet);

        let settings = Settings::load_from_file().unwrap_or_else(|e| {
            prompts::warn(&format!("Failed to load settings: {}", e));
            Settings::default()
        });

        Ok(Self::with_settings(flags, settings))
    }

    pub fn with_settings(flags: CliFlags, settings: Settings) -> Self {
        let output = (!settings.output_file_path.is_empty())
            .then(|| PathBuf::from(&settings.output_file_path));
        Self {
            request: settings.request(),
            count: settings.number_of_passwords.max(1),
            output,
            settings,
            flags,
        }
    }

    pub fn run(&mut self) -> Result<(), CliError> {
        if self.handle_info_flags() {
            return Ok(());
        }
        self.prepare()?;
        self.handle_save()?;

        let mut source = self.open_source()?;
        self.report_entropy(source.name());
        self.generate_output(source.as_mut())
    }

    /// Apply flags and check the request. A rejected request is never saved
    /// with `--save` and never opens an entropy source.
    pub fn prepare(&mut self) -> Result<(), CliError> {
        self.apply_flags();

        if self.request.length > self.settings.max_length {
            return Err(CliError::LengthAboveMax {
                max: self.settings.max_length,
            });
        }
        pass::validate(&self.request)?;
        Ok(())
    }

    fn handle_info_flags(&self) -> bool {
        if self.flags.help {
            print_help();
            return true;
        }
        if self.flags.version {
            println!("passgen {}", env!("CARGO_PKG_VERSION"));
            return true;
        }
        false
    }

    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            // Zero and negatives are rejected by validation as InvalidLength.
            self.request.length = usize::try_from(len).unwrap_or(0);
        }
        if let Some(num) = self.flags.number {
            self.count = num.max(1);
        }

        let excluded = [
            (CharacterClass::Lowercase, self.flags.no_lower),
            (CharacterClass::Uppercase, self.flags.no_upper),
            (CharacterClass::Digit, self.flags.no_digits),
            (CharacterClass::Symbol, self.flags.no_symbols),
        ];
        for (class, off) in excluded {
            if off {
                self.request.set(class, false);
            }
        }

        if let Some(ref path) = self.flags.output {
            self.output = Some(output_path(path));
        }
    }

    fn handle_save(&mut self) -> Result<(), CliError> {
        if !self.flags.save {
            return Ok(());
        }
        self.settings.apply_request(&self.request);
        self.settings.number_of_passwords = self.count;
        self.settings
            .save_to_file()
            .map_err(CliError::Settings)?;
        prompts::settings_saved(&Settings::path());
        Ok(())
    }

    fn open_source(&self) -> Result<Box<dyn EntropySource>, CliError> {
        if let Some(seed) = self.flags.seed {
            prompts::warn("Warning: --seed output is reproducible; do not use it for real secrets.");
            return Ok(Box::new(SeededSource::new(seed)));
        }
        if self.flags.urandom {
            let source = UrandomSource::open().map_err(|e| {
                prompts::urandom_unavailable();
                GenerateError::from(e)
            })?;
            return Ok(Box::new(source));
        }
        Ok(Box::new(OsSource::new()))
    }

    fn report_entropy(&self, source: &str) {
        if !self.flags.entropy {
            return;
        }
        let bits = strength::entropy_bits(&self.request);
        prompts::entropy_summary(
            bits,
            strength::label(bits),
            source,
            charset::size(&self.request),
        );
    }

    fn generate_output(&self, source: &mut dyn EntropySource) -> Result<(), CliError> {
        debug!(
            count = self.count,
            clipboard = self.flags.clipboard,
            file = self.output.is_some(),
            "generating output"
        );

        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(ctx) => return self.to_clipboard(ctx, source),
                Err(_) if prompts::clipboard_fallback_prompt() => {}
                Err(_) => return Ok(()),
            }
        }

        if let Some(ref path) = self.output {
            output::to_file(path, &self.request, self.count, source)?;
            let full_path = std::fs::canonicalize(path)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| path.display().to_string());
            prompts::passwords_written(self.count, &full_path);
            return Ok(());
        }

        output::to_stdout(&self.request, self.count, source)?;
        Ok(())
    }

    fn to_clipboard(
        &self,
        mut ctx: ClipboardContext,
        source: &mut dyn EntropySource,
    ) -> Result<(), CliError> {
        let passwords = output::to_string(&self.request, self.count, source)?;
        match ctx.set_contents(String::clone(&passwords)) {
            Ok(()) => {
                if let Ok(mut retrieved) = ctx.get_contents() {
                    retrieved.zeroize();
                }
                prompts::clipboard_copied();
                Ok(())
            }
            Err(e) => Err(CliError::Clipboard(e.to_string())),
        }
    }
}

/// `.` and directories get the default file name appended.
fn output_path(raw: &str) -> PathBuf {
    if raw == "." {
        PathBuf::from(DEFAULT_OUTPUT_FILE)
    } else if raw.ends_with('/') {
        PathBuf::from(format!("{}{}", raw, DEFAULT_OUTPUT_FILE))
    } else {
        PathBuf::from(raw)
    }
}
