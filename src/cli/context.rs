//! CLI context - bundles settings, flags, and clipboard state.

use std::io::BufRead;

use copypasta::{ClipboardContext, ClipboardProvider};
use keypass::{estimate_score, generate_secure, GenerateError, Settings};
use zeroize::{Zeroize, Zeroizing};

use super::{prompts, quiet, CliFlags};
use crate::terminal::{box_bottom, box_line, box_top, strength_line};

/// Why a CLI run did not complete.
pub enum Failure {
    /// The user declined to continue.
    Aborted,
    Generate(GenerateError),
}

impl From<GenerateError> for Failure {
    fn from(err: GenerateError) -> Self {
        Failure::Generate(err)
    }
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        Self {
            settings: Settings::default(),
            clipboard: None,
            flags,
        }
    }

    pub fn run(&mut self) -> Result<(), Failure> {
        quiet::set(self.flags.quiet);

        if let Some(password) = self.flags.score.take() {
            self.score_output(Zeroizing::new(password));
            return Ok(());
        }

        self.apply_flags()?;
        self.generate_output()?;
        Ok(())
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) -> Result<(), Failure> {
        if let Some(len) = self.flags.length {
            let clamped = Settings::clamp_length(len);
            if clamped != len {
                prompts::length_clamped(len, clamped);
            }
            self.settings.pass_length = clamped;
        }
        if let Some(num) = self.flags.number {
            self.settings.number_of_passwords = num.max(1);
        }

        self.settings.use_lowercase = !self.flags.no_lower;
        self.settings.use_uppercase = !self.flags.no_upper;
        self.settings.use_digits = !self.flags.no_digits;
        self.settings.use_symbols = !self.flags.no_symbols;
        self.settings.exclude_duplicates = !self.flags.allow_duplicates;
        self.settings.exclude_similar = !self.flags.allow_similar;

        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(c) => {
                    self.clipboard = Some(c);
                    self.settings.to_clipboard = true;
                }
                Err(e) => {
                    log::debug!("clipboard init failed: {e}");
                    if !prompts::clipboard_fallback_prompt() {
                        return Err(Failure::Aborted);
                    }
                }
            }
        }

        Ok(())
    }

    /// Generate passwords and handle output.
    fn generate_output(&mut self) -> Result<(), GenerateError> {
        let config = self.settings.to_config();
        let count = self.settings.number_of_passwords;
        log::info!("generating {count} password(s) of length {}", config.length);

        let mut passwords: Vec<Zeroizing<String>> = Vec::with_capacity(count);
        for _ in 0..count {
            let password = generate_secure(&config).inspect_err(prompts::generation_failed)?;
            passwords.push(Zeroizing::new(password));
        }

        if self.settings.to_clipboard {
            self.copy_to_clipboard(&passwords);
        } else {
            for password in &passwords {
                println!("{}", password.as_str());
            }
        }

        if quiet::show_summary() {
            print_summary(&passwords);
        }

        Ok(())
    }

    fn copy_to_clipboard(&mut self, passwords: &[Zeroizing<String>]) {
        let Some(ctx) = self.clipboard.as_mut() else {
            return;
        };

        let mut joined = passwords
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        match ctx.set_contents(joined.clone()) {
            Ok(_) => {
                if let Ok(mut retrieved) = ctx.get_contents() {
                    retrieved.zeroize();
                }
                prompts::clipboard_copied();
            }
            Err(e) => prompts::clipboard_error(&e.to_string()),
        }
        joined.zeroize();
    }

    /// Score a single password given on the command line or read from stdin.
    fn score_output(&self, password: Zeroizing<String>) {
        let password = if password.as_str() == "-" {
            read_stdin_line()
        } else {
            password
        };

        let score = estimate_score(&password);
        if quiet::enabled() {
            println!("{score}");
        } else {
            box_top("Strength");
            box_line(&strength_line(score));
            box_bottom();
        }
    }
}

fn print_summary(passwords: &[Zeroizing<String>]) {
    println!();
    box_top("Strength");
    if passwords.len() == 1 {
        box_line(&strength_line(estimate_score(&passwords[0])));
    } else {
        for (n, password) in passwords.iter().enumerate() {
            box_line(&format!("#{:<3} {}", n + 1, strength_line(estimate_score(password))));
        }
    }
    box_bottom();
}

fn read_stdin_line() -> Zeroizing<String> {
    let mut line = Zeroizing::new(String::new());
    if let Err(e) = std::io::stdin().lock().read_line(&mut line) {
        prompts::warn(&format!("Failed to read password from stdin: {e}"));
    }
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    line
}
