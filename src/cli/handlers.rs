// src/cli/handlers.rs
use std::error::Error;
use std::io::Write;

use crate::cli::{menu, CliCommand};
use crate::clipboard::{ClipboardChain, CopyMethod};
use crate::core::{GenerationOutput, Session};
use crate::models::PasswordGenerationOptions;
use crate::strength::analyze_password_strength;
use crate::ui;

// Per-invocation overrides of the saved generation settings
#[derive(Debug, Default, Clone)]
pub struct OptionOverrides {
    pub length: Option<usize>,
    pub uppercase: Option<bool>,
    pub lowercase: Option<bool>,
    pub numbers: Option<bool>,
    pub symbols: Option<bool>,
    pub exclude_similar: Option<bool>,
}

impl OptionOverrides {
    pub fn apply(&self, options: &PasswordGenerationOptions) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            length: self.length.unwrap_or(options.length),
            include_uppercase: self.uppercase.unwrap_or(options.include_uppercase),
            include_lowercase: self.lowercase.unwrap_or(options.include_lowercase),
            include_numbers: self.numbers.unwrap_or(options.include_numbers),
            include_symbols: self.symbols.unwrap_or(options.include_symbols),
            exclude_similar: self.exclude_similar.unwrap_or(options.exclude_similar),
        }
    }
}

pub fn dispatch(
    command: CliCommand,
    session: &mut Session,
    clipboard: &mut ClipboardChain,
    out: &mut dyn Write,
) -> Result<(), Box<dyn Error>> {
    match command {
        CliCommand::Generate { length, uppercase, lowercase, numbers, symbols, exclude_similar, copy } => {
            let overrides = OptionOverrides { length, uppercase, lowercase, numbers, symbols, exclude_similar };
            handle_generate(session, &overrides, copy, clipboard, out)
        }
        CliCommand::Strength { password } => handle_strength(&password, out),
        CliCommand::History => handle_history(session, out),
        CliCommand::Copy { index } => handle_copy(session, index, clipboard, out),
        CliCommand::ClearHistory { yes } => handle_clear_history(session, yes, out),
        CliCommand::Theme => handle_theme(session, out),
        CliCommand::Menu => menu::run_cli_menu(session, clipboard),
    }
}

pub fn handle_generate(
    session: &mut Session,
    overrides: &OptionOverrides,
    copy: bool,
    clipboard: &mut ClipboardChain,
    out: &mut dyn Write,
) -> Result<(), Box<dyn Error>> {
    let theme = session.theme();
    let options = overrides.apply(session.options());
    if &options != session.options() && session.update_options(options).is_err() {
        writeln!(out, "{}", ui::render_output(session.output(), theme))?;
        return Ok(());
    }

    let output = session.generate().clone();
    writeln!(out, "{}", ui::render_output(&output, theme))?;

    if let GenerationOutput::Password { strength, .. } = &output {
        writeln!(out, "{}", ui::render_strength(strength))?;
        if copy {
            report_copy(session.copy_current(clipboard), out)?;
        }
    }
    Ok(())
}

pub fn handle_strength(password: &str, out: &mut dyn Write) -> Result<(), Box<dyn Error>> {
    let strength = analyze_password_strength(password);
    match strength.score() {
        Some(score) => writeln!(out, "{} ({}/10)", ui::render_strength(&strength), score)?,
        None => writeln!(out, "{}", ui::render_strength(&strength))?,
    }
    Ok(())
}

pub fn handle_history(session: &Session, out: &mut dyn Write) -> Result<(), Box<dyn Error>> {
    writeln!(out, "{}", ui::render_history(session.history(), session.theme()))?;
    Ok(())
}

pub fn handle_copy(
    session: &mut Session,
    index: usize,
    clipboard: &mut ClipboardChain,
    out: &mut dyn Write,
) -> Result<(), Box<dyn Error>> {
    match index.checked_sub(1) {
        Some(position) if position < session.history().len() => {
            report_copy(session.copy_history_entry(position, clipboard), out)
        }
        _ => {
            writeln!(out, "❗ No history entry #{}", index)?;
            Ok(())
        }
    }
}

pub fn handle_clear_history(session: &mut Session, confirmed: bool, out: &mut dyn Write) -> Result<(), Box<dyn Error>> {
    if session.clear_history(confirmed) {
        writeln!(out, "✅ History cleared")?;
    } else {
        writeln!(out, "Pass --yes to clear the password history")?;
    }
    Ok(())
}

pub fn handle_theme(session: &mut Session, out: &mut dyn Write) -> Result<(), Box<dyn Error>> {
    let theme = session.toggle_theme();
    writeln!(out, "🌗 Theme set to {}", theme)?;
    Ok(())
}

fn report_copy(
    result: Result<Option<CopyMethod>, crate::clipboard::ClipboardError>,
    out: &mut dyn Write,
) -> Result<(), Box<dyn Error>> {
    match result {
        Ok(Some(CopyMethod::System)) => writeln!(out, "📋 Password copied!")?,
        Ok(Some(CopyMethod::Terminal)) => writeln!(out, "📋 Password copied (via terminal)!")?,
        Ok(None) => writeln!(out, "❗ Nothing to copy")?,
        Err(e) => {
            log::error!("Copy failed: {}", e);
            writeln!(out, "❌ Failed to copy password: {}", e)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::testing::RecordingClipboard;
    use crate::core::config::Config;
    use crate::generators::{PasswordGenerator, RandomSource};
    use crate::storage::{JsonFileStore, MemoryStore};
    use console::strip_ansi_codes;
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    fn session() -> Session {
        let generator = PasswordGenerator::with_source(RandomSource::Fallback(ChaCha8Rng::seed_from_u64(21)));
        Session::load(Box::new(MemoryStore::default()), generator, &Config::default())
    }

    fn run(command: CliCommand, session: &mut Session, clipboard: &RecordingClipboard) -> String {
        let mut chain = ClipboardChain::new(Box::new(clipboard.clone()), Box::new(RecordingClipboard::default()));
        let mut out = Vec::new();
        dispatch(command, session, &mut chain, &mut out).unwrap();
        strip_ansi_codes(&String::from_utf8(out).unwrap()).to_string()
    }

    fn generate(length: Option<usize>, copy: bool) -> CliCommand {
        CliCommand::Generate {
            length,
            uppercase: None,
            lowercase: None,
            numbers: None,
            symbols: None,
            exclude_similar: None,
            copy,
        }
    }

    #[test]
    fn overrides_only_touch_given_fields() {
        let overrides = OptionOverrides {
            length: Some(8),
            symbols: Some(false),
            ..OptionOverrides::default()
        };
        let options = overrides.apply(&PasswordGenerationOptions::default());
        assert_eq!(options.length, 8);
        assert!(!options.include_symbols);
        assert!(options.include_uppercase);
        assert!(!options.exclude_similar);
    }

    #[test]
    fn generate_prints_password_and_saves_overrides() {
        let mut session = session();
        let clipboard = RecordingClipboard::default();

        let printed = run(generate(Some(10), true), &mut session, &clipboard);
        let password = session.history().get(0).unwrap().password.clone();

        assert_eq!(password.chars().count(), 10);
        assert_eq!(session.options().length, 10);
        assert!(printed.starts_with(&password));
        assert!(printed.contains("Password copied!"));
        assert_eq!(*clipboard.written.borrow(), vec![password]);
    }

    #[test]
    fn invalid_length_prints_error_instead_of_password() {
        let mut session = session();
        let clipboard = RecordingClipboard::default();

        let printed = run(generate(Some(33), true), &mut session, &clipboard);

        assert!(printed.contains("between 6 and 32"));
        assert!(session.history().is_empty());
        assert!(clipboard.written.borrow().is_empty());
    }

    #[test]
    fn invalid_override_does_not_stick() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kairos.json");
        let open = || {
            let store = JsonFileStore::open(&path, None).unwrap();
            let generator = PasswordGenerator::with_source(RandomSource::Fallback(ChaCha8Rng::seed_from_u64(3)));
            Session::load(Box::new(store), generator, &Config::default())
        };
        let clipboard = RecordingClipboard::default();

        let printed = run(generate(Some(33), false), &mut open(), &clipboard);
        assert!(printed.contains("between 6 and 32 characters (got 33)"));

        let mut next = open();
        assert_eq!(next.options().length, 16);
        run(generate(None, false), &mut next, &clipboard);
        assert_eq!(next.history().get(0).unwrap().password.chars().count(), 16);
    }

    #[test]
    fn strength_reports_label_and_score() {
        let printed = run(
            CliCommand::Strength { password: "aaaa1111".to_string() },
            &mut session(),
            &RecordingClipboard::default(),
        );
        assert!(printed.trim_end().ends_with("Weak (3/10)"));
    }

    #[test]
    fn copy_uses_one_based_index() {
        let mut session = session();
        let clipboard = RecordingClipboard::default();
        run(generate(None, false), &mut session, &clipboard);
        run(generate(None, false), &mut session, &clipboard);
        let older = session.history().get(1).unwrap().password.clone();

        run(CliCommand::Copy { index: 2 }, &mut session, &clipboard);
        let printed = run(CliCommand::Copy { index: 0 }, &mut session, &clipboard);

        assert_eq!(*clipboard.written.borrow(), vec![older]);
        assert!(printed.contains("No history entry #0"));
    }

    #[test]
    fn clear_history_without_yes_keeps_entries() {
        let mut session = session();
        let clipboard = RecordingClipboard::default();
        run(generate(None, false), &mut session, &clipboard);

        let printed = run(CliCommand::ClearHistory { yes: false }, &mut session, &clipboard);
        assert!(printed.contains("--yes"));
        assert_eq!(session.history().len(), 1);

        run(CliCommand::ClearHistory { yes: true }, &mut session, &clipboard);
        assert!(session.history().is_empty());
        assert!(run(CliCommand::History, &mut session, &clipboard).contains("No passwords yet"));
    }

    #[test]
    fn theme_command_toggles() {
        let mut session = session();
        let printed = run(CliCommand::Theme, &mut session, &RecordingClipboard::default());
        assert!(printed.contains("light"));
    }
}
