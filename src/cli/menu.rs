// src/cli/menu.rs
use inquire::validator::Validation;
use inquire::{Confirm, CustomType, CustomUserError, InquireError, Select};
use std::error::Error;

use crate::clipboard::{ClipboardChain, CopyMethod};
use crate::core::Session;
use crate::models::{PasswordGenerationOptions, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::ui;
use crate::utils::truncate_string;

const GENERATE: &str = "🔐  Generate password";
const COPY: &str = "📋  Copy password";
const OPTIONS: &str = "⚙️  Change options";
const COPY_FROM_HISTORY: &str = "🕘  Copy from history";
const CLEAR_HISTORY: &str = "🗑️  Clear history";
const TOGGLE_THEME: &str = "🌗  Toggle theme";
const EXIT: &str = "🚪  Exit";

pub fn run_cli_menu(session: &mut Session, clipboard: &mut ClipboardChain) -> Result<(), Box<dyn Error>> {
    println!("╔══════════════════════════════════════╗");
    println!("║        🔑 KAIROS PASSWORD GEN         ║");
    println!("╚══════════════════════════════════════╝");

    if !session.is_secure() {
        println!("⚠️  No secure random source found, passwords are weaker than usual");
    }

    // A fresh password is ready as soon as the menu opens
    session.generate();

    loop {
        render(session);

        let choice = match Select::new(
            "What would you like to do?",
            vec![GENERATE, COPY, OPTIONS, COPY_FROM_HISTORY, CLEAR_HISTORY, TOGGLE_THEME, EXIT],
        )
        .prompt()
        {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        let result = match choice {
            GENERATE => {
                session.generate();
                Ok(())
            }
            COPY => copy_current(session, clipboard),
            OPTIONS => change_options(session),
            COPY_FROM_HISTORY => copy_from_history(session, clipboard),
            CLEAR_HISTORY => clear_history(session),
            TOGGLE_THEME => {
                session.toggle_theme();
                Ok(())
            }
            _ => break,
        };

        match result {
            Ok(()) => {}
            // Escape inside a sub-prompt returns to the menu
            Err(InquireError::OperationCanceled) => {}
            Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        }
    }

    log::info!("Menu closed");
    Ok(())
}

fn render(session: &mut Session) {
    let theme = session.theme();
    println!();
    println!("{}", ui::render_output(session.output(), theme));
    println!("{}", ui::render_strength(&session.output().strength()));
    if let Some(notification) = session.notification() {
        println!("✅ {}", notification.message());
    }
    println!();
    println!("History:");
    println!("{}", ui::render_history(session.history(), theme));
    println!();
}

fn copy_current(session: &mut Session, clipboard: &mut ClipboardChain) -> Result<(), InquireError> {
    match session.copy_current(clipboard) {
        Ok(Some(CopyMethod::Terminal)) => log::info!("Copied through the terminal clipboard"),
        Ok(_) => {}
        Err(e) => println!("❌ Failed to copy password: {}", e),
    }
    Ok(())
}

fn change_options(session: &mut Session) -> Result<(), InquireError> {
    let current = session.options().clone();

    let length = CustomType::<usize>::new("Password length:")
        .with_default(current.length)
        .with_help_message(&format!("{} to {} characters", MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH))
        .with_validator(validate_length)
        .prompt()?;

    let include_uppercase = Confirm::new("Include uppercase letters?")
        .with_default(current.include_uppercase)
        .prompt()?;

    let include_lowercase = Confirm::new("Include lowercase letters?")
        .with_default(current.include_lowercase)
        .prompt()?;

    let include_numbers = Confirm::new("Include numbers?")
        .with_default(current.include_numbers)
        .prompt()?;

    let include_symbols = Confirm::new("Include symbols?")
        .with_default(current.include_symbols)
        .prompt()?;

    let exclude_similar = Confirm::new("Exclude similar characters (like i, l, 1, L, o, 0)?")
        .with_default(current.exclude_similar)
        .prompt()?;

    let updated = session.update_options(PasswordGenerationOptions {
        length,
        include_uppercase,
        include_lowercase,
        include_numbers,
        include_symbols,
        exclude_similar,
    });
    // A rejected update leaves its error on screen
    if updated.is_ok() {
        session.generate();
    }
    Ok(())
}

fn validate_length(length: &usize) -> Result<Validation, CustomUserError> {
    if (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(length) {
        Ok(Validation::Valid)
    } else {
        Ok(Validation::Invalid(
            format!("Length must be between {} and {}", MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH).into(),
        ))
    }
}

fn copy_from_history(session: &mut Session, clipboard: &mut ClipboardChain) -> Result<(), InquireError> {
    if session.history().is_empty() {
        println!("❗ History is empty.");
        return Ok(());
    }

    let labels: Vec<String> = session
        .history()
        .entries()
        .iter()
        .map(|entry| format!("{}  {}", truncate_string(&entry.password, 32), entry.timestamp))
        .collect();

    let selected = Select::new("Copy which password?", labels).raw_prompt()?;
    if let Err(e) = session.copy_history_entry(selected.index, clipboard) {
        println!("❌ Failed to copy password: {}", e);
    }
    Ok(())
}

fn clear_history(session: &mut Session) -> Result<(), InquireError> {
    let confirmed = Confirm::new("Clear the whole password history?")
        .with_default(false)
        .prompt()?;
    session.clear_history(confirmed);
    Ok(())
}
