// src/cli/menu.rs
use std::io;

use anyhow::Result;
use inquire::{Confirm, CustomType, Select, Text};

use crate::cli::handlers;
use crate::core::{Config, Vault};
use crate::generators::PasswordGenerator;
use crate::models::{GenerationConfig, GenerationMode};
use crate::strength;

const GENERATE: &str = "🔐  Generate password";
const ANALYZE: &str = "📊  Analyze a password";
const HISTORY: &str = "🕘  View history";
const FAVORITES: &str = "⭐  Manage favorites";
const EXPORT: &str = "📤  Export passwords";
const CLEAR: &str = "🧹  Clear history";
const EXIT: &str = "❌  Exit";

pub fn run_cli_menu(vault: &Vault, config: &Config) -> Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║         🦀 PASSFORGE                 ║");
    println!("╚══════════════════════════════════════╝");

    let mut generator = PasswordGenerator::new();
    let mut last = config.generation_defaults();
    let mut stdout = io::stdout();

    loop {
        let options = vec![GENERATE, ANALYZE, HISTORY, FAVORITES, EXPORT, CLEAR, EXIT];
        let selection = Select::new("Choose an option:", options)
            .with_help_message("Use arrow keys to navigate, Enter to select. Esc to exit.")
            .prompt_skippable()?;

        match selection {
            Some(GENERATE) => {
                last = prompt_generation_config(&last)?;
                let password = generator.generate(&last);
                vault.record_generated(&password)?;

                println!("\nGenerated Password: {}", password);
                handlers::write_strength(&mut stdout, &strength::score(&password))?;

                if Confirm::new("Add to favorites?").with_default(false).prompt()? {
                    handlers::handle_favorite(&mut stdout, vault, &password, false)?;
                }
            }
            Some(ANALYZE) => {
                let password = Text::new("Password to analyze:").prompt()?;
                handlers::write_strength(&mut stdout, &strength::score(&password))?;
            }
            Some(HISTORY) => handlers::handle_history(&mut stdout, vault, false, false)?,
            Some(FAVORITES) => manage_favorites(vault)?,
            Some(EXPORT) => {
                let target = Text::new("Export to (file or directory, blank for current directory):")
                    .prompt()?;
                let target = target.trim();
                let output = if target.is_empty() { None } else { Some(std::path::Path::new(target)) };
                handlers::handle_export(&mut stdout, vault, output, false)?;
            }
            Some(CLEAR) => {
                if Confirm::new("Clear all recent passwords?").with_default(false).prompt()? {
                    handlers::handle_history(&mut stdout, vault, true, false)?;
                }
            }
            Some(EXIT) | None => break,
            Some(_) => {}
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}

fn prompt_generation_config(previous: &GenerationConfig) -> Result<GenerationConfig> {
    let start = GenerationMode::ALL
        .iter()
        .position(|m| *m == previous.mode)
        .unwrap_or(0);
    let mode = Select::new("Mode:", GenerationMode::ALL.to_vec())
        .with_starting_cursor(start)
        .prompt()?;

    let (min, max) = mode.length_bounds();
    let length = CustomType::<usize>::new(&format!("Length ({}-{}):", min, max))
        .with_default(previous.length.clamp(min, max))
        .with_error_message("Please enter a whole number")
        .prompt()?;

    let mut config = GenerationConfig {
        length,
        mode,
        ..previous.clone()
    };

    match mode {
        GenerationMode::Standard => {
            config.include_uppercase = ask("Include uppercase letters?", previous.include_uppercase)?;
            config.include_lowercase = ask("Include lowercase letters?", previous.include_lowercase)?;
            config.include_numbers = ask("Include numbers?", previous.include_numbers)?;
            config.include_special = ask("Include symbols?", previous.include_special)?;
            config.exclude_ambiguous = ask("Exclude ambiguous characters (0 O 1 l I)?", previous.exclude_ambiguous)?;
            config.avoid_repeating = ask("Avoid repeated characters?", previous.avoid_repeating)?;
        }
        GenerationMode::Pin => {
            config.exclude_ambiguous = ask("Exclude ambiguous digits (0 1)?", previous.exclude_ambiguous)?;
            config.avoid_repeating = ask("Avoid repeated digits?", previous.avoid_repeating)?;
        }
        GenerationMode::Pronounceable => {
            config.include_uppercase = ask("Capitalize the first letter?", previous.include_uppercase)?;
        }
        GenerationMode::Passphrase => {
            config.include_numbers = ask("Append a number?", previous.include_numbers)?;
            config.include_special = ask("Append a symbol?", previous.include_special)?;
        }
    }

    Ok(config.clamp_length())
}

fn ask(question: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new(question).with_default(default).prompt()?)
}

fn manage_favorites(vault: &Vault) -> Result<()> {
    let favorites = vault.favorites()?;
    if favorites.is_empty() {
        println!("No favorites yet.");
        return Ok(());
    }

    let choice = Select::new("Select a favorite to remove (Esc to go back):", favorites)
        .prompt_skippable()?;

    if let Some(password) = choice {
        vault.toggle_favorite(&password)?;
        println!("Removed from favorites");
    }

    Ok(())
}
