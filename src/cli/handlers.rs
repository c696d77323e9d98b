// src/cli/handlers.rs
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use console::{Color, Style};
use serde_json::json;

use crate::cli::GenerateArgs;
use crate::core::Vault;
use crate::export::{self, ExportError};
use crate::generators::{PasswordGenerator, RandomSource};
use crate::models::{GenerationConfig, StrengthLabel, StrengthResult};
use crate::strength;

// Terminal color for each severity tier
fn label_style(label: StrengthLabel) -> Style {
    let color = match label {
        StrengthLabel::VeryWeak => Color::Red,
        StrengthLabel::Weak => Color::Color256(208),
        StrengthLabel::Fair | StrengthLabel::Good => Color::Yellow,
        StrengthLabel::Strong => Color::Green,
        StrengthLabel::VeryStrong | StrengthLabel::Excellent => Color::Cyan,
        StrengthLabel::Outstanding => Color::Blue,
        StrengthLabel::Exceptional | StrengthLabel::Perfect => Color::Magenta,
    };
    Style::new().fg(color).bold()
}

pub fn write_strength<W: Write>(out: &mut W, result: &StrengthResult) -> Result<()> {
    writeln!(
        out,
        "Strength: {}/10 {}",
        result.score,
        label_style(result.label).apply_to(result.label)
    )?;
    writeln!(out, "Entropy:  {} bits (charset {})", result.entropy_display(), result.charset_size)?;
    writeln!(out, "Crack time online:  {}", result.crack_time.online)?;
    writeln!(out, "Crack time offline: {}", result.crack_time.offline)?;
    Ok(())
}

fn strength_json(result: &StrengthResult) -> serde_json::Value {
    json!({
        "score": result.score,
        "label": result.label.as_str(),
        "color": result.color(),
        "entropy": result.entropy_display(),
        "charset_size": result.charset_size,
        "crack_time": result.crack_time,
    })
}

pub fn handle_generate<W: Write, R: RandomSource>(
    out: &mut W,
    vault: &Vault,
    generator: &mut PasswordGenerator<R>,
    defaults: GenerationConfig,
    args: &GenerateArgs,
    json: bool,
) -> Result<Vec<String>> {
    let config = args.to_config(defaults);
    log::debug!("Generating {} password(s) with {:?}", args.count, config);

    let mut generated = Vec::with_capacity(args.count);
    for _ in 0..args.count.max(1) {
        let password = generator.generate(&config);
        if !args.no_save {
            vault.record_generated(&password)?;
        }
        generated.push(password);
    }

    if json {
        let items: Vec<_> = generated
            .iter()
            .map(|p| json!({ "password": p, "strength": strength_json(&strength::score(p)) }))
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&json!({ "mode": config.mode, "passwords": items }))?)?;
    } else {
        for password in &generated {
            writeln!(out, "\nGenerated Password: {}", password)?;
            write_strength(out, &strength::score(password))?;
        }
    }

    Ok(generated)
}

pub fn handle_analyze<W: Write>(out: &mut W, password: &str, json: bool) -> Result<()> {
    let result = strength::score(password);
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&strength_json(&result))?)?;
    } else {
        write_strength(out, &result)?;
    }
    Ok(())
}

fn write_list<W: Write>(out: &mut W, title: &str, passwords: &[String], json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(passwords)?)?;
    } else if passwords.is_empty() {
        writeln!(out, "No {} yet.", title)?;
    } else {
        writeln!(out, "{}:", title)?;
        for (idx, password) in passwords.iter().enumerate() {
            writeln!(out, "{:>3}. {}", idx + 1, password)?;
        }
    }
    Ok(())
}

pub fn handle_history<W: Write>(out: &mut W, vault: &Vault, clear: bool, json: bool) -> Result<()> {
    if clear {
        vault.clear_history()?;
        if json {
            writeln!(out, "{}", json!({ "cleared": true }))?;
        } else {
            writeln!(out, "✅ History cleared!")?;
        }
        return Ok(());
    }

    write_list(out, "recent passwords", &vault.history()?, json)
}

pub fn handle_favorite<W: Write>(out: &mut W, vault: &Vault, password: &str, json: bool) -> Result<bool> {
    let was_favorite = vault.is_favorite(password)?;
    let now_favorite = vault.toggle_favorite(password)?;

    if json {
        writeln!(out, "{}", json!({ "password": password, "favorite": now_favorite }))?;
    } else if now_favorite {
        writeln!(out, "⭐ Added to favorites")?;
    } else if was_favorite {
        writeln!(out, "Removed from favorites")?;
    } else {
        writeln!(out, "❗ Favorites are full; remove one first")?;
    }

    Ok(now_favorite)
}

pub fn handle_favorites<W: Write>(out: &mut W, vault: &Vault, json: bool) -> Result<()> {
    write_list(out, "favorites", &vault.favorites()?, json)
}

pub fn handle_export<W: Write>(out: &mut W, vault: &Vault, output: Option<&Path>, json: bool) -> Result<()> {
    match export::export_passwords(vault, output) {
        Ok(report) => {
            if json {
                writeln!(out, "{}", json!({ "path": report.path, "count": report.count }))?;
            } else {
                writeln!(out, "✅ Exported {} passwords to {}", report.count, report.path.display())?;
            }
            Ok(())
        }
        Err(ExportError::NothingToExport) => {
            if json {
                writeln!(out, "{}", json!({ "path": null, "count": 0 }))?;
            } else {
                writeln!(out, "❗ No passwords to export")?;
            }
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
