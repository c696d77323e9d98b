// src/cli/commands.rs
use std::path::PathBuf;

use clap::Subcommand;

use crate::models::{GenerationConfig, GenerationMode};

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate(GenerateArgs),

    /// Estimate the strength of a password
    Analyze {
        /// Password to score
        #[arg(required = true)]
        password: String,
    },

    /// Show recently generated passwords
    History {
        /// Forget all recent passwords
        #[arg(long)]
        clear: bool,
    },

    /// Add a password to favorites, or remove it if already there
    Favorite {
        #[arg(required = true)]
        password: String,
    },

    /// List favorite passwords
    Favorites,

    /// Write history and favorites to a numbered text file
    Export {
        /// Target file or directory (defaults to passwords-<date>.txt)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Interactive menu
    Menu,
}

#[derive(clap::Args, Debug, Default, Clone)]
pub struct GenerateArgs {
    /// Password length (clamped to the mode's range)
    #[arg(long, short)]
    pub length: Option<usize>,

    /// standard, pronounceable, pin or passphrase
    #[arg(long, short)]
    pub mode: Option<GenerationMode>,

    #[arg(long)]
    pub no_uppercase: bool,

    #[arg(long)]
    pub no_lowercase: bool,

    #[arg(long)]
    pub no_numbers: bool,

    #[arg(long)]
    pub no_symbols: bool,

    /// Leave out look-alike characters (0 O 1 l I)
    #[arg(long)]
    pub exclude_ambiguous: bool,

    /// Avoid the same character twice in a row
    #[arg(long)]
    pub avoid_repeating: bool,

    /// How many passwords to generate
    #[arg(long, short, default_value_t = 1)]
    pub count: usize,

    /// Don't record the passwords in history
    #[arg(long)]
    pub no_save: bool,
}

impl GenerateArgs {
    /// Overlay the flags on `defaults` and clamp the length to the mode.
    pub fn to_config(&self, defaults: GenerationConfig) -> GenerationConfig {
        GenerationConfig {
            length: self.length.unwrap_or(defaults.length),
            include_uppercase: defaults.include_uppercase && !self.no_uppercase,
            include_lowercase: defaults.include_lowercase && !self.no_lowercase,
            include_numbers: defaults.include_numbers && !self.no_numbers,
            include_special: defaults.include_special && !self.no_symbols,
            exclude_ambiguous: defaults.exclude_ambiguous || self.exclude_ambiguous,
            avoid_repeating: defaults.avoid_repeating || self.avoid_repeating,
            mode: self.mode.unwrap_or(defaults.mode),
        }
        .clamp_length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use clap::Parser;

    #[test]
    fn flags_override_defaults() {
        let args = GenerateArgs {
            length: Some(200),
            no_symbols: true,
            avoid_repeating: true,
            ..Default::default()
        };
        let config = args.to_config(GenerationConfig::default());
        assert_eq!(config.length, 128);
        assert!(!config.include_special);
        assert!(config.include_numbers);
        assert!(config.avoid_repeating);
    }

    #[test]
    fn parses_generate_subcommand() {
        let args = Args::try_parse_from([
            "passforge", "--json", "generate", "--mode", "pin", "-l", "6", "--count", "3",
        ])
        .unwrap();
        assert!(args.json);
        match args.command {
            Some(CliCommand::Generate(generate)) => {
                assert_eq!(generate.mode, Some(GenerationMode::Pin));
                assert_eq!(generate.length, Some(6));
                assert_eq!(generate.count, 3);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(Args::try_parse_from(["passforge", "generate", "--mode", "emoji"]).is_err());
    }
}
