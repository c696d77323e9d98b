// src/generators/charset.rs
use crate::models::GenerationConfig;

/// Characters easily mistaken for one another on screen.
pub const AMBIGUOUS: &str = "0O1lI";

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const LOWERCASE_UNAMBIGUOUS: &str = "abcdefghijkmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const UPPERCASE_UNAMBIGUOUS: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const DIGITS_UNAMBIGUOUS: &str = "23456789";
pub const SPECIAL: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

pub const CONSONANTS: &str = "bcdfghjklmnpqrstvwxyz";
pub const VOWELS: &str = "aeiou";

/// Symbols appended to a passphrase.
pub const PASSPHRASE_SYMBOLS: &str = "!@#$%^&*";

/// Last-resort alphabet when a mode yields nothing.
pub const ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub const PASSPHRASE_SEPARATOR: &str = "-";

pub const WORDS: [&str; 32] = [
    "apple", "banana", "cherry", "dragon", "eagle", "forest", "galaxy", "harbor",
    "island", "jaguar", "knight", "lighthouse", "mountain", "nebula", "ocean", "phoenix",
    "quantum", "rainbow", "sunset", "thunder", "universe", "volcano", "whisper", "zenith",
    "adventure", "brilliant", "champion", "discover", "elephant", "fantasy", "grateful", "harmony",
];

/// Named, ordered set of distinct characters to draw from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterClass {
    name: &'static str,
    chars: Vec<char>,
}

impl CharacterClass {
    pub fn new(name: &'static str, alphabet: &str) -> Self {
        let mut class = Self {
            name,
            chars: Vec::with_capacity(alphabet.len()),
        };
        class.extend(alphabet);
        class
    }

    /// Append the characters of `alphabet` not already present.
    pub fn extend(&mut self, alphabet: &str) {
        for c in alphabet.chars() {
            if !self.chars.contains(&c) {
                self.chars.push(c);
            }
        }
    }

    /// Union of the classes enabled in a Standard-mode config. Falls back to
    /// the lowercase alphabet when nothing is enabled.
    pub fn standard(config: &GenerationConfig) -> Self {
        let ambiguous = config.exclude_ambiguous;
        let mut class = Self::new("standard", "");

        if config.include_lowercase {
            class.extend(if ambiguous { LOWERCASE_UNAMBIGUOUS } else { LOWERCASE });
        }
        if config.include_uppercase {
            class.extend(if ambiguous { UPPERCASE_UNAMBIGUOUS } else { UPPERCASE });
        }
        if config.include_numbers {
            class.extend(if ambiguous { DIGITS_UNAMBIGUOUS } else { DIGITS });
        }
        if config.include_special {
            class.extend(SPECIAL);
        }

        if class.is_empty() {
            log::debug!("No character classes enabled, using lowercase");
            return Self::new("lowercase", LOWERCASE);
        }
        class
    }

    pub fn pin(config: &GenerationConfig) -> Self {
        if config.exclude_ambiguous {
            Self::new("digits-unambiguous", DIGITS_UNAMBIGUOUS)
        } else {
            Self::new("digits", DIGITS)
        }
    }

    pub fn consonants() -> Self {
        Self::new("consonants", CONSONANTS)
    }

    pub fn vowels() -> Self {
        Self::new("vowels", VOWELS)
    }

    pub fn alphanumeric() -> Self {
        Self::new("alphanumeric", ALPHANUMERIC)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Map a uniform draw onto a member by modulo. The bias this introduces
    /// is negligible for alphabets this small.
    pub fn pick(&self, value: u32) -> Option<char> {
        if self.chars.is_empty() {
            return None;
        }
        Some(self.chars[value as usize % self.chars.len()])
    }
}
