// src/generators/password.rs
use crate::generators::charset::{
    CharacterClass, PASSPHRASE_SEPARATOR, PASSPHRASE_SYMBOLS, WORDS,
};
use crate::generators::random::{RandomSource, SystemRandom};
use crate::models::{GenerationConfig, GenerationMode};

/// Draws per position before a repeated character is accepted.
pub const MAX_REPEAT_ATTEMPTS: usize = 100;

/// Fewest words a passphrase may contain.
pub const MIN_PASSPHRASE_WORDS: usize = 4;

/// Produces passwords from a [`RandomSource`]. Holds no state besides the
/// source, so every call is independent.
pub struct PasswordGenerator<R = SystemRandom> {
    source: R,
}

impl PasswordGenerator<SystemRandom> {
    pub fn new() -> Self {
        PasswordGenerator {
            source: SystemRandom::new(),
        }
    }
}

impl Default for PasswordGenerator<SystemRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> PasswordGenerator<R> {
    pub fn with_source(source: R) -> Self {
        PasswordGenerator { source }
    }

    pub fn source(&self) -> &R {
        &self.source
    }

    /// Generate one password. Never fails: degenerate configs are absorbed by
    /// fallback alphabets. A `length` of zero is treated as one.
    pub fn generate(&mut self, config: &GenerationConfig) -> String {
        let length = config.length.max(1);

        let password = match config.mode {
            GenerationMode::Standard => {
                let class = CharacterClass::standard(config);
                self.draw_from_class(&class, length, config.avoid_repeating)
            }
            GenerationMode::Pin => {
                let class = CharacterClass::pin(config);
                self.draw_from_class(&class, length, config.avoid_repeating)
            }
            GenerationMode::Pronounceable => {
                self.pronounceable(length, config.include_uppercase)
            }
            GenerationMode::Passphrase => self.passphrase(length, config),
        };

        if password.is_empty() {
            log::warn!("{} mode produced nothing, using alphanumeric fallback", config.mode);
            return self.draw_from_class(&CharacterClass::alphanumeric(), length, false);
        }

        password
    }

    fn draw_from_class(
        &mut self,
        class: &CharacterClass,
        length: usize,
        avoid_repeating: bool,
    ) -> String {
        let mut password = String::with_capacity(length);
        let mut previous: Option<char> = None;

        for value in self.source.next_uniform(length) {
            let Some(mut c) = class.pick(value) else {
                break;
            };

            // A single-character class can never satisfy the rule
            if avoid_repeating && class.len() > 1 {
                let mut attempts = 1;
                while previous == Some(c) && attempts < MAX_REPEAT_ATTEMPTS {
                    c = class.pick(self.source.next_u32()).unwrap_or(c);
                    attempts += 1;
                }
                if previous == Some(c) {
                    log::debug!("Repeat avoidance gave up after {} draws in {}", attempts, class.name());
                }
            }

            password.push(c);
            previous = Some(c);
        }

        password
    }

    fn pronounceable(&mut self, length: usize, capitalize: bool) -> String {
        let consonants = CharacterClass::consonants();
        let vowels = CharacterClass::vowels();

        let mut password: String = self
            .source
            .next_uniform(length)
            .into_iter()
            .enumerate()
            .filter_map(|(i, value)| {
                if i % 2 == 0 {
                    consonants.pick(value)
                } else {
                    vowels.pick(value)
                }
            })
            .collect();

        if capitalize {
            if let Some(first) = password.get_mut(0..1) {
                first.make_ascii_uppercase();
            }
        }

        password
    }

    // Length is word-boundary determined and may miss the target either way
    fn passphrase(&mut self, length: usize, config: &GenerationConfig) -> String {
        let word_count = (length / 6).max(MIN_PASSPHRASE_WORDS);

        let words: Vec<&str> = self
            .source
            .next_uniform(word_count)
            .into_iter()
            .map(|value| WORDS[value as usize % WORDS.len()])
            .collect();

        let mut password = words.join(PASSPHRASE_SEPARATOR);

        if config.include_numbers && password.len() < length {
            let suffix = self.source.next_u32() % 1000;
            password.push_str(&suffix.to_string());
        }

        if config.include_special && password.len() < length {
            let symbols = CharacterClass::new("passphrase-symbols", PASSPHRASE_SYMBOLS);
            if let Some(symbol) = symbols.pick(self.source.next_u32()) {
                password.push(symbol);
            }
        }

        password
    }
}
