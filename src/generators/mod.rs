// src/generators/mod.rs
pub mod charset;
pub mod password;
pub mod random;

pub use charset::CharacterClass;
pub use password::PasswordGenerator;
pub use random::{RandomSource, SeededRandom, SequenceRandom, SystemRandom};

use crate::models::GenerationConfig;

/// Generate a password from the operating system random source.
pub fn generate(config: &GenerationConfig) -> String {
    PasswordGenerator::new().generate(config)
}
