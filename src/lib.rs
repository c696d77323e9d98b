//! Password generation and entropy-based strength estimation.
//!
//! The two engines are [`generate`] and [`score`]. Everything else (history,
//! favorites, export, the CLI) only calls into them.

pub mod cli;
pub mod core;
pub mod db;
pub mod export;
pub mod generators;
pub mod logging;
pub mod models;
pub mod strength;
pub mod utils;

pub use generators::{generate, PasswordGenerator, RandomSource};
pub use models::{CrackTime, GenerationConfig, GenerationMode, StrengthLabel, StrengthResult};
pub use strength::score;
