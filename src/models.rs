// src/models.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// Password generation modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    #[default]
    Standard,
    Pronounceable,
    Pin,
    Passphrase,
}

impl GenerationMode {
    pub const ALL: [GenerationMode; 4] = [
        GenerationMode::Standard,
        GenerationMode::Pronounceable,
        GenerationMode::Pin,
        GenerationMode::Passphrase,
    ];

    /// Length range offered to the user for this mode, inclusive.
    pub fn length_bounds(&self) -> (usize, usize) {
        match self {
            GenerationMode::Pin => (4, 12),
            GenerationMode::Passphrase => (8, 50),
            GenerationMode::Standard | GenerationMode::Pronounceable => (4, 128),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationMode::Standard => "standard",
            GenerationMode::Pronounceable => "pronounceable",
            GenerationMode::Pin => "pin",
            GenerationMode::Passphrase => "passphrase",
        }
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenerationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(GenerationMode::Standard),
            "pronounceable" => Ok(GenerationMode::Pronounceable),
            "pin" => Ok(GenerationMode::Pin),
            "passphrase" => Ok(GenerationMode::Passphrase),
            other => Err(format!("unknown generation mode '{}'", other)),
        }
    }
}

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Characters to produce. The generator accepts any value and allocates
    /// the whole password up front, so callers taking user input should pass
    /// it through [`GenerationConfig::clamp_length`] first.
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_special: bool,
    pub exclude_ambiguous: bool,
    pub avoid_repeating: bool,
    pub mode: GenerationMode,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_special: true,
            exclude_ambiguous: false,
            avoid_repeating: false,
            mode: GenerationMode::Standard,
        }
    }
}

impl GenerationConfig {
    /// Clamp `length` into the range the current mode offers.
    pub fn clamp_length(mut self) -> Self {
        let (min, max) = self.mode.length_bounds();
        self.length = self.length.clamp(min, max);
        self
    }
}

/// Ranked strength categories, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
    VeryStrong,
    Excellent,
    Outstanding,
    Exceptional,
    Perfect,
}

impl StrengthLabel {
    pub const RANKED: [StrengthLabel; 10] = [
        StrengthLabel::VeryWeak,
        StrengthLabel::Weak,
        StrengthLabel::Fair,
        StrengthLabel::Good,
        StrengthLabel::Strong,
        StrengthLabel::VeryStrong,
        StrengthLabel::Excellent,
        StrengthLabel::Outstanding,
        StrengthLabel::Exceptional,
        StrengthLabel::Perfect,
    ];

    /// Label for a floored score; anything past the table maps to `Perfect`.
    pub fn from_index(index: usize) -> Self {
        Self::RANKED[index.min(Self::RANKED.len() - 1)]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Fair => "Fair",
            StrengthLabel::Good => "Good",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
            StrengthLabel::Excellent => "Excellent",
            StrengthLabel::Outstanding => "Outstanding",
            StrengthLabel::Exceptional => "Exceptional",
            StrengthLabel::Perfect => "Perfect",
        }
    }

    /// Severity color token shown next to the label.
    pub fn color(&self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "red-500",
            StrengthLabel::Weak => "orange-500",
            StrengthLabel::Fair => "amber-400",
            StrengthLabel::Good => "yellow-400",
            StrengthLabel::Strong => "emerald-500",
            StrengthLabel::VeryStrong => "teal-500",
            StrengthLabel::Excellent => "cyan-500",
            StrengthLabel::Outstanding => "blue-500",
            StrengthLabel::Exceptional => "indigo-500",
            StrengthLabel::Perfect => "purple-500",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrackTime {
    pub online: String,
    pub offline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthResult {
    pub score: f64,
    pub label: StrengthLabel,
    pub entropy_bits: f64,
    pub charset_size: u32,
    pub crack_time: CrackTime,
}

impl StrengthResult {
    pub fn color(&self) -> &'static str {
        self.label.color()
    }

    /// Entropy rendered with two decimals, e.g. `"37.60"`.
    pub fn entropy_display(&self) -> String {
        format!("{:.2}", self.entropy_bits)
    }
}
