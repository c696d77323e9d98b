// src/strength/mod.rs
//! Entropy-based strength estimate for a password string.
//!
//! The estimate only looks at which character classes appear, so it is the
//! same regardless of how the password was produced.

use crate::models::{CrackTime, StrengthLabel, StrengthResult};
use crate::utils::format_duration;

/// Guess rate of a rate-limited attacker.
pub const ONLINE_GUESSES_PER_SECOND: f64 = 1e10;
/// Guess rate of an attacker holding the hash.
pub const OFFLINE_GUESSES_PER_SECOND: f64 = 1e14;

pub const LOWERCASE_SPACE: u32 = 26;
pub const UPPERCASE_SPACE: u32 = 26;
pub const DIGIT_SPACE: u32 = 10;
/// Flat approximation of the symbol space.
pub const OTHER_SPACE: u32 = 32;

pub const MAX_SCORE: f64 = 10.0;

const LENGTH_THRESHOLDS: [usize; 5] = [8, 12, 16, 20, 24];

// Highest tier first; only the first match applies
const ENTROPY_BONUSES: [(f64, f64); 4] = [(128.0, 2.0), (100.0, 1.5), (80.0, 1.0), (60.0, 0.5)];

#[derive(Debug, Default, Clone, Copy)]
struct Composition {
    lowercase: bool,
    uppercase: bool,
    digit: bool,
    other: bool,
}

impl Composition {
    fn of(password: &str) -> Self {
        password.chars().fold(Self::default(), |mut found, c| {
            if c.is_ascii_lowercase() {
                found.lowercase = true;
            } else if c.is_ascii_uppercase() {
                found.uppercase = true;
            } else if c.is_ascii_digit() {
                found.digit = true;
            } else {
                found.other = true;
            }
            found
        })
    }

    fn charset_size(&self) -> u32 {
        let mut size = 0;
        if self.lowercase {
            size += LOWERCASE_SPACE;
        }
        if self.uppercase {
            size += UPPERCASE_SPACE;
        }
        if self.digit {
            size += DIGIT_SPACE;
        }
        if self.other {
            size += OTHER_SPACE;
        }
        if size == 0 {
            LOWERCASE_SPACE
        } else {
            size
        }
    }

    fn class_count(&self) -> usize {
        [self.lowercase, self.uppercase, self.digit, self.other]
            .iter()
            .filter(|present| **present)
            .count()
    }
}

/// Estimated alphabet size from the classes present; 26 when none are.
pub fn charset_size(password: &str) -> u32 {
    Composition::of(password).charset_size()
}

/// `length * log2(charset_size)`, zero for an empty password.
pub fn entropy(password: &str, charset_size: u32) -> f64 {
    let length = password.chars().count();
    if length == 0 || charset_size == 0 {
        return 0.0;
    }
    length as f64 * f64::from(charset_size).log2()
}

/// Exhaustive-search time for both attacker models.
pub fn crack_time(entropy_bits: f64) -> CrackTime {
    let combinations = 2f64.powf(entropy_bits);

    CrackTime {
        online: format_duration(combinations / ONLINE_GUESSES_PER_SECOND),
        offline: format_duration(combinations / OFFLINE_GUESSES_PER_SECOND),
    }
}

fn entropy_bonus(entropy_bits: f64) -> f64 {
    ENTROPY_BONUSES
        .iter()
        .find(|(threshold, _)| entropy_bits >= *threshold)
        .map(|(_, bonus)| *bonus)
        .unwrap_or(0.0)
}

/// Score a password. Pure: equal inputs give equal results.
pub fn score(password: &str) -> StrengthResult {
    let composition = Composition::of(password);
    let length = password.chars().count();
    let charset_size = composition.charset_size();
    let entropy_bits = entropy(password, charset_size);

    let length_points = LENGTH_THRESHOLDS.iter().filter(|t| length >= **t).count();
    let raw = (length_points + composition.class_count()) as f64 + entropy_bonus(entropy_bits);
    let clamped = raw.min(MAX_SCORE);

    StrengthResult {
        score: (clamped * 10.0).round() / 10.0,
        label: StrengthLabel::from_index(clamped.floor() as usize),
        entropy_bits,
        charset_size,
        crack_time: crack_time(entropy_bits),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_is_very_weak() {
        let result = score("");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.label, StrengthLabel::VeryWeak);
        assert_eq!(result.entropy_display(), "0.00");
        assert_eq!(result.charset_size, 26);
        assert_eq!(result.crack_time.online, "Instant");
        assert_eq!(result.crack_time.offline, "Instant");
    }

    #[test]
    fn repeated_lowercase_is_fair() {
        let result = score("aaaaaaaa");
        assert_eq!(result.charset_size, 26);
        assert_eq!(result.entropy_display(), "37.60");
        assert_eq!(result.score, 2.0);
        assert_eq!(result.label, StrengthLabel::Fair);
        assert_eq!(result.crack_time.online, "21 seconds");
        assert_eq!(result.crack_time.offline, "Instant");
    }

    #[test]
    fn mixed_classes_earn_entropy_bonus() {
        let result = score("Tr0ub4dor&3");
        assert_eq!(result.charset_size, 94);
        assert!((result.entropy_bits - 72.1).abs() < 0.05, "{}", result.entropy_bits);
        assert_eq!(result.score, 5.5);
        assert_eq!(result.label, StrengthLabel::VeryStrong);
        assert_eq!(result.color(), "teal-500");
    }

    #[test]
    fn score_is_clamped_to_ten() {
        let result = score("Aa1!Aa1!Aa1!Aa1!Aa1!Aa1!");
        assert_eq!(result.score, 10.0);
        assert_eq!(result.label, StrengthLabel::Perfect);
        assert_eq!(result.crack_time.online, "Centuries");
    }

    #[test]
    fn charset_counts_each_class_once() {
        assert_eq!(charset_size("abc"), 26);
        assert_eq!(charset_size("ABC"), 26);
        assert_eq!(charset_size("123"), 10);
        assert_eq!(charset_size("a1"), 36);
        assert_eq!(charset_size("!? "), 32);
        assert_eq!(charset_size("é"), 32);
    }

    #[test]
    fn entropy_bonus_takes_highest_tier_only() {
        assert_eq!(entropy_bonus(59.9), 0.0);
        assert_eq!(entropy_bonus(60.0), 0.5);
        assert_eq!(entropy_bonus(80.0), 1.0);
        assert_eq!(entropy_bonus(100.0), 1.5);
        assert_eq!(entropy_bonus(200.0), 2.0);
    }

    #[test]
    fn crack_time_breakpoints() {
        assert_eq!(crack_time(0.0).online, "Instant");
        assert_eq!(crack_time(128.0).online, "Centuries");
        assert_eq!(crack_time(128.0).offline, "Centuries");
    }

    #[test]
    fn scoring_is_pure() {
        for password in ["", "hunter2", "correct-horse-battery-staple", "Tr0ub4dor&3"] {
            assert_eq!(score(password), score(password));
        }
    }
}
