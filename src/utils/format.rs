// src/utils/format.rs

const MINUTE: f64 = 60.0;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;
const YEAR: f64 = 365.0 * DAY;

/// Beyond this many years a duration is just "Centuries".
const MAX_YEARS: f64 = 1_000_000.0;

// Format a duration in seconds for display
pub fn format_duration(seconds: f64) -> String {
    if seconds < 1.0 {
        return "Instant".to_string();
    }
    if seconds < MINUTE {
        return format!("{:.0} {}", seconds, unit("second", seconds));
    }

    let minutes = seconds / MINUTE;
    if seconds < HOUR {
        return format!("{:.1} {}", minutes, unit("minute", minutes));
    }

    let hours = seconds / HOUR;
    if seconds < DAY {
        return format!("{:.1} {}", hours, unit("hour", hours));
    }

    let days = seconds / DAY;
    if seconds < YEAR {
        return format!("{:.1} {}", days, unit("day", days));
    }

    let years = seconds / YEAR;
    if years < MAX_YEARS {
        return format!("{:.1} {}", years, unit("year", years));
    }

    "Centuries".to_string()
}

// Singular only when the value is exactly one
fn unit(name: &str, value: f64) -> String {
    if value == 1.0 {
        name.to_string()
    } else {
        format!("{}s", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_one_second_is_instant() {
        assert_eq!(format_duration(0.0), "Instant");
        assert_eq!(format_duration(1e-10), "Instant");
        assert_eq!(format_duration(0.999), "Instant");
    }

    #[test]
    fn seconds_are_whole_and_pluralized() {
        assert_eq!(format_duration(1.0), "1 second");
        assert_eq!(format_duration(30.0), "30 seconds");
        assert_eq!(format_duration(59.0), "59 seconds");
    }

    #[test]
    fn larger_units_use_one_decimal() {
        assert_eq!(format_duration(60.0), "1.0 minute");
        assert_eq!(format_duration(90.0), "1.5 minutes");
        assert_eq!(format_duration(HOUR), "1.0 hour");
        assert_eq!(format_duration(6.0 * HOUR), "6.0 hours");
        assert_eq!(format_duration(3.0 * DAY), "3.0 days");
        assert_eq!(format_duration(2.5 * YEAR), "2.5 years");
    }

    #[test]
    fn huge_durations_are_centuries() {
        assert_eq!(format_duration(MAX_YEARS * YEAR), "Centuries");
        assert_eq!(format_duration(f64::INFINITY), "Centuries");
    }
}
