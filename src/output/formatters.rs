//! Formatting utilities for terminal output

use std::time::Duration;

/// Format an elapsed duration as `hh:mm:ss.SSS`
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_millis = elapsed.as_millis();

    let hours = total_millis / 3_600_000;
    let minutes = (total_millis / 60_000) % 60;
    let seconds = (total_millis / 1_000) % 60;
    let millis = total_millis % 1_000;

    format!("{hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_elapsed_zero() {
        assert_eq!(format_elapsed(Duration::ZERO), "00:00:00.000");
    }

    #[test]
    fn format_elapsed_millis_only() {
        assert_eq!(format_elapsed(Duration::from_millis(42)), "00:00:00.042");
    }

    #[test]
    fn format_elapsed_full_components() {
        let elapsed = Duration::from_millis(((2 * 3600) + (3 * 60) + 4) * 1000 + 567);
        assert_eq!(format_elapsed(elapsed), "02:03:04.567");
    }

    #[test]
    fn format_elapsed_wraps_minutes_and_seconds() {
        assert_eq!(format_elapsed(Duration::from_secs(3661)), "01:01:01.000");
    }
}
