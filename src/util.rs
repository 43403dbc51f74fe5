//! Shared display helpers.

use chrono::{DateTime, Utc};

/// Format a date for display in en-US short form, UTC: "Mar 5, 2026".
pub fn format_display_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_display_date() {
        let date = Utc.with_ymd_and_hms(2026, 3, 5, 12, 0, 0).unwrap();
        assert_eq!(format_display_date(&date), "Mar 5, 2026");
    }

    #[test]
    fn test_format_display_date_two_digit_day() {
        let date = Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap();
        assert_eq!(format_display_date(&date), "Dec 31, 2025");
    }
}
