//! Date helper functions

use chrono::NaiveDate;

/// Display format for post dates, e.g. "Jan 05, 2024"
pub const DISPLAY_FORMAT: &str = "%b %d, %Y";

/// Format an ISO-8601 calendar date for display
///
/// Input that is not a calendar date is returned unchanged.
///
/// # Examples
/// ```ignore
/// format_post_date("2024-01-05")  // -> "Jan 05, 2024"
/// format_post_date("not-a-date")  // -> "not-a-date"
/// ```
pub fn format_post_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso.trim(), "%Y-%m-%d") {
        Ok(date) => date.format(DISPLAY_FORMAT).to_string(),
        Err(_) => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_post_date() {
        assert_eq!(format_post_date("2024-01-05"), "Jan 05, 2024");
        assert_eq!(format_post_date("2023-12-31"), "Dec 31, 2023");
    }

    #[test]
    fn test_unparseable_passthrough() {
        assert_eq!(format_post_date("not-a-date"), "not-a-date");
        assert_eq!(format_post_date("2024-13-01"), "2024-13-01");
        assert_eq!(format_post_date(""), "");
    }
}
