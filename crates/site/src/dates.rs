//! Display helpers for the ISO calendar dates stored on event records.

use chrono::{Local, NaiveDate};

const ISO_FORMAT: &str = "%Y-%m-%d";

/// Today's local calendar date, zero padded, for upcoming-event queries
pub fn today() -> String {
    Local::now().date_naive().format(ISO_FORMAT).to_string()
}

/// "Thursday, November 5, 2026"; unparsable input passes through unchanged
pub fn format_date_long(date: &str) -> String {
    match NaiveDate::parse_from_str(date, ISO_FORMAT) {
        Ok(parsed) => parsed.format("%A, %B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// "Nov 5, 2026"; unparsable input passes through unchanged
pub fn format_date_short(date: &str) -> String {
    match NaiveDate::parse_from_str(date, ISO_FORMAT) {
        Ok(parsed) => parsed.format("%b %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Whether the date falls strictly before today; events keep their spot
/// through the end of their own day
pub fn is_past(date: &str) -> bool {
    match NaiveDate::parse_from_str(date, ISO_FORMAT) {
        Ok(parsed) => parsed < Local::now().date_naive(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_form() {
        assert_eq!(format_date_long("2026-11-05"), "Thursday, November 5, 2026");
    }

    #[test]
    fn short_form() {
        assert_eq!(format_date_short("2026-11-05"), "Nov 5, 2026");
        assert_eq!(format_date_short("2026-01-09"), "Jan 9, 2026");
    }

    #[test]
    fn unparsable_dates_pass_through() {
        assert_eq!(format_date_long("soon"), "soon");
        assert_eq!(format_date_short(""), "");
        assert!(!is_past("not a date"));
    }

    #[test]
    fn past_detection() {
        assert!(is_past("2000-01-01"));
        assert!(!is_past("2999-12-31"));
        // An event today is not past yet
        assert!(!is_past(&today()));
    }

    #[test]
    fn today_is_zero_padded_iso() {
        let today = today();
        assert_eq!(today.len(), 10);
        assert_eq!(today.as_bytes()[4], b'-');
        assert_eq!(today.as_bytes()[7], b'-');
    }
}
