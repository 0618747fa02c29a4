use chrono::{DateTime, Datelike, Utc};

/// Formats an RFC 3339 timestamp as `Jan 5, 2024`.
///
/// Anything that does not parse is returned unchanged.
pub fn format_date(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(date) => date.with_timezone(&Utc).format("%b %-d, %Y").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

pub fn current_year() -> i32 {
    Utc::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_short_month_and_unpadded_day() {
        assert_eq!(format_date("2024-01-05T00:00:00Z"), "Jan 5, 2024");
        assert_eq!(format_date("2019-11-23T17:42:10Z"), "Nov 23, 2019");
    }

    #[test]
    fn offsets_are_normalised_to_utc() {
        assert_eq!(format_date("2024-03-01T01:00:00+02:00"), "Feb 29, 2024");
    }

    #[test]
    fn unparseable_input_is_kept() {
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_date(""), "");
    }
}
