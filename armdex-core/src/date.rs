use chrono::{DateTime, NaiveDate};

/// Format used when presenting a parsed `lastUpdated` value.
const DISPLAY_FORMAT: &str = "%B %-d, %Y";

/// Parse a `lastUpdated` value as an RFC 3339 timestamp or a plain
/// `YYYY-MM-DD` date.
pub fn parse_last_updated(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

/// Render a `lastUpdated` value for display ("March 5, 2025").
///
/// Unparseable values are returned verbatim so one bad date never breaks a
/// whole view.
pub fn display_last_updated(raw: &str) -> String {
    match parse_last_updated(raw) {
        Some(date) => date.format(DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_date() {
        assert_eq!(display_last_updated("2025-03-05"), "March 5, 2025");
    }

    #[test]
    fn rfc3339_timestamp() {
        assert_eq!(
            display_last_updated("2024-11-20T08:30:00Z"),
            "November 20, 2024"
        );
    }

    #[test]
    fn garbage_is_echoed() {
        assert_eq!(display_last_updated("sometime last week"), "sometime last week");
        assert_eq!(parse_last_updated("2024-13-40"), None);
    }
}
