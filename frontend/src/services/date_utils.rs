use chrono::NaiveDate;

/// Format a YYYY-MM-DD date for display in the transaction table,
/// e.g. "2024-01-15" becomes "Jan 15, 2024". Falls back to the raw string
/// when the date does not parse.
pub fn format_display_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%b %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display_date() {
        assert_eq!(format_display_date("2024-01-15"), "Jan 15, 2024");
        assert_eq!(format_display_date("2023-12-01"), "Dec 1, 2023");
    }

    #[test]
    fn test_format_display_date_falls_back() {
        assert_eq!(format_display_date("not-a-date"), "not-a-date");
        assert_eq!(format_display_date("2024-13-01"), "2024-13-01");
        assert_eq!(format_display_date(""), "");
    }
}
