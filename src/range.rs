//! Inclusive date-range checks on `YYYY-MM-DD` strings.
//!
//! Plain string comparison orders these dates correctly because the format is
//! fixed width and zero padded. Nothing here validates the input.

pub fn in_range(date: &str, start: &str, end: &str) -> bool {
    start <= date && date <= end
}

/// ISO-only display of a range; empty when either bound is missing or blank.
pub fn format_range(start: Option<&str>, end: Option<&str>) -> String {
    let start = start.filter(|s| !s.is_empty());
    let end = end.filter(|s| !s.is_empty());
    match (start, end) {
        (Some(start), Some(end)) if start == end => start.to_string(),
        (Some(start), Some(end)) => format!("{start}\u{2013}{end}"),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        assert!(in_range("2024-01-01", "2024-01-01", "2024-01-07"));
        assert!(in_range("2024-01-07", "2024-01-01", "2024-01-07"));
        assert!(in_range("2024-01-04", "2024-01-01", "2024-01-07"));
        assert!(!in_range("2023-12-31", "2024-01-01", "2024-01-07"));
        assert!(!in_range("2024-01-08", "2024-01-01", "2024-01-07"));
    }

    #[test]
    fn comparison_crosses_month_and_year() {
        assert!(in_range("2024-01-02", "2023-12-30", "2024-01-05"));
        assert!(in_range("2024-10-01", "2024-09-29", "2024-10-05"));
        assert!(!in_range("2024-10-06", "2024-09-29", "2024-10-05"));
    }

    #[test]
    fn inverted_range_never_matches() {
        assert!(!in_range("2024-01-05", "2024-01-07", "2024-01-01"));
    }

    #[test]
    fn single_day_range_prints_once() {
        assert_eq!(format_range(Some("2024-01-01"), Some("2024-01-01")), "2024-01-01");
    }

    #[test]
    fn range_uses_en_dash() {
        assert_eq!(
            format_range(Some("2024-01-01"), Some("2024-01-07")),
            "2024-01-01–2024-01-07"
        );
    }

    #[test]
    fn missing_bound_prints_nothing() {
        assert_eq!(format_range(None, Some("2024-01-07")), "");
        assert_eq!(format_range(Some("2024-01-01"), None), "");
        assert_eq!(format_range(None, None), "");
    }

    #[test]
    fn blank_bound_prints_nothing() {
        assert_eq!(format_range(Some(""), Some("2024-01-07")), "");
        assert_eq!(format_range(Some("2024-01-01"), Some("")), "");
        assert_eq!(format_range(Some(""), Some("")), "");
    }
}
