/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, NaiveDate, Utc};

/// "2024-02-18" -> "Feb 18, 2024"
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Optional date, "-" when absent
pub fn format_date_opt(date: Option<&NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| "-".to_string())
}

/// "2024-02-14T10:30:00Z" -> "Feb 14, 2024 10:30"
pub fn format_datetime(ts: &DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y %H:%M").to_string()
}

/// Short relative label for activity feeds ("3 hours ago").
/// Timestamps in the future or older than a month fall back to the date.
pub fn format_relative(ts: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let delta = *now - *ts;
    if delta.num_seconds() < 0 || delta.num_days() > 30 {
        return format_date(&ts.date_naive());
    }
    let (value, unit) = if delta.num_days() > 0 {
        (delta.num_days(), "day")
    } else if delta.num_hours() > 0 {
        (delta.num_hours(), "hour")
    } else if delta.num_minutes() > 0 {
        (delta.num_minutes(), "minute")
    } else {
        return "just now".to_string();
    };
    let plural = if value == 1 { "" } else { "s" };
    format!("{value} {unit}{plural} ago")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2024, 2, 8).unwrap();
        assert_eq!(format_date(&d), "Feb 8, 2024");
        assert_eq!(format_date_opt(None), "-");
        assert_eq!(format_date_opt(Some(&d)), "Feb 8, 2024");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime(&ts("2024-02-14T10:30:00Z")), "Feb 14, 2024 10:30");
    }

    #[test]
    fn test_format_relative() {
        let now = ts("2024-02-14T12:00:00Z");
        assert_eq!(format_relative(&ts("2024-02-14T11:59:30Z"), &now), "just now");
        assert_eq!(format_relative(&ts("2024-02-14T11:00:00Z"), &now), "1 hour ago");
        assert_eq!(format_relative(&ts("2024-02-14T09:00:00Z"), &now), "3 hours ago");
        assert_eq!(format_relative(&ts("2024-02-11T12:00:00Z"), &now), "3 days ago");
        assert_eq!(format_relative(&ts("2023-12-01T12:00:00Z"), &now), "Dec 1, 2023");
        assert_eq!(format_relative(&ts("2024-02-15T12:00:00Z"), &now), "Feb 15, 2024");
    }
}
