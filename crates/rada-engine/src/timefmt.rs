use chrono::{DateTime, Utc};
use rada_types::parse_timestamp;

/// Format a timestamp relative to `now` (e.g., "3h ago", "2d ago").
///
/// Buckets: under an hour is "Just now", under a day counts hours, under a
/// week counts days, anything older shows the calendar date. Future
/// timestamps (clock skew between device and backend) clamp to "Just now"
/// instead of printing negative counts.
pub fn format_relative(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(timestamp).num_seconds().max(0);

    if seconds < 3600 {
        "Just now".to_string()
    } else if seconds < 86_400 {
        format!("{}h ago", seconds / 3600)
    } else if seconds < 7 * 86_400 {
        format!("{}d ago", seconds / 86_400)
    } else {
        timestamp.format("%b %-d, %Y").to_string()
    }
}

/// [`format_relative`] over a raw API timestamp string. An unparseable
/// input is returned as-is rather than failing the render.
pub fn format_relative_str(raw: &str, now: DateTime<Utc>) -> String {
    match parse_timestamp(raw) {
        Ok(timestamp) => format_relative(timestamp, now),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_thirty_minutes_ago_is_just_now() {
        let ts = now() - Duration::minutes(30);
        assert_eq!(format_relative(ts, now()), "Just now");
    }

    #[test]
    fn test_fifty_nine_minutes_is_just_now() {
        let ts = now() - Duration::minutes(59);
        assert_eq!(format_relative(ts, now()), "Just now");
    }

    #[test]
    fn test_hours_bucket_floors() {
        let ts = now() - Duration::minutes(150);
        assert_eq!(format_relative(ts, now()), "2h ago");
    }

    #[test]
    fn test_twenty_five_hours_is_one_day() {
        let ts = now() - Duration::hours(25);
        assert_eq!(format_relative(ts, now()), "1d ago");
    }

    #[test]
    fn test_six_days_is_days_bucket() {
        let ts = now() - Duration::days(6);
        assert_eq!(format_relative(ts, now()), "6d ago");
    }

    #[test]
    fn test_week_old_shows_calendar_date() {
        let ts = now() - Duration::days(7);
        assert_eq!(format_relative(ts, now()), "Feb 23, 2024");
    }

    #[test]
    fn test_future_timestamp_clamps_to_just_now() {
        let ts = now() + Duration::hours(3);
        assert_eq!(format_relative(ts, now()), "Just now");
    }

    #[test]
    fn test_str_wrapper_parses_rfc3339() {
        assert_eq!(
            format_relative_str("2024-03-01T09:00:00Z", now()),
            "3h ago"
        );
    }

    #[test]
    fn test_str_wrapper_falls_back_to_raw_input() {
        assert_eq!(format_relative_str("last tuesday", now()), "last tuesday");
    }
}
