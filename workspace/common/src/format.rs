//! Display formatting for the activity feed and stat cards.

use chrono::{DateTime, Utc};

/// Relative-time bucket for an activity timestamp. Buckets match the
/// backend's feed semantics: under a minute reads "Just now", then whole
/// minutes, hours and days. Timestamps from the future clamp to "Just now".
pub fn time_ago(time: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = (now - time).num_seconds().max(0);

    if diff < 60 {
        "Just now".to_string()
    } else if diff < 3600 {
        format!("{} minutes ago", diff / 60)
    } else if diff < 86400 {
        format!("{} hours ago", diff / 3600)
    } else {
        format!("{} days ago", diff / 86400)
    }
}

/// Thousands-grouped rendering of a metric, with at most two fraction digits
/// and trailing zeros trimmed (`1234567.5` -> `1,234,567.5`).
pub fn group_digits(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative && (whole > 0 || frac > 0) {
        out.push('-');
    }
    out.push_str(&grouped);

    if frac > 0 {
        if frac % 10 == 0 {
            out.push_str(&format!(".{}", frac / 10));
        } else {
            out.push_str(&format!(".{:02}", frac));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs_before_now: i64) -> (DateTime<Utc>, DateTime<Utc>) {
        let now = Utc.with_ymd_and_hms(2026, 8, 28, 12, 0, 0).unwrap();
        (now - chrono::Duration::seconds(secs_before_now), now)
    }

    #[test]
    fn time_ago_bucket_boundaries() {
        let cases = [
            (0, "Just now"),
            (59, "Just now"),
            (60, "1 minutes ago"),
            (3599, "59 minutes ago"),
            (3600, "1 hours ago"),
            (86399, "23 hours ago"),
            (86400, "1 days ago"),
            (3 * 86400 + 120, "3 days ago"),
        ];
        for (secs, expected) in cases {
            let (time, now) = at(secs);
            assert_eq!(time_ago(time, now), expected, "at {} seconds", secs);
        }
    }

    #[test]
    fn time_ago_clamps_future_timestamps() {
        let (time, now) = at(-120);
        assert_eq!(time_ago(time, now), "Just now");
    }

    #[test]
    fn group_digits_inserts_separators() {
        assert_eq!(group_digits(0.0), "0");
        assert_eq!(group_digits(999.0), "999");
        assert_eq!(group_digits(1000.0), "1,000");
        assert_eq!(group_digits(1234567.0), "1,234,567");
    }

    #[test]
    fn group_digits_trims_fractions() {
        assert_eq!(group_digits(1234.5), "1,234.5");
        assert_eq!(group_digits(1234.50), "1,234.5");
        assert_eq!(group_digits(0.05), "0.05");
        assert_eq!(group_digits(12.344), "12.34");
        assert_eq!(group_digits(12.346), "12.35");
    }

    #[test]
    fn group_digits_handles_negatives() {
        assert_eq!(group_digits(-1234.5), "-1,234.5");
        assert_eq!(group_digits(-0.0), "0");
    }
}
