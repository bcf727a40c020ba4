use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

/// Parses the timestamp formats the backend actually emits: RFC 3339 from
/// `toISOString()`, a bare `YYYY-MM-DD` from the deadline date input, or a
/// dateless datetime. Anything else is `None`.
pub fn parse_flexible_datetime(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|ndt| Utc.from_utc_datetime(&ndt));
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(Utc.from_utc_datetime(&ndt));
    }
    None
}

/// Start of a rolling window `days` long, ending at `now`.
pub fn rolling_window_start(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    now - Duration::days(days)
}

// Lenient deserializer for Option<DateTime<Utc>> fields. An unparseable
// deadline or donation date becomes `None`; the aggregator clamps from there.
pub mod flexible_datetime {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value.as_str().and_then(parse_flexible_datetime))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc3339_parses() {
        let dt = parse_flexible_datetime("2025-06-01T12:30:00.000Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 0).unwrap());
    }

    #[test]
    fn test_bare_date_parses_to_midnight_utc() {
        let dt = parse_flexible_datetime("2025-06-01").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_garbage_yields_none() {
        assert!(parse_flexible_datetime("next tuesday").is_none());
        assert!(parse_flexible_datetime("").is_none());
    }

    #[test]
    fn test_rolling_window_start() {
        let now = Utc.with_ymd_and_hms(2025, 6, 30, 0, 0, 0).unwrap();
        let start = rolling_window_start(now, 30);
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 5, 31, 0, 0, 0).unwrap());
    }
}
