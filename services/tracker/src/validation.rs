//! Input validation and parsing utilities

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// Validate the username of a registration request
pub fn require_username(raw: Option<&str>) -> Result<String, String> {
    match raw.map(str::trim) {
        Some(username) if !username.is_empty() => Ok(username.to_string()),
        _ => Err("Specify Username".to_string()),
    }
}

/// Validate the description of an add-exercise request
pub fn require_description(raw: Option<&str>) -> Result<String, String> {
    match raw.map(str::trim) {
        Some(description) if !description.is_empty() => Ok(description.to_string()),
        _ => Err("Description is required".to_string()),
    }
}

/// Validate the duration of an add-exercise request
pub fn require_duration(raw: Option<i32>) -> Result<i32, String> {
    raw.ok_or_else(|| "Duration is required".to_string())
}

/// Parse a userId taken from a request body or query string
pub fn parse_user_id(raw: Option<&str>) -> Result<Uuid, String> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| "Specify userId".to_string())?;

    Uuid::parse_str(raw).map_err(|_| "Invalid userId".to_string())
}

/// Parse a date value in `%Y-%m-%d` or RFC 3339 form
///
/// Date-only input resolves to midnight UTC, symmetric with how date-only
/// exercise dates are stored.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_require_username() {
        assert_eq!(require_username(Some("alice")).unwrap(), "alice");
        assert_eq!(require_username(Some("  bob  ")).unwrap(), "bob");
        assert_eq!(require_username(None).unwrap_err(), "Specify Username");
        assert_eq!(require_username(Some("")).unwrap_err(), "Specify Username");
        assert_eq!(require_username(Some("   ")).unwrap_err(), "Specify Username");
    }

    #[test]
    fn test_require_description() {
        assert_eq!(require_description(Some("run")).unwrap(), "run");
        assert!(require_description(None).is_err());
        assert!(require_description(Some(" ")).is_err());
    }

    #[test]
    fn test_require_duration() {
        assert_eq!(require_duration(Some(30)).unwrap(), 30);
        assert_eq!(require_duration(None).unwrap_err(), "Duration is required");
    }

    #[test]
    fn test_parse_user_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_user_id(Some(&id.to_string())).unwrap(), id);
        assert_eq!(parse_user_id(None).unwrap_err(), "Specify userId");
        assert_eq!(parse_user_id(Some("")).unwrap_err(), "Specify userId");
        assert_eq!(parse_user_id(Some("not-a-uuid")).unwrap_err(), "Invalid userId");
    }

    #[test]
    fn test_parse_date_date_only() {
        let parsed = parse_date("2023-01-05").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 1, 5, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_date_rfc3339() {
        let parsed = parse_date("2023-01-05T12:30:00Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 1, 5, 12, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_date_garbage_is_none() {
        assert!(parse_date("").is_none());
        assert!(parse_date("   ").is_none());
        assert!(parse_date("next tuesday").is_none());
        assert!(parse_date("2023-13-99").is_none());
    }
}
