use chrono::{DateTime, NaiveDateTime, Utc};

use crate::errors::{AssignTrackError, Result};

/// 解析截止时间字符串
///
/// 接受 RFC 3339（带时区）或 `YYYY-MM-DDTHH:MM:SS` 朴素格式，
/// 后者按 UTC 解释。持久化布局使用的正是朴素格式。
pub fn parse_deadline(value: &str) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| AssignTrackError::validation(format!("invalid deadline '{trimmed}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_naive_as_utc() {
        let dt = parse_deadline("2024-02-15T23:59:59").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-02-15T23:59:59+00:00");
    }

    #[test]
    fn test_parse_rfc3339() {
        let dt = parse_deadline("2024-02-15T23:59:59+08:00").unwrap();
        assert_eq!(dt.hour(), 15);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_deadline("next friday").unwrap_err();
        assert_eq!(err.code(), "E001");
    }
}
