//! 날짜/시각 파싱 유틸리티
//!
//! 기간 조회 경로 파라미터(`{from}`/`{to}`)의 텍스트 형식을 UTC
//! 시각으로 변환합니다.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::core::errors::{AppError, AppResult};

/// 경로 파라미터 문자열을 UTC 시각으로 파싱합니다.
///
/// 허용 형식 (순서대로 시도):
/// 1. RFC 3339 (`2024-01-01T00:00:00Z`, 오프셋 포함 가능)
/// 2. 오프셋 없는 일시 (`2024-01-01T00:00:00`, UTC로 해석)
/// 3. 날짜만 (`2024-01-01`, UTC 자정으로 해석)
///
/// # 에러
///
/// * `ValidationError` - 어느 형식에도 맞지 않는 경우
pub fn parse_utc_datetime(raw: &str) -> AppResult<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Ok(Utc.from_utc_datetime(&naive));
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)));
    }

    Err(AppError::ValidationError(format!(
        "유효하지 않은 일시 형식입니다: {}",
        raw
    )))
}
