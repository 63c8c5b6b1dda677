//! 사용자 요청 DTO 모듈
//!
//! 클라이언트 요청 본문/쿼리에 대응하는 DTO와 필드 규칙을 제공합니다.
//! 원시 JSON을 DTO로 변환하는 단계는 [`crate::validation`]에서 수행합니다.

pub mod create_user;
pub mod search_users;
pub mod update_user;

pub use create_user::CreateUserRequest;
pub use search_users::SearchUsersQuery;
pub use update_user::UpdateUserRequest;

use chrono::{DateTime, NaiveDate};
use validator::ValidationError;

/// ISO-8601 날짜 검증
///
/// `YYYY-MM-DD` 날짜 또는 RFC 3339 타임스탬프를 허용합니다.
pub(crate) fn validate_iso_date(value: &str) -> Result<(), ValidationError> {
    let is_date = NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok();
    let is_timestamp = DateTime::parse_from_rfc3339(value).is_ok();

    if !(is_date || is_timestamp) {
        return Err(ValidationError::new("invalid_iso_date")
            .with_message("must be in ISO 8601 date format".into()));
    }
    Ok(())
}
