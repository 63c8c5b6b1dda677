//! 사용자 생성 요청 DTO
//!
//! HTTP로는 노출되지 않으며, 초기 데이터 적재 도구와 서비스 계층에서 사용합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validate_iso_date;

/// 새 사용자 생성을 위한 요청 DTO
///
/// 모든 필드가 필수이며 업데이트 요청과 동일한 필드 규칙을 따릅니다.
/// ID는 저장소의 원자적 카운터가 할당합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(
        min = 3,
        max = 50,
        message = "length must be between 3 and 50 characters"
    ))]
    pub username: String,

    #[validate(email(message = "must be a valid email"))]
    pub email: String,

    #[validate(custom(function = "validate_iso_date"))]
    pub birthdate: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_create_request() {
        let request = CreateUserRequest {
            username: "jane.doe".to_string(),
            email: "jane.doe@email.com".to_string(),
            birthdate: "1988-12-15".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let request = CreateUserRequest {
            username: "jane.doe".to_string(),
            email: "jane.doe".to_string(),
            birthdate: "1988-12-15".to_string(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }
}
