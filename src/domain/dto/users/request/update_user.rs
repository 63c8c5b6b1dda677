//! 사용자 일괄 업데이트 요청 DTO
//!
//! `POST /api/users/update` 본문 배열의 각 원소에 해당합니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::validate_iso_date;
use crate::domain::entities::users::UserPatch;

/// 단일 사용자 업데이트 요청
///
/// `id`는 필수이며, `username`, `email`, `birthdate` 중 최소 하나가 있어야 합니다.
/// 제공된 필드만 저장된 레코드에 반영됩니다.
///
/// ```json
/// { "id": 1, "username": "new.name" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_has_update_field"))]
pub struct UpdateUserRequest {
    /// 대상 사용자 ID (양의 정수)
    #[validate(range(min = 1, message = "must be a positive number"))]
    pub id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(
        min = 3,
        max = 50,
        message = "length must be between 3 and 50 characters"
    ))]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "must be a valid email"))]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_iso_date"))]
    pub birthdate: Option<String>,
}

impl UpdateUserRequest {
    /// `id`만 가진 요청을 생성합니다. 필드는 빌더 메서드로 추가합니다.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            username: None,
            email: None,
            birthdate: None,
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_birthdate(mut self, birthdate: impl Into<String>) -> Self {
        self.birthdate = Some(birthdate.into());
        self
    }

    /// 요청에 포함된 필드만으로 부분 업데이트를 구성합니다.
    pub fn to_patch(&self) -> UserPatch {
        UserPatch {
            username: self.username.clone(),
            email: self.email.clone(),
            birthdate: self.birthdate.clone(),
        }
    }
}

/// `id` 외에 변경할 필드가 최소 하나 있는지 검증
fn validate_has_update_field(req: &UpdateUserRequest) -> Result<(), ValidationError> {
    if req.username.is_none() && req.email.is_none() && req.birthdate.is_none() {
        return Err(ValidationError::new("missing_update_field")
            .with_message("must contain at least one of [username, email, birthdate]".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let request = UpdateUserRequest::new(1).with_username("new.name");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_id_only_request_is_rejected() {
        let errors = UpdateUserRequest::new(1).validate().unwrap_err();
        assert!(errors.errors().contains_key("__all__"));
    }

    #[test]
    fn test_non_positive_id_is_rejected() {
        let errors = UpdateUserRequest::new(0).with_email("a@b.com").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("id"));
    }

    #[test]
    fn test_field_rules() {
        assert!(UpdateUserRequest::new(1).with_username("ab").validate().is_err());
        assert!(UpdateUserRequest::new(1).with_username("a".repeat(51)).validate().is_err());
        assert!(UpdateUserRequest::new(1).with_username("a".repeat(50)).validate().is_ok());
        assert!(UpdateUserRequest::new(1).with_email("not-an-email").validate().is_err());
        assert!(UpdateUserRequest::new(1).with_birthdate("21/04/1991").validate().is_err());
        assert!(UpdateUserRequest::new(1).with_birthdate("1991-04-21").validate().is_ok());
    }

    #[test]
    fn test_to_patch_carries_supplied_fields_only() {
        let patch = UpdateUserRequest::new(3).with_email("jane@email.com").to_patch();

        assert_eq!(patch.email.as_deref(), Some("jane@email.com"));
        assert!(patch.username.is_none());
        assert!(patch.birthdate.is_none());
    }
}
