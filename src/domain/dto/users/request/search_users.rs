//! 사용자 검색 쿼리 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// `GET /api/users/search?name=<term>` 쿼리 파라미터
///
/// `name`이 없으면 전체 목록을, 있으면 username 또는 email에
/// 대소문자 구분 없이 포함되는 사용자를 조회합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SearchUsersQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "is not allowed to be empty"))]
    pub name: Option<String>,
}
