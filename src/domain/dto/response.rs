//! 표준 응답 봉투(envelope)
//!
//! 모든 엔드포인트는 성공/실패와 관계없이 동일한 형태의 JSON을 반환합니다.
//!
//! ```json
//! { "success": true, "data": [...], "message": "Retrieved 5 users" }
//! { "success": false, "error": "Invalid API key" }
//! ```
//!
//! 값이 없는 필드는 직렬화에서 생략됩니다.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// 성공 응답 (`data`와 사람이 읽을 수 있는 `message` 포함)
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            error: None,
        }
    }

    /// 실패 응답 (`error`만 포함)
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(error.into()),
        }
    }
}
