//! # Application Error Handling System
//!
//! 사용자 관리 API 전체에서 사용하는 통합 에러 처리 시스템입니다.
//! 모든 계층(검증, 서비스, 저장소)은 `AppError`를 반환하고, 핸들러 계층에서
//! `actix_web::ResponseError` 구현을 통해 표준 응답 봉투(envelope)로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 요청 스키마 검증 실패 |
//! | `AuthenticationError` | 401 Unauthorized | API 키 누락/불일치 |
//! | `NotFound` | 404 Not Found | 존재하지 않는 사용자 ID, 매칭되지 않는 라우트 |
//! | `DatabaseError` | 500 Internal Server Error | 저장소 계층 오류 |
//! | `ConfigError` | 500 Internal Server Error | 필수 설정 누락 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "success": false,
//!   "error": "User with id 999 does not exist"
//! }
//! ```
//!
//! 5xx 에러는 서버 로그에만 상세 내용을 기록하고, 클라이언트에게는
//! `"Internal server error"`만 전달합니다.

use thiserror::Error;

use crate::domain::dto::response::ApiResponse;

/// 5xx 응답에서 클라이언트에게 노출되는 고정 메시지
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// 애플리케이션 전역 에러 타입
///
/// `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
/// 핸들러에서 `?`로 반환하면 자동으로 HTTP 응답이 됩니다.
///
/// ## 에러 변환 패턴
///
/// ```rust,ignore
/// // MongoDB 에러 변환
/// collection.find_one(doc! { "_id": id }).await
///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
///
/// // 존재하지 않는 사용자
/// store.get(id).await?
///     .ok_or_else(|| AppError::NotFound(format!("User with id {} does not exist", id)))?;
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 저장소(MongoDB 등) 연산 실패 (500 Internal Server Error)
    ///
    /// 연결 실패, 타임아웃, 직렬화 실패 등 저장소 클라이언트가 반환한 모든 오류입니다.
    /// 재시도 없이 그대로 상위 계층으로 전파됩니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// 첫 번째로 위반된 제약 조건을 설명하는 메시지를 담습니다.
    /// 메시지는 `"[1].email" must be a valid email` 처럼 문제 필드를 명시합니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    ///
    /// 메시지는 그대로 클라이언트에게 전달되므로 대상 ID를 포함해야 합니다.
    #[error("{0}")]
    NotFound(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("{0}")]
    AuthenticationError(String),

    /// 설정 누락/오류 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러에 대응하는 HTTP 상태 코드
    pub fn status(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 클라이언트에게 전달해도 되는 메시지
    ///
    /// 4xx 에러는 메시지를 그대로 노출하고, 5xx 에러는 내부 정보를 숨깁니다.
    pub fn public_message(&self) -> String {
        if self.status().is_server_error() {
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        self.status()
    }

    /// 에러를 표준 응답 봉투로 변환합니다.
    ///
    /// 5xx 에러의 상세 내용은 `log::error!`로 서버에만 기록합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status();

        if status.is_server_error() {
            log::error!("요청 처리 중 내부 오류 발생: {}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(ApiResponse::<()>::failure(self.public_message()))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// # 예제
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let uri = std::env::var("MONGODB_URI").context("MONGODB_URI 읽기 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(error: mongodb::error::Error) -> Self {
        AppError::DatabaseError(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("\"name\" is not allowed to be empty".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("User with id 999 does not exist".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Invalid API key".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_server_errors_map_to_500() {
        for error in [
            AppError::DatabaseError("connection reset".to_string()),
            AppError::ConfigError("API_KEY missing".to_string()),
            AppError::InternalError("boom".to_string()),
        ] {
            assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_public_message_hides_internal_detail() {
        let error = AppError::DatabaseError("mongodb://admin:secret@db failed".to_string());
        assert_eq!(error.public_message(), INTERNAL_ERROR_MESSAGE);

        let error = AppError::ValidationError("\"[0].id\" is required".to_string());
        assert_eq!(error.public_message(), "Validation error: \"[0].id\" is required");

        let error = AppError::NotFound("User with id 7 does not exist".to_string());
        assert_eq!(error.public_message(), "User with id 7 does not exist");
    }

    #[actix_web::test]
    async fn test_error_body_is_failure_envelope() {
        let error = AppError::DatabaseError("socket closed".to_string());
        let body = to_bytes(error.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["error"], INTERNAL_ERROR_MESSAGE);
        assert!(json.get("data").is_none());
        assert!(!body.windows(6).any(|w| w == b"socket"));
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
