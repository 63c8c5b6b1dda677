//! # API 키 보안 설정
//!
//! 모든 `/api/users` 요청은 `x-api-key` 헤더의 값이 서버에 설정된 키와
//! 일치해야 합니다. 키는 환경 변수로만 제공하며 기본값은 없습니다.
//!
//! ```bash
//! export API_KEY="your-api-key"
//! ```

use std::env;

use crate::core::errors::{AppError, AppResult};

/// API 키를 전달하는 요청 헤더 이름
pub const API_KEY_HEADER: &str = "x-api-key";

/// 보안 관련 설정
pub struct SecurityConfig;

impl SecurityConfig {
    /// 서버에 설정된 API 키를 반환합니다.
    ///
    /// # Errors
    ///
    /// `API_KEY`가 없거나 비어 있으면 `AppError::ConfigError`.
    /// 서버는 이 경우 시작하지 않습니다.
    pub fn api_key() -> AppResult<String> {
        require("API_KEY", env::var("API_KEY").ok())
    }
}

/// 미들웨어에 전달되는 API 키 설정 (`web::Data`로 등록)
#[derive(Debug, Clone)]
pub struct ApiKeySettings {
    pub api_key: String,
}

impl ApiKeySettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into() }
    }

    pub fn from_env() -> AppResult<Self> {
        SecurityConfig::api_key().map(Self::new)
    }
}

fn require(name: &str, value: Option<String>) -> AppResult<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::ConfigError(format!(
            "Missing required environment variable: {}",
            name
        ))),
    }
}
