//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### API 키 미들웨어 (ApiKeyMiddleware)
//! - `x-api-key` 헤더를 서버 설정(`API_KEY`)과 비교
//! - 실패 시 401 응답 봉투 반환, 핸들러는 실행되지 않음
//! - 성공 시 `AuthenticatedClient`를 request extension에 저장
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::ApiKeyMiddleware;
//!
//! App::new()
//!     .service(
//!         web::scope("/api/users")
//!             .wrap(ApiKeyMiddleware::new()) // 보호된 라우트에만 적용
//!             .service(search_users)
//!     )
//!     .service(health_check)
//! ```

pub mod api_key_middleware;
mod api_key_inner;

pub use api_key_inner::check_api_key;
pub use api_key_middleware::ApiKeyMiddleware;
