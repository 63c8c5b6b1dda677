//! # Core Module
//!
//! 애플리케이션 전역에서 사용하는 핵심 타입을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web ResponseError 구현으로 표준 응답 봉투 변환
//! - **자동 변환**: thiserror 기반 에러 정의, MongoDB 에러 `From` 변환
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn find(store: &dyn UserStore, id: i64) -> AppResult<User> {
//!     store.get(id).await?
//!         .ok_or_else(|| AppError::NotFound(format!("User with id {} does not exist", id)))
//! }
//! ```

pub mod errors;

pub use errors::*;
