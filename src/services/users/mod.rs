//! 사용자 관리 서비스 모듈
//!
//! 사용자 검색, 일괄 업데이트, 생성 등의 비즈니스 규칙을 구현합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let users = user_service.search_users(Some("john")).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
