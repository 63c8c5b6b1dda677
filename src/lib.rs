//! 사용자 관리 API
//!
//! 단일 사용자 컬렉션에 대한 검색과 일괄 업데이트를 제공하는 HTTP 서비스입니다.
//! 모든 `/api/users` 요청은 `x-api-key` 헤더로 보호됩니다.
//!
//! # Features
//!
//! - **사용자 검색**: username/email 부분 일치 (대소문자 무시)
//! - **일괄 업데이트**: 순차 처리, 존재하지 않는 ID에서 즉시 중단
//! - **표준 응답 봉투**: `{ success, data?, message?, error? }`
//! - **MongoDB**: 사용자 데이터 영구 저장 (테스트용 메모리 저장소 제공)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + API 키 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증(validation) / 응답 봉투
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore (MongoDB / 메모리)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_management_api::repositories::users::InMemoryUserStore;
//! use user_management_api::services::users::UserService;
//!
//! let service = UserService::new(Arc::new(InMemoryUserStore::new()));
//! let users = service.search_users(Some("john")).await?;
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validation;
