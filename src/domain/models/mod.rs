//! # Domain Models Module
//!
//! 영속화되지 않는 값 객체를 정의합니다.
//!
//! - [`auth`] - API 키 인증 결과 표식

pub mod auth;

pub use auth::*;
