//! Users Entity Module
//!
//! 사용자 도메인의 엔티티를 정의합니다.
//!
//! - [`User`](user::User) - 저장소에 보관되는 사용자 레코드
//! - [`UserPatch`](user::UserPatch) - 부분 업데이트 (제공된 필드만 변경)
//! - [`UserFilter`](user::UserFilter) - 전체 스캔 필터

pub mod user;

pub use user::{User, UserFilter, UserPatch};
