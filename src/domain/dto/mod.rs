//! 데이터 전송 객체(DTO) 모듈
//!
//! HTTP 계층과 서비스 계층 사이에서 오가는 요청/응답 타입을 정의합니다.
//! 모든 응답은 [`response::ApiResponse`] 봉투로 감싸서 전달됩니다.

pub mod response;
pub mod users;

pub use response::ApiResponse;
pub use users::*;
