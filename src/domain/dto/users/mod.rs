//! 사용자 DTO 모듈
//!
//! 사용자 API의 요청/응답 데이터 전송 객체를 제공합니다.
//!
//! - [`request`] - 검색 쿼리, 일괄 업데이트, 생성 요청
//! - [`response`] - 클라이언트에게 반환되는 사용자 표현

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
