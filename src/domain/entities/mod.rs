//! 도메인 엔티티 모듈
//!
//! 저장소에 영속화되는 엔티티 타입들을 제공합니다.

pub mod users;
