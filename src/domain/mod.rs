//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈로, 사용자 엔티티와 API 계약을 정의합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 저장소에 영속화되는 User, 부분 업데이트(UserPatch), 검색 필터(UserFilter)
//! ├── DTOs      - 요청/응답 데이터 전송 객체와 응답 봉투(ApiResponse)
//! └── Models    - 요청 처리 중에 쓰이는 값 객체 (인증 표식)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`]
//! - **User**: `_id`(정수), `username`, `email`, `birthdate`
//! - **UserPatch**: 제공된 필드만 담는 부분 업데이트 값
//! - **UserFilter**: 저장소 스캔 필터
//!
//! ### [`dto`]
//! - **요청**: `SearchUsersQuery`, `UpdateUserRequest`, `CreateUserRequest` (`validator` 규칙 포함)
//! - **응답**: `UserResponse`, `ApiResponse<T>`
//!
//! ### [`models`]
//! - **AuthenticatedClient**: API 키 검증 통과 표식 (request extension)

pub mod dto;
pub mod entities;
pub mod models;
