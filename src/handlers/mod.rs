//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (curl, 프론트엔드, 내부 서비스)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Middlewares - API 키 검증                    ← Auth Gate
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - 입력 검증, 응답 봉투      ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                      ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - UserStore                      ← Storage Gateway
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 `web::Data<UserService>`로 서비스를 주입받고,
//! `Result<HttpResponse, AppError>`를 반환하여 실패를 표준 응답 봉투로 변환합니다.
//!
//! ## 모듈 구성
//!
//! - **`users`**: 사용자 관리 엔드포인트
//!   - 사용자 검색 (`GET /api/users/search`)
//!   - 사용자 일괄 업데이트 (`POST /api/users/update`)

pub mod users;
