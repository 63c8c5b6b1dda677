//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 `Arc<dyn UserStore>`를 주입받아 생성되며,
//! `web::Data`로 애플리케이션에 등록되어 핸들러에서 사용됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = web::Data::new(UserService::new(store));
//! App::new().app_data(user_service.clone());
//! ```

pub mod users;
