//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserStore`] trait이 저장소 계약을 정의하고, 두 가지 구현을 제공합니다.
//!
//! - [`UserRepository`] - MongoDB 기반 운영 저장소
//! - [`InMemoryUserStore`] - 테스트 및 `STORAGE_BACKEND=memory` 실행용
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserStore, UserStore};
//!
//! let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
//! let user = store.get(1).await?;
//! ```

pub mod memory_repo;
pub mod user_repo;
pub mod user_store;

pub use memory_repo::InMemoryUserStore;
pub use user_repo::UserRepository;
pub use user_store::UserStore;
