//! # Storage Gateway 계약
//!
//! 원격 문서 저장소에 대한 얇은 타입 인터페이스입니다.
//! 서비스 계층은 이 trait에만 의존하므로, 운영 환경에서는 MongoDB 구현
//! ([`UserRepository`](super::user_repo::UserRepository))을, 테스트와 로컬 개발에서는
//! 메모리 구현([`InMemoryUserStore`](super::memory_repo::InMemoryUserStore))을 주입합니다.
//!
//! 모든 연산은 저장소를 직접 읽고 씁니다. 구현체는 캐시를 두지 않습니다.
//! 타임아웃과 재시도는 저장소 클라이언트의 기본 동작에 맡깁니다.

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::users::{User, UserFilter, UserPatch};

#[async_trait]
pub trait UserStore: Send + Sync {
    /// 저장소 이름 (로깅용)
    fn name(&self) -> &str;

    /// ID로 단건 조회. 없으면 `Ok(None)`.
    async fn get(&self, id: i64) -> AppResult<Option<User>>;

    /// 레코드 저장 (같은 ID가 있으면 덮어씀)
    async fn put(&self, user: &User) -> AppResult<()>;

    /// 같은 ID가 없을 때만 저장합니다. 저장했으면 `true`.
    async fn insert_if_absent(&self, user: &User) -> AppResult<bool>;

    /// 부분 업데이트를 적용하고 변경 후 상태를 반환합니다.
    ///
    /// 대상이 없으면 아무것도 쓰지 않고 `Ok(None)`을 반환합니다.
    async fn update(&self, id: i64, patch: &UserPatch) -> AppResult<Option<User>>;

    /// 전체 스캔. 필터가 있으면 만족하는 레코드만 반환합니다.
    ///
    /// 반환 순서는 저장소 구현에 따르며 보장되지 않습니다.
    async fn scan(&self, filter: Option<&UserFilter>) -> AppResult<Vec<User>>;

    /// 원자적 카운터에서 다음 사용자 ID를 할당합니다.
    async fn next_id(&self) -> AppResult<i64>;

    /// 카운터가 최소 `id`가 되도록 올립니다. 이미 크면 변경하지 않습니다.
    async fn reserve_ids_through(&self, id: i64) -> AppResult<()>;
}
