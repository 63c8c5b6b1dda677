//! 메모리 기반 사용자 저장소
//!
//! `STORAGE_BACKEND=memory` 로컬 실행과 테스트에서 사용하는 [`UserStore`] 구현입니다.
//! 쓰기 횟수를 기록하여 "쓰기 없음" 같은 속성을 테스트에서 확인할 수 있습니다.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use super::user_store::UserStore;
use crate::core::errors::{AppResult, ErrorContext};
use crate::domain::entities::users::{User, UserFilter, UserPatch};

const LOCK_POISONED: &str = "in-memory user store lock poisoned";

#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<BTreeMap<i64, User>>,
    counter: AtomicI64,
    writes: AtomicUsize,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 초기 레코드로 채운 저장소를 생성합니다. 카운터는 가장 큰 ID로 맞춥니다.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let map: BTreeMap<i64, User> = users.into_iter().map(|user| (user.id, user)).collect();
        let max_id = map.keys().next_back().copied().unwrap_or(0);

        Self {
            users: RwLock::new(map),
            counter: AtomicI64::new(max_id),
            writes: AtomicUsize::new(0),
        }
    }

    /// 지금까지 수행된 쓰기(put/insert/update) 횟수
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn get(&self, id: i64) -> AppResult<Option<User>> {
        let users = self.users.read().context(LOCK_POISONED)?;
        Ok(users.get(&id).cloned())
    }

    async fn put(&self, user: &User) -> AppResult<()> {
        let mut users = self.users.write().context(LOCK_POISONED)?;
        users.insert(user.id, user.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn insert_if_absent(&self, user: &User) -> AppResult<bool> {
        let mut users = self.users.write().context(LOCK_POISONED)?;
        if users.contains_key(&user.id) {
            return Ok(false);
        }
        users.insert(user.id, user.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }

    async fn update(&self, id: i64, patch: &UserPatch) -> AppResult<Option<User>> {
        let mut users = self.users.write().context(LOCK_POISONED)?;
        let Some(user) = users.get_mut(&id) else {
            return Ok(None);
        };

        patch.apply_to(user);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(Some(user.clone()))
    }

    async fn scan(&self, filter: Option<&UserFilter>) -> AppResult<Vec<User>> {
        let users = self.users.read().context(LOCK_POISONED)?;
        Ok(users
            .values()
            .filter(|user| filter.is_none_or(|f| f.matches(user)))
            .cloned()
            .collect())
    }

    async fn next_id(&self) -> AppResult<i64> {
        Ok(self.counter.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn reserve_ids_through(&self, id: i64) -> AppResult<()> {
        self.counter.fetch_max(id, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;

    fn store() -> InMemoryUserStore {
        InMemoryUserStore::with_users([
            User::new(1, "john.doe", "john.doe@email.com", "1991-04-21"),
            User::new(2, "jane.doe", "jane.doe@email.com", "1988-12-15"),
        ])
    }

    #[actix_web::test]
    async fn test_get_and_put() {
        let store = store();
        assert!(store.get(3).await.unwrap().is_none());

        let user = User::new(3, "alice.johnson", "alice.johnson@email.com", "1992-03-28");
        store.put(&user).await.unwrap();

        assert_eq!(store.get(3).await.unwrap(), Some(user));
        assert_eq!(store.write_count(), 1);
    }

    #[actix_web::test]
    async fn test_update_returns_new_state() {
        let store = store();
        let patch = UserPatch {
            email: Some("john@new.com".to_string()),
            ..Default::default()
        };

        let updated = store.update(1, &patch).await.unwrap().unwrap();

        assert_eq!(updated.email, "john@new.com");
        assert_eq!(updated.username, "john.doe");
        assert_eq!(store.get(1).await.unwrap(), Some(updated));
    }

    #[actix_web::test]
    async fn test_update_missing_id_writes_nothing() {
        let store = store();
        let patch = UserPatch {
            username: Some("ghost".to_string()),
            ..Default::default()
        };

        assert!(store.update(999, &patch).await.unwrap().is_none());
        assert_eq!(store.write_count(), 0);
        assert!(store.get(999).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_insert_if_absent_skips_existing() {
        let store = store();
        let duplicate = User::new(1, "other", "other@email.com", "2000-01-01");

        assert!(!store.insert_if_absent(&duplicate).await.unwrap());
        assert_eq!(store.get(1).await.unwrap().unwrap().username, "john.doe");
    }

    #[actix_web::test]
    async fn test_scan_with_filter() {
        let store = store();
        assert_eq!(store.scan(None).await.unwrap().len(), 2);

        let filter = UserFilter::NameOrEmailContains("JANE".to_string());
        let found = store.scan(Some(&filter)).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);
    }

    #[actix_web::test]
    async fn test_counter_starts_after_seeded_ids() {
        let store = store();
        assert_eq!(store.next_id().await.unwrap(), 3);

        store.reserve_ids_through(10).await.unwrap();
        assert_eq!(store.next_id().await.unwrap(), 11);

        store.reserve_ids_through(5).await.unwrap();
        assert_eq!(store.next_id().await.unwrap(), 12);
    }

    #[actix_web::test]
    async fn test_poisoned_lock_is_reported_as_error() {
        let store = store();

        std::thread::scope(|scope| {
            let writer = scope.spawn(|| {
                let users = store.users.write().unwrap();
                assert!(users.is_empty(), "writer panics while holding the lock");
            });
            assert!(writer.join().is_err());
        });

        assert!(matches!(store.scan(None).await, Err(AppError::InternalError(_))));
        assert!(matches!(store.get(1).await, Err(AppError::InternalError(_))));
    }
}
