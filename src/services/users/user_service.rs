//! # 사용자 관리 서비스 구현
//!
//! 사용자 검색과 일괄 업데이트의 비즈니스 규칙을 구현합니다.
//! 입력은 검증 계층을 통과한 DTO이며, 저장소 접근은 [`UserStore`] trait을 통해서만 수행합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                  UserService                  │
//! │                                               │
//! │  search_users   update_users   create_user    │
//! │  (scan+filter)  (순차, 실패 시 즉시 중단)  (next_id)  │
//! └───────────────────────┬───────────────────────┘
//!                         │ Arc<dyn UserStore>
//!                         ▼
//!        UserRepository (MongoDB) / InMemoryUserStore
//! ```
//!
//! ## 일괄 업데이트 정책
//!
//! - 입력 순서대로 하나씩 처리하며, 각 업데이트는 현재 상태를 다시 조회합니다.
//! - 존재하지 않는 ID를 만나면 즉시 `NotFound`로 실패합니다.
//!   이미 적용된 앞선 업데이트는 롤백하지 않고, 뒤의 업데이트는 시도하지 않습니다.
//! - 변경할 필드가 없는 업데이트는 쓰기 없이 현재 레코드를 반환합니다.
//! - 잠금을 사용하지 않으므로 같은 ID에 대한 동시 요청은 마지막 쓰기가 남습니다.

use std::sync::Arc;

use log::{debug, info, warn};
use validator::Validate;

use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::users::request::{CreateUserRequest, UpdateUserRequest},
        entities::users::{User, UserFilter},
    },
    repositories::users::UserStore,
};

/// 사용자 관리 비즈니스 로직 서비스
///
/// `web::Data<UserService>`로 애플리케이션에 등록되어 모든 워커가 공유합니다.
/// 서비스 자체는 상태를 갖지 않으며, 저장소가 유일한 데이터 원천입니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let service = UserService::new(Arc::new(InMemoryUserStore::new()));
///
/// let all = service.search_users(None).await?;
/// let updated = service
///     .update_users(&[UpdateUserRequest::new(1).with_username("new.name")])
///     .await?;
/// ```
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// 사용자 검색
    ///
    /// 검색어가 없으면 전체 목록을, 있으면 `username` 또는 `email`에
    /// 대소문자 구분 없이 검색어를 포함하는 사용자를 반환합니다.
    /// 결과 순서는 저장소의 스캔 순서를 따릅니다.
    pub async fn search_users(&self, term: Option<&str>) -> AppResult<Vec<User>> {
        let filter = term.map(|term| UserFilter::NameOrEmailContains(term.to_string()));
        let users = self.store.scan(filter.as_ref()).await?;

        debug!(
            "사용자 검색 완료: term={:?}, 결과 {}건 ({})",
            term,
            users.len(),
            self.store.name()
        );
        Ok(users)
    }

    /// 일괄 업데이트
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 대상 ID가 존재하지 않음. 앞선 업데이트는 유지됩니다.
    /// * `AppError::DatabaseError` - 저장소 오류
    pub async fn update_users(&self, updates: &[UpdateUserRequest]) -> AppResult<Vec<User>> {
        let mut updated = Vec::with_capacity(updates.len());

        for (index, request) in updates.iter().enumerate() {
            let user = self.apply_update(request).await.inspect_err(|_| {
                if index > 0 {
                    warn!(
                        "일괄 업데이트 중단: {}/{}번째에서 실패, 앞선 {}건은 적용됨",
                        index + 1,
                        updates.len(),
                        index
                    );
                }
            })?;
            updated.push(user);
        }

        info!("사용자 {}명 업데이트 완료", updated.len());
        Ok(updated)
    }

    async fn apply_update(&self, request: &UpdateUserRequest) -> AppResult<User> {
        let existing = self
            .store
            .get(request.id)
            .await?
            .ok_or_else(|| user_not_found(request.id))?;

        let patch = request.to_patch();
        if patch.is_empty() {
            return Ok(existing);
        }

        debug!("사용자 {} 업데이트: {:?}", request.id, patch.field_names());

        self.store
            .update(request.id, &patch)
            .await?
            .ok_or_else(|| user_not_found(request.id))
    }

    /// 새 사용자 생성
    ///
    /// 저장소의 원자적 카운터에서 ID를 할당받아 저장합니다.
    /// HTTP로는 노출되지 않으며 `setup_database add-user`에서 사용합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 필드 규칙 위반
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<User> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let id = self.store.next_id().await?;
        let user = User::new(id, request.username, request.email, request.birthdate);
        self.store.put(&user).await?;

        info!("사용자 생성 완료: id={}, username={}", user.id, user.username);
        Ok(user)
    }
}

fn user_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("User with id {} does not exist", id))
}
