//! # MongoDB 사용자 리포지토리
//!
//! [`UserStore`]의 운영 환경 구현입니다. 사용자 문서는 `_id`에 정수 ID를 저장하며,
//! ID 카운터는 별도의 `counters` 컬렉션에 `{ _id: "<collection>", seq: N }` 형태로 유지합니다.
//!
//! ## 특징
//!
//! - **단일 진실 공급원**: 모든 조회/변경은 MongoDB에 직접 수행하며 캐시를 두지 않습니다.
//! - **원자적 업데이트**: `find_one_and_update` + `ReturnDocument::After`로 변경 후 상태를 반환합니다.
//! - **원자적 ID 할당**: 카운터 문서에 `$inc`를 적용합니다.

use futures_util::TryStreamExt;
use mongodb::{
    Collection,
    bson::{Document, doc},
    error::{ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, ReturnDocument},
};
use async_trait::async_trait;

use super::user_store::UserStore;
use crate::{
    core::errors::AppResult,
    db::Database,
    domain::entities::users::{User, UserFilter, UserPatch},
};

/// ID 카운터 문서를 보관하는 컬렉션
const COUNTERS_COLLECTION: &str = "counters";

/// MongoDB 중복 키 오류 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 데이터 액세스 리포지토리
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let database = Database::new(&DatabaseConfig::uri(), &DatabaseConfig::database_name()).await?;
/// let repo = UserRepository::new(&database, &DatabaseConfig::collection_name());
///
/// let user = repo.get(1).await?;
/// ```
pub struct UserRepository {
    users: Collection<User>,
    counters: Collection<Document>,
    collection_name: String,
}

impl UserRepository {
    pub fn new(database: &Database, collection_name: &str) -> Self {
        let db = database.get_database();

        Self {
            users: db.collection::<User>(collection_name),
            counters: db.collection::<Document>(COUNTERS_COLLECTION),
            collection_name: collection_name.to_string(),
        }
    }

    fn counter_filter(&self) -> Document {
        doc! { "_id": self.collection_name.as_str() }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    fn name(&self) -> &str {
        "mongodb"
    }

    async fn get(&self, id: i64) -> AppResult<Option<User>> {
        let user = self.users.find_one(doc! { "_id": id }).await?;
        Ok(user)
    }

    async fn put(&self, user: &User) -> AppResult<()> {
        self.users
            .replace_one(doc! { "_id": user.id }, user)
            .upsert(true)
            .await?;
        Ok(())
    }

    async fn insert_if_absent(&self, user: &User) -> AppResult<bool> {
        match self.users.insert_one(user).await {
            Ok(_) => Ok(true),
            Err(e) if is_duplicate_key(&e) => {
                log::debug!("사용자 {} 이미 존재, 삽입 생략", user.id);
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// `$set`으로 제공된 필드만 변경하고 변경 후 문서를 반환합니다.
    async fn update(&self, id: i64, patch: &UserPatch) -> AppResult<Option<User>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self
            .users
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": patch.to_set_document() })
            .with_options(options)
            .await?;

        Ok(updated)
    }

    async fn scan(&self, filter: Option<&UserFilter>) -> AppResult<Vec<User>> {
        let query = filter.map(UserFilter::to_document).unwrap_or_default();
        let cursor = self.users.find(query).await?;
        let users: Vec<User> = cursor.try_collect().await?;
        Ok(users)
    }

    async fn next_id(&self) -> AppResult<i64> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .upsert(true)
            .build();

        let counter = self
            .counters
            .find_one_and_update(self.counter_filter(), doc! { "$inc": { "seq": 1_i64 } })
            .with_options(options)
            .await?;

        let seq = counter
            .as_ref()
            .and_then(|doc| doc.get_i64("seq").ok())
            .unwrap_or(1);
        Ok(seq)
    }

    async fn reserve_ids_through(&self, id: i64) -> AppResult<()> {
        self.counters
            .update_one(self.counter_filter(), doc! { "$max": { "seq": id } })
            .upsert(true)
            .await?;
        Ok(())
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(we)) if we.code == DUPLICATE_KEY_CODE
    )
}
