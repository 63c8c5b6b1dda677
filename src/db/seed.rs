//! 초기 사용자 데이터 적재
//!
//! `setup_database` 도구와 메모리 저장소 실행에서 같은 샘플 데이터를 사용합니다.
//! 이미 존재하는 ID는 덮어쓰지 않으므로 여러 번 실행해도 안전합니다.

use log::{info, warn};

use crate::core::errors::AppResult;
use crate::domain::entities::users::User;
use crate::repositories::users::UserStore;

/// 적재 결과
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: Vec<String>,
    pub skipped: Vec<String>,
}

/// 샘플 사용자 5명
pub fn sample_users() -> Vec<User> {
    vec![
        User::new(1, "john.doe", "john.doe@email.com", "1991-04-21"),
        User::new(2, "john.smith", "john.smith@email.com", "1994-09-07"),
        User::new(3, "jane.doe", "jane.doe@email.com", "1988-12-15"),
        User::new(4, "alice.johnson", "alice.johnson@email.com", "1992-03-28"),
        User::new(5, "bob.wilson", "bob.wilson@email.com", "1985-07-11"),
    ]
}

/// 사용자들을 조건부로 삽입하고 ID 카운터를 가장 큰 ID 이후로 옮깁니다.
pub async fn seed_users(store: &dyn UserStore, users: &[User]) -> AppResult<SeedReport> {
    let mut report = SeedReport::default();

    for user in users {
        if store.insert_if_absent(user).await? {
            info!("✅ Inserted user: {}", user.username);
            report.inserted.push(user.username.clone());
        } else {
            warn!("⚠️ User {} already exists, skipping", user.username);
            report.skipped.push(user.username.clone());
        }
    }

    if let Some(max_id) = users.iter().map(|user| user.id).max() {
        store.reserve_ids_through(max_id).await?;
    }

    Ok(report)
}
