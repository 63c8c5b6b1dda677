//! # User Management HTTP Handlers
//!
//! 사용자 검색과 일괄 업데이트 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 두 엔드포인트 모두 `/api/users` 스코프의 [`ApiKeyMiddleware`](crate::middlewares::ApiKeyMiddleware)
//! 뒤에 등록되며, [`AuthenticatedClient`] 추출자로 인증 통과를 보장받습니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/users/search?name=term` | 사용자 검색 (name 생략 시 전체) | 200, 400, 401, 500 |
//! | `POST` | `/api/users/update` | 사용자 일괄 업데이트 | 200, 400, 401, 404, 500 |
//!
//! ## 처리 흐름
//!
//! ```text
//! 원시 입력(Query/JSON) → validation → UserService → UserResponse → ApiResponse
//! ```
//!
//! 검증과 비즈니스 규칙 실패는 `AppError`로 반환되어 표준 응답 봉투로 변환됩니다.
//!
//! ```bash
//! curl "http://localhost:3000/api/users/search?name=john" -H "x-api-key: $API_KEY"
//!
//! curl -X POST http://localhost:3000/api/users/update \
//!   -H "x-api-key: $API_KEY" -H "Content-Type: application/json" \
//!   -d '[{"id": 1, "username": "new.name"}]'
//! ```

use actix_web::{HttpResponse, get, post, web};
use log::warn;
use serde_json::{Map, Value};

use crate::core::errors::AppError;
use crate::domain::dto::ApiResponse;
use crate::domain::dto::users::response::UserResponse;
use crate::domain::models::auth::AuthenticatedClient;
use crate::services::users::UserService;
use crate::validation;

#[get("/search")]
pub async fn search_users(
    _client: AuthenticatedClient,
    query: web::Query<Vec<(String, String)>>,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let raw = query_to_value(query.into_inner());

    let search = validation::validate_search_query(raw)
        .inspect_err(|e| warn!("검색 요청 검증 실패: {}", e))?;
    let name = search.name.as_deref();

    let users = service
        .search_users(name)
        .await
        .inspect_err(|e| warn!("사용자 검색 실패 (name={:?}): {}", name, e))?;

    let message = match name {
        Some(term) => format!("Found {} users matching \"{}\"", users.len(), term),
        None => format!("Retrieved {} users", users.len()),
    };
    let data: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(data, message)))
}

/// 쿼리 파라미터를 JSON 객체로 변환합니다.
///
/// 같은 키가 반복되면 값을 배열로 모으므로, 검증 단계에서 문자열이 아닌 값으로 거부됩니다.
fn query_to_value(pairs: Vec<(String, String)>) -> Value {
    let mut object = Map::new();

    for (key, value) in pairs {
        match object.get_mut(&key) {
            Some(Value::Array(values)) => values.push(Value::String(value)),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, Value::String(value)]);
            }
            None => {
                object.insert(key, Value::String(value));
            }
        }
    }

    Value::Object(object)
}

#[post("/update")]
pub async fn update_users(
    _client: AuthenticatedClient,
    payload: web::Json<Value>,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let updates = validation::validate_update_batch(payload.into_inner())
        .inspect_err(|e| warn!("업데이트 요청 검증 실패: {}", e))?;

    let users = service
        .update_users(&updates)
        .await
        .inspect_err(|e| warn!("사용자 일괄 업데이트 실패 ({}건 요청): {}", updates.len(), e))?;

    let message = format!("Successfully updated {} users", users.len());
    let data: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(data, message)))
}
