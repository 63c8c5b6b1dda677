//! # 요청 스키마 검증 계층
//!
//! 원시 JSON(`serde_json::Value`)을 받아 타입이 지정된 DTO로 변환하거나,
//! **첫 번째로 위반된 제약 조건**을 설명하는 `AppError::ValidationError`를 반환합니다.
//!
//! 모든 함수는 부수 효과가 없는 순수 함수이며, 비즈니스 규칙(존재 여부 확인 등)은
//! 서비스 계층에서 별도로 수행합니다.
//!
//! ## 검증 순서
//!
//! 1. 값의 형태 확인 (객체/배열)
//! 2. 허용되지 않은 키 거부
//! 3. 필수 키 확인
//! 4. 타입 변환 (`serde`)
//! 5. 필드 규칙 검증 (`validator`)
//!
//! 배치 검증은 원소 하나라도 잘못되면 전체를 거부하므로, 저장소 접근 전에
//! 모든 원소가 검증됩니다.
//!
//! ## 메시지 형식
//!
//! ```text
//! "value" must be an array
//! "[1].email" must be a valid email
//! "[0]" must contain at least one of [username, email, birthdate]
//! "name" is not allowed to be empty
//! "foo" is not allowed
//! ```

use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};
use validator::{Validate, ValidationErrors};

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::{CreateUserRequest, SearchUsersQuery, UpdateUserRequest};

const SEARCH_FIELDS: &[&str] = &["name"];
const UPDATE_FIELDS: &[&str] = &["id", "username", "email", "birthdate"];
const CREATE_FIELDS: &[&str] = &["username", "email", "birthdate"];

/// 정밀도 손실 없이 표현 가능한 최대 정수 (2^53 - 1)
const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// 검색 쿼리 검증
///
/// # Errors
///
/// * 객체가 아닌 입력, 알 수 없는 키, 빈 `name`, 문자열이 아닌 `name`
pub fn validate_search_query(raw: Value) -> AppResult<SearchUsersQuery> {
    parse_object(raw, "", SEARCH_FIELDS, &[])
}

/// 일괄 업데이트 요청 검증
///
/// 비어 있지 않은 배열이어야 하며, 각 원소는 양의 정수 `id`와
/// `username`/`email`/`birthdate` 중 최소 하나를 가져야 합니다.
///
/// # Examples
///
/// ```rust,ignore
/// let updates = validate_update_batch(json!([{ "id": 1, "username": "new.name" }]))?;
/// assert_eq!(updates[0].id, 1);
/// ```
pub fn validate_update_batch(raw: Value) -> AppResult<Vec<UpdateUserRequest>> {
    let items = match raw {
        Value::Array(items) => items,
        _ => return Err(invalid("\"value\" must be an array")),
    };

    if items.is_empty() {
        return Err(invalid("\"value\" must contain at least 1 items"));
    }

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| parse_object(item, &format!("[{}]", index), UPDATE_FIELDS, &["id"]))
        .collect()
}

/// 사용자 생성 요청 검증
pub fn validate_create_user(raw: Value) -> AppResult<CreateUserRequest> {
    parse_object(raw, "", CREATE_FIELDS, CREATE_FIELDS)
}

fn parse_object<T>(mut raw: Value, label: &str, allowed: &[&str], required: &[&str]) -> AppResult<T>
where
    T: DeserializeOwned + Validate,
{
    let object = as_object(&mut raw, label)?;
    reject_unknown_keys(object, label, allowed)?;

    for field in required {
        if !object.contains_key(*field) {
            return Err(invalid(format!("\"{}\" is required", path(label, field))));
        }
    }

    for field in allowed {
        normalize_field(object, label, field)?;
    }

    let value: T = serde_json::from_value(raw)
        .map_err(|e| invalid(format!("\"{}\" {}", display_label(label), e)))?;

    value
        .validate()
        .map_err(|errors| invalid(first_violation(&errors, label, allowed)))?;

    Ok(value)
}

fn as_object<'a>(raw: &'a mut Value, label: &str) -> AppResult<&'a mut Map<String, Value>> {
    raw.as_object_mut()
        .ok_or_else(|| invalid(format!("\"{}\" must be of type object", display_label(label))))
}

fn reject_unknown_keys(object: &Map<String, Value>, label: &str, allowed: &[&str]) -> AppResult<()> {
    match object.keys().find(|key| !allowed.contains(&key.as_str())) {
        Some(key) => Err(invalid(format!("\"{}\" is not allowed", path(label, key)))),
        None => Ok(()),
    }
}

/// 필드 타입을 확인하고 `id`를 정수 표현으로 맞춥니다.
///
/// serde 오류 메시지 대신 필드명을 포함한 메시지를 만들기 위해 역직렬화 전에 수행합니다.
fn normalize_field(object: &mut Map<String, Value>, label: &str, field: &str) -> AppResult<()> {
    let Some(value) = object.get_mut(field) else {
        return Ok(());
    };

    if field == "id" {
        let id = match value {
            Value::Number(n) => integral_id(n)
                .map_err(|rule| invalid(format!("\"{}\" {}", path(label, field), rule)))?,
            _ => return Err(invalid(format!("\"{}\" must be a number", path(label, field)))),
        };
        *value = Value::from(id);
        return Ok(());
    }

    if value.is_string() {
        Ok(())
    } else {
        Err(invalid(format!("\"{}\" must be a string", path(label, field))))
    }
}

/// 안전한 정수 범위의 숫자만 허용합니다. `1.0`처럼 소수부가 0인 값은 정수로 취급합니다.
fn integral_id(n: &Number) -> Result<i64, &'static str> {
    let safe = -MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER;

    if let Some(id) = n.as_i64() {
        return if safe.contains(&id) { Ok(id) } else { Err("must be a safe number") };
    }
    if n.is_u64() {
        return Err("must be a safe number");
    }

    match n.as_f64() {
        Some(f) if f.fract() != 0.0 => Err("must be an integer"),
        Some(f) if f.abs() <= MAX_SAFE_INTEGER as f64 => Ok(f as i64),
        _ => Err("must be a safe number"),
    }
}

/// 선언된 필드 순서대로 첫 번째 위반을 찾아 메시지를 만듭니다.
fn first_violation(errors: &ValidationErrors, label: &str, fields: &[&str]) -> String {
    let field_errors = errors.field_errors();

    for field in fields {
        if let Some(error) = field_errors.get(*field).and_then(|list| list.first()) {
            return format!("\"{}\" {}", path(label, field), describe(error));
        }
    }

    match field_errors.get("__all__").and_then(|list| list.first()) {
        Some(error) => format!("\"{}\" {}", display_label(label), describe(error)),
        None => errors.to_string(),
    }
}

fn describe(error: &validator::ValidationError) -> String {
    match error.message {
        Some(ref message) => message.to_string(),
        None => format!("failed {} validation", error.code),
    }
}

fn path(label: &str, field: &str) -> String {
    if label.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", label, field)
    }
}

fn display_label(label: &str) -> &str {
    if label.is_empty() { "value" } else { label }
}

fn invalid(message: impl Into<String>) -> AppError {
    AppError::ValidationError(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(result: AppResult<impl std::fmt::Debug>) -> String {
        match result {
            Err(AppError::ValidationError(message)) => message,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_search_query_without_name() {
        assert_eq!(validate_search_query(json!({})).unwrap(), SearchUsersQuery::default());
    }

    #[test]
    fn test_search_query_with_name() {
        let query = validate_search_query(json!({ "name": "john" })).unwrap();
        assert_eq!(query.name.as_deref(), Some("john"));
    }

    #[test]
    fn test_search_query_rejections() {
        assert_eq!(
            message(validate_search_query(json!({ "name": "" }))),
            "\"name\" is not allowed to be empty"
        );
        assert_eq!(message(validate_search_query(json!({ "foo": "bar" }))), "\"foo\" is not allowed");
        assert_eq!(message(validate_search_query(json!({ "name": 5 }))), "\"name\" must be a string");
        assert_eq!(message(validate_search_query(json!([]))), "\"value\" must be of type object");
    }

    #[test]
    fn test_update_batch_accepts_valid_items_in_order() {
        let updates = validate_update_batch(json!([
            { "id": 2, "email": "x@y.com" },
            { "id": 1, "username": "new.name", "birthdate": "1990-01-01" }
        ]))
        .unwrap();

        assert_eq!(
            updates,
            vec![
                UpdateUserRequest::new(2).with_email("x@y.com"),
                UpdateUserRequest::new(1).with_username("new.name").with_birthdate("1990-01-01"),
            ]
        );
    }

    #[test]
    fn test_update_batch_shape() {
        assert_eq!(message(validate_update_batch(json!({ "id": 1 }))), "\"value\" must be an array");
        assert_eq!(message(validate_update_batch(json!([]))), "\"value\" must contain at least 1 items");
        assert_eq!(message(validate_update_batch(json!([1]))), "\"[0]\" must be of type object");
    }

    #[test]
    fn test_update_batch_rejects_id_only_item() {
        assert_eq!(
            message(validate_update_batch(json!([{ "id": 1 }]))),
            "\"[0]\" must contain at least one of [username, email, birthdate]"
        );
    }

    #[test]
    fn test_update_batch_reports_first_violation() {
        let raw = json!([
            { "id": 1, "username": "fine.name" },
            { "id": 2, "username": "ab", "email": "broken" }
        ]);
        assert_eq!(
            message(validate_update_batch(raw)),
            "\"[1].username\" length must be between 3 and 50 characters"
        );
    }

    #[test]
    fn test_update_batch_id_rules() {
        assert_eq!(
            message(validate_update_batch(json!([{ "username": "abc" }]))),
            "\"[0].id\" is required"
        );
        assert_eq!(
            message(validate_update_batch(json!([{ "id": 0, "username": "abc" }]))),
            "\"[0].id\" must be a positive number"
        );
        assert_eq!(
            message(validate_update_batch(json!([{ "id": -3, "username": "abc" }]))),
            "\"[0].id\" must be a positive number"
        );
        assert_eq!(
            message(validate_update_batch(json!([{ "id": 1.5, "username": "abc" }]))),
            "\"[0].id\" must be an integer"
        );
        assert_eq!(
            message(validate_update_batch(json!([{ "id": "1", "username": "abc" }]))),
            "\"[0].id\" must be a number"
        );
    }

    #[test]
    fn test_update_batch_id_outside_safe_range() {
        assert_eq!(
            message(validate_update_batch(json!([{ "id": 9_223_372_036_854_775_808_u64, "username": "abc" }]))),
            "\"[0].id\" must be a safe number"
        );
        assert_eq!(
            message(validate_update_batch(json!([{ "id": 9_007_199_254_740_992_i64, "username": "abc" }]))),
            "\"[0].id\" must be a safe number"
        );
        assert_eq!(
            message(validate_update_batch(json!([{ "id": 1e300, "username": "abc" }]))),
            "\"[0].id\" must be a safe number"
        );

        let updates = validate_update_batch(json!([{ "id": 9_007_199_254_740_991_i64, "username": "abc" }])).unwrap();
        assert_eq!(updates[0].id, MAX_SAFE_INTEGER);
    }

    #[test]
    fn test_update_batch_accepts_whole_float_id() {
        let updates = validate_update_batch(json!([{ "id": 1.0, "email": "x@y.com" }])).unwrap();
        assert_eq!(updates, vec![UpdateUserRequest::new(1).with_email("x@y.com")]);
    }

    #[test]
    fn test_update_batch_field_rules() {
        assert_eq!(
            message(validate_update_batch(json!([{ "id": 1, "email": "nope" }]))),
            "\"[0].email\" must be a valid email"
        );
        assert_eq!(
            message(validate_update_batch(json!([{ "id": 1, "birthdate": "yesterday" }]))),
            "\"[0].birthdate\" must be in ISO 8601 date format"
        );
        assert_eq!(
            message(validate_update_batch(json!([{ "id": 1, "role": "admin" }]))),
            "\"[0].role\" is not allowed"
        );
        assert_eq!(
            message(validate_update_batch(json!([{ "id": 1, "username": null }]))),
            "\"[0].username\" must be a string"
        );
    }

    #[test]
    fn test_one_bad_item_rejects_whole_batch() {
        let raw = json!([
            { "id": 1, "username": "good.one" },
            { "id": 2 },
            { "id": 3, "username": "good.two" }
        ]);
        assert!(validate_update_batch(raw).is_err());
    }

    #[test]
    fn test_create_user_requires_all_fields() {
        assert_eq!(
            message(validate_create_user(json!({ "username": "bob", "email": "bob@email.com" }))),
            "\"birthdate\" is required"
        );

        let request = validate_create_user(json!({
            "username": "bob.wilson",
            "email": "bob.wilson@email.com",
            "birthdate": "1985-07-11"
        }))
        .unwrap();
        assert_eq!(request.username, "bob.wilson");
    }
}
