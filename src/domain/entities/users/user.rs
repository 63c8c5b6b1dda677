//! User Entity Implementation
//!
//! 사용자 엔티티와 부분 업데이트(patch), 스캔 필터를 정의합니다.
//! 사용자는 숫자 식별자 하나로만 주소 지정되며, 식별자를 제외한 모든 필드는 변경 가능합니다.

use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 저장소(MongoDB)에는 `_id` 필드로 저장됩니다. API 응답은 [`UserResponse`](crate::domain::dto::users::response::UserResponse)를 사용합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// 사용자 고유 ID (양의 정수)
    #[serde(rename = "_id", alias = "id")]
    pub id: i64,
    /// 사용자 이름 (3-50자)
    pub username: String,
    /// 이메일 주소
    pub email: String,
    /// 생년월일 (ISO-8601 날짜 문자열)
    pub birthdate: String,
}

impl User {
    pub fn new(id: i64, username: impl Into<String>, email: impl Into<String>, birthdate: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            birthdate: birthdate.into(),
        }
    }
}

/// 사용자 부분 업데이트
///
/// 요청에 포함된 필드만 `Some`으로 채워집니다. 나머지 필드는 저장된 값을 유지합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub birthdate: Option<String>,
}

impl UserPatch {
    /// 변경할 필드가 하나도 없는지 확인
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.birthdate.is_none()
    }

    /// 변경 대상 필드 이름 목록 (로깅용)
    pub fn field_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.username.is_some() {
            names.push("username");
        }
        if self.email.is_some() {
            names.push("email");
        }
        if self.birthdate.is_some() {
            names.push("birthdate");
        }
        names
    }

    /// 패치를 사용자 레코드에 적용합니다.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(ref username) = self.username {
            user.username = username.clone();
        }
        if let Some(ref email) = self.email {
            user.email = email.clone();
        }
        if let Some(ref birthdate) = self.birthdate {
            user.birthdate = birthdate.clone();
        }
    }

    /// MongoDB `$set` 연산자에 들어갈 문서를 생성합니다.
    pub fn to_set_document(&self) -> Document {
        let mut set = Document::new();
        if let Some(ref username) = self.username {
            set.insert("username", username.as_str());
        }
        if let Some(ref email) = self.email {
            set.insert("email", email.as_str());
        }
        if let Some(ref birthdate) = self.birthdate {
            set.insert("birthdate", birthdate.as_str());
        }
        set
    }
}

/// 전체 스캔 시 적용할 필터
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserFilter {
    /// username 또는 email에 부분 문자열이 포함된 사용자 (대소문자 무시)
    NameOrEmailContains(String),
}

impl UserFilter {
    /// 메모리 상의 레코드가 필터를 만족하는지 확인
    pub fn matches(&self, user: &User) -> bool {
        match self {
            UserFilter::NameOrEmailContains(term) => {
                let term = term.to_lowercase();
                user.username.to_lowercase().contains(&term)
                    || user.email.to_lowercase().contains(&term)
            }
        }
    }

    /// MongoDB 쿼리 문서로 변환합니다.
    ///
    /// 검색어는 정규식 메타문자를 이스케이프한 뒤 `$options: "i"`로 매칭합니다.
    pub fn to_document(&self) -> Document {
        match self {
            UserFilter::NameOrEmailContains(term) => {
                let pattern = escape_regex(term);
                doc! {
                    "$or": [
                        { "username": { "$regex": pattern.as_str(), "$options": "i" } },
                        { "email": { "$regex": pattern.as_str(), "$options": "i" } }
                    ]
                }
            }
        }
    }
}

fn escape_regex(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if "\\.+*?()|[]{}^$#&-~".contains(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
