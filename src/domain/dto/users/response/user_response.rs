use serde::{Deserialize, Serialize};

use crate::domain::entities::users::User;

/// 사용자 응답 DTO
///
/// 저장소 키(`_id`)를 API 필드명(`id`)으로 노출합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub birthdate: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            username,
            email,
            birthdate,
        } = user;

        Self {
            id,
            username,
            email,
            birthdate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_uses_plain_id_field() {
        let user = User::new(1, "john.doe", "john.doe@email.com", "1991-04-21");
        let value = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "username": "john.doe",
                "email": "john.doe@email.com",
                "birthdate": "1991-04-21"
            })
        );
    }
}
