use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};

use crate::core::errors::AppError;

/// API 키 검증을 통과한 요청 표식
///
/// [`ApiKeyMiddleware`](crate::middlewares::ApiKeyMiddleware)가 인증에 성공하면
/// Request Extensions에 삽입합니다. 핸들러는 추출자로 받아 인증 여부를 보장받습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedClient {
    pub is_authenticated: bool,
}

impl AuthenticatedClient {
    pub fn authenticated() -> Self {
        Self { is_authenticated: true }
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedClient {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedClient>() {
            Some(client) if client.is_authenticated => ready(Ok(*client)),
            _ => ready(Err(AppError::AuthenticationError(
                "API key required. Please provide x-api-key header.".to_string(),
            )
            .into())),
        }
    }
}
