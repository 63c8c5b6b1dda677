//! API 키 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 `x-api-key` 헤더를 검증하고,
//! 성공 시 [`AuthenticatedClient`](crate::domain::models::auth::AuthenticatedClient) 표식을 남깁니다.

use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::{
    Error, Result,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
};

use crate::middlewares::api_key_inner::ApiKeyMiddlewareService;

/// API 키 인증 미들웨어
///
/// 기대하는 키는 애플리케이션에 등록된 `web::Data<ApiKeySettings>`에서 읽습니다.
///
/// ```rust,ignore
/// App::new()
///     .app_data(web::Data::new(ApiKeySettings::new(api_key)))
///     .service(web::scope("/api/users").wrap(ApiKeyMiddleware::new()));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ApiKeyMiddleware;

impl ApiKeyMiddleware {
    pub fn new() -> Self {
        Self
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for ApiKeyMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = ApiKeyMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ApiKeyMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
