//! ApiKeyMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, forward_ready};
use actix_web::{Error, HttpMessage, ResponseError, web};
use futures_util::future::LocalBoxFuture;

use crate::config::{API_KEY_HEADER, ApiKeySettings};
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::auth::AuthenticatedClient;

/// 실제 인증 로직을 수행하는 서비스
pub struct ApiKeyMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ApiKeyMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            if let Err(err) = authenticate(&req) {
                log::warn!("API 키 인증 실패: {} {} ({})", req.method(), req.path(), err);
                let response = err.error_response();
                let (req, _) = req.into_parts();
                return Ok(ServiceResponse::new(req, response).map_into_right_body());
            }

            req.extensions_mut().insert(AuthenticatedClient::authenticated());

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

fn authenticate(req: &ServiceRequest) -> AppResult<()> {
    let settings = req.app_data::<web::Data<ApiKeySettings>>().ok_or_else(|| {
        AppError::ConfigError("ApiKeySettings is not registered as app data".to_string())
    })?;

    let provided = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    check_api_key(provided, &settings.api_key)
}

/// API 키 검증 (순수 함수)
///
/// # Errors
///
/// * 헤더 없음 - `API key required. Please provide x-api-key header.`
/// * 불일치 - `Invalid API key`
pub fn check_api_key(provided: Option<&str>, expected: &str) -> AppResult<()> {
    match provided {
        None | Some("") => Err(AppError::AuthenticationError(
            "API key required. Please provide x-api-key header.".to_string(),
        )),
        Some(key) if key == expected => Ok(()),
        Some(_) => Err(AppError::AuthenticationError("Invalid API key".to_string())),
    }
}
