//! # Route Configuration
//!
//! 애플리케이션의 전체 라우트 테이블을 구성합니다.
//!
//! | 경로 | 인증 | 설명 |
//! |------|------|------|
//! | `GET /` | 불필요 | API 정보 및 엔드포인트 목록 |
//! | `GET /health` | 불필요 | 헬스체크 |
//! | `GET /api/users/search` | `x-api-key` | 사용자 검색 |
//! | `POST /api/users/update` | `x-api-key` | 사용자 일괄 업데이트 |
//!
//! `/api` 스코프 전체가 API 키 미들웨어 뒤에 있으므로, `/api` 아래의 알 수 없는 경로도
//! 키 검증을 먼저 통과해야 404를 받습니다.
//! 매칭되지 않는 경로는 [`not_found`]가 404 응답 봉투로 처리합니다 (`App::default_service`).

use actix_web::{HttpRequest, HttpResponse, error, get, middleware, web};
use serde_json::json;

use crate::core::errors::AppError;
use crate::domain::dto::ApiResponse;
use crate::handlers;
use crate::middlewares::ApiKeyMiddleware;

/// API 버전 (루트 엔드포인트에 노출)
pub const API_VERSION: &str = "1.0.0";

/// 요청 본문 최대 크기 (10MB)
const JSON_PAYLOAD_LIMIT: usize = 10 * 1024 * 1024;

/// 모든 라우트를 설정합니다
///
/// JSON 본문/쿼리 파싱 실패를 400 응답 봉투로 변환하는 추출자 설정도 함께 등록합니다.
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new()
///     .app_data(web::Data::new(UserService::new(store)))
///     .app_data(web::Data::new(ApiKeySettings::new(api_key)))
///     .configure(configure_all_routes)
///     .default_service(web::to(not_found));
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).app_data(query_config());

    cfg.service(index).service(health_check);

    configure_api_routes(cfg);
}

/// `/api` 스코프를 설정합니다
///
/// 스코프 전체에 API 키 미들웨어가 적용되며, 스코프 내부의 기본 서비스도
/// 같은 미들웨어 뒤에서 실행됩니다.
///
/// ```bash
/// curl "http://localhost:3000/api/users/search?name=john" -H "x-api-key: $API_KEY"
/// ```
fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .wrap(ApiKeyMiddleware::new())
            .service(
                web::scope("/users")
                    .service(handlers::users::search_users)
                    .service(handlers::users::update_users),
            )
            .default_service(web::to(not_found)),
    );
}

/// 보안 응답 헤더
///
/// 모든 응답에 콘텐츠 스니핑, 프레이밍, 리퍼러 노출을 막는 헤더를 추가합니다.
pub fn security_headers() -> middleware::DefaultHeaders {
    middleware::DefaultHeaders::new()
        .add(("X-Content-Type-Options", "nosniff"))
        .add(("X-Frame-Options", "DENY"))
        .add(("Referrer-Policy", "no-referrer"))
        .add(("Cross-Origin-Resource-Policy", "same-origin"))
        .add(("X-DNS-Prefetch-Control", "off"))
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_PAYLOAD_LIMIT)
        .error_handler(|err, _req| {
            let message = match &err {
                error::JsonPayloadError::ContentType => "request body must be JSON".to_string(),
                other => other.to_string(),
            };
            AppError::ValidationError(message).into()
        })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

/// API 정보 엔드포인트
///
/// ```json
/// {
///   "success": true,
///   "data": { "version": "1.0.0", "endpoints": ["GET /api/users/search?name=term - ..."] },
///   "message": "User Management API"
/// }
/// ```
#[get("/")]
async fn index() -> HttpResponse {
    let data = json!({
        "version": API_VERSION,
        "endpoints": [
            "GET /api/users/search?name=term - Search users (optional name parameter)",
            "POST /api/users/update - Update users (requires API key)",
        ],
    });

    HttpResponse::Ok().json(ApiResponse::success(data, "User Management API"))
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:3000/health
/// ```
#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_management_api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// 매칭되는 라우트가 없을 때의 응답
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::failure(format!(
        "Route {} not found",
        req.uri()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test};
    use serde_json::Value;
    use std::sync::Arc;

    use crate::config::ApiKeySettings;
    use crate::repositories::users::InMemoryUserStore;
    use crate::services::users::UserService;

    macro_rules! full_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(UserService::new(Arc::new(InMemoryUserStore::new()))))
                    .app_data(web::Data::new(ApiKeySettings::new("k")))
                    .configure(configure_all_routes)
                    .default_service(web::to(not_found)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_index_lists_endpoints_without_auth() {
        let app = full_app!();
        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "User Management API");
        assert_eq!(body["data"]["version"], "1.0.0");
        assert_eq!(body["data"]["endpoints"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = full_app!();
        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_unknown_route_is_not_found_envelope() {
        let app = full_app!();
        let resp = test::call_service(&app, test::TestRequest::get().uri("/nothing?x=1").to_request()).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({ "success": false, "error": "Route /nothing?x=1 not found" }));
    }

    #[actix_web::test]
    async fn test_unknown_api_route_requires_key_before_not_found() {
        let app = full_app!();

        let resp = test::call_service(&app, test::TestRequest::get().uri("/api/nothing").to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "API key required. Please provide x-api-key header.");

        let req = test::TestRequest::get()
            .uri("/api/users/nope")
            .insert_header(("x-api-key", "k"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({ "success": false, "error": "Route /api/users/nope not found" }));
    }

    #[actix_web::test]
    async fn test_security_headers_are_added() {
        let app = test::init_service(
            App::new()
                .wrap(security_headers())
                .app_data(web::Data::new(UserService::new(Arc::new(InMemoryUserStore::new()))))
                .app_data(web::Data::new(ApiKeySettings::new("k")))
                .configure(configure_all_routes)
                .default_service(web::to(not_found)),
        )
        .await;

        for uri in ["/health", "/api/users/search"] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            let headers = resp.headers();

            assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
            assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
            assert_eq!(headers.get("referrer-policy").unwrap(), "no-referrer");
        }
    }

    #[actix_web::test]
    async fn test_malformed_json_is_validation_error() {
        let app = full_app!();
        let req = test::TestRequest::post()
            .uri("/api/users/update")
            .insert_header(("x-api-key", "k"))
            .insert_header(("content-type", "application/json"))
            .set_payload("[{\"id\": 1,")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().starts_with("Validation error:"));
    }

    #[actix_web::test]
    async fn test_protected_scope_requires_key() {
        let app = full_app!();
        let resp = test::call_service(&app, test::TestRequest::get().uri("/api/users/search").to_request()).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
