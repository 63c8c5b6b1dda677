//! 사용자 관리 API 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! 환경 설정을 로드하고 저장소(MongoDB 또는 메모리)를 연결한 뒤,
//! API 키로 보호되는 사용자 검색/업데이트 API를 제공합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header::{self, HeaderName};
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use user_management_api::config::{
    API_KEY_HEADER, ApiKeySettings, DatabaseConfig, Environment, RateLimitConfig, ServerConfig,
    StorageBackend,
};
use user_management_api::core::errors::AppResult;
use user_management_api::db::Database;
use user_management_api::db::seed::{sample_users, seed_users};
use user_management_api::repositories::users::{InMemoryUserStore, UserRepository, UserStore};
use user_management_api::routes::{configure_all_routes, not_found, security_headers};
use user_management_api::services::users::UserService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 관리 API 시작중... ({:?})", Environment::current());

    // API 키가 없으면 서버를 시작하지 않음
    let api_key_settings = ApiKeySettings::from_env().map_err(|e| {
        error!("❌ {}", e);
        io::Error::other(e.to_string())
    })?;

    let store = initialize_user_store().await.map_err(|e| {
        error!("❌ 저장소 초기화 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    info!("✅ 저장소 준비 완료: {}", store.name());

    let user_service = web::Data::new(UserService::new(store));
    let api_key_settings = web::Data::new(api_key_settings);

    start_http_server(user_service, api_key_settings).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 보안 헤더, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    user_service: web::Data<UserService>,
    api_key_settings: web::Data<ApiKeySettings>,
) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/users", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다 (0 값 불가)"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(security_headers())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(user_service.clone())
            .app_data(api_key_settings.clone())
            .configure(configure_all_routes)
            .default_service(web::to(not_found))
    })
    .bind(bind_address)?
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타/미설정 - 기본 .env 파일 로드
///
/// ```bash
/// PROFILE=dev cargo run
/// ```
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_default();

    info!("Current profile: {:?}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            if dotenv().is_ok() {
                info!("기본 .env 파일 로드");
            }
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=user_management_api::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// 설정된 저장소 구현을 생성합니다
///
/// `STORAGE_BACKEND=memory`이면 샘플 데이터가 적재된 프로세스 메모리를,
/// 그 외에는 MongoDB를 사용합니다.
async fn initialize_user_store() -> AppResult<Arc<dyn UserStore>> {
    match DatabaseConfig::backend() {
        StorageBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");
            let database = Database::new(&DatabaseConfig::uri(), &DatabaseConfig::database_name()).await?;
            let repository = UserRepository::new(&database, &DatabaseConfig::collection_name());
            Ok(Arc::new(repository))
        }
        StorageBackend::Memory => {
            warn!("⚠️ 메모리 저장소 사용: 재시작 시 데이터가 유실됩니다");
            let store = InMemoryUserStore::new();
            seed_users(&store, &sample_users()).await?;
            Ok(Arc::new(store))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// 모든 Origin에서 검색/업데이트 API를 호출할 수 있도록 허용하며,
/// `x-api-key` 헤더를 허용 목록에 포함합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            HeaderName::from_static(API_KEY_HEADER),
        ])
        .max_age(3600)
}
