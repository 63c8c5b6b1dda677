//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, 저장소, Rate Limiting 설정을 관리합니다.

use std::env;

use log::warn;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let name = env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_else(|_| "production".to_string());

        Self::from_name(&name)
    }

    /// 환경 이름(대소문자 무관)에서 Environment를 생성합니다.
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    pub const DEFAULT_PORT: u16 = 3000;

    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 3000)
    pub fn port() -> u16 {
        parse_or_default("PORT", env::var("PORT").ok(), Self::DEFAULT_PORT)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정 (기본값: "0.0.0.0")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 사용자 저장소 구현 선택
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StorageBackend {
    /// MongoDB (기본값)
    MongoDb,
    /// 프로세스 메모리 (재시작 시 데이터 유실)
    Memory,
}

impl StorageBackend {
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StorageBackend::Memory,
            "mongodb" | "mongo" => StorageBackend::MongoDb,
            other => {
                warn!("알 수 없는 STORAGE_BACKEND '{}', mongodb 사용", other);
                StorageBackend::MongoDb
            }
        }
    }
}

/// 데이터베이스 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// MongoDB 연결 URI (`MONGODB_URI`, 기본값: `mongodb://localhost:27017`)
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// 데이터베이스 이름 (`DATABASE_NAME`, 기본값: `user_management`)
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "user_management".to_string())
    }

    /// 사용자 컬렉션 이름 (`USERS_COLLECTION`, 기본값: `users`)
    pub fn collection_name() -> String {
        env::var("USERS_COLLECTION").unwrap_or_else(|_| "users".to_string())
    }

    /// 저장소 구현 (`STORAGE_BACKEND`, 기본값: `mongodb`)
    pub fn backend() -> StorageBackend {
        env::var("STORAGE_BACKEND")
            .map(|name| StorageBackend::from_name(&name))
            .unwrap_or(StorageBackend::MongoDb)
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub const DEFAULT_PER_SECOND: u64 = 100;
    pub const DEFAULT_BURST_SIZE: u32 = 200;

    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// ```bash
    /// # .env.dev (개발 환경)
    /// RATE_LIMIT_PER_SECOND=20
    /// RATE_LIMIT_BURST_SIZE=40
    /// ```
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("RATE_LIMIT_PER_SECOND").ok(),
            env::var("RATE_LIMIT_BURST_SIZE").ok(),
        )
    }

    fn from_values(per_second: Option<String>, burst_size: Option<String>) -> Self {
        Self {
            per_second: parse_or_default("RATE_LIMIT_PER_SECOND", per_second, Self::DEFAULT_PER_SECOND),
            burst_size: parse_or_default("RATE_LIMIT_BURST_SIZE", burst_size, Self::DEFAULT_BURST_SIZE),
        }
    }
}

/// 값이 없으면 기본값, 파싱에 실패하면 경고 후 기본값을 사용합니다.
fn parse_or_default<T>(name: &str, raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(value) => value.trim().parse().unwrap_or_else(|e| {
            warn!("{} 파싱 실패: {}. 기본값 {} 사용", name, e, default);
            default
        }),
        None => default,
    }
}
