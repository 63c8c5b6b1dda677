//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 중앙집중식으로 관리합니다.
//! 값은 `main.rs`에서 dotenv 프로필 파일(`.env.dev`, `.env.prod`, `.env`)을 로드한 뒤 읽습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 데이터베이스, Rate Limiting 설정
//! - [`security_config`] - API 키 설정
//!
//! ## 환경 변수
//!
//! ```bash
//! # 필수
//! export API_KEY="your-api-key"
//!
//! # 선택
//! export HOST="0.0.0.0"
//! export PORT="3000"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="user_management"
//! export USERS_COLLECTION="users"
//! export STORAGE_BACKEND="mongodb"   # mongodb | memory
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! export ENVIRONMENT="development"   # development, test, staging, production
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{ServerConfig, SecurityConfig};
//!
//! let address = ServerConfig::bind_address();
//! let api_key = SecurityConfig::api_key()?;
//! ```

pub mod data_config;
pub mod security_config;

pub use data_config::*;
pub use security_config::*;
