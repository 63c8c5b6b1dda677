//! 인증 관련 모델

pub mod authenticated_client;

pub use authenticated_client::AuthenticatedClient;
