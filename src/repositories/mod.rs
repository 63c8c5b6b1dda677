//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 `Arc<dyn UserStore>`로 저장소를 주입받습니다.
//! MongoDB를 주 저장소로 사용하며, 테스트에서는 메모리 저장소로 교체합니다.

pub mod users;
