//! 터미널 출력 포맷팅 유틸리티
//!
//! `setup_database` 도구에서 사용하는 터미널 출력 함수들을 제공합니다.
//! 박스 형태의 제목, 진행 단계 표시, 완료 요약 등을 시각적으로 표현합니다.

/// 박스 내부 콘텐츠 너비
const BOX_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// 텍스트는 자동으로 중앙 정렬됩니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  Database Setup                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

fn boxed_title(title: &str) -> String {
    let border = "═".repeat(BOX_WIDTH);
    format!(
        "╔{border}╗\n║{title:^width$}║\n╚{border}╝",
        border = border,
        title = title,
        width = BOX_WIDTH
    )
}

/// 진행 단계 시작을 표시합니다
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 처리 건수와 함께 표시합니다
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 단계 내 하위 작업 결과를 트리 형태로 표시합니다
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 초기 데이터 적재 결과 요약
pub fn print_seed_summary(inserted: usize, skipped: usize) {
    println!();
    print_boxed_title("🎉 DATABASE SETUP COMPLETED");
    println!("   📝 Inserted: {}", inserted);
    println!("   ⚠️  Skipped (already exist): {}", skipped);
    println!();
}

/// 사용 가능한 API 엔드포인트와 인증 헤더 안내
pub fn print_usage_hints(api_key: Option<&str>) {
    println!("📊 You can now use the following API endpoints:");
    println!("   GET  /api/users/search?name=john");
    println!("   POST /api/users/update");
    println!();
    match api_key {
        Some(key) => println!("🔑 Include the API key in your requests:\n   Header: x-api-key: {}", key),
        None => println!("🔑 Set API_KEY and send it in the x-api-key header"),
    }
}
