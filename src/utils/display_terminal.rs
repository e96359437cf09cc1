//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 시 서비스 레지스트리 초기화 과정을 터미널에 보여주는 함수들입니다.
//! 로그 레벨과 무관하게 항상 표준 출력으로 나갑니다.
//!
//! ```text
//! ╔══════════════════════════════════════════════════╗
//! ║         🔄 INITIALIZING SERVICE REGISTRY         ║
//! ╚══════════════════════════════════════════════════╝
//! → Step 1: Creating Service instances
//!    ├─ relay: Creating...
//!    ├─ relay: ✓ Created
//! ✓ Step 1: Service instances created (1 items)
//! ```

const BOX_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목을 중앙 정렬하여 출력합니다
pub fn print_boxed_title(title: &str) {
    let border = "═".repeat(BOX_WIDTH);

    println!("╔{}╗", border);
    println!("║{:^width$}║", title, width = BOX_WIDTH - 1);
    println!("╚{}╝", border);
}

pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 레지스트리 초기화 완료 요약
pub fn print_final_summary(services: usize) {
    println!();
    print_boxed_title("🎉 SERVICE REGISTRY INITIALIZED");
    println!("   🔧 Services: {}", services);
    println!();
}
