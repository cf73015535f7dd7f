// 목적:
// - 진단 로그 구독자를 프로세스당 한 번만 설치한다.
//
// 설명:
// - C ABI 호출자는 Rust 쪽 로깅 초기화 시점을 모르므로 `init` 진입 시 설치한다.
// - 필터는 RUST_LOG를 따르고 없으면 info를 쓴다.
//
// 참조:
// - src_rs/api/c_abi.rs

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        // 호스트 프로세스가 이미 전역 구독자를 설치했다면 그대로 둔다.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    });
}
