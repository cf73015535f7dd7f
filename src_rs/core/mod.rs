// 목적:
// - 브릿지 핵심 계층 모듈을 선언한다.
//
// 설명:
// - 라우터 능력 경계, 마샬링 브릿지, 설정, 공통 오류 모델을 분리해 유지보수성을 높인다.
//
// 디자인 패턴:
// - 명시적 오류 모델(Explicit Error Model).
//
// 참조:
// - src_rs/core/errors.rs
// - src_rs/core/router.rs
// - src_rs/core/bridge.rs
// - src_rs/core/config.rs

pub mod bridge;
pub mod config;
pub mod errors;
pub mod router;
