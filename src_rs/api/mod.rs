// 목적:
// - 외부 호출자 경계 모듈을 선언한다.
//
// 설명:
// - C 호출자용 ABI, 전역 라우터 등록소, Rust 호출자용 안전 클라이언트를 분리한다.
//
// 디자인 패턴:
// - 모듈 분리(Module Separation).
//
// 참조:
// - src_rs/api/c_abi.rs
// - src_rs/api/registry.rs
// - src_rs/api/route_client.rs

pub mod c_abi;
pub mod registry;
pub mod route_client;
