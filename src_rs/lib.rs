// 목적:
// - 라우팅 서버 라이브러리 브릿지의 진입점을 제공한다.
//
// 설명:
// - C 호출자에게는 `init`/`findPath` 함수 쌍을, Rust 호출자에게는 RouteClient를 노출한다.
// - 실제 경로 탐색은 외부 라이브러리(librout_server)가 수행한다.
//
// 디자인 패턴:
// - 계층형 모듈 구조(api/core/native).
//
// 참조:
// - src_rs/api/c_abi.rs
// - src_rs/core/bridge.rs

pub mod api;
pub mod core;
pub mod ffi_buffer;
pub mod logging;
#[cfg(feature = "native")]
pub mod native;

pub use crate::api::registry::{clear_router, install_router, installed_router};
pub use crate::api::route_client::{RouteAnswer, RouteClient};
pub use crate::core::bridge::{Bridge, FindPathOutput, IdentifierBuffer};
pub use crate::core::config::BridgeConfig;
pub use crate::core::errors::{BridgeError, BridgeResult, StatusCode};
pub use crate::core::router::{Initializer, RawSearch, Router, SearchFormat, Searcher};
