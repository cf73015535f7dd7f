// 목적:
// - Rust 호출자(라우팅 API 서버 등)가 쓰는 안전한 경로 탐색 클라이언트를 제공한다.
//
// 설명:
// - 설정의 라이브러리 경로와 형식으로 Bridge를 호출한다.
// - 0이 아닌 상태 코드는 BridgeError::Status로 바꾸고,
//   성공 시 식별자 문자열과 결과 바이트를 돌려준다.
// - 비동기 호출자는 tokio 블로킹 풀에서 탐색을 실행한다.
//
// 디자인 패턴:
// - 파사드(Facade) + 실패 빠르게(Fail Fast).
//
// 참조:
// - src_rs/core/bridge.rs
// - src_rs/core/config.rs

use std::ffi::CString;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::bridge::Bridge;
use crate::core::config::BridgeConfig;
use crate::core::errors::{BridgeError, BridgeResult};
use crate::core::router::Router;

/// 성공한 경로 탐색의 결과다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteAnswer {
    pub id: String,
    pub result: Vec<u8>,
}

#[derive(Debug)]
pub struct RouteClient<R> {
    bridge: Arc<Bridge<R>>,
    config: BridgeConfig,
}

impl<R> Clone for RouteClient<R> {
    fn clone(&self) -> Self {
        Self {
            bridge: Arc::clone(&self.bridge),
            config: self.config.clone(),
        }
    }
}

impl<R: Router + 'static> RouteClient<R> {
    pub fn new(router: R, config: BridgeConfig) -> BridgeResult<Self> {
        config.validate()?;
        Ok(Self {
            bridge: Arc::new(Bridge::new(router)),
            config,
        })
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// 설정된 경로로 라우팅 라이브러리를 초기화한다.
    pub fn init(&self) -> BridgeResult<()> {
        let path = CString::new(self.config.library_config_path.as_str()).map_err(|error| {
            BridgeError::InvalidConfig(format!("library_config_path 변환 실패: {}", error))
        })?;

        BridgeError::check_status(self.bridge.init(&path))
    }

    /// 탐색 조건(직렬화된 서버 파라미터)으로 경로를 찾는다.
    pub fn find_path(&self, condition: &[u8]) -> BridgeResult<RouteAnswer> {
        if u32::try_from(condition.len()).is_err() {
            return Err(BridgeError::InvalidInput(format!(
                "탐색 조건이 너무 큽니다: {} bytes",
                condition.len()
            )));
        }

        let output = self.bridge.find_path(condition, self.config.format);
        BridgeError::check_status(output.status)?;

        let id = output
            .id
            .as_c_str()
            .to_str()
            .map_err(|error| BridgeError::InvalidIdentifier(error.to_string()))?
            .to_string();

        Ok(RouteAnswer {
            id,
            result: output.result,
        })
    }

    /// `find_path`를 tokio 블로킹 풀에서 실행한다.
    pub async fn find_path_async(&self, condition: Vec<u8>) -> BridgeResult<RouteAnswer> {
        let client = self.clone();
        tokio::task::spawn_blocking(move || client.find_path(&condition))
            .await
            .map_err(|error| BridgeError::Runtime(format!("경로 탐색 작업 조인 실패: {}", error)))?
    }
}
