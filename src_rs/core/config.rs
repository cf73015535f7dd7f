// 목적:
// - 브릿지 실행 설정을 정의하고 로드한다.
//
// 설명:
// - 라우팅 라이브러리 설정 경로, 탐색 결과 형식, 결과 버퍼 해제 여부를 담는다.
// - JSON 페이로드 또는 환경 변수에서 읽는다.
//
// 디자인 패턴:
// - 설정 객체(Configuration Object) + 실패 빠르게(Fail Fast).
//
// 참조:
// - src_rs/api/route_client.rs
// - src_rs/native/mod.rs

use serde::{Deserialize, Serialize};

use crate::core::errors::{BridgeError, BridgeResult};
use crate::core::router::SearchFormat;

pub const ENV_CONFIG_PATH: &str = "ROUTE_BRIDGE_CONFIG_PATH";
pub const ENV_FORMAT: &str = "ROUTE_BRIDGE_FORMAT";
pub const ENV_RELEASE_RESULT: &str = "ROUTE_BRIDGE_RELEASE_RESULT";

const DEFAULT_CONFIG_PATH: &str = "routinglib";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub library_config_path: String,
    pub format: SearchFormat,
    pub release_result: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            library_config_path: DEFAULT_CONFIG_PATH.to_string(),
            format: SearchFormat::DEFAULT,
            release_result: true,
        }
    }
}

impl BridgeConfig {
    /// JSON 페이로드에서 설정을 읽는다. 빠진 필드는 기본값을 쓴다.
    pub fn from_json(payload_json: &str) -> BridgeResult<Self> {
        let config: BridgeConfig = serde_json::from_str(payload_json).map_err(|error| {
            BridgeError::Serialization(format!("브릿지 설정 JSON 파싱에 실패했습니다: {}", error))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// 프로세스 환경 변수에서 설정을 읽는다.
    pub fn from_env() -> BridgeResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> BridgeResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = BridgeConfig::default();

        if let Some(path) = lookup(ENV_CONFIG_PATH) {
            config.library_config_path = path;
        }

        if let Some(raw) = lookup(ENV_FORMAT) {
            let value = raw.trim().parse::<u32>().map_err(|error| {
                BridgeError::InvalidConfig(format!("{} 값이 정수가 아닙니다: {} ({})", ENV_FORMAT, raw, error))
            })?;
            config.format = SearchFormat(value);
        }

        if let Some(raw) = lookup(ENV_RELEASE_RESULT) {
            config.release_result = parse_flag(&raw).ok_or_else(|| {
                BridgeError::InvalidConfig(format!("{} 값을 해석할 수 없습니다: {}", ENV_RELEASE_RESULT, raw))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> BridgeResult<()> {
        if self.library_config_path.trim().is_empty() {
            return Err(BridgeError::InvalidConfig(
                "library_config_path는 비어 있을 수 없습니다".to_string(),
            ));
        }

        if self.library_config_path.contains('\0') {
            return Err(BridgeError::InvalidConfig(
                "library_config_path에 NUL 문자를 넣을 수 없습니다".to_string(),
            ));
        }

        Ok(())
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
