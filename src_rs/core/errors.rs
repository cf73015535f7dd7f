// 목적:
// - 브릿지 계층의 표준 오류 타입을 정의한다.
//
// 설명:
// - 외부 라우팅 라이브러리의 상태 코드는 그대로 전달하고,
//   Rust 측 API에서만 입력/설정/상태/식별자/런타임 오류를 구분한다.
// - C ABI 경계에서 브릿지가 직접 만드는 상태 코드도 여기서 정의한다.
//
// 디자인 패턴:
// - 도메인 오류 열거형(Domain Error Enum).
//
// 참조:
// - src_rs/api/route_client.rs
// - src_rs/api/c_abi.rs

use thiserror::Error;

/// 외부 라우팅 라이브러리가 반환하는 원시 상태 코드다.
pub type StatusCode = i32;

/// 외부 호출이 성공했음을 뜻하는 상태 코드다.
pub const STATUS_OK: StatusCode = 0;
/// 설치된 라우터가 없어 외부 호출을 수행하지 못했다.
pub const STATUS_UNAVAILABLE: StatusCode = -1;
/// C ABI 인자가 유효하지 않아 외부 호출을 수행하지 않았다.
pub const STATUS_INVALID_ARGUMENT: StatusCode = -2;
/// 호출자에게 넘길 버퍼 할당에 실패했다.
pub const STATUS_ALLOCATION_FAILED: StatusCode = -3;

/// 브릿지 계층에서 공통으로 사용하는 오류 열거형이다.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("입력값이 유효하지 않습니다: {0}")]
    InvalidInput(String),
    #[error("설정값이 유효하지 않습니다: {0}")]
    InvalidConfig(String),
    #[error("라우팅 라이브러리가 실패 상태를 반환했습니다: code={code}")]
    Status { code: StatusCode },
    #[error("식별자 버퍼를 해석할 수 없습니다: {0}")]
    InvalidIdentifier(String),
    #[error("직렬화/역직렬화에 실패했습니다: {0}")]
    Serialization(String),
    #[error("런타임 처리 중 오류가 발생했습니다: {0}")]
    Runtime(String),
}

impl BridgeError {
    /// 상태 코드가 성공이 아니면 `Status` 오류로 변환한다.
    pub fn check_status(code: StatusCode) -> BridgeResult<()> {
        if code == STATUS_OK {
            Ok(())
        } else {
            Err(BridgeError::Status { code })
        }
    }
}

pub type BridgeResult<T> = Result<T, BridgeError>;
