// 목적:
// - init/findPath 호출을 외부 라우터로 전달하고 출력 버퍼를 마샬링한다.
//
// 설명:
// - 상태 코드는 변환 없이 그대로 돌려준다.
// - 식별자 출력은 항상 `id_size + 1` 바이트의 0 종료 버퍼로 복사한다.
// - 외부 루틴의 식별자 버퍼는 복사 직후 해제(drop)한다.
//
// 디자인 패턴:
// - 파사드(Facade).
//
// 참조:
// - src_rs/core/router.rs
// - src_rs/api/c_abi.rs

use std::ffi::CStr;

use tracing::{info, warn};

use crate::core::errors::StatusCode;
use crate::core::router::{RawSearch, Router, SearchFormat};

/// 호출자가 소유하는 0 종료 식별자 버퍼다.
///
/// 길이는 항상 `id_size + 1`이며 마지막 바이트는 0이다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierBuffer {
    bytes: Vec<u8>,
}

impl IdentifierBuffer {
    /// 외부 루틴의 식별자 출력에서 버퍼를 만든다.
    ///
    /// 원본이 `id_size`보다 짧으면 남는 자리는 0으로 둔다.
    pub fn copy_from(source: &[u8], id_size: u32) -> Self {
        let id_size = id_size as usize;
        let mut bytes = vec![0u8; id_size + 1];
        let copied = source.len().min(id_size);
        bytes[..copied].copy_from_slice(&source[..copied]);
        Self { bytes }
    }

    /// 식별자가 없는 경우의 1바이트(0) 버퍼다.
    pub fn empty() -> Self {
        Self { bytes: vec![0u8] }
    }

    pub fn id_size(&self) -> u32 {
        (self.bytes.len() - 1) as u32
    }

    /// 종료 바이트를 제외한 `id_size` 바이트.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.bytes.len() - 1]
    }

    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes_with_nul(self) -> Vec<u8> {
        self.bytes
    }

    /// 첫 0 바이트 이전까지를 C 문자열로 본다.
    pub fn as_c_str(&self) -> &CStr {
        // 마지막 바이트가 항상 0이므로 실패하지 않는다.
        CStr::from_bytes_until_nul(&self.bytes).unwrap_or_default()
    }
}

/// 한 번의 findPath 호출 결과다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindPathOutput {
    pub status: StatusCode,
    pub result: Vec<u8>,
    pub id: IdentifierBuffer,
}

impl FindPathOutput {
    pub fn result_size(&self) -> u32 {
        self.result.len() as u32
    }

    pub fn id_size(&self) -> u32 {
        self.id.id_size()
    }
}

/// 외부 라우터 앞에 놓이는 브릿지다.
#[derive(Debug, Clone)]
pub struct Bridge<R> {
    router: R,
}

impl<R: Router> Bridge<R> {
    pub fn new(router: R) -> Self {
        Self { router }
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    /// 경로를 외부 초기화 루틴에 넘기고 상태 코드를 그대로 반환한다.
    pub fn init(&self, path: &CStr) -> StatusCode {
        info!(path = %path.to_string_lossy(), "[bridge] init");
        self.router.init(path)
    }

    /// 외부 탐색 루틴을 호출하고 결과/식별자 버퍼를 호출자 소유로 넘긴다.
    pub fn find_path(&self, param: &[u8], format: SearchFormat) -> FindPathOutput {
        info!(param_length = param.len(), "[bridge] findPath in");

        let RawSearch {
            status,
            result,
            id,
            id_size,
        } = self.router.search(param, format);

        let id = match id {
            Some(source) => {
                if source.len() < id_size as usize {
                    warn!(
                        reported = id_size,
                        available = source.len(),
                        "[bridge] 식별자가 보고된 길이보다 짧아 0으로 채운다"
                    );
                }
                IdentifierBuffer::copy_from(&source, id_size)
            }
            None => {
                warn!(
                    reported = id_size,
                    "[bridge] 식별자 포인터가 비어 있어 빈 식별자를 반환한다"
                );
                IdentifierBuffer::empty()
            }
        };

        info!(
            status,
            size = result.len(),
            id = %String::from_utf8_lossy(id.as_bytes()),
            id_size = id.id_size(),
            "[bridge] findPath out"
        );

        FindPathOutput { status, result, id }
    }
}
