// 목적:
// - 외부 라우팅 라이브러리를 추상 능력 인터페이스로 모델링한다.
//
// 설명:
// - 초기화(Initializer)와 경로 탐색(Searcher)을 분리된 트레이트로 둔다.
// - 네이티브 라이브러리 구현과 테스트용 대역 구현이 같은 경계를 공유한다.
//
// 디자인 패턴:
// - 포트/어댑터(Port & Adapter).
//
// 참조:
// - src_rs/core/bridge.rs
// - src_rs/native/mod.rs

use std::ffi::CStr;

use serde::{Deserialize, Serialize};

use crate::core::errors::StatusCode;

/// 외부 탐색 루틴에 그대로 전달되는 결과 형식 선택자다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchFormat(pub u32);

impl SearchFormat {
    /// 라우팅 서버가 모든 요청에 사용하던 기본 형식이다.
    pub const DEFAULT: SearchFormat = SearchFormat(1);

    pub fn raw(self) -> u32 {
        self.0
    }
}

impl Default for SearchFormat {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u32> for SearchFormat {
    fn from(value: u32) -> Self {
        SearchFormat(value)
    }
}

/// 외부 탐색 루틴이 한 번의 호출로 돌려준 원시 출력이다.
///
/// `id`가 `None`이면 루틴이 식별자 포인터를 채우지 않은 경우다.
/// `id_size`는 루틴이 보고한 값 그대로이며 `id`의 실제 길이와 다를 수 있다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSearch {
    pub status: StatusCode,
    pub result: Vec<u8>,
    pub id: Option<Vec<u8>>,
    pub id_size: u32,
}

impl RawSearch {
    /// 보고된 길이가 실제 식별자 길이와 일치하는 출력을 만든다.
    pub fn with_id(status: StatusCode, result: Vec<u8>, id: Vec<u8>) -> Self {
        let id_size = id.len() as u32;
        Self {
            status,
            result,
            id: Some(id),
            id_size,
        }
    }
}

/// 라우팅 라이브러리 초기화 능력이다.
pub trait Initializer: Send + Sync {
    fn init(&self, path: &CStr) -> StatusCode;
}

/// 라우팅 라이브러리 경로 탐색 능력이다.
pub trait Searcher: Send + Sync {
    fn search(&self, param: &[u8], format: SearchFormat) -> RawSearch;
}

/// 브릿지가 요구하는 두 능력을 모두 가진 라우터다.
pub trait Router: Initializer + Searcher {}

impl<T: Initializer + Searcher + ?Sized> Router for T {}

impl<T: Initializer + ?Sized> Initializer for std::sync::Arc<T> {
    fn init(&self, path: &CStr) -> StatusCode {
        (**self).init(path)
    }
}

impl<T: Searcher + ?Sized> Searcher for std::sync::Arc<T> {
    fn search(&self, param: &[u8], format: SearchFormat) -> RawSearch {
        (**self).search(param, format)
    }
}
