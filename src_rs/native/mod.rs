// 목적:
// - 외부 라우팅 서버 라이브러리(librout_server)를 Router 능력으로 감싼다.
//
// 설명:
// - `Init`/`StartSearchForServer` 심볼은 C 링크로 노출된다고 가정한다.
// - 결과/식별자 버퍼는 Vec으로 복사한 뒤 libc::free로 해제한다.
//   결과 버퍼 해제 여부는 설정(release_result)으로 끌 수 있다.
//
// 디자인 패턴:
// - 어댑터(Adapter).
//
// 참조:
// - src_rs/core/router.rs
// - src_rs/ffi_buffer.rs
// - build.rs

use std::ffi::CStr;
use std::os::raw::{c_char, c_int, c_uchar, c_uint};
use std::ptr;

use crate::core::config::BridgeConfig;
use crate::core::errors::StatusCode;
use crate::core::router::{Initializer, RawSearch, SearchFormat, Searcher};
use crate::ffi_buffer::take_malloc_buffer;

#[allow(non_snake_case)]
extern "C" {
    fn Init(path: *const c_char) -> c_int;
    fn StartSearchForServer(
        param: *const c_uchar,
        param_length: c_uint,
        result: *mut *mut c_uchar,
        size: *mut c_uint,
        id: *mut *mut c_char,
        id_size: *mut c_uint,
        format: c_uint,
    ) -> c_int;
}

/// 네이티브 라우팅 라이브러리 구현이다.
#[derive(Debug, Clone)]
pub struct NativeRouter {
    release_result: bool,
}

impl NativeRouter {
    pub fn new(config: &BridgeConfig) -> Self {
        Self {
            release_result: config.release_result,
        }
    }
}

impl Default for NativeRouter {
    fn default() -> Self {
        Self::new(&BridgeConfig::default())
    }
}

impl Initializer for NativeRouter {
    fn init(&self, path: &CStr) -> StatusCode {
        unsafe { Init(path.as_ptr()) }
    }
}

impl Searcher for NativeRouter {
    fn search(&self, param: &[u8], format: SearchFormat) -> RawSearch {
        let param_length = c_uint::try_from(param.len()).unwrap_or(c_uint::MAX);
        let mut result: *mut c_uchar = ptr::null_mut();
        let mut size: c_uint = 0;
        let mut id: *mut c_char = ptr::null_mut();
        let mut id_size: c_uint = 0;

        let status = unsafe {
            StartSearchForServer(
                param.as_ptr(),
                param_length,
                &mut result,
                &mut size,
                &mut id,
                &mut id_size,
                format.raw(),
            )
        };

        let result = unsafe { take_malloc_buffer(result, size as usize, self.release_result) };
        let id = if id.is_null() {
            None
        } else {
            Some(unsafe { take_malloc_buffer(id as *mut u8, id_size as usize, true) })
        };

        RawSearch {
            status,
            result,
            id,
            id_size,
        }
    }
}
