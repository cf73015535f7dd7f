// 목적:
// - C 호출자에게 `init`/`findPath` 함수 쌍을 기존 시그니처 그대로 노출한다.
//
// 설명:
// - 인자를 Rust 타입으로 옮겨 Bridge에 넘기고, 출력은 malloc 버퍼로 돌려준다.
// - 외부 라이브러리 상태 코드는 변환 없이 반환한다.
// - 브릿지가 직접 만드는 음수 상태 코드는 core::errors에 정의한다.
// - 한 호출 안에서 할당한 버퍼는 호출자에게 넘기거나 반환 전에 해제한다.
//
// 디자인 패턴:
// - 얇은 FFI 경계(Thin FFI Boundary).
//
// 참조:
// - src_rs/core/bridge.rs
// - src_rs/api/registry.rs
// - src_rs/ffi_buffer.rs

use std::ffi::CStr;
use std::os::raw::{c_char, c_int, c_uint, c_void};
use std::{ptr, slice};

use tracing::warn;

use crate::api::registry::installed_router;
use crate::core::bridge::Bridge;
use crate::core::errors::{STATUS_ALLOCATION_FAILED, STATUS_INVALID_ARGUMENT, STATUS_UNAVAILABLE};
use crate::core::router::SearchFormat;
use crate::ffi_buffer::{malloc_copy, release};
use crate::logging::init_tracing;

/// 라우팅 라이브러리를 초기화한다.
///
/// # Safety
/// `path`는 널이거나 유효한 0 종료 문자열이어야 한다.
#[no_mangle]
pub unsafe extern "C" fn init(path: *const c_char) -> c_int {
    init_tracing();

    if path.is_null() {
        warn!("[bridge] init: path가 널이다");
        return STATUS_INVALID_ARGUMENT;
    }

    let Some(router) = installed_router() else {
        warn!("[bridge] init: 등록된 라우터가 없다");
        return STATUS_UNAVAILABLE;
    };

    Bridge::new(router).init(CStr::from_ptr(path))
}

/// 경로 탐색을 수행하고 결과/식별자 버퍼를 호출자 소유로 넘긴다.
///
/// 성공/실패와 무관하게 외부 상태 코드를 그대로 반환한다. `*id`는 항상
/// `*id_size + 1` 바이트의 0 종료 버퍼이며, `*result`는 결과가 비어 있으면 널이다.
/// 두 버퍼 모두 `free` 또는 `releaseBuffer`로 해제한다.
///
/// # Safety
/// `param`은 `param_length` 바이트를 읽을 수 있어야 하고(길이 0이면 널 허용),
/// 나머지 출력 포인터는 모두 쓰기 가능한 유효 포인터여야 한다.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn findPath(
    param: *const u8,
    param_length: c_uint,
    result: *mut *mut u8,
    size: *mut c_uint,
    id: *mut *mut c_char,
    id_size: *mut c_uint,
    format: c_uint,
) -> c_int {
    if result.is_null() || size.is_null() || id.is_null() || id_size.is_null() {
        warn!("[bridge] findPath: 출력 포인터가 널이다");
        return STATUS_INVALID_ARGUMENT;
    }
    if param.is_null() && param_length != 0 {
        warn!(param_length, "[bridge] findPath: param이 널이다");
        return STATUS_INVALID_ARGUMENT;
    }

    let Some(router) = installed_router() else {
        warn!("[bridge] findPath: 등록된 라우터가 없다");
        return STATUS_UNAVAILABLE;
    };

    let param = if param_length == 0 {
        &[][..]
    } else {
        slice::from_raw_parts(param, param_length as usize)
    };

    let output = Bridge::new(router).find_path(param, SearchFormat(format));

    let Some(id_buffer) = malloc_copy(output.id.as_bytes_with_nul()) else {
        warn!("[bridge] findPath: 식별자 버퍼 할당 실패");
        return STATUS_ALLOCATION_FAILED;
    };

    let result_buffer = if output.result.is_empty() {
        ptr::null_mut()
    } else {
        match malloc_copy(&output.result) {
            Some(buffer) => buffer,
            None => {
                warn!("[bridge] findPath: 결과 버퍼 할당 실패");
                release(id_buffer as *mut c_void);
                return STATUS_ALLOCATION_FAILED;
            }
        }
    };

    *result = result_buffer;
    *size = output.result_size();
    *id = id_buffer as *mut c_char;
    *id_size = output.id_size();

    output.status
}

/// `findPath`가 넘긴 버퍼를 해제한다. 널은 무시한다.
///
/// # Safety
/// `buffer`는 널이거나 `findPath`가 넘긴 뒤 아직 해제되지 않은 버퍼여야 한다.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn releaseBuffer(buffer: *mut c_void) {
    release(buffer);
}
