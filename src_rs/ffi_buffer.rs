// 목적:
// - C 할당자(malloc/free)로 관리되는 버퍼와 Rust 소유 버퍼 사이의 복사를 담당한다.
//
// 설명:
// - 호출자에게 넘기는 버퍼는 C 호출자가 `free`로 해제할 수 있도록 malloc으로 만든다.
// - 외부 라이브러리가 넘긴 버퍼는 Vec으로 복사한 뒤 필요하면 free로 해제한다.
//
// 참조:
// - src_rs/api/c_abi.rs
// - src_rs/native/mod.rs

use std::ptr;

use std::ffi::c_void;

/// `bytes`를 malloc 버퍼로 복사한다. 할당 실패 시 `None`.
///
/// 빈 입력이어도 1바이트 이상을 할당해 널이 아닌 포인터를 돌려준다.
pub fn malloc_copy(bytes: &[u8]) -> Option<*mut u8> {
    let buffer = unsafe { libc::malloc(bytes.len().max(1)) } as *mut u8;
    if buffer.is_null() {
        return None;
    }
    unsafe {
        ptr::copy_nonoverlapping(bytes.as_ptr(), buffer, bytes.len());
    }
    Some(buffer)
}

/// 외부에서 받은 버퍼를 Vec으로 복사하고 `release`면 free로 해제한다.
///
/// # Safety
/// `buffer`는 널이거나 `len` 바이트를 읽을 수 있는 malloc 버퍼여야 한다.
pub unsafe fn take_malloc_buffer(buffer: *mut u8, len: usize, release: bool) -> Vec<u8> {
    if buffer.is_null() {
        return Vec::new();
    }
    let copied = std::slice::from_raw_parts(buffer, len).to_vec();
    if release {
        libc::free(buffer as *mut c_void);
    }
    copied
}

/// malloc으로 할당된 버퍼를 해제한다. 널은 무시한다.
///
/// # Safety
/// `buffer`는 널이거나 아직 해제되지 않은 malloc 버퍼여야 한다.
pub unsafe fn release(buffer: *mut c_void) {
    if !buffer.is_null() {
        libc::free(buffer);
    }
}
