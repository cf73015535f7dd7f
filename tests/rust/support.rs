use std::ffi::{c_void, CStr};
use std::os::raw::c_char;
use std::sync::{Arc, Once};
use std::{ptr, slice};

use serde::Deserialize;

use route_bridge::api::c_abi::{findPath, releaseBuffer};
use route_bridge::{install_router, Initializer, RawSearch, SearchFormat, Searcher, StatusCode};

/// JSON 파라미터를 받으면 그 지시대로, 아니면 고정 응답(`ABC`)으로 답하는 대역 라우터다.
#[derive(Debug, Default)]
pub struct ScriptedRouter;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Script {
    status: StatusCode,
    result: Vec<u8>,
    id: Option<String>,
    id_size: Option<u32>,
    echo_format: bool,
}

impl Initializer for ScriptedRouter {
    fn init(&self, path: &CStr) -> StatusCode {
        let path = path.to_string_lossy();
        match path.strip_prefix("status:") {
            Some(code) => code.parse().unwrap_or(i32::MIN),
            None => 0,
        }
    }
}

impl Searcher for ScriptedRouter {
    fn search(&self, param: &[u8], format: SearchFormat) -> RawSearch {
        let Ok(script) = serde_json::from_slice::<Script>(param) else {
            let mut result = param.to_vec();
            result.reverse();
            return RawSearch::with_id(0, result, b"ABC".to_vec());
        };

        let result = if script.echo_format {
            format.raw().to_le_bytes().to_vec()
        } else {
            script.result
        };
        let id = script.id.map(String::into_bytes);
        let id_size = script
            .id_size
            .unwrap_or_else(|| id.as_ref().map_or(0, |id| id.len() as u32));

        RawSearch {
            status: script.status,
            result,
            id,
            id_size,
        }
    }
}

pub fn install_scripted_router() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| install_router(Arc::new(ScriptedRouter)));
}

/// C 호출자 관점에서 본 findPath 한 번의 출력이다.
#[derive(Debug)]
pub struct FindPathCall {
    pub status: StatusCode,
    pub result: Option<Vec<u8>>,
    pub id_with_nul: Vec<u8>,
    pub id_size: u32,
}

pub fn call_find_path(param: &[u8], format: u32) -> FindPathCall {
    let mut result: *mut u8 = ptr::null_mut();
    let mut size: u32 = 0;
    let mut id: *mut c_char = ptr::null_mut();
    let mut id_size: u32 = 0;

    let status = unsafe {
        findPath(
            param.as_ptr(),
            param.len() as u32,
            &mut result,
            &mut size,
            &mut id,
            &mut id_size,
            format,
        )
    };

    let result_bytes = (!result.is_null())
        .then(|| unsafe { slice::from_raw_parts(result, size as usize).to_vec() });
    assert!(!id.is_null(), "findPath는 항상 식별자 버퍼를 넘겨야 한다");
    let id_with_nul = unsafe { slice::from_raw_parts(id as *const u8, id_size as usize + 1).to_vec() };

    unsafe {
        releaseBuffer(result as *mut c_void);
        releaseBuffer(id as *mut c_void);
    }

    FindPathCall {
        status,
        result: result_bytes,
        id_with_nul,
        id_size,
    }
}
