use std::ffi::c_void;
use std::os::raw::c_char;
use std::ptr;

use rstest::rstest;
use serde_json::json;

use route_bridge::api::c_abi::{findPath, init, releaseBuffer};
use route_bridge::core::errors::STATUS_INVALID_ARGUMENT;

use crate::support::{call_find_path, install_scripted_router};

fn script(value: serde_json::Value) -> Vec<u8> {
    serde_json::to_vec(&value).unwrap()
}

#[test]
fn four_byte_param_yields_nul_terminated_identifier() {
    install_scripted_router();

    let call = call_find_path(&[1, 2, 3, 4], 1);

    assert_eq!(call.status, 0);
    assert_eq!(call.id_size, 3);
    assert_eq!(call.id_with_nul, vec![0x41, 0x42, 0x43, 0x00]);
    assert_eq!(call.result, Some(vec![4, 3, 2, 1]));
}

#[rstest]
#[case(0)]
#[case(3)]
#[case(-7)]
#[case(i32::MAX)]
fn find_path_returns_external_status_verbatim(#[case] status: i32) {
    install_scripted_router();

    let call = call_find_path(&script(json!({ "status": status, "id": "r1" })), 1);

    assert_eq!(call.status, status);
    assert_eq!(call.id_with_nul, b"r1\0");
}

#[rstest]
#[case("")]
#[case("a")]
#[case("route-0001")]
#[case("경로")]
fn identifier_buffer_is_id_size_plus_one(#[case] id: &str) {
    install_scripted_router();

    let call = call_find_path(&script(json!({ "id": id })), 1);

    assert_eq!(call.id_size as usize, id.len());
    assert_eq!(call.id_with_nul.len(), id.len() + 1);
    assert_eq!(&call.id_with_nul[..id.len()], id.as_bytes());
    assert_eq!(call.id_with_nul.last(), Some(&0));
}

#[test]
fn missing_identifier_is_returned_as_empty_string() {
    install_scripted_router();

    let call = call_find_path(&script(json!({ "status": 9, "id": null, "id_size": 6 })), 1);

    assert_eq!(call.status, 9);
    assert_eq!(call.id_size, 0);
    assert_eq!(call.id_with_nul, vec![0]);
}

#[test]
fn empty_result_is_handed_out_as_null() {
    install_scripted_router();

    let call = call_find_path(&script(json!({ "id": "r1", "result": [] })), 1);

    assert_eq!(call.result, None);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(42)]
fn format_is_passed_through(#[case] format: u32) {
    install_scripted_router();

    let call = call_find_path(&script(json!({ "id": "r1", "echo_format": true })), format);

    assert_eq!(call.result, Some(format.to_le_bytes().to_vec()));
}

#[test]
fn null_output_pointer_is_rejected() {
    install_scripted_router();

    let mut size: u32 = 0;
    let mut id: *mut c_char = ptr::null_mut();
    let mut id_size: u32 = 0;
    let param = [1u8];

    let status = unsafe {
        findPath(
            param.as_ptr(),
            1,
            ptr::null_mut(),
            &mut size,
            &mut id,
            &mut id_size,
            1,
        )
    };

    assert_eq!(status, STATUS_INVALID_ARGUMENT);
    assert!(id.is_null());
}

#[test]
fn null_param_with_length_is_rejected() {
    install_scripted_router();

    let mut result: *mut u8 = ptr::null_mut();
    let mut size: u32 = 0;
    let mut id: *mut c_char = ptr::null_mut();
    let mut id_size: u32 = 0;

    let status = unsafe {
        findPath(
            ptr::null(),
            8,
            &mut result,
            &mut size,
            &mut id,
            &mut id_size,
            1,
        )
    };

    assert_eq!(status, STATUS_INVALID_ARGUMENT);
}

#[test]
fn null_param_with_zero_length_is_searched() {
    install_scripted_router();

    let mut result: *mut u8 = ptr::null_mut();
    let mut size: u32 = 0;
    let mut id: *mut c_char = ptr::null_mut();
    let mut id_size: u32 = 0;

    let status = unsafe {
        findPath(
            ptr::null(),
            0,
            &mut result,
            &mut size,
            &mut id,
            &mut id_size,
            1,
        )
    };

    assert_eq!(status, 0);
    assert_eq!(id_size, 3);
    assert!(result.is_null());
    unsafe { releaseBuffer(id as *mut c_void) };
}

#[rstest]
#[case(c"routinglib", 0)]
#[case(c"status:5", 5)]
#[case(c"status:-11", -11)]
fn init_returns_external_status_verbatim(#[case] path: &std::ffi::CStr, #[case] expected: i32) {
    install_scripted_router();

    let status = unsafe { init(path.as_ptr()) };

    assert_eq!(status, expected);
}

#[test]
fn init_rejects_null_path() {
    install_scripted_router();

    assert_eq!(unsafe { init(ptr::null()) }, STATUS_INVALID_ARGUMENT);
}

#[test]
fn release_buffer_ignores_null() {
    unsafe { releaseBuffer(ptr::null_mut()) };
}
