// 목적:
// - C ABI 함수가 사용할 프로세스 전역 라우터를 보관한다.
//
// 설명:
// - `native` 기능이 켜져 있고 아무것도 등록되지 않았다면 첫 조회 시 네이티브 라우터를 등록한다.
// - 테스트나 임베딩 호스트는 `install_router`로 대역 구현을 넣을 수 있다.
//
// 참조:
// - src_rs/api/c_abi.rs
// - src_rs/native/mod.rs

use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::core::router::Router;

static ROUTER: RwLock<Option<Arc<dyn Router>>> = RwLock::new(None);

/// 전역 라우터를 교체한다.
pub fn install_router(router: Arc<dyn Router>) {
    let mut slot = ROUTER.write().unwrap_or_else(PoisonError::into_inner);
    if slot.is_some() {
        debug!("[registry] 기존 라우터를 교체한다");
    }
    *slot = Some(router);
}

/// 전역 라우터를 제거하고 이전 값을 돌려준다.
pub fn clear_router() -> Option<Arc<dyn Router>> {
    ROUTER
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .take()
}

/// 현재 등록된 라우터를 반환한다.
pub fn installed_router() -> Option<Arc<dyn Router>> {
    if let Some(router) = ROUTER
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
    {
        return Some(Arc::clone(router));
    }

    default_router()
}

#[cfg(feature = "native")]
fn default_router() -> Option<Arc<dyn Router>> {
    use crate::core::config::BridgeConfig;
    use crate::native::NativeRouter;

    let config = BridgeConfig::from_env().unwrap_or_else(|error| {
        tracing::warn!(%error, "[registry] 환경 설정을 읽지 못해 기본값을 쓴다");
        BridgeConfig::default()
    });

    let mut slot = ROUTER.write().unwrap_or_else(PoisonError::into_inner);
    let router = slot
        .get_or_insert_with(|| {
            debug!("[registry] 네이티브 라우터를 등록한다");
            Arc::new(NativeRouter::new(&config)) as Arc<dyn Router>
        })
        .clone();
    Some(router)
}

#[cfg(not(feature = "native"))]
fn default_router() -> Option<Arc<dyn Router>> {
    None
}
