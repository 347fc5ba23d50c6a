//! Compatibility shim exposing the mock session outside the subscription path.
//!
//! SYSTEM CONTEXT
//! ==============
//! Some widgets talk to the identity provider's API surface directly instead
//! of going through [`super::context::SessionContext`]. In mock mode there is
//! no provider for them to ask, so the mock backend mirrors every state change
//! into this slot. It is a read-only export of the mock backend's state, not a
//! second source of truth: only `MockBackend` writes it.
//!
//! In the browser the same snapshot is reachable where those widgets look for
//! the provider's mock hook, `window.Clerk.__unstable_mockUseAuth()`,
//! returning `{ isSignedIn, isLoaded }`. The `window.Clerk` namespace is
//! created when the provider script has not defined it.

use std::cell::Cell;

use super::state::SessionState;

#[cfg(test)]
#[path = "compat_test.rs"]
mod tests;

/// Global namespace owned by the identity provider's browser SDK.
pub const PROVIDER_GLOBAL: &str = "Clerk";

/// Accessor installed on [`PROVIDER_GLOBAL`] in browser builds.
pub const GLOBAL_ACCESSOR: &str = "__unstable_mockUseAuth";

/// Property path from `window` to the accessor.
pub const ACCESSOR_PATH: [&str; 2] = [PROVIDER_GLOBAL, GLOBAL_ACCESSOR];

thread_local! {
    static MOCK_SLOT: Cell<Option<SessionState>> = const { Cell::new(None) };
    #[cfg(feature = "csr")]
    static ACCESSOR_INSTALLED: Cell<bool> = const { Cell::new(false) };
}

/// Latest mock session state, or `None` when mock mode is not active.
#[must_use]
pub fn mock_session_snapshot() -> Option<SessionState> {
    MOCK_SLOT.with(Cell::get)
}

pub(crate) fn publish_mock_snapshot(state: SessionState) {
    MOCK_SLOT.with(|slot| slot.set(Some(state)));

    #[cfg(feature = "csr")]
    if !ACCESSOR_INSTALLED.with(|flag| flag.replace(true)) {
        install_global_accessor();
    }
}

/// JSON form handed to legacy consumers.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub(crate) fn snapshot_json() -> Option<String> {
    mock_session_snapshot().and_then(|state| serde_json::to_string(&state).ok())
}

#[cfg(feature = "csr")]
fn install_global_accessor() {
    use js_sys::Reflect;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;

    let [namespace, accessor_name] = ACCESSOR_PATH;
    let Some(window) = web_sys::window() else {
        return;
    };
    let host = match Reflect::get(&window, &JsValue::from_str(namespace)) {
        Ok(existing) if !existing.is_undefined() && !existing.is_null() => existing,
        _ => {
            let created: JsValue = js_sys::Object::new().into();
            if let Err(err) = Reflect::set(&window, &JsValue::from_str(namespace), &created) {
                log::warn!("failed to create window.{namespace}: {err:?}");
                return;
            }
            created
        }
    };
    let accessor = Closure::<dyn Fn() -> JsValue>::new(|| {
        snapshot_json()
            .and_then(|json| js_sys::JSON::parse(&json).ok())
            .unwrap_or(JsValue::NULL)
    });
    if let Err(err) = Reflect::set(&host, &JsValue::from_str(accessor_name), &accessor.into_js_value()) {
        log::warn!("failed to install window.{namespace}.{accessor_name}: {err:?}");
    }
}
