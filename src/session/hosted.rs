//! Identity provider backed by the hosted browser SDK (`window.Clerk`).
//!
//! SYSTEM CONTEXT
//! ==============
//! The SDK is loaded by a `<script>` tag in the page shell. This adapter finds
//! it, loads it with our publishable key and router hooks, and translates its
//! user-change events into [`SessionState`] transitions. Outside the browser
//! there is no SDK: the provider never loads and sign-out is unavailable.
//!
//! TRADE-OFFS
//! ==========
//! If the SDK fails to load, the session is reported as loaded and signed
//! out. Guards then send protected routes to the login screen instead of
//! spinning forever on a provider that will never answer.

use std::cell::Cell;
#[cfg(feature = "csr")]
use std::cell::RefCell;
use std::rc::Rc;

use super::listeners::Listeners;
use super::provider::{IdentityProvider, Navigator};
use super::state::{Listener, ListenerId, SessionState};
use crate::config::PublishableKey;
use crate::error::ProviderError;

#[cfg(test)]
#[path = "hosted_test.rs"]
mod tests;

#[derive(Clone)]
pub struct HostedProvider {
    inner: Rc<HostedInner>,
}

#[derive(Default)]
struct HostedInner {
    loaded: Cell<bool>,
    signed_in: Cell<bool>,
    listeners: Listeners,
    #[cfg(feature = "csr")]
    sdk: RefCell<Option<wasm_bindgen::JsValue>>,
}

impl HostedProvider {
    /// Bind the SDK to `key` and start loading it.
    ///
    /// Returns immediately; the session reports `loaded == false` until the
    /// SDK answers.
    pub fn connect(key: &PublishableKey, navigator: Navigator) -> Self {
        let provider = Self { inner: Rc::new(HostedInner::default()) };

        #[cfg(feature = "csr")]
        provider.attach(key, navigator);

        #[cfg(not(feature = "csr"))]
        {
            let _ = navigator;
            log::warn!("identity provider SDK unavailable outside the browser; session for {key:?} stays loading");
        }

        provider
    }

    /// Record what the SDK reports about the current user.
    ///
    /// The first call marks the session loaded; later calls only notify when
    /// the signed-in flag actually changes.
    #[cfg_attr(not(feature = "csr"), allow(dead_code))]
    pub(crate) fn record_identity(&self, signed_in: bool) {
        let first_load = !self.inner.loaded.replace(true);
        let changed = self.inner.signed_in.replace(signed_in) != signed_in;
        if first_load || changed {
            log::info!("identity provider reports signed_in={signed_in}");
            self.inner.listeners.notify(SessionState::loaded(signed_in));
        }
    }

    #[cfg(feature = "csr")]
    fn attach(&self, key: &PublishableKey, navigator: Navigator) {
        let sdk = match sdk::instance(key) {
            Ok(sdk) => sdk,
            Err(err) => {
                log::error!("identity provider SDK not available: {err}");
                self.record_identity(false);
                return;
            }
        };
        *self.inner.sdk.borrow_mut() = Some(sdk.clone());

        let options = sdk::load_options(navigator);
        let provider = self.clone();
        leptos::task::spawn_local(async move {
            if let Err(err) = sdk::call(&sdk, "load", &options).await {
                log::error!("identity provider SDK failed to load: {err}");
                provider.record_identity(false);
                return;
            }
            provider.record_identity(sdk::has_user(&sdk));

            let watcher = provider.clone();
            let watched = sdk.clone();
            if let Err(err) = sdk::add_listener(&sdk, move || watcher.record_identity(sdk::has_user(&watched))) {
                log::warn!("identity provider change listener not installed: {err}");
            }
        });
    }
}

/// Prebuilt SDK screens that can be mounted into a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostedWidget {
    SignIn,
    SignUp,
}

/// Mount an SDK screen into `element`. Failures are logged, not surfaced:
/// the surrounding page still renders and the guard still applies.
#[cfg(feature = "csr")]
pub fn mount_widget(widget: HostedWidget, element: &web_sys::Element) {
    if let Err(err) = sdk::mount(widget, element) {
        log::warn!("could not mount {widget:?}: {err}");
    }
}

#[async_trait::async_trait(?Send)]
impl IdentityProvider for HostedProvider {
    fn state(&self) -> SessionState {
        SessionState { signed_in: self.inner.signed_in.get(), loaded: self.inner.loaded.get() }
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        #[cfg(feature = "csr")]
        {
            let sdk = self
                .inner
                .sdk
                .borrow()
                .clone()
                .ok_or_else(|| ProviderError::Unavailable("SDK not attached".into()))?;
            sdk::call(&sdk, "signOut", &wasm_bindgen::JsValue::UNDEFINED).await?;
            self.record_identity(false);
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ProviderError::Unavailable("no browser SDK in this build".into()))
        }
    }

    fn on_change(&self, listener: Listener) -> ListenerId {
        self.inner.listeners.add(listener)
    }

    fn remove_listener(&self, id: ListenerId) {
        self.inner.listeners.remove(id);
    }
}

// =============================================================================
// SDK BINDINGS
// =============================================================================

#[cfg(feature = "csr")]
mod sdk {
    use js_sys::{Array, Function, Object, Promise, Reflect};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    use super::HostedWidget;
    use crate::config::PublishableKey;
    use crate::error::ProviderError;
    use crate::session::provider::Navigator;

    const SDK_GLOBAL: &str = crate::session::compat::PROVIDER_GLOBAL;

    fn get(target: &JsValue, name: &str) -> Result<JsValue, ProviderError> {
        Reflect::get(target, &JsValue::from_str(name)).map_err(|e| ProviderError::Unavailable(format!("{name}: {e:?}")))
    }

    fn method(target: &JsValue, name: &str) -> Result<Function, ProviderError> {
        get(target, name)?
            .dyn_into::<Function>()
            .map_err(|_| ProviderError::Unavailable(format!("{name} is not a function")))
    }

    /// The global is either a ready instance or a constructor taking the key.
    pub(super) fn instance(key: &PublishableKey) -> Result<JsValue, ProviderError> {
        let window = web_sys::window().ok_or_else(|| ProviderError::Unavailable("no window".into()))?;
        let global = get(&window, SDK_GLOBAL)?;
        if global.is_undefined() || global.is_null() {
            return Err(ProviderError::Unavailable(format!("window.{SDK_GLOBAL} missing")));
        }
        let Some(ctor) = global.dyn_ref::<Function>() else {
            return Ok(global);
        };
        let instance = Reflect::construct(ctor, &Array::of1(&JsValue::from_str(key.as_str())))
            .map_err(|e| ProviderError::Rejected(format!("constructor: {e:?}")))?;
        // Widgets look the instance up through the same global.
        Reflect::set(&window, &JsValue::from_str(SDK_GLOBAL), &instance)
            .map_err(|e| ProviderError::Unavailable(format!("window.{SDK_GLOBAL}: {e:?}")))?;
        Ok(instance)
    }

    pub(super) fn mount(widget: HostedWidget, element: &web_sys::Element) -> Result<(), ProviderError> {
        let window = web_sys::window().ok_or_else(|| ProviderError::Unavailable("no window".into()))?;
        let sdk = get(&window, SDK_GLOBAL)?;
        let name = match widget {
            HostedWidget::SignIn => "mountSignIn",
            HostedWidget::SignUp => "mountSignUp",
        };
        method(&sdk, name)?
            .call2(&sdk, element, &Object::new())
            .map_err(|e| ProviderError::Rejected(format!("{name}: {e:?}")))?;
        Ok(())
    }

    /// `{ routerPush, routerReplace }` both forwarding to the in-app router.
    pub(super) fn load_options(navigator: Navigator) -> JsValue {
        let options = Object::new();
        for hook in ["routerPush", "routerReplace"] {
            let navigate = navigator.clone();
            let callback = Closure::<dyn Fn(JsValue)>::new(move |to: JsValue| {
                if let Some(to) = to.as_string() {
                    navigate(&to);
                }
            });
            let _ = Reflect::set(&options, &JsValue::from_str(hook), &callback.into_js_value());
        }
        options.into()
    }

    /// Invoke `target[name](arg)` and await the result if it is a promise.
    pub(super) async fn call(target: &JsValue, name: &str, arg: &JsValue) -> Result<JsValue, ProviderError> {
        let value = method(target, name)?
            .call1(target, arg)
            .map_err(|e| ProviderError::Rejected(format!("{name}: {e:?}")))?;
        match value.dyn_ref::<Promise>() {
            Some(promise) => JsFuture::from(promise.clone())
                .await
                .map_err(|e| ProviderError::Rejected(format!("{name}: {e:?}"))),
            None => Ok(value),
        }
    }

    pub(super) fn has_user(sdk: &JsValue) -> bool {
        get(sdk, "user").is_ok_and(|user| !user.is_undefined() && !user.is_null())
    }

    pub(super) fn add_listener<F>(sdk: &JsValue, on_change: F) -> Result<(), ProviderError>
    where
        F: Fn() + 'static,
    {
        let callback = Closure::<dyn Fn(JsValue)>::new(move |_resources: JsValue| on_change());
        method(sdk, "addListener")?
            .call1(sdk, &callback.into_js_value())
            .map_err(|e| ProviderError::Rejected(format!("addListener: {e:?}")))?;
        Ok(())
    }
}
