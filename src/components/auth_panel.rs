//! Sign-in, sign-up, and signed-in user controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! With real sessions the provider's own screens are mounted here. In mock
//! mode there is nothing to mount, so the panel offers a demo login that flips
//! the mock backend; the guard then moves the user on.

use leptos::prelude::*;

use crate::app::SessionHandle;
use crate::session::{BackendKind, SessionState};

/// Which face of the panel to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
    UserButton,
}

impl AuthMode {
    fn demo_label(self) -> &'static str {
        match self {
            Self::SignIn => "Continue as demo patient",
            Self::SignUp => "Create demo account",
            Self::UserButton => "",
        }
    }
}

#[component]
pub fn AuthPanel(mode: AuthMode) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let handle = expect_context::<SessionHandle>();

    match mode {
        AuthMode::UserButton => view! {
            <Show when=move || session.get().signed_in>
                <SignOutButton handle=handle/>
            </Show>
        }
        .into_any(),
        AuthMode::SignIn | AuthMode::SignUp if handle.kind() == Some(BackendKind::Mock) => {
            view! { <DemoLogin handle=handle label=mode.demo_label()/> }.into_any()
        }
        AuthMode::SignIn | AuthMode::SignUp => view! { <HostedScreen mode=mode/> }.into_any(),
    }
}

#[component]
fn SignOutButton(handle: SessionHandle) -> impl IntoView {
    let busy = RwSignal::new(false);
    let message = RwSignal::new(None::<String>);

    let on_sign_out = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        message.set(None);

        #[cfg(feature = "csr")]
        {
            let context = handle.context();
            leptos::task::spawn_local(async move {
                if let Err(err) = context.sign_out().await {
                    message.set(Some(format!("Sign out failed: {err}")));
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = handle;
    };

    view! {
        <div class="auth-user">
            <button class="btn btn--outline" on:click=on_sign_out disabled=move || busy.get()>
                "Sign out"
            </button>
            <Show when=move || message.get().is_some()>
                <p class="auth-message">{move || message.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}

#[component]
fn DemoLogin(handle: SessionHandle, label: &'static str) -> impl IntoView {
    let message = RwSignal::new(None::<String>);
    let on_click = move |_| {
        if let Err(err) = handle.context().set_signed_in(true) {
            message.set(Some(err.to_string()));
        }
    };

    view! {
        <div class="auth-demo">
            <p class="auth-demo__note">"Mock authentication is active. No credentials are checked."</p>
            <button class="btn btn--primary" on:click=on_click>{label}</button>
            <Show when=move || message.get().is_some()>
                <p class="auth-message">{move || message.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}

/// Mount point for the provider's sign-in or sign-up screen.
#[component]
fn HostedScreen(mode: AuthMode) -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    {
        use crate::session::hosted::{HostedWidget, mount_widget};

        let session = expect_context::<RwSignal<SessionState>>();
        let widget = if mode == AuthMode::SignUp { HostedWidget::SignUp } else { HostedWidget::SignIn };
        let mounted = RwSignal::new(false);
        Effect::new(move || {
            if mounted.get_untracked() || !session.get().loaded {
                return;
            }
            if let Some(el) = container.get() {
                mount_widget(widget, &el);
                mounted.set(true);
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = mode;

    view! { <div class="auth-hosted" node_ref=container></div> }
}
