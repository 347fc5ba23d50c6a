//! Sign-in screen. Only reachable while signed out.

use leptos::prelude::*;

use crate::components::auth_panel::{AuthMode, AuthPanel};

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Medical Office Portal"</h1>
                <p class="login-card__subtitle">"Sign in to access your medical information and appointments"</p>
                <AuthPanel mode=AuthMode::SignIn/>
                <p class="login-card__footer">
                    "No account yet? " <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
