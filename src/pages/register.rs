//! Registration screen. Only reachable while signed out.

use leptos::prelude::*;

use crate::components::auth_panel::{AuthMode, AuthPanel};

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create Your Account"</h1>
                <p class="login-card__subtitle">"Register to access the Medical Office Portal"</p>
                <AuthPanel mode=AuthMode::SignUp/>
                <p class="login-card__footer">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
