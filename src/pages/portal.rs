//! Authenticated patient portal shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route and the parent of every
//! `/dashboard/...` screen. Section content is rendered by external display
//! components; this shell only frames it with the signed-in controls.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::auth_panel::{AuthMode, AuthPanel};

#[component]
pub fn PortalPage() -> impl IntoView {
    let params = use_params_map();
    let section = move || params.with(|p| p.get("section")).filter(|s| !s.is_empty()).unwrap_or_else(|| "overview".to_owned());

    view! {
        <div class="portal-page">
            <header class="portal-page__header">
                <h1>"Patient Portal"</h1>
                <AuthPanel mode=AuthMode::UserButton/>
            </header>
            <main class="portal-page__content" data-section=section>
                <h2>{section}</h2>
            </main>
        </div>
    }
}
