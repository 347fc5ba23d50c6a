//! Public landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Medical Office Portal"</h1>
            <p>"Appointments, records, and messages in one place."</p>
            <nav class="home-page__actions">
                <a href="/login" class="btn btn--primary">"Sign in"</a>
                <a href="/register" class="btn btn--outline">"Register"</a>
                <a href="/dashboard" class="btn btn--ghost">"Go to portal"</a>
            </nav>
        </div>
    }
}
