//! Advisory banner shown while mock authentication is active.

use leptos::prelude::*;

use crate::session::Advisory;

/// Non-blocking strip at the top of the shell. Renders nothing unless boot
/// raised an advisory.
#[component]
pub fn MockModeBanner() -> impl IntoView {
    let advisory = expect_context::<RwSignal<Option<Advisory>>>();

    view! {
        <Show when=move || advisory.get().is_some()>
            <div class="mock-banner" role="status">
                {move || advisory.get().map(Advisory::message)}
            </div>
        </Show>
    }
}
