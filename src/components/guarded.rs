//! Route wrapper applying the guard decision to its children.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route in the table is wrapped in `Guarded`, so redirect behavior is
//! identical across screens. Redirects replace the history entry and the
//! children are never rendered in the same pass.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::{use_location, use_query_map};

use crate::guard::{GuardResult, PortalRoute, RETURN_PARAM, RouteRequirement, decide, login_redirect_path, return_target,
    visited_origin};
use crate::session::SessionState;

fn replace_history() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Render `children` only if the session satisfies `route`'s requirement.
///
/// Without a `route` the wrapper requires a signed-in user.
#[component]
pub fn Guarded(#[prop(optional)] route: Option<PortalRoute>, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let query = use_query_map();
    let requirement = RouteRequirement::declared(route.map(PortalRoute::requirement));

    let origin = Memo::new(move |_| {
        visited_origin(&location.pathname.get(), &location.search.get(), &location.hash.get())
    });
    let decision = Memo::new(move |_| origin.with(|from| decide(session.get(), requirement, from)));

    move || match decision.get() {
        GuardResult::Loading => view! {
            <div class="guard-loading" aria-busy="true">
                <div class="guard-loading__spinner"></div>
            </div>
        }
        .into_any(),
        GuardResult::Permitted => children().into_any(),
        GuardResult::RedirectLogin { from } => {
            log::debug!("{from} requires a signed-in user; redirecting to login");
            view! { <Redirect path=login_redirect_path(&from) options=replace_history()/> }.into_any()
        }
        GuardResult::RedirectHome => {
            // Signed in on a sign-in screen: finish the login round trip.
            let target = return_target(query.with_untracked(|q| q.get(RETURN_PARAM)).as_deref());
            log::debug!("already signed in; redirecting to {target}");
            view! { <Redirect path=target options=replace_history()/> }.into_any()
        }
    }
}
