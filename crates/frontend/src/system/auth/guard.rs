use contracts::system::navigation::{Destination, HOME_PATH};
use leptos::prelude::*;
use thaw::*;

use super::context::use_session;
use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::system::pages::login::LoginPage;

/// Component that requires a signed-in identity
/// Shows the login page otherwise
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();

    view! {
        <Show
            when=move || session.with(|s| s.is_authenticated())
            fallback=|| view! { <LoginPage /> }
        >
            {children()}
        </Show>
    }
}

/// Rendered in place of a page the current role may not open.
#[component]
pub fn AccessDenied(destination: Destination) -> impl IntoView {
    let ctx = use_global_context();
    let (session, _) = use_session();

    let role_name = move || {
        session.with(|s| {
            s.current_role()
                .map(|r| r.display_name().to_string())
                .unwrap_or_default()
        })
    };

    log::warn!("access denied: {}", destination.path());

    view! {
        <div class="page page--denied" data-page-category="system">
            <div class="empty-state">
                {icon("lock")}
                <h2>"Access denied"</h2>
                <p>
                    {move || format!("{} is not available for the {} role.", destination.label(), role_name())}
                </p>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| ctx.navigate(HOME_PATH)
                >
                    "Back to dashboard"
                </Button>
            </div>
        </div>
    }
}
