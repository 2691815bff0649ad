//! TopHeader component - application top bar.
//!
//! Contains the sidebar toggle, the demo role switcher, the signed-in
//! identity and the logout button.

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, switch_role, use_session};
use contracts::system::auth::Role;
use contracts::system::navigation::LOGIN_PATH;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let (session, set_session) = use_session();

    let role_select = RwSignal::new(session.with_untracked(|s| {
        s.current_role()
            .map(|r| r.code().to_string())
            .unwrap_or_default()
    }));

    Effect::new(move |_| {
        let code = role_select.get();
        if let Some(role) = Role::from_code(&code) {
            if session.with_untracked(|s| s.current_role()) != Some(role) {
                switch_role(set_session, role);
            }
        }
    });

    let logout = move |_| {
        do_logout(set_session);
        ctx.navigate(LOGIN_PATH);
    };

    let initials = move || {
        session.with(|s| s.current_identity().map(|i| i.initials()).unwrap_or_default())
    };
    let name = move || {
        session.with(|s| {
            s.current_identity()
                .map(|i| i.name.clone())
                .unwrap_or_else(|| "Guest".to_string())
        })
    };
    let role_name = move || {
        session.with(|s| {
            s.current_role()
                .map(|r| r.display_name())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Collapse sidebar" } else { "Expand sidebar" }
                >
                    {move || if ctx.left_open.get() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Recruitment Dashboard"</span>
            </div>

            <div class="top-header__actions">
                // Demo only: changes the role of the current identity
                <div class="top-header__role-switch" title="Switch role (demo)">
                    <Select value=role_select size=SelectSize::Small>
                        {Role::ALL.into_iter().map(|role| view! {
                            <option value=role.code()>{role.code()}</option>
                        }).collect_view()}
                    </Select>
                </div>

                <div class="top-header__user">
                    <span class="avatar">{initials}</span>
                    <div class="top-header__user-info">
                        <span class="top-header__user-name">{name}</span>
                        <span class="top-header__user-role">{role_name}</span>
                    </div>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Log out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
