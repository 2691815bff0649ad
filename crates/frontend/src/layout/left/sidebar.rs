//! Sidebar with the menu the current role may see

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use contracts::system::navigation::{visible_destinations, NavigationDestination};
use leptos::prelude::*;

/// `/candidates/7` keeps "Candidates" highlighted.
fn is_active(current: &str, item_path: &str) -> bool {
    current == item_path
        || current
            .strip_prefix(item_path)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();
    let (session, _) = use_session();

    let items = move || -> Vec<NavigationDestination> {
        session
            .with(|s| s.current_role())
            .map(visible_destinations)
            .unwrap_or_default()
    };

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__brand">
                {icon("briefcase")}
                <Show when=move || ctx.left_open.get()>
                    <span class="app-sidebar__brand-title">"RecruitHub"</span>
                </Show>
            </div>
            <For
                each=items
                key=|item| item.path
                children=move |item| {
                    let path = item.path;
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || ctx.path.with(|p| is_active(p, path))
                            title=item.label
                            on:click=move |_| ctx.navigate(path)
                        >
                            <div class="app-sidebar__item-content">
                                {icon(item.icon)}
                                <Show when=move || ctx.left_open.get()>
                                    <span>{item.label}</span>
                                </Show>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::is_active;

    #[test]
    fn test_is_active() {
        assert!(is_active("/candidates", "/candidates"));
        assert!(is_active("/candidates/7", "/candidates"));
        assert!(!is_active("/candidates-archive", "/candidates"));
        assert!(!is_active("/dashboard", "/candidates"));
    }
}
