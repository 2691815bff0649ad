use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::store_context::provide_record_store;
use crate::system::auth::context::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Fixture records, parsed once
    provide_record_store();

    view! {
        <SessionProvider>
            <AppRoutes />
        </SessionProvider>
    }
}
