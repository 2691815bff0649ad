use contracts::system::auth::{Identity, Role};
use contracts::system::session::SessionContext;
use leptos::prelude::*;

/// Session context provider component
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let (session, set_session) = signal(SessionContext::new());

    provide_context(session);
    provide_context(set_session);

    children()
}

/// Hook to access the session
pub fn use_session() -> (ReadSignal<SessionContext>, WriteSignal<SessionContext>) {
    let session = use_context::<ReadSignal<SessionContext>>()
        .expect("SessionProvider not found in component tree");
    let set_session = use_context::<WriteSignal<SessionContext>>()
        .expect("SessionProvider not found in component tree");

    (session, set_session)
}

/// Helper: perform login
pub fn do_login(set_session: WriteSignal<SessionContext>, identity: Identity) {
    log::info!("login: {} <{}> as {}", identity.name, identity.email, identity.role);
    set_session.update(|s| s.login(identity));
}

/// Helper: perform logout
pub fn do_logout(set_session: WriteSignal<SessionContext>) {
    log::info!("logout");
    set_session.update(|s| s.logout());
}

/// Helper: demo role switch, keeps the rest of the identity
pub fn switch_role(set_session: WriteSignal<SessionContext>, role: Role) {
    log::info!("switch role: {}", role);
    set_session.update(|s| s.switch_role(role));
}
