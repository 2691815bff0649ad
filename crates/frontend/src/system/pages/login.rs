use contracts::system::auth::{LoginRequest, Role};
use contracts::system::navigation::HOME_PATH;
use contracts::system::session::resolve_login;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::use_global_context;
use crate::shared::store_context::use_record_store;
use crate::system::auth::context::{do_login, use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_global_context();
    let store = use_record_store();
    let (_, set_session) = use_session();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role_code = RwSignal::new(Role::Admin.code().to_string());
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let submit = move || {
        let request = LoginRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
            role: Role::from_code(&role_code.get_untracked()).unwrap_or(Role::Admin),
        };

        match store.with_value(|s| resolve_login(&s.users, &request)) {
            Ok(identity) => {
                set_error_message.set(None);
                do_login(set_session, identity);
                ctx.navigate(HOME_PATH);
            }
            Err(e) => {
                log::warn!("login rejected: {}", e);
                set_error_message.set(Some(e.to_string()));
            }
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit();
    };

    // Demo accounts, one per role
    let demo_accounts = store.with_value(|s| {
        Role::ALL
            .into_iter()
            .filter_map(|role| s.users.iter().find(|u| u.role == role).cloned())
            .collect::<Vec<_>>()
    });

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"RecruitHub"</h1>
                <h2>"Sign in to your account"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="alert alert--error">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <Input value=email placeholder="name@recruithub.com" />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <Input value=password input_type=InputType::Password placeholder="any" />
                    </div>

                    <div class="form-group">
                        <label for="role">"Role"</label>
                        <Select value=role_code>
                            {Role::ALL.into_iter().map(|role| view! {
                                <option value=role.code()>{role.display_name()}</option>
                            }).collect_view()}
                        </Select>
                    </div>

                    <button type="submit" class="btn-primary">"Sign in"</button>
                </form>

                <div class="login-info">
                    <p>"Demo accounts:"</p>
                    {demo_accounts.into_iter().map(|user| {
                        let user_email = user.email.clone();
                        let user_role = user.role;
                        view! {
                            <button
                                type="button"
                                class="login-info__account"
                                on:click=move |_| {
                                    email.set(user_email.clone());
                                    role_code.set(user_role.code().to_string());
                                }
                            >
                                <strong>{user.role.display_name()}</strong>
                                " "
                                {user.email.clone()}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
