use i18nrs::yew::use_translation;
use todo_shared::models::{AuthDraft, AuthMode};
use tracing::debug;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::app_context::AppContext;

/// Login and registration forms sharing one set of fields.
///
/// A successful login fills the session; the layout's guard then moves the
/// user to the todo list. A successful registration switches back to login
/// mode with the typed username kept.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let (i18n, ..) = use_translation();
    let context = use_context::<AppContext>();
    let mode = use_state(AuthMode::default);
    let draft = use_state(AuthDraft::default);
    let busy = use_state(|| false);

    let onsubmit = {
        let mode = mode.clone();
        let draft = draft.clone();
        let busy = busy.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(context) = context.clone() else {
                return;
            };
            let current_mode = *mode;
            let values = (*draft).clone();
            let mode = mode.clone();
            let busy = busy.clone();
            busy.set(true);
            spawn_local(async move {
                let auth = context.auth();
                if current_mode.is_login() {
                    if let Err(err) = auth.login(&values.login_request()).await {
                        debug!(error = %err, "staying on the login form");
                    }
                } else if auth.register(&values.register_request()).await.is_ok() {
                    mode.set(AuthMode::Login);
                }
                busy.set(false);
            });
        })
    };

    let on_toggle = {
        let mode = mode.clone();
        Callback::from(move |_: MouseEvent| {
            mode.set(if mode.is_login() {
                AuthMode::Register
            } else {
                AuthMode::Login
            });
        })
    };

    let field = |update: fn(&mut AuthDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*draft).clone();
                update(&mut next, input.value());
                draft.set(next);
            }
        })
    };
    let on_username = field(|draft, value| draft.username = value);
    let on_email = field(|draft, value| draft.email = value);
    let on_password = field(|draft, value| draft.password = value);

    let is_login = mode.is_login();
    let (title, submit_label, toggle_label) = if is_login {
        ("auth.login_title", "auth.login_button", "auth.to_register")
    } else {
        ("auth.register_title", "auth.register_button", "auth.to_login")
    };

    html! {
        <div class="flex items-center justify-center min-h-[70vh]">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" novalidate=true onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{ i18n.t(title) }</h2>
                    <div class="form-control">
                        <label class="label" for="username">
                            <span class="label-text">{ i18n.t("auth.username") }</span>
                        </label>
                        <input
                            id="username"
                            class="input input-bordered"
                            type="text"
                            value={draft.username.clone()}
                            oninput={on_username}
                        />
                    </div>
                    if !is_login {
                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">{ i18n.t("auth.email") }</span>
                            </label>
                            <input
                                id="email"
                                class="input input-bordered"
                                type="email"
                                value={draft.email.clone()}
                                oninput={on_email}
                            />
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{ i18n.t("auth.password") }</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            value={draft.password.clone()}
                            oninput={on_password}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={*busy}>
                            { if *busy { i18n.t("auth.working") } else { i18n.t(submit_label) } }
                        </button>
                    </div>
                    <button class="btn btn-link" type="button" onclick={on_toggle}>
                        { i18n.t(toggle_label) }
                    </button>
                </form>
            </div>
        </div>
    }
}
