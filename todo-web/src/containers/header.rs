use i18nrs::yew::use_translation;
use yew::prelude::*;
use yewdux::prelude::use_selector;

use crate::models::{app_context::AppContext, app_state::AppState};

#[function_component(Header)]
pub fn header() -> Html {
    let (i18n, ..) = use_translation();
    let context = use_context::<AppContext>();
    let user = use_selector(|state: &AppState| state.user.clone());

    let on_logout = Callback::from(move |_: MouseEvent| {
        if let Some(context) = &context {
            context.auth().logout();
        }
    });

    html! {
        <nav class="navbar justify-between bg-base-300 px-4">
            <span class="text-lg font-semibold">{ i18n.t("app.title") }</span>
            <div class="flex items-center gap-3">
                if let Some(user) = user.as_ref() {
                    <span class="text-sm">
                        { format!("{} {}!", i18n.t("header.welcome"), user.username) }
                    </span>
                }
                <button class="btn btn-ghost btn-sm" type="button" onclick={on_logout}>
                    { i18n.t("header.logout") }
                </button>
            </div>
        </nav>
    }
}
