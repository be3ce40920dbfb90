use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

use crate::routes::Route;

/// Shown for any path without a route.
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <div class="p-4 space-y-6 text-center">
            <h1 class="text-2xl font-bold">{ i18n.t("error.not_found_title") }</h1>
            <p>{ i18n.t("error.not_found_body") }</p>
            <Link<Route> to={Route::Todos} classes="btn btn-primary">
                { i18n.t("error.back_home") }
            </Link<Route>>
        </div>
    }
}
