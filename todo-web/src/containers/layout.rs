use i18nrs::yew::use_translation;
use todo_shared::guard;
use tracing::debug;
use yew::{Children, Html, Properties, classes, function_component, html, use_context, use_effect_with};
use yew_router::prelude::{use_location, use_navigator};
use yewdux::prelude::use_selector;

use crate::{
    components::loading::Loading,
    containers::header::Header,
    models::{app_context::AppContext, app_state::AppState},
    routes::Route,
};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

/// Page frame and session guard.
///
/// The guard runs whenever the path or the signed-in user changes. Until it
/// agrees with the current path a loading placeholder is shown instead of the
/// page.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let (i18n, ..) = use_translation();
    let context = use_context::<AppContext>();
    let navigator = use_navigator();
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();
    let user = use_selector(|state: &AppState| state.user.clone());

    {
        let session = context.map(|context| context.session);
        use_effect_with((path.clone(), (*user).clone()), move |(path, _)| {
            if let (Some(session), Some(navigator)) = (session, navigator) {
                if let Some(redirect) = guard::check(&session, path) {
                    debug!(%path, ?redirect, "redirecting");
                    navigator.replace(&Route::from(redirect));
                }
            }
            || ()
        });
    }

    let allowed = guard::evaluate(&path, user.is_some()).is_none();

    html! {
        <div class="min-h-screen bg-base-200">
            if user.is_some() {
                <Header />
            }
            <main class={classes!("container", "mx-auto", "max-w-2xl", "p-4")}>
                if allowed {
                    { props.children.clone() }
                } else {
                    <Loading label={i18n.t("app.loading")} />
                }
            </main>
        </div>
    }
}
