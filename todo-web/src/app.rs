use todo_shared::{ServiceConfig, SessionStore, Subscription};
use tracing::debug;
use yew::{ContextProvider, Html, function_component, html, use_effect_with, use_memo};
use yew_router::prelude::*;
use yewdux::{Dispatch, prelude::use_store};

use crate::{
    models::{app_context::AppContext, app_state::AppState},
    routes::{Route, switch},
};

/// Root component: owns the service context and keeps the yewdux mirror of
/// the session in step with the session store.
#[function_component(App)]
pub fn app() -> Html {
    let context = use_memo((), |()| AppContext::new(ServiceConfig::default()));
    let (_, dispatch) = use_store::<AppState>();

    {
        let session = context.session.clone();
        use_effect_with((), move |()| {
            let subscription = mirror_session(&session, dispatch);
            move || drop(subscription)
        });
    }

    html! {
        <ContextProvider<AppContext> context={(*context).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<AppContext>>
    }
}

/// Copy the current session into `dispatch` and keep copying every change
/// until the returned subscription is dropped. The layout's guard reacts to
/// the user it sees in the yewdux store.
pub fn mirror_session(session: &SessionStore, dispatch: Dispatch<AppState>) -> Subscription {
    dispatch.set(AppState::from(&session.snapshot()));
    session.subscribe(move |current| {
        debug!(authenticated = current.is_authenticated(), "session changed");
        dispatch.set(AppState::from(current));
    })
}
