use todo_shared::guard::Redirect;
use tracing::debug;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    containers::layout::Layout,
    pages::{error::ErrorPage, login::LoginPage, todos::TodoPage},
};

/// Client-side routes.
#[derive(Debug, Clone, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Todos,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<Redirect> for Route {
    fn from(redirect: Redirect) -> Self {
        match redirect {
            Redirect::ToLogin => Self::Login,
            Redirect::ToHome => Self::Todos,
        }
    }
}

/// Render function for `Switch<Route>`. Every view sits behind the session
/// guard in [`Layout`].
pub fn switch(route: Route) -> Html {
    debug!(?route, "switching route");
    match route {
        Route::Todos => html! { <Layout><TodoPage /></Layout> },
        Route::Login => html! { <Layout><LoginPage /></Layout> },
        Route::NotFound => html! { <Layout><ErrorPage /></Layout> },
    }
}
