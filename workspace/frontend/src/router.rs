use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::dashboard::DashboardPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            log::trace!("Rendering landing page");
            html! { <HomePage /> }
        }
        Route::Dashboard => {
            log::trace!("Rendering Dashboard page");
            html! { <DashboardPage /> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <NotFoundPage /> }
        }
    }
}
