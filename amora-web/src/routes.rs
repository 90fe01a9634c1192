use strum::{EnumIter, IntoEnumIterator};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::containers::layout::Layout;
use crate::pages::{
    InterestsPage, LoginPage, MatchesPage, ProfileDetailsPage, StartPage, SwipePage,
};

/// The application routes.
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum Route {
    #[at("/")]
    Start,
    #[at("/login")]
    Login,
    #[at("/profile-details")]
    ProfileDetails,
    #[at("/interests")]
    Interests,
    #[at("/swipe")]
    Swipe,
    #[at("/matches")]
    Matches,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Label shown in the navbar; `None` keeps the route out of it.
    pub fn nav_title(&self) -> Option<&'static str> {
        match self {
            Route::ProfileDetails => Some("Profile"),
            Route::Interests => Some("Interests"),
            Route::Swipe => Some("Swipe"),
            Route::Matches => Some("Matches"),
            Route::Start | Route::Login | Route::NotFound => None,
        }
    }

    /// Routes that appear in the navbar, in declaration order.
    pub fn nav_routes() -> Vec<Route> {
        Route::iter()
            .filter(|route| route.nav_title().is_some())
            .collect()
    }
}

/// Switch function for the application routes.
pub fn switch(route: Route) -> Html {
    log::debug!("switching to route: {route:?}");
    match route {
        Route::Start => html! {
            <Layout current_route={Route::Start}><StartPage /></Layout>
        },
        Route::Login => html! {
            <Layout current_route={Route::Login}><LoginPage /></Layout>
        },
        Route::ProfileDetails => html! {
            <Layout current_route={Route::ProfileDetails}><ProfileDetailsPage /></Layout>
        },
        Route::Interests => html! {
            <Layout current_route={Route::Interests}><InterestsPage /></Layout>
        },
        Route::Swipe => html! {
            <Layout current_route={Route::Swipe}><SwipePage /></Layout>
        },
        Route::Matches => html! {
            <Layout current_route={Route::Matches}><MatchesPage /></Layout>
        },
        // Anything unmatched lands back on the start page.
        Route::NotFound => html! { <Redirect<Route> to={Route::Start} /> },
    }
}
