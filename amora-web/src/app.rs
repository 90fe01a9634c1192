use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::config::FrontendConfig;
use crate::routes::{Route, switch};
use crate::services::{Services, UserService};
use crate::storage::Session;

/// Application root.
///
/// The client stack is composed here exactly once: one session over the
/// tab's storage, one API client reading auth state from it, one service
/// per backend area. Pages reach all of it through context.
#[function_component(App)]
pub fn app() -> Html {
    let services = use_memo((), |_| {
        let config = FrontendConfig::new();
        let session = Session::default();
        let client = ApiClient::new(&config, session.clone());
        log::info!("api base url: {}", client.base_url());
        Services {
            users: UserService::new(client),
            session,
        }
    });

    html! {
        <ContextProvider<Services> context={(*services).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Services>>
    }
}
