use yew::prelude::*;
use yew_router::prelude::Link;

use crate::routes::Route;
use crate::services::Services;

/// Match list page
#[function_component(MatchesPage)]
pub fn matches_page() -> Html {
    let services = use_context::<Services>().expect("Services context not provided");
    let account_line = services
        .session
        .user_email()
        .map(|email| format!("Signed in as {email}"));

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{"Your matches"}</h1>
            if let Some(line) = account_line {
                <p class="text-sm text-base-content/70">{ line }</p>
            }

            <div class="stats shadow w-full">
                <div class="stat">
                    <div class="stat-title">{"Matches"}</div>
                    <div class="stat-value text-primary">{ "0" }</div>
                    <div class="stat-desc">{"People who liked you back"}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">{"Conversations"}</div>
                    <div class="stat-value text-secondary">{ "0" }</div>
                    <div class="stat-desc">{"Say hi to get started"}</div>
                </div>
            </div>

            <div class="card bg-base-200 shadow-xl">
                <div class="card-body items-center text-center">
                    <h2 class="card-title">{"No matches yet"}</h2>
                    <p>{"Keep swiping. Someone out there is looking for you too."}</p>
                    <div class="card-actions justify-end">
                        <Link<Route> to={Route::Swipe} classes="btn btn-primary">
                            {"Back to swiping"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </div>
    }
}
