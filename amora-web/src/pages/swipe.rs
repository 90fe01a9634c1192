use yew::prelude::*;

use crate::services::Services;

/// Swipe deck page
///
/// The deck endpoints are not wired up yet, so this renders the empty
/// state with the action bar disabled.
#[function_component(SwipePage)]
pub fn swipe_page() -> Html {
    let services = use_context::<Services>().expect("Services context not provided");
    let greeting = services.session.user_name().map_or_else(
        || "Ready to meet someone new?".to_string(),
        |name| format!("Ready to meet someone new, {name}?"),
    );

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ greeting }</h1>

            <div class="flex justify-center">
                // Deck placeholder
                <div class="card w-full max-w-sm bg-base-200 shadow-xl">
                    <div class="card-body items-center text-center">
                        <h2 class="card-title">{"No one nearby right now"}</h2>
                        <p>{"Check back soon. New people join every day."}</p>
                        <div class="card-actions mt-4">
                            <button class="btn btn-circle btn-outline btn-lg" disabled=true>
                                {"✕"}
                            </button>
                            <button class="btn btn-circle btn-primary btn-lg" disabled=true>
                                {"♥"}
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
