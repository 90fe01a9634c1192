use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

use crate::pages::error_message;
use crate::routes::Route;
use crate::services::Services;

/// Interests offered during signup. The backend accepts any strings, so
/// this list only shapes the UI.
const INTEREST_OPTIONS: [&str; 12] = [
    "Music",
    "Movies",
    "Travel",
    "Cooking",
    "Sports",
    "Art",
    "Gaming",
    "Reading",
    "Hiking",
    "Photography",
    "Dancing",
    "Fitness",
];

/// Interest picker, last step of the signup flow.
#[function_component(InterestsPage)]
pub fn interests_page() -> Html {
    let services = use_context::<Services>().expect("Services context not provided");
    let selected = use_state(|| {
        services
            .session
            .user_interests()
            .and_then(|json| serde_json::from_str::<Vec<String>>(&json).ok())
            .unwrap_or_default()
    });
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    let toggle = {
        let selected = selected.clone();
        Callback::from(move |interest: String| {
            let mut next = (*selected).clone();
            if let Some(position) = next.iter().position(|entry| entry == &interest) {
                next.remove(position);
            } else {
                next.push(interest);
            }
            selected.set(next);
        })
    };

    let onsubmit = {
        let selected_handle = selected.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let services = services.clone();
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let choices = (*selected_handle).clone();
            loading_handle.set(true);
            error_handle.set(None);
            let users = services.users.clone();
            let session = services.session.clone();
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let navigator_handle = navigator.clone();
            spawn_local(async move {
                let Some(user_id) = session.user_id() else {
                    error_ref.set(Some("Create an account before picking interests".to_string()));
                    loading_ref.set(false);
                    return;
                };
                match users.update_interests(&user_id, &choices).await {
                    Ok(_) => {
                        if let Ok(json) = serde_json::to_string(&choices) {
                            session.set_user_interests(&json);
                        }
                        // Signup is complete; the stashed credentials have
                        // no further use.
                        session.remove_temp_credentials();
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&Route::Swipe);
                        }
                    }
                    Err(err) => error_ref.set(Some(error_message(&err))),
                }
                loading_ref.set(false);
            });
        })
    };

    let is_busy = *loading;
    let disable_submit = selected.is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center bg-base-200 rounded-box py-8">
            <div class="card w-full max-w-lg shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"What are you into?"}</h2>
                    <p class="text-sm text-base-content/70">
                        {"Pick at least one. You can change these later."}
                    </p>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="flex flex-wrap gap-2 py-4">
                        { for INTEREST_OPTIONS.iter().map(|interest| {
                            let label = *interest;
                            let is_selected = selected.iter().any(|entry| entry == label);
                            let toggle = toggle.clone();
                            let onclick = Callback::from(move |_: MouseEvent| {
                                toggle.emit(label.to_string());
                            });
                            let classes = if is_selected {
                                "btn btn-primary btn-sm"
                            } else {
                                "btn btn-outline btn-sm"
                            };
                            html! {
                                <button type="button" class={classes} {onclick}>
                                    { label }
                                </button>
                            }
                        }) }
                    </div>
                    <div class="form-control">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Saving..." } else { "Save interests" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
