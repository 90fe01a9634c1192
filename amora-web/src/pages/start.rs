use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;

use crate::routes::Route;
use crate::services::Services;

/// Landing page. Starts the signup flow by stashing the credentials in the
/// tab session; the account itself is created once the profile form is
/// submitted.
#[function_component(StartPage)]
pub fn start_page() -> Html {
    let services = use_context::<Services>().expect("Services context not provided");
    let email = use_state(String::new);
    let password = use_state(String::new);
    let navigator = use_navigator();

    let onsubmit = {
        let email_handle = email.clone();
        let password_handle = password.clone();
        let session = services.session.clone();
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let email_value = (*email_handle).clone();
            let password_value = (*password_handle).clone();
            session.set_temp_email(&email_value);
            session.set_temp_password(&password_value);
            if let Some(ref nav) = navigator {
                nav.push(&Route::ProfileDetails);
            }
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let disable_submit = (*email).is_empty() || (*password).is_empty();

    html! {
        <div class="hero min-h-[70vh] bg-base-200 rounded-box">
            <div class="hero-content flex-col lg:flex-row-reverse">
                <div class="text-center lg:text-left">
                    <h1 class="text-4xl font-bold">{"Find your match"}</h1>
                    <p class="py-4">
                        {"Create an account, tell us about yourself and start swiping."}
                    </p>
                </div>
                <div class="card w-full max-w-md shadow-lg bg-base-100">
                    <form class="card-body" onsubmit={onsubmit}>
                        <h2 class="card-title text-2xl">{"Sign up"}</h2>
                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">{"Email"}</span>
                            </label>
                            <input
                                id="email"
                                class="input input-bordered"
                                type="email"
                                required=true
                                value={(*email).clone()}
                                oninput={on_email_change}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">{"Password"}</span>
                            </label>
                            <input
                                id="password"
                                class="input input-bordered"
                                type="password"
                                required=true
                                value={(*password).clone()}
                                oninput={on_password_change}
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                                {"Continue"}
                            </button>
                        </div>
                        <p class="text-sm text-center">
                            {"Already have an account? "}
                            <Link<Route> to={Route::Login} classes="link link-primary">
                                {"Log in"}
                            </Link<Route>>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
