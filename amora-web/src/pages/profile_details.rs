use shared::models::ProfileUpdate;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::hooks::use_navigator;

use crate::pages::error_message;
use crate::routes::Route;
use crate::services::Services;

/// Profile form, second step of the signup flow.
///
/// On first submit there is no account yet: the credentials stashed by the
/// start page are turned into a user, then the profile is saved against the
/// new id. A logged-in user lands here from the navbar and only updates the
/// profile. The form is prefilled from the copy kept in the session.
#[function_component(ProfileDetailsPage)]
pub fn profile_details_page() -> Html {
    let services = use_context::<Services>().expect("Services context not provided");
    let stored_profile = services
        .session
        .user_profile()
        .and_then(|json| serde_json::from_str::<ProfileUpdate>(&json).ok());

    let name = use_state(|| {
        stored_profile
            .as_ref()
            .map(|profile| profile.name.clone())
            .unwrap_or_default()
    });
    let gender = use_state(|| {
        stored_profile
            .as_ref()
            .map(|profile| profile.gender.clone())
            .unwrap_or_default()
    });
    let date_of_birth = use_state(|| {
        stored_profile
            .as_ref()
            .map(|profile| profile.date_of_birth.clone())
            .unwrap_or_default()
    });
    let preference = use_state(|| {
        stored_profile
            .as_ref()
            .map(|profile| profile.preference.clone())
            .unwrap_or_default()
    });
    let photo_url = use_state(|| {
        stored_profile
            .as_ref()
            .and_then(|profile| profile.profile_image.clone())
            .unwrap_or_default()
    });
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    let onsubmit = {
        let name_handle = name.clone();
        let gender_handle = gender.clone();
        let date_handle = date_of_birth.clone();
        let preference_handle = preference.clone();
        let photo_handle = photo_url.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let services = services.clone();
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let photo_value = (*photo_handle).clone();
            let profile = ProfileUpdate {
                name: (*name_handle).clone(),
                gender: (*gender_handle).clone(),
                date_of_birth: (*date_handle).clone(),
                preference: (*preference_handle).clone(),
                profile_image: (!photo_value.is_empty()).then_some(photo_value),
            };
            loading_handle.set(true);
            error_handle.set(None);
            let users = services.users.clone();
            let session = services.session.clone();
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let navigator_handle = navigator.clone();
            spawn_local(async move {
                // Signing up: no account exists yet, so create one from the
                // credentials the start page stashed.
                let user_id = match session.user_id() {
                    Some(id) => Ok(id),
                    None => {
                        let email = session.temp_email().unwrap_or_default();
                        let password = session.temp_password().unwrap_or_default();
                        users.create_user(&email, &password).await.map(|created| {
                            session.set_user_id(&created.id);
                            session.set_user_email(&email);
                            created.id
                        })
                    }
                };

                match user_id {
                    Ok(id) => match users.update_profile(&id, &profile).await {
                        Ok(_) => {
                            session.set_user_name(&profile.name);
                            if let Ok(json) = serde_json::to_string(&profile) {
                                session.set_user_profile(&json);
                            }
                            if let Some(ref nav) = navigator_handle {
                                nav.push(&Route::Interests);
                            }
                        }
                        Err(err) => error_ref.set(Some(error_message(&err))),
                    },
                    Err(err) => error_ref.set(Some(error_message(&err))),
                }
                loading_ref.set(false);
            });
        })
    };

    let on_name_change = {
        let name = name.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                name.set(input.value());
            }
        })
    };

    let on_gender_change = {
        let gender = gender.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                gender.set(select.value());
            }
        })
    };

    let on_date_change = {
        let date_of_birth = date_of_birth.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                date_of_birth.set(input.value());
            }
        })
    };

    let on_preference_change = {
        let preference = preference.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                preference.set(select.value());
            }
        })
    };

    let on_photo_change = {
        let photo_url = photo_url.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                photo_url.set(input.value());
            }
        })
    };

    let is_busy = *loading;
    let disable_submit = (*name).is_empty()
        || (*gender).is_empty()
        || (*date_of_birth).is_empty()
        || (*preference).is_empty()
        || is_busy;

    html! {
        <div class="flex items-center justify-center bg-base-200 rounded-box py-8">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"About you"}</h2>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="name">
                            <span class="label-text">{"Name"}</span>
                        </label>
                        <input
                            id="name"
                            class="input input-bordered"
                            type="text"
                            required=true
                            value={(*name).clone()}
                            oninput={on_name_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="gender">
                            <span class="label-text">{"Gender"}</span>
                        </label>
                        <select
                            id="gender"
                            class="select select-bordered"
                            required=true
                            onchange={on_gender_change}
                        >
                            <option value="" selected={(*gender).is_empty()} disabled=true>
                                {"Select"}
                            </option>
                            <option value="female" selected={*gender == "female"}>{"Female"}</option>
                            <option value="male" selected={*gender == "male"}>{"Male"}</option>
                            <option value="other" selected={*gender == "other"}>{"Other"}</option>
                        </select>
                    </div>
                    <div class="form-control">
                        <label class="label" for="date-of-birth">
                            <span class="label-text">{"Date of birth"}</span>
                        </label>
                        <input
                            id="date-of-birth"
                            class="input input-bordered"
                            type="date"
                            required=true
                            value={(*date_of_birth).clone()}
                            oninput={on_date_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="preference">
                            <span class="label-text">{"Interested in"}</span>
                        </label>
                        <select
                            id="preference"
                            class="select select-bordered"
                            required=true
                            onchange={on_preference_change}
                        >
                            <option value="" selected={(*preference).is_empty()} disabled=true>
                                {"Select"}
                            </option>
                            <option value="women" selected={*preference == "women"}>{"Women"}</option>
                            <option value="men" selected={*preference == "men"}>{"Men"}</option>
                            <option value="everyone" selected={*preference == "everyone"}>{"Everyone"}</option>
                        </select>
                    </div>
                    <div class="form-control">
                        <label class="label" for="photo-url">
                            <span class="label-text">{"Photo URL (optional)"}</span>
                        </label>
                        <input
                            id="photo-url"
                            class="input input-bordered"
                            type="url"
                            value={(*photo_url).clone()}
                            oninput={on_photo_change}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Saving..." } else { "Save and continue" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
