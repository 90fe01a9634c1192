use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::services::Services;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub current_route: Option<Route>,
}

/// Shared page chrome: navbar, content area, footer.
///
/// The navbar only offers the in-app routes once a user is logged in;
/// before that it points at the login page. Logging out clears the tab
/// session and returns to the start page.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let services = use_context::<Services>().expect("Services context not provided");
    let navigator = use_navigator();
    let logged_in = services.session.is_logged_in();

    let on_logout = {
        let session = services.session.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            session.clear();
            log::info!("session cleared");
            if let Some(nav) = navigator.as_ref() {
                nav.push(&Route::Start);
            }
        })
    };

    let nav_items = Route::nav_routes()
        .into_iter()
        .map(|route| {
            let active = props.current_route.as_ref() == Some(&route);
            let classes = if active { "active" } else { "" };
            let title = route.nav_title().unwrap_or_default();
            html! {
                <li>
                    <Link<Route> to={route} {classes}>{ title }</Link<Route>>
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <>
            <nav class="navbar justify-between bg-base-300">
                <Link<Route> to={Route::Start} classes="btn btn-ghost text-lg">
                    { "Amora" }
                </Link<Route>>
                if logged_in {
                    <div class="flex items-center gap-2">
                        <ul class="menu sm:menu-horizontal">
                            { nav_items }
                        </ul>
                        <button class="btn btn-ghost btn-sm" onclick={on_logout}>
                            { "Sign out" }
                        </button>
                    </div>
                } else {
                    <Link<Route> to={Route::Login} classes="btn btn-primary btn-sm">
                        { "Log in" }
                    </Link<Route>>
                }
            </nav>
            <main class="min-h-screen bg-base-100 p-4">
                { props.children.clone() }
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <div>
                    <p>{ "© 2026 Amora · Powered by Rust, Yew and DaisyUI" }</p>
                </div>
            </footer>
        </>
    }
}
