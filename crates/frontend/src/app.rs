use crate::auth::AuthProvider;
use crate::auth_guard::RoleGate;
use crate::pages::{LandingPage, LoginPage, NotFoundPage, RegisterPage, RoleLayout, view_content};
use clinic_core::{ResolvedRoute, Role, View, resolve};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AuthProvider>
            <BrowserRouter>
                <RouterOutlet />
            </BrowserRouter>
        </AuthProvider>
    }
}

/// Resolves the current location against the route table and renders it
#[function_component(RouterOutlet)]
fn router_outlet() -> Html {
    let location = use_location();
    let path = location
        .as_ref()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| "/".to_string());

    match resolve(&path) {
        Some(route) => html! {
            <RoleGate required={route.required_role}>
                { render_route(&route) }
            </RoleGate>
        },
        None => {
            tracing::debug!(%path, "No route matched");
            html! { <NotFoundPage /> }
        }
    }
}

fn render_route(route: &ResolvedRoute) -> Html {
    match route.view {
        View::Landing => html! { <LandingPage /> },
        View::Login => match route.param("role").and_then(|role| role.parse::<Role>().ok()) {
            Some(role) => html! { <LoginPage {role} /> },
            None => html! { <NotFoundPage /> },
        },
        View::Register => html! { <RegisterPage /> },
        _ => match route.required_role {
            Some(role) => html! {
                <RoleLayout {role} active={route.name()}>
                    { view_content(route) }
                </RoleLayout>
            },
            None => html! { <NotFoundPage /> },
        },
    }
}
