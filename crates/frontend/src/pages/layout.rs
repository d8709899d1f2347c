//! Shell around every page of a role's area

use super::landing::capitalize;
use crate::auth::use_auth;
use clinic_core::{Role, href, route_table};
use yew::prelude::*;
use yew_router::AnyRoute;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RoleLayoutProps {
    pub role: Role,
    /// Name of the route currently shown
    pub active: AttrValue,
    pub children: Children,
}

/// Navigation entries of a role's area: its children without `:param` segments
fn nav_items(role: Role) -> Vec<(&'static str, String)> {
    route_table()
        .iter()
        .filter(|entry| entry.required_role == Some(role))
        .flat_map(|entry| entry.children.iter())
        .filter(|child| !child.path.contains(':'))
        .filter_map(|child| href(child.name, &[]).map(|path| (child.name, path)))
        .collect()
}

fn nav_label(path: &str) -> String {
    path.rsplit('/').next().map(capitalize).unwrap_or_default()
}

#[function_component(RoleLayout)]
pub fn role_layout(props: &RoleLayoutProps) -> Html {
    let auth = use_auth();
    let navigator = use_navigator();

    let on_logout = {
        let store = auth.store.clone();
        Callback::from(move |_: MouseEvent| {
            let store = store.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                store.logout().await;
                if let Some(navigator) = navigator {
                    navigator.push(&AnyRoute::new("/"));
                }
            });
        })
    };

    let greeting = auth
        .session
        .user
        .as_ref()
        .and_then(|user| user.get_str("username"))
        .map(|name| format!("Signed in as {name}"));

    html! {
        <div class="min-h-screen flex bg-gray-50">
            <aside class="w-56 bg-white border-r border-gray-200 p-4">
                <h2 class="text-lg font-bold text-gray-900 mb-6">
                    {format!("{} area", capitalize(props.role.as_str()))}
                </h2>
                <nav class="flex flex-col gap-1">
                    { for nav_items(props.role).into_iter().map(|(name, path)| {
                        let classes = if name == props.active.as_str() {
                            "px-3 py-2 rounded-md bg-blue-50 text-blue-700"
                        } else {
                            "px-3 py-2 rounded-md text-gray-700 hover:bg-gray-100"
                        };
                        html! {
                            <Link<AnyRoute> to={AnyRoute::new(path.clone())} classes={classes!(classes)}>
                                { nav_label(&path) }
                            </Link<AnyRoute>>
                        }
                    }) }
                </nav>
            </aside>
            <div class="flex-1 flex flex-col">
                <header class="h-16 px-6 flex items-center justify-end gap-4 bg-white border-b border-gray-200">
                    if let Some(greeting) = greeting {
                        <span class="text-sm text-gray-600">{greeting}</span>
                    }
                    <button onclick={on_logout} class="text-sm text-gray-600 hover:text-gray-900">
                        {"Sign Out"}
                    </button>
                </header>
                <main class="p-6">
                    { props.children.clone() }
                </main>
            </div>
        </div>
    }
}
