use crate::auth::use_auth;
use clinic_core::Role;
use yew::prelude::*;
use yew_router::AnyRoute;
use yew_router::prelude::*;

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let auth = use_auth();
    let dashboard = auth
        .is_authenticated()
        .then(|| auth.session.role.map(|role| role.dashboard_path()))
        .flatten();

    html! {
        <div class="min-h-screen bg-gradient-to-br from-gray-50 to-gray-100">
            <main class="max-w-4xl mx-auto px-4 py-16 text-center">
                <h1 class="text-4xl font-extrabold text-gray-900">{"Clinic Portal"}</h1>
                <p class="mt-4 text-gray-600">{"Sign in to manage appointments, patients and records."}</p>
                if let Some(path) = dashboard {
                    <div class="mt-8">
                        <Link<AnyRoute> to={AnyRoute::new(path)} classes="text-blue-600 hover:underline">
                            {"Continue to your dashboard"}
                        </Link<AnyRoute>>
                    </div>
                }
                <div class="mt-10 flex justify-center gap-4">
                    { for Role::ALL.iter().map(|role| html! {
                        <Link<AnyRoute>
                            to={AnyRoute::new(role.login_path())}
                            classes="px-4 py-2 text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 rounded-md"
                        >
                            {format!("{} login", capitalize(role.as_str()))}
                        </Link<AnyRoute>>
                    }) }
                </div>
                <p class="mt-6 text-sm text-gray-600">
                    {"New patient? "}
                    <Link<AnyRoute> to={AnyRoute::new("/register")} classes="text-blue-600 hover:underline">
                        {"Create an account"}
                    </Link<AnyRoute>>
                </p>
            </main>
        </div>
    }
}

pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
