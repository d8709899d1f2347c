use super::landing::capitalize;
use crate::auth::use_auth;
use clinic_core::Role;
use clinic_frontend_common::AuthSuccess;
use clinic_http::LoginRequest;
use yew::prelude::*;
use yew_router::AnyRoute;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub role: Role,
}

/// Usernames never contain `@`, so anything that does is sent as an email
fn login_request(role: Role, identifier: &str, password: &str) -> LoginRequest {
    let identifier = identifier.trim();
    if identifier.contains('@') {
        LoginRequest::with_email(role, identifier, password)
    } else {
        LoginRequest::with_username(role, identifier, password)
    }
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let identifier = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);

    let on_identifier_input = {
        let identifier = identifier.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            identifier.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let store = auth.store.clone();
        let identifier = identifier.clone();
        let password = password.clone();
        let error = error.clone();
        let role = props.role;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = login_request(role, &identifier, &password);
            let store = store.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match store.login(&request).await {
                    Ok(AuthSuccess::LoggedIn(role)) => {
                        error.set(None);
                        if let Some(navigator) = navigator {
                            navigator.push(&AnyRoute::new(role.dashboard_path()));
                        }
                    }
                    Ok(AuthSuccess::Registered) => error.set(None),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-white rounded-lg shadow-lg p-8">
                <h1 class="text-2xl font-bold text-gray-900 mb-6">
                    {format!("{} sign in", capitalize(props.role.as_str()))}
                </h1>
                if let Some(message) = (*error).clone() {
                    <div class="mb-4 p-3 rounded-md bg-red-50 text-red-700 text-sm">{message}</div>
                }
                <form onsubmit={on_submit} class="flex flex-col gap-4">
                    <input
                        type="text"
                        placeholder="Username or email"
                        value={(*identifier).clone()}
                        oninput={on_identifier_input}
                        class="px-3 py-2 border border-gray-300 rounded-md"
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        value={(*password).clone()}
                        oninput={on_password_input}
                        class="px-3 py-2 border border-gray-300 rounded-md"
                    />
                    <button
                        type="submit"
                        disabled={auth.session.loading}
                        class="px-4 py-2 text-white bg-blue-600 hover:bg-blue-700 rounded-md disabled:opacity-50"
                    >
                        { if auth.session.loading { "Signing in..." } else { "Sign In" } }
                    </button>
                </form>
                if props.role == Role::Patient {
                    <p class="mt-6 text-sm text-center text-gray-600">
                        {"No account yet? "}
                        <Link<AnyRoute> to={AnyRoute::new("/register")} classes="text-blue-600 hover:underline">
                            {"Register"}
                        </Link<AnyRoute>>
                    </p>
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_picks_identifier_kind() {
        let by_email = login_request(Role::Patient, " jdoe@example.com ", "pw");
        assert_eq!(by_email.email.as_deref(), Some("jdoe@example.com"));
        assert_eq!(by_email.username, None);

        let by_name = login_request(Role::Doctor, "drsmith", "pw");
        assert_eq!(by_name.username.as_deref(), Some("drsmith"));
        assert_eq!(by_name.role, Role::Doctor);
    }
}
