//! Global authentication context and provider

use clinic_core::Session;
use clinic_frontend_common::auth::{
    clear_auth_error_callback, login_redirect_target, set_auth_error_callback,
};
use clinic_frontend_common::{AuthStore, BrowserStorage, ClientConfig};
use std::rc::Rc;
use yew::prelude::*;

/// Store type used by the browser app
pub type ClinicAuthStore = AuthStore<BrowserStorage>;

/// Session snapshot mirrored from the store
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthContextData {
    pub session: Session,
}

/// Authentication context actions
pub enum AuthAction {
    SessionChanged(Session),
}

impl Reducible for AuthContextData {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::SessionChanged(session) if session == self.session => self,
            AuthAction::SessionChanged(session) => Rc::new(Self { session }),
        }
    }
}

/// What components get from [`use_auth`]
#[derive(Clone, PartialEq)]
pub struct AuthContext {
    pub store: ClinicAuthStore,
    pub session: Session,
}

impl AuthContext {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Build the store and rebuild the session from storage before the first render
fn build_store() -> Result<ClinicAuthStore, String> {
    let config = ClientConfig::default();
    let client = config.build_client().map_err(|err| err.to_string())?;
    let store = AuthStore::new(client, BrowserStorage::new());
    store.restore();
    Ok(store)
}

/// Hard navigation, so no component state survives a forced logout
fn navigate_hard(target: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.location().set_href(target) {
        tracing::error!(?err, path = target, "Navigation failed");
    }
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let store = use_memo((), |_| build_store());
    let initial = match store.as_ref() {
        Ok(store) => store.session(),
        Err(_) => Session::default(),
    };
    let state = use_reducer(move || AuthContextData { session: initial });

    {
        let store = store.clone();
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            let store = match store.as_ref() {
                Ok(store) => Some(store.clone()),
                Err(err) => {
                    tracing::error!(error = %err, "API client unavailable");
                    None
                }
            };

            if let Some(store) = &store {
                store.set_listener(Rc::new(move |session: &Session| {
                    dispatcher.dispatch(AuthAction::SessionChanged(session.clone()));
                }));
                set_auth_error_callback(Rc::new(|role| {
                    navigate_hard(&login_redirect_target(role));
                }));

                if store.is_authenticated() {
                    let store = store.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        if let Err(err) = store.fetch_profile().await {
                            tracing::warn!(error = %err, "Could not load profile");
                        }
                    });
                }
            }

            move || {
                clear_auth_error_callback();
                if let Some(store) = store {
                    store.clear_listener();
                }
            }
        });
    }

    match store.as_ref() {
        Ok(store) => {
            let context = AuthContext {
                store: store.clone(),
                session: state.session.clone(),
            };
            html! {
                <ContextProvider<AuthContext> {context}>
                    { props.children.clone() }
                </ContextProvider<AuthContext>>
            }
        }
        Err(err) => html! {
            <div class="min-h-screen flex items-center justify-center">
                <p class="text-red-600">{format!("Configuration error: {err}")}</p>
            </div>
        },
    }
}

/// Hook to use auth context
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with AuthProvider")
}
