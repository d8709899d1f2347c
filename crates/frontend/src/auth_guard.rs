//! Role gate for protected route subtrees

use crate::auth::use_auth;
use clinic_core::{Role, check_access};
use yew::prelude::*;
use yew_router::AnyRoute;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RoleGateProps {
    /// Role the subtree is restricted to; `None` lets everyone through
    #[prop_or_default]
    pub required: Option<Role>,
    pub children: Children,
}

/// Renders its children only for the required role, otherwise redirects.
///
/// Unauthenticated users go to the login page for the gated role; users
/// holding another role go to their own dashboard.
#[function_component(RoleGate)]
pub fn role_gate(props: &RoleGateProps) -> Html {
    let auth = use_auth();
    let decision = check_access(&auth.session, props.required);

    match decision.redirect_target() {
        None => html! { <>{ props.children.clone() }</> },
        Some(target) => {
            tracing::debug!(?decision, %target, "Route gate redirect");
            html! { <Redirect<AnyRoute> to={AnyRoute::new(target)} /> }
        }
    }
}
