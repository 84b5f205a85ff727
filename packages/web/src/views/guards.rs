//! Route guards. Each one renders its children or redirects, never both.

use dioxus::prelude::*;
use store::access::{guard_authorized, guard_logged_in, guard_public, GuardDecision};
use store::RoleCode;
use ui::use_auth;

/// Replace the current history entry with `to` once mounted.
#[component]
pub fn Redirect(to: &'static str) -> Element {
    let nav = navigator();
    use_effect(move || {
        tracing::debug!("redirecting to {to}");
        nav.replace(to);
    });
    rsx! {}
}

fn decide(decision: GuardDecision, children: Element) -> Element {
    match decision {
        GuardDecision::Render => children,
        GuardDecision::Redirect(to) => rsx! { Redirect { to } },
    }
}

#[component]
pub fn RequireLogin(children: Element) -> Element {
    let auth = use_auth();
    let decision = guard_logged_in(&auth.read());
    decide(decision, children)
}

/// Renders only for the listed roles; everyone else is sent to the root page.
#[component]
pub fn RequireRole(roles: Vec<RoleCode>, children: Element) -> Element {
    let auth = use_auth();
    let decision = guard_authorized(&auth.read(), &roles);
    decide(decision, children)
}

/// For pages that only make sense logged out, like the login form.
#[component]
pub fn PublicOnly(children: Element) -> Element {
    let auth = use_auth();
    let decision = guard_public(&auth.read());
    decide(decision, children)
}
