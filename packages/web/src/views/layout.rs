use chrono::Utc;
use dioxus::prelude::*;
use store::auth::auth_role;
use store::RoleCode;
use ui::{sign_out, use_auth, AppMenu, Navbar};

use super::RequireLogin;
use crate::Route;

/// Shell of every signed-in page: side menu, top bar and the routed page.
#[component]
pub fn AppLayout() -> Element {
    rsx! {
        RequireLogin {
            Shell {}
        }
    }
}

#[component]
fn Shell() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();
    let route = use_route::<Route>();

    // A session that expires while the app is open is dropped on the next navigation.
    use_effect(use_reactive!(|route| {
        tracing::debug!("navigated to {route}");
        if auth.peek().is_expired(Utc::now()) {
            tracing::info!("session expired");
            sign_out(&mut auth);
        }
    }));

    let state = auth();
    let role = auth_role(&state).unwrap_or(RoleCode::Visitor);
    let user_name = state
        .profile
        .as_ref()
        .map(|p| p.display_name().to_string())
        .unwrap_or_default();
    let on_navigate = move |path: &'static str| {
        nav.push(path);
    };

    rsx! {
        div {
            class: "app-shell",
            AppMenu { role, active_path: route.to_string(), on_navigate }
            div {
                class: "app-main",
                Navbar { role, user_name, on_navigate }
                main {
                    class: "app-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
