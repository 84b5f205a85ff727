use dioxus::prelude::*;
use store::auth::{auth_role, auth_user};
use store::{paths, GridParams, RoleCode};
use ui::components::{Button, Card};
use ui::{report_error, use_api, use_auth, use_notifications};

/// Landing page: greets the user and counts the gardens they can reach.
#[component]
pub fn Dashboard() -> Element {
    let api = use_api();
    let auth = use_auth();
    let mut notices = use_notifications();
    let nav = use_navigator();

    let state = auth();
    let name = auth_user(&state)
        .map(|p| p.display_name().to_string())
        .unwrap_or_default();
    let role = auth_role(&state);

    let summary = use_resource(move || async move {
        let role = auth_role(&auth())?;
        let grid = GridParams::base("createdAt").with_page(1);
        let client = api.client();
        let result = match role {
            RoleCode::GardenManager => client.gardens().fetch_list(&grid).await,
            RoleCode::Visitor => client.gardens().fetch_shared_list(&grid).await,
            RoleCode::Admin => return None,
        };
        match result {
            Ok(page) => Some(page.count),
            Err(e) => {
                report_error(&mut notices, &e);
                None
            }
        }
    });

    let (target, label) = match role {
        Some(RoleCode::GardenManager) => (paths::GARDENS, "Huertas"),
        Some(RoleCode::Visitor) => (paths::SHARED_GARDENS, "Huertas Compartidas"),
        _ => (paths::USERS, "Usuarios"),
    };
    let count = (*summary.read()).flatten();

    rsx! {
        Card {
            title: rsx! { "Hola, {name}" },
            loading: summary.read().is_none(),
            if let Some(count) = count {
                p { "{label}: {count}" }
            }
            Button {
                onclick: move |_| {
                    nav.push(target);
                },
                "Ir a {label}"
            }
        }
    }
}
