use dioxus::prelude::*;
use store::{Role, RoleCode};
use ui::components::Card;
use ui::{report_error, use_api, use_notifications};

use super::RequireRole;

/// Read-only list of the roles the API knows about.
#[component]
pub fn Roles() -> Element {
    rsx! {
        RequireRole {
            roles: vec![RoleCode::Admin],
            RoleList {}
        }
    }
}

#[component]
fn RoleList() -> Element {
    let api = use_api();
    let mut notices = use_notifications();

    let roles = use_resource(move || async move {
        match api.client().roles().fetch_list().await {
            Ok(list) => list,
            Err(e) => {
                report_error(&mut notices, &e);
                Vec::<Role>::new()
            }
        }
    });

    let loaded = roles.read().clone();

    rsx! {
        Card {
            title: rsx! { "Roles" },
            loading: loaded.is_none(),
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Código" }
                        th { "Nombre" }
                    }
                }
                tbody {
                    for (code, name) in loaded.unwrap_or_default().into_iter().map(|r| (r.code.as_str(), r.name)) {
                        tr {
                            key: "{code}",
                            td { "{code}" }
                            td { "{name}" }
                        }
                    }
                }
            }
        }
    }
}
