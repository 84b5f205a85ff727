use dioxus::prelude::*;
use store::{Garden, GridParams, ListState, RoleCode};
use ui::components::Card;
use ui::{report_error, use_api, use_notifications, GardenInfoCard, Pager};

use super::RequireRole;

/// Gardens other managers shared with the signed-in visitor. Read-only.
#[component]
pub fn SharedGardens() -> Element {
    rsx! {
        RequireRole {
            roles: vec![RoleCode::Visitor],
            SharedGardenList {}
        }
    }
}

#[component]
fn SharedGardenList() -> Element {
    let api = use_api();
    let mut notices = use_notifications();

    let mut grid = use_signal(|| GridParams::base("createdAt"));
    let mut list = use_signal(ListState::<Garden>::default);

    use_resource(move || async move {
        let params = grid();
        list.write().begin();
        let result = api.client().gardens().fetch_shared_list(&params).await;
        if let Some(e) = list.write().finish(result) {
            report_error(&mut notices, &e);
        }
    });

    let state = list();
    let params = grid();

    rsx! {
        Card {
            title: rsx! { "Huertas Compartidas" },
            loading: state.loading,
            if state.page.is_empty() {
                div { class: "empty-state", "Nadie compartió huertas con usted todavía" }
            } else {
                div {
                    class: "garden-grid",
                    for garden in state.items().iter().cloned() {
                        GardenInfoCard { key: "{garden.garden_id}", garden }
                    }
                }
            }
            Pager {
                page: params.page,
                page_count: params.page_count(state.page.count),
                total: state.page.count,
                on_change: move |page| {
                    let next = grid.peek().clone().with_page(page);
                    grid.set(next);
                },
            }
        }
    }
}
