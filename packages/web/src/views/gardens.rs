use dioxus::prelude::*;
use store::paths::{detail_path, new_path, GARDENS};
use store::{Garden, GridParams, ListState, RoleCode};
use ui::components::{Button, Card};
use ui::icons::FaPlus;
use ui::{busy, notify_success, report_error, use_api, use_notifications, GardenInfoCard, Icon, Pager, SUCCESS_MESSAGE};

use super::RequireRole;

/// Gardens owned by the signed-in manager.
#[component]
pub fn Gardens() -> Element {
    rsx! {
        RequireRole {
            roles: vec![RoleCode::GardenManager],
            GardenList {}
        }
    }
}

#[component]
fn GardenList() -> Element {
    let api = use_api();
    let mut notices = use_notifications();
    let nav = use_navigator();

    let mut grid = use_signal(|| GridParams::base("createdAt"));
    let mut list = use_signal(ListState::<Garden>::default);
    let deleting = use_signal(|| false);

    // Re-runs whenever `grid` changes, including after a delete.
    use_resource(move || async move {
        let params = grid();
        list.write().begin();
        let result = api.client().gardens().fetch_list(&params).await;
        if let Some(e) = list.write().finish(result) {
            report_error(&mut notices, &e);
        }
    });

    let on_delete = move |id: u64| {
        spawn(async move {
            let _busy = busy(deleting);
            match api.client().gardens().delete(&id.to_string()).await {
                Ok(()) => {
                    notify_success(&mut notices, SUCCESS_MESSAGE);
                    let next = grid.peek().refreshed();
                    grid.set(next);
                }
                Err(e) => report_error(&mut notices, &e),
            }
        });
    };

    let state = list();
    let params = grid();
    let page_count = params.page_count(state.page.count);

    rsx! {
        Card {
            title: rsx! { "Huertas" },
            actions: rsx! {
                Button {
                    onclick: move |_| {
                        nav.push(new_path(GARDENS));
                    },
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    " Nueva huerta"
                }
            },
            loading: state.loading || deleting(),
            if state.page.is_empty() {
                div { class: "empty-state", "No hay huertas cargadas" }
            } else {
                div {
                    class: "garden-grid",
                    for garden in state.items().iter().cloned() {
                        GardenInfoCard {
                            key: "{garden.garden_id}",
                            garden,
                            on_edit: move |id: u64| {
                                nav.push(detail_path(GARDENS, &id.to_string()));
                            },
                            on_delete,
                        }
                    }
                }
            }
            Pager {
                page: params.page,
                page_count,
                total: state.page.count,
                on_change: move |page| {
                    let next = grid.peek().clone().with_page(page);
                    grid.set(next);
                },
            }
        }
    }
}
