use dioxus::prelude::*;
use store::paths::{detail_path, new_path, USERS};
use store::{GridParams, ListState, RoleCode, User};
use ui::components::{Button, ButtonVariant, Card};
use ui::icons::{FaPen, FaPlus, FaTrashCan};
use ui::{
    busy, notify_success, report_error, use_api, use_notifications, ConfirmDialog, Icon, Pager,
    SUCCESS_MESSAGE,
};

use super::RequireRole;

const DELETE_USER_QUESTION: &str = "¿Desea eliminar el usuario? La acción no tiene vuelta atrás";

#[component]
pub fn Users() -> Element {
    rsx! {
        RequireRole {
            roles: vec![RoleCode::Admin],
            UserList {}
        }
    }
}

#[component]
fn UserList() -> Element {
    let api = use_api();
    let mut notices = use_notifications();
    let nav = use_navigator();

    let mut grid = use_signal(|| GridParams::base("createdAt"));
    let mut list = use_signal(ListState::<User>::default);
    let mut pending_delete = use_signal(|| Option::<u64>::None);
    let deleting = use_signal(|| false);

    use_resource(move || async move {
        let params = grid();
        list.write().begin();
        let result = api.client().users().fetch_list(&params).await;
        if let Some(e) = list.write().finish(result) {
            report_error(&mut notices, &e);
        }
    });

    let on_confirm_delete = move |_: ()| {
        let Some(id) = pending_delete.take() else {
            return;
        };
        spawn(async move {
            let _busy = busy(deleting);
            match api.client().users().delete(&id.to_string()).await {
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

    rsx! {
        Card {
            title: rsx! { "Usuarios" },
            actions: rsx! {
                Button {
                    onclick: move |_| {
                        nav.push(new_path(USERS));
                    },
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    " Nuevo usuario"
                }
            },
            loading: state.loading || deleting(),
            if state.page.is_empty() {
                div { class: "empty-state", "No hay usuarios" }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Nombre" }
                            th { "Email" }
                            th { "Rol" }
                            th {}
                        }
                    }
                    tbody {
                        for user in state.items().iter().cloned() {
                            tr {
                                key: "{user.user_id}",
                                td { "{user.name}" }
                                td { "{user.email}" }
                                td { {user.role_code.label()} }
                                td {
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        title: "Editar",
                                        onclick: move |_| {
                                            nav.push(detail_path(USERS, &user.user_id.to_string()));
                                        },
                                        Icon { icon: FaPen, width: 14, height: 14 }
                                    }
                                    Button {
                                        variant: ButtonVariant::Danger,
                                        title: "Eliminar",
                                        onclick: move |_| pending_delete.set(Some(user.user_id)),
                                        Icon { icon: FaTrashCan, width: 14, height: 14 }
                                    }
                                }
                            }
                        }
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

        if pending_delete().is_some() {
            ConfirmDialog {
                question: DELETE_USER_QUESTION.to_string(),
                on_confirm: on_confirm_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}
