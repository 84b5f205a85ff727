use dioxus::prelude::*;
use store::Garden;

use crate::components::{Button, ButtonVariant};
use crate::confirm::ConfirmDialog;
use crate::icons::{FaLocationDot, FaPen, FaTrashCan};
use crate::Icon;

const DELETE_GARDEN_QUESTION: &str = "¿Desea eliminar la huerta? La acción no tiene vuelta atrás";

/// Summary card of one garden in the list screens.
///
/// Edit and delete buttons are only rendered when their handler is given,
/// so shared gardens show up read-only.
#[component]
pub fn GardenInfoCard(
    garden: Garden,
    on_edit: Option<EventHandler<u64>>,
    on_delete: Option<EventHandler<u64>>,
) -> Element {
    let mut confirming = use_signal(|| false);
    let id = garden.garden_id;
    let sector_count = garden.sectors.len();

    rsx! {
        div {
            class: "garden-card",
            div {
                class: "garden-card-header",
                h3 { class: "garden-card-title", "{garden.name}" }
                div {
                    class: "garden-card-actions",
                    if let Some(on_edit) = on_edit {
                        Button {
                            variant: ButtonVariant::Outline,
                            title: "Editar",
                            onclick: move |_| on_edit.call(id),
                            Icon { icon: FaPen, width: 14, height: 14 }
                        }
                    }
                    if on_delete.is_some() {
                        Button {
                            variant: ButtonVariant::Danger,
                            title: "Eliminar",
                            onclick: move |_| confirming.set(true),
                            Icon { icon: FaTrashCan, width: 14, height: 14 }
                        }
                    }
                }
            }
            p { class: "garden-card-description", "{garden.description}" }
            div {
                class: "garden-card-meta",
                span {
                    class: "garden-card-location",
                    Icon { icon: FaLocationDot, width: 12, height: 12 }
                    " {garden.location}"
                }
                span { class: "garden-card-sectors", "Sectores: {sector_count}" }
            }
        }

        if confirming() {
            ConfirmDialog {
                question: DELETE_GARDEN_QUESTION.to_string(),
                on_confirm: move |_| {
                    confirming.set(false);
                    if let Some(on_delete) = on_delete {
                        on_delete.call(id);
                    }
                },
                on_cancel: move |_| confirming.set(false),
            }
        }
    }
}
