use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

/// Previous/next controls for a paginated list. Hidden for a single page.
#[component]
pub fn Pager(page: u32, page_count: u64, total: u64, on_change: EventHandler<u32>) -> Element {
    if page_count <= 1 {
        return rsx! {};
    }

    let has_prev = page > 1;
    let has_next = u64::from(page) < page_count;

    rsx! {
        div {
            class: "pager",
            Button {
                variant: ButtonVariant::Outline,
                disabled: !has_prev,
                onclick: move |_| on_change.call(page - 1),
                "Anterior"
            }
            span { class: "pager-status", "Página {page} de {page_count} ({total} registros)" }
            Button {
                variant: ButtonVariant::Outline,
                disabled: !has_next,
                onclick: move |_| on_change.call(page + 1),
                "Siguiente"
            }
        }
    }
}
