use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::icons::FaArrowLeft;
use crate::Icon;

/// Returns to the previous screen in the history stack.
#[component]
pub fn BackButton() -> Element {
    let nav = navigator();

    rsx! {
        Button {
            variant: ButtonVariant::Outline,
            title: "Volver",
            onclick: move |_| nav.go_back(),
            Icon { icon: FaArrowLeft, width: 14, height: 14 }
            " Volver"
        }
    }
}
