//! Confirmation popup for destructive actions.

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Answer {
    Confirm,
    Cancel,
}

/// Keyboard shortcuts of the dialog.
fn answer_for_key(key: &Key) -> Option<Answer> {
    match key {
        Key::Enter => Some(Answer::Confirm),
        Key::Escape => Some(Answer::Cancel),
        _ => None,
    }
}

/// Asks `question` and calls `on_confirm` only if the user accepts.
///
/// Clicking outside the dialog or pressing Escape counts as cancelling.
#[component]
pub fn ConfirmDialog(
    question: String,
    #[props(default = "Aceptar".to_string())] confirm_label: String,
    #[props(default = "Cancelar".to_string())] cancel_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let answer = move |answer: Answer| match answer {
        Answer::Confirm => on_confirm.call(()),
        Answer::Cancel => on_cancel.call(()),
    };

    rsx! {
        div {
            class: "confirm-backdrop",
            onclick: move |_| answer(Answer::Cancel),
            div {
                class: "confirm",
                role: "alertdialog",
                aria_modal: "true",
                tabindex: "-1",
                autofocus: true,
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                onkeydown: move |evt: KeyboardEvent| {
                    if let Some(choice) = answer_for_key(&evt.key()) {
                        evt.prevent_default();
                        answer(choice);
                    }
                },
                p { class: "confirm-question", "{question}" }
                div {
                    class: "confirm-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| answer(Answer::Cancel),
                        "{cancel_label}"
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: move |_| answer(Answer::Confirm),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
