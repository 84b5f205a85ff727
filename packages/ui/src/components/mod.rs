//! Basic form and layout controls shared by every screen.

use dioxus::prelude::*;

const COMPONENTS_CSS: Asset = asset!("/assets/styling/components.css");

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Danger,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Danger => "btn btn-danger",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    /// Shows a spinner and disables the button.
    #[props(default)]
    loading: bool,
    #[props(default)] class: String,
    #[props(default)] title: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let class = format!("{} {}", variant.class(), class);

    rsx! {
        document::Stylesheet { href: COMPONENTS_CSS }
        button {
            class: class,
            r#type: r#type.clone(),
            title: title.clone(),
            disabled: disabled || loading,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            if loading {
                span { class: "spinner spinner-inline" }
            }
            {children}
        }
    }
}

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "label", r#for: html_for.clone(), {children} }
    }
}

/// A labelled text input with its validation message.
#[component]
pub fn Field(
    id: String,
    label: String,
    value: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] error: Option<String>,
    #[props(default)] help: Option<String>,
    #[props(default)] readonly: bool,
    oninput: Option<EventHandler<String>>,
    /// Rendered right after the input, e.g. a copy button.
    addon: Option<Element>,
) -> Element {
    rsx! {
        div {
            class: if error.is_some() { "field has-error" } else { "field" },
            Label { html_for: id.clone(), "{label}" }
            div {
                class: "field-control",
                input {
                    id: id.clone(),
                    class: "input",
                    r#type: r#type.clone(),
                    value: value.clone(),
                    readonly: readonly,
                    disabled: readonly,
                    oninput: move |evt: FormEvent| {
                        if let Some(handler) = oninput {
                            handler.call(evt.value());
                        }
                    },
                }
                {addon}
            }
            if let Some(help) = &help {
                div { class: "field-help", "{help}" }
            }
            if let Some(error) = &error {
                div { class: "field-error", "{error}" }
            }
        }
    }
}

#[component]
pub fn Card(
    title: Element,
    actions: Option<Element>,
    #[props(default)] loading: bool,
    children: Element,
) -> Element {
    rsx! {
        document::Stylesheet { href: COMPONENTS_CSS }
        div {
            class: "card",
            div {
                class: "card-header",
                div { class: "card-title", {title} }
                div { class: "card-actions", {actions} }
            }
            div {
                class: "card-body",
                if loading {
                    Spinner {}
                } else {
                    {children}
                }
            }
        }
    }
}

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div { class: "loading", span { class: "spinner" } }
    }
}
