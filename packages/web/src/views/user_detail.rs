use dioxus::prelude::*;
use store::form::{error_for, SubmitMode};
use store::{Role, RoleCode, UserForm};
use ui::components::{Button, Card, Field, Label};
use ui::{busy, notify_success, report_error, use_api, use_notifications, BackButton, SUCCESS_MESSAGE};

use super::RequireRole;

#[component]
pub fn UserNew() -> Element {
    rsx! {
        RequireRole {
            roles: vec![RoleCode::Admin],
            UserDetail { mode: SubmitMode::Create }
        }
    }
}

#[component]
pub fn UserEdit(id: String) -> Element {
    rsx! {
        RequireRole {
            roles: vec![RoleCode::Admin],
            UserDetail { key: "{id}", mode: SubmitMode::from_route(Some(&id)) }
        }
    }
}

#[component]
fn UserDetail(mode: SubmitMode) -> Element {
    let api = use_api();
    let mut notices = use_notifications();
    let nav = use_navigator();

    let mut form = use_signal(UserForm::default);
    let mut roles = use_signal(Vec::<Role>::new);
    let mut submitted = use_signal(|| false);
    let loading = use_signal(|| false);
    let submitting = use_signal(|| false);

    let load_mode = mode.clone();
    use_hook(move || {
        let id = load_mode.id().map(str::to_string);
        spawn(async move {
            let _busy = busy(loading);
            let client = api.client();
            match client.roles().fetch_list().await {
                Ok(list) => roles.set(list),
                Err(e) => report_error(&mut notices, &e),
            }
            if let Some(id) = id {
                match client.users().fetch_one(&id).await {
                    Ok(user) => form.set(UserForm::from(&user)),
                    Err(e) => report_error(&mut notices, &e),
                }
            }
        });
    });

    let submit_mode = mode.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        submitted.set(true);
        if !form.read().validate(&submit_mode).is_empty() {
            return;
        }
        let mode = submit_mode.clone();
        let draft = form.peek().clone();
        spawn(async move {
            let _busy = busy(submitting);
            match api.client().users().save(&mode, &draft).await {
                Ok(()) => {
                    notify_success(&mut notices, SUCCESS_MESSAGE);
                    nav.go_back();
                }
                Err(e) => report_error(&mut notices, &e),
            }
        });
    };

    let current = form();
    let errors = if submitted() { current.validate(&mode) } else { Vec::new() };
    let name_error = error_for(&errors, "name").map(str::to_string);
    let email_error = error_for(&errors, "email").map(str::to_string);
    let password_error = error_for(&errors, "password").map(str::to_string);
    let title = if mode.is_update() { "Editar usuario" } else { "Nuevo usuario" };
    let password_help = mode
        .is_update()
        .then(|| "Dejar vacío para conservar la actual".to_string());
    let selected_role = current.role_code.as_str();

    rsx! {
        Card {
            title: rsx! { "{title}" },
            actions: rsx! { BackButton {} },
            loading: loading(),
            form {
                onsubmit: on_submit,
                Field {
                    id: "user-name",
                    label: "Nombre",
                    value: current.name.clone(),
                    error: name_error,
                    oninput: move |value: String| form.write().name = value,
                }
                Field {
                    id: "user-email",
                    label: "Email",
                    r#type: "email",
                    value: current.email.clone(),
                    error: email_error,
                    oninput: move |value: String| form.write().email = value,
                }
                div {
                    class: "field",
                    Label { html_for: "user-role", "Rol" }
                    select {
                        id: "user-role",
                        class: "select",
                        value: selected_role,
                        onchange: move |evt: FormEvent| {
                            match RoleCode::parse(&evt.value()) {
                                Some(code) => form.write().role_code = code,
                                None => tracing::warn!("unknown role {}", evt.value()),
                            }
                        },
                        for (code, name) in roles().into_iter().map(|r| (r.code.as_str(), r.name)) {
                            option {
                                key: "{code}",
                                value: code,
                                selected: code == selected_role,
                                "{name}"
                            }
                        }
                    }
                }
                Field {
                    id: "user-password",
                    label: "Contraseña",
                    r#type: "password",
                    value: current.password.clone(),
                    error: password_error,
                    help: password_help,
                    oninput: move |value: String| form.write().password = value,
                }
                div {
                    class: "form-actions",
                    Button { r#type: "submit", loading: submitting(), "Guardar" }
                }
            }
        }
    }
}
