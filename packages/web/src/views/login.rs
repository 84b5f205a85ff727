//! Login page with email and password.

use dioxus::prelude::*;
use store::form::REQUIRED_FIELD;
use store::paths;
use ui::components::{Button, Card, Field};
use ui::{busy, report_error, sign_in, use_api, use_auth, use_notifications};

use super::PublicOnly;

#[component]
pub fn Login() -> Element {
    rsx! {
        PublicOnly {
            LoginForm {}
        }
    }
}

#[component]
fn LoginForm() -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let mut notices = use_notifications();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitted = use_signal(|| false);
    let submitting = use_signal(|| false);

    let email_error = (submitted() && email().trim().is_empty()).then(|| REQUIRED_FIELD.to_string());
    let password_error = (submitted() && password().is_empty()).then(|| REQUIRED_FIELD.to_string());

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        submitted.set(true);
        if email().trim().is_empty() || password().is_empty() {
            return;
        }
        spawn(async move {
            let _busy = busy(submitting);
            match api.client().auth().login(&email(), &password()).await {
                Ok(response) => {
                    tracing::info!("logged in as {}", response.profile.email);
                    sign_in(&mut auth, response);
                    nav.replace(paths::ROOT);
                }
                Err(e) => report_error(&mut notices, &e),
            }
        });
    };

    rsx! {
        div {
            class: "login-container",
            div {
                class: "login-card",
                Card {
                    title: rsx! { "Agroecología IoT" },
                    form {
                        onsubmit: on_submit,
                        Field {
                            id: "login-email",
                            label: "Email",
                            r#type: "email",
                            value: email(),
                            error: email_error,
                            oninput: move |value: String| email.set(value),
                        }
                        Field {
                            id: "login-password",
                            label: "Contraseña",
                            r#type: "password",
                            value: password(),
                            error: password_error,
                            oninput: move |value: String| password.set(value),
                        }
                        div {
                            class: "form-actions",
                            Button { r#type: "submit", loading: submitting(), "Ingresar" }
                        }
                    }
                }
            }
        }
    }
}
