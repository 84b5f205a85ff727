use dioxus::prelude::*;
use store::auth::{auth_user, token_expire};
use ui::components::{Button, ButtonVariant, Card};
use ui::icons::FaRotate;
use ui::{busy, refresh_profile, report_error, use_api, use_auth, use_notifications, Icon};

/// Details of the signed-in account, refreshable from the server.
#[component]
pub fn Profile() -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let mut notices = use_notifications();
    let refreshing = use_signal(|| false);

    let on_refresh = move |_: MouseEvent| {
        spawn(async move {
            let _busy = busy(refreshing);
            match api.client().auth().fetch_profile().await {
                Ok(profile) => refresh_profile(&mut auth, profile),
                Err(e) => report_error(&mut notices, &e),
            }
        });
    };

    let state = auth();
    let Some(profile) = auth_user(&state).cloned() else {
        return rsx! {};
    };
    let expire = token_expire(&state).unwrap_or("-").to_string();

    rsx! {
        Card {
            title: rsx! { "Perfil" },
            actions: rsx! {
                Button {
                    variant: ButtonVariant::Outline,
                    loading: refreshing(),
                    onclick: on_refresh,
                    Icon { icon: FaRotate, width: 14, height: 14 }
                    " Actualizar"
                }
            },
            dl {
                class: "profile",
                dt { "Nombre" }
                dd { "{profile.name}" }
                dt { "Email" }
                dd { "{profile.email}" }
                dt { "Rol" }
                dd { "{profile.role.name}" }
                dt { "Sesión válida hasta" }
                dd { "{expire}" }
            }
        }
    }
}
