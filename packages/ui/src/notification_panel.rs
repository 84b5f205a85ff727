use dioxus::prelude::*;

use crate::notifications::{NoticeLevel, Notifications};

const NOTIFICATIONS_CSS: Asset = asset!("/assets/styling/notifications.css");

/// Provides the notifications context and renders the stack of toasts.
#[component]
pub fn NotificationProvider(children: Element) -> Element {
    let mut notices = use_context_provider(|| Signal::new(Notifications::default()));
    let entries = notices().entries.clone();

    rsx! {
        document::Stylesheet { href: NOTIFICATIONS_CSS }

        {children}

        div {
            class: "notifications",
            for entry in entries {
                div {
                    key: "{entry.id}",
                    class: match entry.level {
                        NoticeLevel::Error => "notice error",
                        NoticeLevel::Success => "notice success",
                    },
                    onclick: move |_| notices.write().entries.retain(|n| n.id != entry.id),
                    "{entry.message}"
                }
            }
        }
    }
}
