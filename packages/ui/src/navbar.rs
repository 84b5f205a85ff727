use dioxus::prelude::*;
use store::access::{header_actions_for, menu_items_for};
use store::{paths, RoleCode};

use crate::icons::{FaGaugeHigh, FaIdBadge, FaRightFromBracket, FaSeedling, FaShareNodes, FaUser, FaUsers};
use crate::Icon;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Side menu with the entries the given role may open.
#[component]
pub fn AppMenu(role: RoleCode, active_path: String, on_navigate: EventHandler<&'static str>) -> Element {
    let items = menu_items_for(role);

    rsx! {
        document::Stylesheet { href: NAVBAR_CSS }
        nav {
            class: "app-menu",
            div { class: "app-menu-brand", "Agroecología IoT" }
            ul {
                for item in items {
                    li {
                        key: "{item.path}",
                        class: if is_active(&active_path, item.path) { "app-menu-item active" } else { "app-menu-item" },
                        onclick: move |_| on_navigate.call(item.path),
                        MenuIcon { path: item.path }
                        span { "{item.label}" }
                    }
                }
            }
        }
    }
}

/// Top bar showing the signed-in user and the profile/logout actions.
#[component]
pub fn Navbar(role: RoleCode, user_name: String, on_navigate: EventHandler<&'static str>) -> Element {
    let actions = header_actions_for(role);
    let role_label = role.label();

    rsx! {
        document::Stylesheet { href: NAVBAR_CSS }
        header {
            class: "navbar",
            span { class: "navbar-user", "{user_name}" }
            span { class: "navbar-role", "{role_label}" }
            div {
                class: "navbar-actions",
                for action in actions {
                    button {
                        key: "{action.path}",
                        class: "navbar-action",
                        title: action.label,
                        onclick: move |_| on_navigate.call(action.path),
                        MenuIcon { path: action.path }
                        span { "{action.label}" }
                    }
                }
            }
        }
    }
}

#[component]
fn MenuIcon(path: &'static str) -> Element {
    match path {
        paths::USERS => rsx! { Icon { icon: FaUsers, width: 14, height: 14 } },
        paths::ROLES => rsx! { Icon { icon: FaIdBadge, width: 14, height: 14 } },
        paths::GARDENS => rsx! { Icon { icon: FaSeedling, width: 14, height: 14 } },
        paths::SHARED_GARDENS => rsx! { Icon { icon: FaShareNodes, width: 14, height: 14 } },
        paths::PROFILE => rsx! { Icon { icon: FaUser, width: 14, height: 14 } },
        paths::LOGOUT => rsx! { Icon { icon: FaRightFromBracket, width: 14, height: 14 } },
        _ => rsx! { Icon { icon: FaGaugeHigh, width: 14, height: 14 } },
    }
}

/// The root entry only matches itself; sections also match their sub-routes.
fn is_active(current: &str, item: &str) -> bool {
    if item == paths::ROOT {
        current == paths::ROOT
    } else {
        current == item || current.starts_with(&format!("{item}/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_entries_match_sub_routes() {
        assert!(is_active("/gardens/12", paths::GARDENS));
        assert!(is_active("/gardens", paths::GARDENS));
        assert!(!is_active("/gardens", paths::ROOT));
        assert!(is_active("/", paths::ROOT));
        assert!(!is_active("/gardens-old", paths::GARDENS));
    }
}
