//! # Access control: route guards and role-filtered menus
//!
//! Every guard is a single decision over the current [`AuthState`]: render the
//! guarded content, or redirect somewhere else. There are no intermediate
//! states.
//!
//! | Guard | Renders when | Otherwise redirects to |
//! |-------|--------------|------------------------|
//! | [`guard_logged_in`] | a token is present | [`paths::LOGIN`] |
//! | [`guard_authorized`] | the profile's role is one of the allowed roles | [`paths::ROOT`] |
//! | [`guard_public`] | nobody is logged in | [`paths::ROOT`] |
//!
//! The menus follow a different rule: an admin sees every entry, other roles
//! only the entries that list their role.

use crate::auth::{auth_role, is_logged_in, AuthState};
use crate::models::RoleCode;
use crate::paths;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(&'static str),
}

impl GuardDecision {
    pub fn allows(&self) -> bool {
        matches!(self, GuardDecision::Render)
    }
}

pub fn guard_logged_in(state: &AuthState) -> GuardDecision {
    if is_logged_in(state) {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(paths::LOGIN)
    }
}

pub fn guard_authorized(state: &AuthState, roles: &[RoleCode]) -> GuardDecision {
    match auth_role(state) {
        Some(role) if is_logged_in(state) && roles.contains(&role) => GuardDecision::Render,
        _ => GuardDecision::Redirect(paths::ROOT),
    }
}

pub fn guard_public(state: &AuthState) -> GuardDecision {
    if is_logged_in(state) {
        GuardDecision::Redirect(paths::ROOT)
    } else {
        GuardDecision::Render
    }
}

/// An entry of the side menu or the header actions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub path: &'static str,
    pub label: &'static str,
    pub roles: &'static [RoleCode],
}

impl MenuItem {
    fn visible_to(&self, role: RoleCode) -> bool {
        role == RoleCode::Admin || self.roles.contains(&role)
    }
}

pub const MENU_ITEMS: &[MenuItem] = &[
    MenuItem {
        path: paths::ROOT,
        label: "Dashboard",
        roles: &[RoleCode::GardenManager, RoleCode::Visitor],
    },
    MenuItem {
        path: paths::USERS,
        label: "Usuarios",
        roles: &[RoleCode::Admin],
    },
    MenuItem {
        path: paths::ROLES,
        label: "Roles",
        roles: &[RoleCode::Admin],
    },
    MenuItem {
        path: paths::GARDENS,
        label: "Huertas",
        roles: &[RoleCode::GardenManager],
    },
    MenuItem {
        path: paths::SHARED_GARDENS,
        label: "Huertas Compartidas",
        roles: &[RoleCode::Visitor],
    },
];

pub const HEADER_ACTIONS: &[MenuItem] = &[
    MenuItem {
        path: paths::PROFILE,
        label: "Perfil",
        roles: &[RoleCode::GardenManager, RoleCode::Visitor],
    },
    MenuItem {
        path: paths::LOGOUT,
        label: "Cerrar sesión",
        roles: &[RoleCode::GardenManager, RoleCode::Visitor],
    },
];

pub fn menu_items_for(role: RoleCode) -> Vec<&'static MenuItem> {
    MENU_ITEMS.iter().filter(|i| i.visible_to(role)).collect()
}

pub fn header_actions_for(role: RoleCode) -> Vec<&'static MenuItem> {
    HEADER_ACTIONS.iter().filter(|i| i.visible_to(role)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::sample_login;

    fn state(role: RoleCode) -> AuthState {
        AuthState::signed_in(sample_login(role))
    }

    #[test]
    fn admin_only_content_denied_to_other_roles() {
        let admin_only = [RoleCode::Admin];
        assert_eq!(
            guard_authorized(&state(RoleCode::Admin), &admin_only),
            GuardDecision::Render
        );
        assert_eq!(
            guard_authorized(&state(RoleCode::GardenManager), &admin_only),
            GuardDecision::Redirect(paths::ROOT)
        );
        assert_eq!(
            guard_authorized(&state(RoleCode::Visitor), &admin_only),
            GuardDecision::Redirect(paths::ROOT)
        );
        assert!(!guard_authorized(&AuthState::default(), &admin_only).allows());
    }

    #[test]
    fn logged_in_guard_redirects_to_login() {
        assert_eq!(
            guard_logged_in(&AuthState::default()),
            GuardDecision::Redirect(paths::LOGIN)
        );
        assert!(guard_logged_in(&state(RoleCode::Visitor)).allows());
    }

    #[test]
    fn public_guard_hides_login_from_signed_in_users() {
        assert!(guard_public(&AuthState::default()).allows());
        assert_eq!(
            guard_public(&state(RoleCode::Admin)),
            GuardDecision::Redirect(paths::ROOT)
        );
    }

    #[test]
    fn admin_sees_the_whole_menu() {
        assert_eq!(menu_items_for(RoleCode::Admin).len(), MENU_ITEMS.len());
    }

    #[test]
    fn menus_are_filtered_by_role() {
        let labels = |role| {
            menu_items_for(role)
                .into_iter()
                .map(|i| i.label)
                .collect::<Vec<_>>()
        };
        assert_eq!(labels(RoleCode::GardenManager), vec!["Dashboard", "Huertas"]);
        assert_eq!(
            labels(RoleCode::Visitor),
            vec!["Dashboard", "Huertas Compartidas"]
        );
        assert_eq!(header_actions_for(RoleCode::Visitor).len(), 2);
    }
}
