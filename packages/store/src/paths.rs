//! Client-side route paths.

pub const ROOT: &str = "/";
pub const USERS: &str = "/users";
pub const ROLES: &str = "/roles";
pub const GARDENS: &str = "/gardens";
pub const SHARED_GARDENS: &str = "/shared-gardens";
pub const LOGIN: &str = "/login";
pub const LOGOUT: &str = "/logout";
pub const PROFILE: &str = "/profile";

/// Suffix of the "create" route under a section.
pub const NEW: &str = "/new";
/// Suffix template of the "detail" route under a section.
pub const DETAIL: &str = "/:id";

/// `/gardens/new` for `section = GARDENS`.
pub fn new_path(section: &str) -> String {
    format!("{section}{NEW}")
}

/// `/gardens/12` for `section = GARDENS, id = "12"`.
pub fn detail_path(section: &str, id: &str) -> String {
    format!("{section}{}", DETAIL.replace(":id", id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_and_new_paths() {
        assert_eq!(new_path(GARDENS), "/gardens/new");
        assert_eq!(detail_path(GARDENS, "12"), "/gardens/12");
        assert_eq!(detail_path(USERS, "3"), "/users/3");
    }
}
