use dioxus::prelude::*;
use store::paths;
use ui::use_sign_out;

use super::Redirect;

/// Clears the session, then sends the user to the login page.
#[component]
pub fn Logout() -> Element {
    use_sign_out();

    rsx! {
        Redirect { to: paths::LOGIN }
    }
}
