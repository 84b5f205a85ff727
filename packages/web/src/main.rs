use dioxus::prelude::*;

use store::config::current_hostname;
use store::AppConfig;
use ui::{ApiProvider, AuthProvider, NotificationProvider};
use views::{
    AppLayout, Dashboard, GardenEdit, GardenNew, Gardens, Login, Logout, NotFound, Profile,
    Roles, SharedGardens, UserEdit, UserNew, Users,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/login")]
    Login {},
    #[route("/logout")]
    Logout {},
    #[layout(AppLayout)]
        #[route("/")]
        Dashboard {},
        #[route("/users")]
        Users {},
        #[route("/users/new")]
        UserNew {},
        #[route("/users/:id")]
        UserEdit { id: String },
        #[route("/roles")]
        Roles {},
        #[route("/gardens")]
        Gardens {},
        #[route("/gardens/new")]
        GardenNew {},
        #[route("/gardens/:id")]
        GardenEdit { id: String },
        #[route("/shared-gardens")]
        SharedGardens {},
        #[route("/profile")]
        Profile {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONSOLE_TOML: &str = include_str!("../console.toml");

fn main() {
    let config = load_config();
    let level = if config.is_development {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    if let Err(e) = dioxus::logger::init(level) {
        tracing::warn!("logger already initialized: {e}");
    }
    tracing::info!("console talking to {}", config.api_base());

    dioxus::launch(App);
}

fn load_config() -> AppConfig {
    let hostname = current_hostname();
    match AppConfig::load(CONSOLE_TOML, hostname.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("ignoring {}: {e}", AppConfig::filename());
            AppConfig::for_hostname(hostname.as_deref().unwrap_or_default())
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            ApiProvider {
                config,
                NotificationProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}
