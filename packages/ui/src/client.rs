//! Access to the REST client from components.

use api::{ApiClient, HttpTransport};
use dioxus::prelude::*;
use store::{AppConfig, AuthState};

use crate::auth::use_auth;

/// Copyable handle that builds an authenticated [`ApiClient`] on demand.
///
/// The token is read when [`ApiHandle::client`] is called, so a handle
/// captured before login still authenticates afterwards.
#[derive(Clone, Copy)]
pub struct ApiHandle {
    transport: CopyValue<HttpTransport>,
    auth: Signal<AuthState>,
}

impl ApiHandle {
    pub fn client(&self) -> ApiClient<HttpTransport> {
        ApiClient::new(self.transport.cloned()).with_token(self.auth.peek().token.clone())
    }
}

pub fn use_api() -> ApiHandle {
    use_context::<ApiHandle>()
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>()
}

/// Provides the configuration and [`ApiHandle`] to the tree.
/// Must be placed inside [`crate::AuthProvider`].
#[component]
pub fn ApiProvider(config: AppConfig, children: Element) -> Element {
    let auth = use_auth();
    let base = config.api_base();
    let transport = use_hook(move || CopyValue::new(HttpTransport::new(base)));

    use_context_provider(|| config.clone());
    use_context_provider(|| ApiHandle { transport, auth });

    rsx! {
        {children}
    }
}
