//! # API crate: REST client for the gardens platform
//!
//! Every screen of the console talks to the remote REST API through this crate.
//! It has no UI dependencies so the same client can be exercised from tests.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`transport`] | The [`Transport`] trait and the request/response values it moves |
//! | [`http`] | [`HttpTransport`], the `reqwest` implementation used in the browser |
//! | [`client`] | [`ApiClient`]: bearer token, JSON encoding, status-to-error mapping |
//! | [`error`] | [`ApiError`] and the rule for which errors are shown to the user |
//! | [`gardens`], [`sectors`], [`users`], [`auth`] | One service per resource |
//!
//! ## Services
//!
//! Services borrow the client and are obtained from it:
//!
//! - `client.gardens()` - list, shared list, fetch, add, update, delete, save form
//! - `client.sectors()` - list, by garden, fetch, add, update, delete
//! - `client.users()` / `client.roles()` - admin screens
//! - `client.auth()` - login, profile

pub mod auth;
pub mod client;
pub mod error;
pub mod gardens;
pub mod http;
pub mod sectors;
pub mod transport;
pub mod users;

#[cfg(test)]
mod testing;

pub use auth::AuthService;
pub use client::ApiClient;
pub use error::ApiError;
pub use gardens::GardensService;
pub use http::HttpTransport;
pub use sectors::SectorsService;
pub use transport::{ApiRequest, ApiResponse, Method, Transport};
pub use users::{RolesService, UsersService};

impl<T: Transport> ApiClient<T> {
    pub fn gardens(&self) -> GardensService<'_, T> {
        GardensService::new(self)
    }

    pub fn sectors(&self) -> SectorsService<'_, T> {
        SectorsService::new(self)
    }

    pub fn users(&self) -> UsersService<'_, T> {
        UsersService::new(self)
    }

    pub fn roles(&self) -> RolesService<'_, T> {
        RolesService::new(self)
    }

    pub fn auth(&self) -> AuthService<'_, T> {
        AuthService::new(self)
    }
}
