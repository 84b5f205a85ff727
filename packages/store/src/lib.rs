//! Platform-independent state of the gardens console: models, session,
//! pagination, forms, lists and access rules.

pub mod access;
pub mod auth;
pub mod config;
pub mod form;
pub mod grid;
pub mod list;
pub mod models;
pub mod paths;
pub mod session;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use access::{GuardDecision, MenuItem};
pub use auth::AuthState;
pub use config::AppConfig;
pub use form::{GardenForm, SectorDraft, SubmitMode, UserForm};
pub use grid::{GridParams, ROWS_PER_PAGE};
pub use list::{ListState, Pending};
pub use models::{
    Garden, GardenAdd, GardenUpdate, LoginResponse, PaginatedList, Profile, Role, RoleCode,
    Sector, User, UserPayload,
};
pub use session::{KeyValueStore, StorageError};
