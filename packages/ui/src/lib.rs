//! This crate contains all shared UI for the console.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod storage;
pub use storage::make_storage;

mod auth;
pub use auth::{refresh_profile, sign_in, sign_out, use_auth, use_sign_out, AuthProvider};

mod client;
pub use client::{use_api, use_config, ApiHandle, ApiProvider};

pub mod notifications;
pub use notifications::{notify, notify_success, report_error, use_notifications, SUCCESS_MESSAGE};

mod notification_panel;
pub use notification_panel::NotificationProvider;

mod busy;
pub use busy::busy;

mod clipboard;
pub use clipboard::copy_to_clipboard;

mod confirm;
pub use confirm::ConfirmDialog;

mod navbar;
pub use navbar::{AppMenu, Navbar};

mod back_button;
pub use back_button::BackButton;

mod pager;
pub use pager::Pager;

mod garden_card;
pub use garden_card::GardenInfoCard;

mod sector_fields;
pub use sector_fields::{SectorField, SectorFieldset};
