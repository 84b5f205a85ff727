//! Authentication context and hooks for the UI.

use chrono::Utc;
use dioxus::prelude::*;
use store::session::{clear_auth, persist_auth, restore_auth};
use store::{AuthState, LoginResponse, Profile};

use crate::storage::make_storage;

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that restores the persisted session.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth_state = use_signal(|| {
        let state = restore_auth(&make_storage(), Utc::now());
        if let Some(profile) = &state.profile {
            tracing::info!("restored session of {}", profile.email);
        }
        state
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Store a successful login in the auth signal and in browser storage.
pub fn sign_in(auth: &mut Signal<AuthState>, response: LoginResponse) {
    let state = AuthState::signed_in(response);
    if let Err(e) = persist_auth(&make_storage(), &state) {
        tracing::warn!("session not persisted: {e}");
    }
    auth.set(state);
}

/// Replace the profile of the signed-in user, e.g. after editing it.
pub fn refresh_profile(auth: &mut Signal<AuthState>, profile: Profile) {
    let state = auth().with_profile(profile);
    if let Err(e) = persist_auth(&make_storage(), &state) {
        tracing::warn!("session not persisted: {e}");
    }
    auth.set(state);
}

/// Forget the session everywhere.
pub fn sign_out(auth: &mut Signal<AuthState>) {
    clear_auth(&make_storage());
    auth.set(AuthState::default());
    tracing::info!("signed out");
}

/// Sign out once the calling component has rendered.
///
/// The auth signal is written from an effect, never during render.
pub fn use_sign_out() {
    let mut auth = use_auth();
    use_effect(move || sign_out(&mut auth));
}
