//! Authenticated session state and its selectors.

use chrono::{DateTime, Utc};

use crate::models::{LoginResponse, Profile, RoleCode};

/// The process-wide auth state: who is signed in and with which token.
///
/// The default value is the logged-out state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub profile: Option<Profile>,
    pub token: Option<String>,
    /// RFC 3339 expiry timestamp of `token`.
    pub expire: Option<String>,
}

impl AuthState {
    /// State right after a successful login.
    pub fn signed_in(response: LoginResponse) -> Self {
        Self {
            profile: Some(response.profile),
            token: Some(response.token),
            expire: Some(response.expire),
        }
    }

    /// Replace the profile, keeping the token.
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Whether the token expired at `now`.
    ///
    /// A missing or unparseable expiry never counts as expired; the API will
    /// reject the token if it is stale.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expire
            .as_deref()
            .and_then(|e| DateTime::parse_from_rfc3339(e).ok())
            .is_some_and(|expire| expire.with_timezone(&Utc) <= now)
    }
}

pub fn auth_user(state: &AuthState) -> Option<&Profile> {
    state.profile.as_ref()
}

pub fn auth_token(state: &AuthState) -> Option<&str> {
    state.token.as_deref()
}

pub fn token_expire(state: &AuthState) -> Option<&str> {
    state.expire.as_deref()
}

/// A user is logged in iff a token is present.
pub fn is_logged_in(state: &AuthState) -> bool {
    auth_token(state).is_some()
}

pub fn auth_role(state: &AuthState) -> Option<RoleCode> {
    auth_user(state).map(Profile::role_code)
}

#[cfg(test)]
pub(crate) fn sample_login(role: RoleCode) -> LoginResponse {
    use crate::models::Role;

    LoginResponse {
        profile: Profile {
            user_id: 42,
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            role: Role {
                code: role,
                name: role.label().to_string(),
            },
        },
        token: "jwt-token".to_string(),
        expire: "2030-01-01T00:00:00Z".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_logged_out() {
        let state = AuthState::default();
        assert!(!is_logged_in(&state));
        assert!(auth_user(&state).is_none());
        assert!(auth_role(&state).is_none());
    }

    #[test]
    fn signed_in_exposes_selectors() {
        let state = AuthState::signed_in(sample_login(RoleCode::Admin));
        assert!(is_logged_in(&state));
        assert_eq!(auth_token(&state), Some("jwt-token"));
        assert_eq!(token_expire(&state), Some("2030-01-01T00:00:00Z"));
        assert_eq!(auth_role(&state), Some(RoleCode::Admin));
    }

    #[test]
    fn expiry_is_compared_against_now() {
        let state = AuthState::signed_in(sample_login(RoleCode::Visitor));
        let before: DateTime<Utc> = "2029-12-31T23:59:59Z".parse().unwrap();
        let after: DateTime<Utc> = "2030-01-01T00:00:01Z".parse().unwrap();
        assert!(!state.is_expired(before));
        assert!(state.is_expired(after));
    }

    #[test]
    fn garbage_expiry_is_not_expired() {
        let state = AuthState {
            expire: Some("tomorrow".to_string()),
            ..AuthState::signed_in(sample_login(RoleCode::Visitor))
        };
        assert!(!state.is_expired(Utc::now()));
    }
}
