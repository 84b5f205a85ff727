//! Login and profile endpoints.

use serde::Serialize;
use store::{LoginResponse, Profile};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::Transport;

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

pub struct AuthService<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> AuthService<'a, T> {
    pub fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// Exchange credentials for a profile and bearer token.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let email = email.trim().to_lowercase();
        let response: LoginResponse = self
            .client
            .post_json("/auth/login", &Credentials {
                email: &email,
                password,
            })
            .await?;
        tracing::info!("signed in as {}", response.profile.email);
        Ok(response)
    }

    /// Profile of the user owning the client's token.
    pub async fn fetch_profile(&self) -> Result<Profile, ApiError> {
        self.client.get("/auth/profile", Vec::new()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTransport;
    use store::RoleCode;

    const LOGIN_BODY: &str = r#"{
        "profile": {"userId": 1, "name": "Ana", "email": "ana@example.com", "role": {"code": "ADMIN", "name": "Administrador"}},
        "token": "jwt",
        "expire": "2030-01-01T00:00:00Z"
    }"#;

    #[tokio::test]
    async fn login_normalizes_email_and_returns_session() {
        let client = ApiClient::new(FakeTransport::new());
        client.transport().respond(200, LOGIN_BODY);

        let session = client.auth().login(" Ana@Example.com ", "pw").await.unwrap();

        assert_eq!(session.token, "jwt");
        assert_eq!(session.profile.role.code, RoleCode::Admin);
        let sent = client.transport().requests();
        assert_eq!(sent[0].path, "/auth/login");
        assert_eq!(sent[0].body.as_ref().unwrap()["email"], "ana@example.com");
        assert!(sent[0].token.is_none());
    }

    #[tokio::test]
    async fn bad_credentials_surface_the_server_message() {
        let client = ApiClient::new(FakeTransport::new());
        client
            .transport()
            .respond(401, r#"{"message":"Usuario o contraseña incorrectos"}"#);

        let err = client.auth().login("ana@example.com", "nope").await.unwrap_err();

        assert_eq!(
            err.user_message().as_deref(),
            Some("Usuario o contraseña incorrectos")
        );
    }
}
