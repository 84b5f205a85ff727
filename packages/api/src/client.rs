//! Typed JSON calls on top of a [`Transport`].

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};

/// REST client authenticated with an optional bearer token.
#[derive(Clone, Debug)]
pub struct ApiClient<T: Transport> {
    transport: T,
    token: Option<String>,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            token: None,
        }
    }

    /// Builder method to authenticate every request with `token`.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send `request`, turning non-success statuses into [`ApiError::Http`].
    pub async fn execute(&self, mut request: ApiRequest) -> Result<ApiResponse, ApiError> {
        request.token = self.token.clone();
        let method = request.method;
        let path = request.path.clone();
        let response = self.transport.send(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            tracing::warn!("{:?} {} answered {}", method, path, response.status);
            Err(ApiError::from_response(response.status, &response.body))
        }
    }

    pub async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<R, ApiError> {
        let mut request = ApiRequest::new(Method::Get, path);
        request.query = query;
        let response = self.execute(request).await?;
        decode(&response)
    }

    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<ApiResponse, ApiError> {
        let mut request = ApiRequest::new(Method::Post, path);
        request.body = Some(serde_json::to_value(body)?);
        self.execute(request).await
    }

    pub async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let response = self.post(path, body).await?;
        decode(&response)
    }

    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<ApiResponse, ApiError> {
        let mut request = ApiRequest::new(Method::Put, path);
        request.body = Some(serde_json::to_value(body)?);
        self.execute(request).await
    }

    pub async fn delete(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.execute(ApiRequest::new(Method::Delete, path)).await
    }
}

fn decode<R: DeserializeOwned>(response: &ApiResponse) -> Result<R, ApiError> {
    Ok(serde_json::from_str(&response.body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTransport;

    #[tokio::test]
    async fn token_is_attached_to_requests() {
        let client = ApiClient::new(FakeTransport::new()).with_token(Some("jwt".to_string()));
        client.transport().respond(200, "[]");

        let _: Vec<u32> = client.get("/roles", Vec::new()).await.unwrap();

        let sent = client.transport().requests();
        assert_eq!(sent[0].token.as_deref(), Some("jwt"));
        assert_eq!(sent[0].method, Method::Get);
    }

    #[tokio::test]
    async fn error_status_becomes_http_error() {
        let client = ApiClient::new(FakeTransport::new());
        client
            .transport()
            .respond(401, r#"{"message":"Credenciales inválidas"}"#);

        let err = client.delete("/gardens/1").await.unwrap_err();

        assert_eq!(err.status(), Some(401));
        assert_eq!(err.user_message().as_deref(), Some("Credenciales inválidas"));
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let client = ApiClient::new(FakeTransport::new());
        client.transport().respond(200, "not json");

        let err = client.get::<Vec<u32>>("/roles", Vec::new()).await.unwrap_err();

        assert!(matches!(err, ApiError::Decode(_)));
    }
}
