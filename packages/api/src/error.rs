//! Errors returned by the REST client.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("{}", .message.as_deref().unwrap_or("request failed"))]
    Http { status: u16, message: Option<String> },
    /// The request never got a response.
    #[error("{0}")]
    Network(String),
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// A route identifier that is not a valid record id.
    #[error("identificador inválido: {0}")]
    InvalidId(String),
}

impl ApiError {
    /// Build an HTTP error from a status and the raw response body.
    ///
    /// The message is taken from the body's `message` field, which may be a
    /// string or a list of strings.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| match v.get("message")? {
                serde_json::Value::String(s) => Some(s.clone()),
                serde_json::Value::Array(items) => {
                    let parts: Vec<&str> = items.iter().filter_map(|i| i.as_str()).collect();
                    (!parts.is_empty()).then(|| parts.join(", "))
                }
                _ => None,
            })
            .filter(|m| !m.trim().is_empty());
        ApiError::Http { status, message }
    }

    /// Text to show the user, or `None` when the error carries no message.
    pub fn user_message(&self) -> Option<String> {
        match self {
            ApiError::Http { message, .. } => message.clone(),
            ApiError::Network(msg) => Some(msg.clone()),
            ApiError::Decode(_) | ApiError::InvalidId(_) => Some(self.to_string()),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_read_from_body() {
        let err = ApiError::from_response(400, r#"{"message":"Nombre duplicado"}"#);
        assert_eq!(err.user_message().as_deref(), Some("Nombre duplicado"));
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.to_string(), "Nombre duplicado");
    }

    #[test]
    fn message_lists_are_joined() {
        let err = ApiError::from_response(422, r#"{"message":["name empty","location empty"]}"#);
        assert_eq!(
            err.user_message().as_deref(),
            Some("name empty, location empty")
        );
    }

    #[test]
    fn bodies_without_message_stay_silent() {
        assert_eq!(ApiError::from_response(500, "").user_message(), None);
        assert_eq!(ApiError::from_response(500, "<html>").user_message(), None);
        assert_eq!(
            ApiError::from_response(404, r#"{"message":""}"#).user_message(),
            None
        );
    }
}
