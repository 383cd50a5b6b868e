use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "callbackURL")]
    pub callback_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "callbackURL")]
    pub callback_url: String,
}

/// Success payload of the sign-in / sign-up endpoints. The backend signals a
/// confirmed authentication by including a user record; a success response
/// without one is treated as a failure by the callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInData {
    #[serde(default)]
    pub user: Option<AuthUser>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Failure payload of the auth endpoints. The message is optional on the
/// wire; callers fall back to a fixed text when it is absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, thiserror::Error)]
#[error("{}", .message.as_deref().unwrap_or("authentication failed"))]
pub struct AuthError {
    #[serde(default)]
    pub message: Option<String>,
}

impl AuthError {
    /// Wraps a locally produced failure (transport fault, unparseable body)
    /// in the same shape the backend uses.
    pub fn local(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}
