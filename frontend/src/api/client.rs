use reqwest::Client;

use crate::config;

/// HTTP client for the authentication service. Cloneable so it can be
/// provided through Leptos context and swapped for a mock-backed instance in
/// tests via `new_with_base_url`.
#[derive(Clone)]
pub struct AuthClient {
    client: Client,
    base_url: Option<String>,
}

impl AuthClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_auth_base_url().await
        }
    }
}

impl Default for AuthClient {
    fn default() -> Self {
        Self::new()
    }
}
