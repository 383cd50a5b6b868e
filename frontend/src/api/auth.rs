use super::{
    client::AuthClient,
    types::{AuthError, SignInData, SignInRequest, SignUpRequest},
};

impl AuthClient {
    /// Email/password sign-in. Resolves to a value on every completion path:
    /// transport faults and unparseable bodies are folded into `AuthError`
    /// rather than surfaced as a distinct failure mode.
    pub async fn sign_in_email(&self, request: SignInRequest) -> Result<SignInData, AuthError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/sign-in/email", base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| AuthError::local(format!("Request failed: {}", e)))?;

        if response.status().is_success() {
            response
                .json::<SignInData>()
                .await
                .map_err(|e| AuthError::local(format!("Failed to parse response: {}", e)))
        } else {
            // An error body without a message (or an unparseable one) still
            // yields a failure; the caller supplies the user-facing fallback.
            Err(response.json::<AuthError>().await.unwrap_or_default())
        }
    }

    pub async fn sign_up_email(&self, request: SignUpRequest) -> Result<SignInData, AuthError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/sign-up/email", base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| AuthError::local(format!("Request failed: {}", e)))?;

        if response.status().is_success() {
            response
                .json::<SignInData>()
                .await
                .map_err(|e| AuthError::local(format!("Failed to parse response: {}", e)))
        } else {
            Err(response.json::<AuthError>().await.unwrap_or_default())
        }
    }
}
