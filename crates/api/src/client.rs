use shared_types::{ApiError, ApiResponse, ClientConfig, PortalRole, ProfileData};

use crate::config::client_config;

/// Thin wrapper over `reqwest` for the backend's profile endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Client built from the embedded `config.toml`.
    pub fn from_config() -> Self {
        Self::new(client_config().clone())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `GET {base}/{role}/my-details` with `Authorization: Bearer <token>`.
    ///
    /// A missing token still sends the request, with an empty bearer value,
    /// and lets the backend reject it.
    pub async fn my_details(
        &self,
        role: PortalRole,
        token: Option<&str>,
    ) -> Result<ProfileData, ApiError> {
        let url = self.config.endpoint(role.details_path());
        tracing::debug!(role = role.as_str(), %url, "fetching profile");

        let response = self
            .http
            .get(&url)
            .bearer_auth(token.unwrap_or_default())
            .send()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;

        interpret_details(status, &body)
    }
}

/// Turn a raw `(status, body)` pair into a profile or a classified error.
pub fn interpret_details(status: u16, body: &str) -> Result<ProfileData, ApiError> {
    if !(200..300).contains(&status) {
        // Error bodies usually still carry a `message`; keep it if so.
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message")?.as_str().map(str::to_string));
        return Err(ApiError::status(status, message));
    }

    let envelope: ApiResponse<ProfileData> =
        serde_json::from_str(body).map_err(|e| ApiError::decode(e.to_string()))?;

    if !envelope.success {
        return Err(ApiError::rejected(envelope.message));
    }
    envelope
        .data
        .ok_or_else(|| ApiError::decode("success response without data"))
}
