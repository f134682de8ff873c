use api::ApiClient;
use shared_types::{ApiError, PortalRole, ProfileData};

use crate::notify::Notifier;
use crate::session;

/// Where a dashboard gets the signed-in user's profile from.
#[allow(async_fn_in_trait)]
pub trait ProfileSource {
    async fn my_details(&self, role: PortalRole) -> Result<ProfileData, ApiError>;
}

/// Backend source authenticated with the token kept in `localStorage`.
pub struct SessionProfileSource {
    client: ApiClient,
}

impl SessionProfileSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl ProfileSource for SessionProfileSource {
    async fn my_details(&self, role: PortalRole) -> Result<ProfileData, ApiError> {
        let token = session::read_token(&self.client.config().token_storage_key).await;
        if token.is_none() {
            tracing::warn!(role = role.as_str(), "no session token, requesting anyway");
        }
        self.client.my_details(role, token.as_deref()).await
    }
}

/// Fetch the profile, reporting progress and failure through `notifier`.
///
/// Returns `None` on any failure after logging it and showing one message:
/// the server's own when it sent one, the role's generic text otherwise.
pub async fn load_profile<S, N>(source: &S, notifier: &N, role: PortalRole) -> Option<ProfileData>
where
    S: ProfileSource,
    N: Notifier,
{
    notifier.loading(role.loading_message());
    match source.my_details(role).await {
        Ok(profile) => {
            tracing::info!(role = role.as_str(), "profile loaded");
            Some(profile)
        }
        Err(err) => {
            tracing::error!(role = role.as_str(), error = %err, "profile fetch failed");
            notifier.failure(&err.user_message(role.fetch_error_message()));
            None
        }
    }
}

/// Runs a cleanup closure when dropped.
///
/// The fetch task holds one so the loading flag clears however the task
/// ends: normal completion, an early return, a panic, or cancellation.
pub struct SettleGuard<F: FnOnce()> {
    on_settle: Option<F>,
}

impl<F: FnOnce()> SettleGuard<F> {
    pub fn new(on_settle: F) -> Self {
        Self {
            on_settle: Some(on_settle),
        }
    }
}

impl<F: FnOnce()> Drop for SettleGuard<F> {
    fn drop(&mut self) {
        if let Some(on_settle) = self.on_settle.take() {
            on_settle();
        }
    }
}
