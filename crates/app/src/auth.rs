use dioxus::prelude::*;
use shared_types::{PortalRole, ProfileData};

/// Global signed-in user state.
///
/// The dashboards are the only writers: a successful profile fetch mirrors
/// its result here, and logging out clears it. Anything else may read it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<ProfileData>>,
    pub role: Signal<Option<PortalRole>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
            role: Signal::new(None),
        }
    }

    pub fn set_user(&mut self, role: PortalRole, user: ProfileData) {
        self.role.set(Some(role));
        self.current_user.set(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.role.set(None);
        self.current_user.set(None);
    }

    /// Name to greet the user with, if a non-blank one is known.
    pub fn display_name(&self) -> Option<String> {
        self.current_user
            .read()
            .as_ref()
            .map(|u| u.name.trim().to_string())
            .filter(|name| !name.is_empty())
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}
