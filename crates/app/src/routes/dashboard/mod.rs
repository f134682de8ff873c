//! Role dashboards: shared state, profile fetch and content routing.
//!
//! Both portals run the same [`use_dashboard`] hook and differ only in
//! chrome and menu. The selected menu id is owned here; the `page` query
//! parameter follows it (click pushes the URL) and feeds back into it
//! (URL changes re-resolve the id).

pub mod admin;
pub mod fetch;
pub mod menu;
pub mod student;

use std::rc::Rc;

use api::ApiClient;
use dioxus::prelude::*;
use shared_types::{PortalRole, ProfileData};
use shared_ui::{use_toast, LoadingPlaceholder, MenuItemState};

use crate::auth::use_auth;
use crate::notify::Notifier;
use crate::routes::screens::{ProfileView, ScreenView};
use crate::routes::Route;
use fetch::{load_profile, ProfileSource, SessionProfileSource, SettleGuard};
use menu::{menu_for, resolve_selection, select_content, ContentTarget, MenuItem};

pub use admin::AdminHome;
pub use student::StudentHome;

/// Reactive state of one mounted dashboard.
#[derive(Clone, Copy, PartialEq)]
pub struct DashboardHandle {
    pub role: PortalRole,
    pub menu: &'static [MenuItem],
    pub selected: Signal<&'static str>,
    pub profile: Signal<Option<ProfileData>>,
    pub loading: Signal<bool>,
}

impl DashboardHandle {
    /// Select a menu entry and mirror it into the URL.
    pub fn select(self, id: &'static str) {
        self.set_selection(id);
        navigator().push(Route::for_role(self.role, id));
    }

    /// Update the highlighted entry and content without navigating.
    pub fn set_selection(mut self, id: &'static str) {
        self.selected.set(id);
    }

    pub fn item_state(&self, id: &str) -> MenuItemState {
        MenuItemState::of(*self.selected.read(), id)
    }

    pub fn is_home(&self) -> bool {
        *self.selected.read() == menu::HOME
    }

    pub fn content(&self) -> ContentTarget {
        select_content(
            *self.loading.read(),
            *self.selected.read(),
            self.profile.read().as_ref(),
            self.menu,
        )
    }
}

/// Dashboard state for `role`, synchronised with the `page` query value.
///
/// Fetches the profile from the backend with the stored session token and
/// reports progress through the app's toasts.
pub fn use_dashboard(role: PortalRole, page: Option<String>) -> DashboardHandle {
    let toasts = use_toast();
    use_dashboard_with(role, page, move || {
        (SessionProfileSource::new(ApiClient::from_config()), toasts)
    })
}

/// [`use_dashboard`] with the profile source and notifier supplied by
/// `backend`, which runs once on first render.
///
/// The fetch runs as a resource owned by the calling component, so
/// unmounting cancels it before any late write.
pub fn use_dashboard_with<S, N>(
    role: PortalRole,
    page: Option<String>,
    backend: impl FnOnce() -> (S, N),
) -> DashboardHandle
where
    S: ProfileSource + 'static,
    N: Notifier + 'static,
{
    let menu = menu_for(role);
    let mut selected = use_signal(|| resolve_selection(menu, page.as_deref()));
    let profile = use_signal(|| None::<ProfileData>);
    let loading = use_signal(|| true);
    let auth = use_auth();
    let backend = use_hook(|| Rc::new(backend()));

    use_effect(use_reactive((&page,), move |(page,)| {
        let id = resolve_selection(menu, page.as_deref());
        if page.as_deref().is_some_and(|p| p != id) {
            tracing::debug!(role = role.as_str(), ?page, "unknown page, showing home");
        }
        selected.set(id);
    }));

    let _fetch = use_resource(move || {
        let backend = backend.clone();
        let (mut profile, mut loading, mut auth) = (profile, loading, auth);
        async move {
            let _settle = SettleGuard::new(move || {
                if let Ok(mut flag) = loading.try_write() {
                    *flag = false;
                }
            });

            let (source, notifier) = &*backend;
            if let Some(data) = load_profile(source, notifier, role).await {
                profile.set(Some(data.clone()));
                auth.set_user(role, data);
            }
        }
    });

    DashboardHandle {
        role,
        menu,
        selected,
        profile,
        loading,
    }
}

/// Render whatever [`select_content`] picked.
#[component]
pub fn ContentRouter(target: ContentTarget) -> Element {
    match target {
        ContentTarget::Loading => rsx! { LoadingPlaceholder {} },
        ContentTarget::Profile(profile) => rsx! { ProfileView { profile } },
        ContentTarget::Unit(screen) => rsx! { ScreenView { screen } },
        ContentTarget::Empty => rsx! {},
    }
}
