pub mod dashboard;
pub mod landing;
pub mod not_found;
pub mod screens;

use crate::auth::use_auth;
use crate::session;
use crate::BRAND;
use dioxus::prelude::*;
use shared_types::PortalRole;
use shared_ui::{Navbar, NavbarAction};

use dashboard::{AdminHome, StudentHome};
use landing::Landing;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[layout(PortalLayout)]
    #[route("/admin?:page")]
    AdminHome { page: Option<String> },
    #[route("/student?:page")]
    StudentHome { page: Option<String> },
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Dashboard route for `role` with `page` selected.
    pub fn for_role(role: PortalRole, page: &str) -> Self {
        let page = Some(page.to_string());
        match role {
            PortalRole::Admin => Route::AdminHome { page },
            PortalRole::Student => Route::StudentHome { page },
        }
    }

    /// Portal this route belongs to, if any.
    pub fn portal_role(&self) -> Option<PortalRole> {
        match self {
            Route::AdminHome { .. } => Some(PortalRole::Admin),
            Route::StudentHome { .. } => Some(PortalRole::Student),
            Route::Landing {} | Route::NotFound { .. } => None,
        }
    }
}

/// Navbar chrome shared by both portals.
#[component]
fn PortalLayout() -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();

    let title = route
        .portal_role()
        .map(|role| format!("{} Dashboard", role.display_name()))
        .unwrap_or_default();
    let greeting = auth.display_name().map(|name| format!("Hi, {name}"));

    let log_out = move |_: MouseEvent| {
        session::clear_token(&api::client_config().token_storage_key);
        auth.clear_auth();
        tracing::info!("logged out");
        navigator().push(Route::Landing {});
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "portal-layout",
            Navbar { brand: BRAND.to_string(), title,
                if let Some(greeting) = greeting {
                    span { class: "portal-greeting", "{greeting}" }
                }
                NavbarAction { onclick: log_out, "Log out" }
            }
            div { class: "portal-body",
                Outlet::<Route> {}
            }
        }
    }
}
