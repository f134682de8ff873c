use dioxus::prelude::*;
use shared_types::PortalRole;

use crate::auth::use_auth;
use crate::routes::Route;
use crate::BRAND;

/// Entry page linking to both portals. Logging out lands here.
#[component]
pub fn Landing() -> Element {
    let auth = use_auth();
    let current = *auth.role.read();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./landing.css") }

        div { class: "landing-page",
            div { class: "landing-card",
                h1 { class: "landing-title", "{BRAND}" }
                p { class: "landing-subtitle", "Choose your portal to continue." }
                div { class: "landing-links",
                    for role in [PortalRole::Admin, PortalRole::Student] {
                        PortalLink { role, active: current == Some(role) }
                    }
                }
            }
        }
    }
}

#[component]
fn PortalLink(role: PortalRole, active: bool) -> Element {
    let label = format!("{} Portal", role.display_name());
    let class = if active {
        "landing-link landing-link-active"
    } else {
        "landing-link"
    };
    rsx! {
        Link {
            to: Route::for_role(role, super::dashboard::menu::HOME),
            class,
            "{label}"
        }
    }
}
