use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdUser;
use dioxus_free_icons::Icon;
use shared_types::PortalRole;
use shared_ui::{MenuEntry, MenuList, MenuOrientation, Sidebar, SidebarFooter, SidebarInset};

use super::menu::{identity, HOME};
use super::{use_dashboard, ContentRouter};
use crate::BRAND;

/// Admin portal: fixed sidebar with profile summary and menu, content on
/// the right.
#[component]
pub fn AdminHome(page: Option<String>) -> Element {
    let dash = use_dashboard(PortalRole::Admin, page);
    let (name, email) = identity(dash.profile.read().as_ref(), dash.role);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        div { class: "admin-dashboard",
            Sidebar {
                button {
                    class: "admin-profile-summary",
                    r#type: "button",
                    onclick: move |_| dash.select(HOME),
                    span { class: "admin-profile-avatar",
                        Icon::<LdUser> { icon: LdUser, width: 22, height: 22 }
                    }
                    span { class: "admin-profile-text",
                        span { class: "admin-profile-name", "{name}" }
                        span { class: "admin-profile-email", "{email}" }
                    }
                }

                MenuList { orientation: MenuOrientation::Vertical,
                    for item in dash.menu.iter().copied() {
                        MenuEntry {
                            key: "{item.id}",
                            state: dash.item_state(item.id),
                            onclick: move |_| dash.select(item.id),
                            "{item.label}"
                        }
                    }
                }

                SidebarFooter {
                    span { class: "admin-brand", "{BRAND}" }
                }
            }

            SidebarInset {
                ContentRouter { target: dash.content() }
            }
        }
    }
}
