use dioxus::prelude::*;
use shared_types::PortalRole;
use shared_ui::{MenuEntry, MenuList, MenuOrientation};

use super::{use_dashboard, ContentRouter};

const HERO_TITLE: &str = "Welcome to Your College ERP Dashboard";
const HERO_TAGLINE: &str = "Access your timetable, materials, notices, exams, and marks in one place.";

/// Student portal: sticky pill menu, hero banner on home, content card.
#[component]
pub fn StudentHome(page: Option<String>) -> Element {
    let dash = use_dashboard(PortalRole::Student, page);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./student.css") }

        div { class: "student-dashboard",
            div { class: "student-menu-bar",
                MenuList { orientation: MenuOrientation::Horizontal,
                    for item in dash.menu.iter().copied() {
                        MenuEntry {
                            key: "{item.id}",
                            state: dash.item_state(item.id),
                            onclick: move |_| dash.select(item.id),
                            "{item.label}"
                        }
                    }
                }
            }

            if dash.is_home() {
                HeroBanner {}
            }

            div { class: "student-content-card",
                ContentRouter { target: dash.content() }
            }
        }
    }
}

#[component]
fn HeroBanner() -> Element {
    rsx! {
        section { class: "student-hero",
            h1 { class: "student-hero-title", "{HERO_TITLE}" }
            p { class: "student-hero-tagline", "{HERO_TAGLINE}" }
        }
    }
}
