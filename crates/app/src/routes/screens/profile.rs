use dioxus::prelude::*;
use shared_types::ProfileData;
use shared_ui::{FieldList, Panel, PanelDescription, PanelHeader, PanelTitle};

/// Rows shown for a profile: name and email first, then whatever
/// role-specific fields the backend sent.
pub fn profile_rows(profile: &ProfileData) -> Vec<(String, String)> {
    let mut rows = Vec::with_capacity(profile.details.len() + 2);
    if !profile.name.trim().is_empty() {
        rows.push(("Name".to_string(), profile.name.clone()));
    }
    if !profile.email.trim().is_empty() {
        rows.push(("Email".to_string(), profile.email.clone()));
    }
    rows.extend(
        profile
            .detail_rows()
            .into_iter()
            .filter(|(label, _)| label != "Name" && label != "Email"),
    );
    rows
}

/// The signed-in user's profile. Without data it degrades to a notice.
#[component]
pub fn ProfileView(profile: Option<ProfileData>) -> Element {
    match profile {
        Some(profile) => {
            let rows = profile_rows(&profile);
            rsx! {
                Panel { class: "profile-view",
                    PanelHeader {
                        PanelTitle { "{profile.name}" }
                        PanelDescription { "{profile.email}" }
                    }
                    FieldList { rows }
                }
            }
        }
        None => rsx! {
            Panel { class: "profile-view",
                PanelHeader {
                    PanelTitle { "Profile" }
                    PanelDescription { "Profile details are unavailable right now." }
                }
            }
        },
    }
}
