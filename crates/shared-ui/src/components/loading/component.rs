use dioxus::prelude::*;

/// Centered placeholder shown while content is being fetched.
#[component]
pub fn LoadingPlaceholder(
    #[props(default = "Loading...".to_string())] label: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "loading-placeholder", None, false),
        Attribute::new("role", "status", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            span { class: "loading-placeholder-pulse" }
            span { class: "loading-placeholder-label", "{label}" }
        }
    }
}
