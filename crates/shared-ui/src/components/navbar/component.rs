use dioxus::prelude::*;

/// Top bar shown above every dashboard.
///
/// `brand` sits on the left, `title` next to it when non-empty. `children`
/// are rendered right-aligned (user actions such as log out).
#[component]
pub fn Navbar(
    brand: String,
    #[props(default)] title: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "navbar", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav {
            ..merged,
            div { class: "navbar-brand",
                span { class: "navbar-logo", "aria-hidden": "true" }
                span { class: "navbar-brand-name", "{brand}" }
                if !title.is_empty() {
                    span { class: "navbar-title", "{title}" }
                }
            }
            div { class: "navbar-actions", {children} }
        }
    }
}

/// Plain text button styled for the navbar.
#[component]
pub fn NavbarAction(onclick: EventHandler<MouseEvent>, children: Element) -> Element {
    rsx! {
        button {
            class: "navbar-action",
            r#type: "button",
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
