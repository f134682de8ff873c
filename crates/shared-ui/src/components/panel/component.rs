use dioxus::prelude::*;

/// White rounded container the dashboards render their content into.
#[component]
pub fn Panel(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "panel", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section {
            ..merged,
            {children}
        }
    }
}

/// Heading row of a Panel.
#[component]
pub fn PanelHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "panel-header", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        header {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn PanelTitle(children: Element) -> Element {
    rsx! {
        h2 { class: "panel-title", {children} }
    }
}

#[component]
pub fn PanelDescription(children: Element) -> Element {
    rsx! {
        p { class: "panel-description", {children} }
    }
}

/// Label/value rows, used by the profile view.
#[component]
pub fn FieldList(rows: Vec<(String, String)>) -> Element {
    rsx! {
        dl { class: "panel-fields",
            for (label, value) in rows {
                div { key: "{label}", class: "panel-field",
                    dt { "{label}" }
                    dd { "{value}" }
                }
            }
        }
    }
}
