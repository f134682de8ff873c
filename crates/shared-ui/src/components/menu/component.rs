use dioxus::prelude::*;

// ─── Selection state ───────────────────────────────────────────────────

/// Visual state of one menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItemState {
    Selected,
    Unselected,
}

impl MenuItemState {
    /// Case-insensitive comparison of the current selection against an id.
    pub fn of(selected: &str, id: &str) -> Self {
        if selected.eq_ignore_ascii_case(id) {
            MenuItemState::Selected
        } else {
            MenuItemState::Unselected
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, MenuItemState::Selected)
    }

    /// Value of the `data-state` attribute the stylesheet keys off.
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuItemState::Selected => "selected",
            MenuItemState::Unselected => "unselected",
        }
    }
}

/// Layout of a menu list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuOrientation {
    /// Stacked rows, used inside the admin sidebar.
    #[default]
    Vertical,
    /// Pill bar across the top, used by the student dashboard.
    Horizontal,
}

impl MenuOrientation {
    fn as_str(&self) -> &'static str {
        match self {
            MenuOrientation::Vertical => "vertical",
            MenuOrientation::Horizontal => "horizontal",
        }
    }
}

// ─── Menu components ───────────────────────────────────────────────────

/// Ordered list of menu entries.
#[component]
pub fn MenuList(
    #[props(default)] orientation: MenuOrientation,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "menu-list", None, false),
        Attribute::new("data-orientation", orientation.as_str(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        ul {
            role: "menu",
            ..merged,
            {children}
        }
    }
}

/// A single clickable menu entry.
#[component]
pub fn MenuEntry(
    state: MenuItemState,
    onclick: EventHandler<MouseEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "menu-entry", None, false),
        Attribute::new("data-state", state.as_str(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        li {
            role: "menuitem",
            "aria-current": if state.is_selected() { "page" } else { "false" },
            onclick: move |evt| onclick.call(evt),
            ..merged,
            {children}
        }
    }
}

// ─── Sidebar shell ─────────────────────────────────────────────────────

/// Fixed left column below the navbar.
#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        aside {
            ..merged,
            {children}
        }
    }
}

/// Bottom section of the sidebar.
#[component]
pub fn SidebarFooter(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-footer", {children} }
    }
}

/// Content column to the right of the sidebar.
#[component]
pub fn SidebarInset(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-inset", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        main {
            ..merged,
            {children}
        }
    }
}
