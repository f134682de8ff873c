use dioxus::prelude::*;
use dioxus_primitives::toast as prim;

pub use dioxus_primitives::toast::{use_toast, ToastOptions, Toasts};

/// Application-wide toast host. Wraps the whole app; toasts stack at the
/// bottom centre.
#[component]
pub fn ToastProvider(props: prim::ToastProviderProps) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "erp-toast-region",
            prim::ToastProvider { ..props }
        }
    }
}
