use dioxus::prelude::*;

mod auth;
pub mod notify;
mod routes;
mod session;
use auth::AuthState;
use routes::Route;

/// Product name shown in the navbar and the admin sidebar.
pub const BRAND: &str = "StudentPulse";

const BASE_CSS: Asset = asset!("/assets/base.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Process-wide user store, written by the dashboards' profile fetch.
    use_context_provider(AuthState::new);

    use_hook(|| {
        let config = api::client_config();
        tracing::info!(base_url = %config.base_url, "college ERP client starting");
    });

    rsx! {
        document::Link { rel: "stylesheet", href: BASE_CSS }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
