pub mod client;
pub mod config;

pub use client::{interpret_details, ApiClient};
pub use config::client_config;
