//! Brand Console
//!
//! Desktop manager for the brand catalog: list, create, edit and delete
//! brand entries through a read endpoint and a write dispatch endpoint.
//!
//! This is the main entry point for the Dioxus Desktop application.

mod app;
mod brand;
mod config;

use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // Launch the Dioxus desktop application
    app::launch();
}
