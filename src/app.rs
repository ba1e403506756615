//! Application shell for Brand Console
//!
//! The root component builds one HTTP adapter from the environment
//! configuration and hands it, together with the brand field schema,
//! to the generic `DataManager`.

use dioxus::prelude::*;

use console_ui::console_api::{ApiHandle, HttpEntityApi};
use console_ui::DataManager;

use crate::brand::{brand_field_defs, Brand};
use crate::config::ConsoleConfig;

// ============================================================================
// Constants
// ============================================================================

/// Application name
pub const NAME: &str = "Brand Console";

/// Application display title
pub const TITLE: &str = "Brand Console - Catalog Manager";

/// CSS styles for the application, included at build time
const STYLES: &str = include_str!("../assets/styles/main.css");

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    // The adapter is built once; ApiHandle equality is pointer identity,
    // so rebuilding it each render would reset the manager's children.
    let api = use_hook(|| {
        let config = ConsoleConfig::from_env();
        tracing::info!(
            read_url = %config.read_url,
            dispatch_url = %config.dispatch_url,
            "configuring brand adapter"
        );

        let mut adapter = HttpEntityApi::new(&config.read_url, &config.dispatch_url);
        if let Some(token) = config.token {
            adapter = adapter.with_bearer_token(token);
        }
        ApiHandle::<Brand>::new(adapter)
    });

    rsx! {
        div {
            class: "app",

            header {
                class: "app-header",
                h1 { "Brand Console" }
                p { class: "app-subtitle", "Manage the brand catalog" }
            }

            main {
                class: "app-main",
                DataManager {
                    api,
                    defs: brand_field_defs(),
                }
            }
        }
    }
}

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the Brand Console desktop application
pub fn launch() {
    tracing::info!("Starting {} v{}", NAME, env!("CARGO_PKG_VERSION"));

    // Embed the stylesheet in the document head
    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 800.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(700.0, 500.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .launch(App);
}

// ============================================================================
// Tests
// ============================================================================
