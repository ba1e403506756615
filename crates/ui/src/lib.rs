//! # Console UI
//!
//! Dioxus components and the data-manager state machine for Brand Console.
//!
//! The crate is generic over the record type: any `ManagedRecord` with a
//! field schema gets a complete create/edit/delete console out of the
//! `DataManager` component. The state machine and async flows live apart
//! from the components so every transition runs under plain async tests
//! with a mock adapter, no UI runtime required.
//!

// ============================================================================
// Modules
// ============================================================================

pub mod components;
pub mod flows;
pub mod manager;
pub mod state;

#[cfg(test)]
mod testing;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use console_api;
pub use console_core;

// Re-export main components
pub use components::{DataForm, DataFormProps, DataTable, DataTableProps};
pub use flows::StateStore;
pub use manager::{DataManager, DataManagerProps};
pub use state::ManagerState;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
