//! # UI Components
//!
//! Reusable Dioxus components for the data manager:
//! - **DataForm**: schema-driven entry form (create/edit)
//! - **DataTable**: schema-driven record listing with per-row actions
//!
//! Both are pure rendering plus event relay; all state lives in the
//! [`crate::state::ManagerState`] owned by the `DataManager` component.

// ============================================================================
// Module Declarations
// ============================================================================

pub mod form;
pub mod table;

// ============================================================================
// Re-exports
// ============================================================================

pub use form::{DataForm, DataFormProps};
pub use table::{DataTable, DataTableProps};
