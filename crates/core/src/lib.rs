//! # Console Core
//!
//! Core types, traits, and error handling for Brand Console.
//!
//! This crate provides the foundational building blocks used throughout
//! the console:
//!
//! - **Types**: Record identifiers, the declarative field schema, and
//!   dispatch operation tags
//! - **Traits**: The `ManagedRecord`/`RecordDraft` abstraction the generic
//!   data manager is parameterized over
//! - **Validation**: Schema-driven draft validation
//! - **Errors**: Unified error handling with `ConsoleError` and
//!   `ConsoleResult`
//!

pub mod error;
pub mod traits;
pub mod types;
pub mod validate;

// Re-export commonly used items at crate root
pub use error::{ConsoleError, ConsoleResult};
pub use traits::{ManagedRecord, RecordDraft};
pub use types::{DispatchOperation, FieldDef, FieldKind, RecordId};
pub use validate::validate_draft;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
