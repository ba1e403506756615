//! Core traits for Brand Console
//!
//! This module defines the record abstraction the generic data manager is
//! parameterized over. A managed record is any entity with a stable
//! identifier and a draft representation (the record minus its identifier)
//! whose fields can be read and written by schema name, so the form and
//! table can render any record type from its field schema alone.

use crate::types::RecordId;
use serde::{Serialize, de::DeserializeOwned};

// ============================================================================
// ManagedRecord Trait
// ============================================================================

/// A record the generic data manager can list, create, edit and delete
///
/// # Example
///
/// ```rust,ignore
/// use console_core::{ManagedRecord, RecordDraft, RecordId};
///
/// #[derive(Clone, PartialEq, serde::Serialize, serde::Deserialize)]
/// struct Brand {
///     id: RecordId,
///     name: String,
/// }
///
/// impl ManagedRecord for Brand {
///     type Draft = BrandDraft;
///
///     fn id(&self) -> RecordId {
///         self.id.clone()
///     }
///
///     fn to_draft(&self) -> BrandDraft {
///         BrandDraft { name: self.name.clone() }
///     }
///
///     fn field_text(&self, field: &str) -> String {
///         match field {
///             "name" => self.name.clone(),
///             _ => String::new(),
///         }
///     }
/// }
/// ```
pub trait ManagedRecord:
    Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// The draft representation of this record (identifier omitted)
    type Draft: RecordDraft;

    /// The stable identifier of this record
    fn id(&self) -> RecordId;

    /// Copy the non-identifier fields into a draft, for editing
    fn to_draft(&self) -> Self::Draft;

    /// The display text of a field, for table cells
    ///
    /// Unknown field names return an empty string; the table renders them
    /// as blank cells rather than failing.
    fn field_text(&self, field: &str) -> String;
}

// ============================================================================
// RecordDraft Trait
// ============================================================================

/// The mutable edit buffer of a record
///
/// Drafts are keyed by schema field name with raw string values, matching
/// what the form inputs produce. `Default` is the empty draft the form
/// resets to on mount, on cancel and after a successful submit.
pub trait RecordDraft: Clone + Default + PartialEq + Serialize + Send + Sync + 'static {
    /// Read a field value by schema name (empty string if unknown)
    fn field(&self, name: &str) -> String;

    /// Set a single field by schema name; unknown names are ignored
    fn set_field(&mut self, name: &str, value: &str);
}
