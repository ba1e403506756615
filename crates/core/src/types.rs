//! Core types used throughout Brand Console
//!
//! This module contains the fundamental types shared by the data manager,
//! the API adapter and the UI components: record identifiers, the declarative
//! field schema, and the dispatch operation tags carried on write requests.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Record Identifiers
// ============================================================================

/// Identifier of a managed record
///
/// The remote catalog file is free to use numeric ids (the console mints
/// current-time millis for new records) or string ids; both round-trip
/// through JSON untagged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Str(String),
}

impl RecordId {
    /// Whether this id is the numeric variant
    pub fn is_int(&self) -> bool {
        matches!(self, RecordId::Int(_))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(n) => write!(f, "{n}"),
            RecordId::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Int(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Str(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        RecordId::Str(s)
    }
}

// ============================================================================
// Field Schema
// ============================================================================

/// Input kind of a schema field
///
/// Determines which input control the form renders and which extra
/// validation applies (`Url` fields must parse as absolute URLs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Textarea,
    Password,
    Email,
    Url,
}

impl FieldKind {
    /// The HTML input type attribute for this kind
    ///
    /// `Textarea` has no input type; the form renders a textarea element
    /// instead.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Textarea => "text",
            FieldKind::Password => "password",
            FieldKind::Email => "email",
            FieldKind::Url => "url",
        }
    }

    /// Whether the form renders this kind as a multi-line textarea
    pub fn is_multiline(&self) -> bool {
        matches!(self, FieldKind::Textarea)
    }
}

/// Declarative descriptor of one editable record attribute
///
/// An ordered slice of these drives both the form inputs and the table
/// columns, so the two stay structurally in sync. The identifier field is
/// never part of the schema; it is not directly editable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field name, matching the record attribute and JSON key
    pub name: String,
    /// Human-readable label for form labels and table headers
    pub label: String,
    /// Input kind
    pub kind: FieldKind,
    /// Whether the field must be non-empty on submit
    pub required: bool,
    /// Optional placeholder text for the form input
    pub placeholder: Option<String>,
}

impl FieldDef {
    /// Create a new field definition
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: false,
            placeholder: None,
        }
    }

    /// Mark this field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set a placeholder for the form input
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}

// ============================================================================
// Dispatch Operations
// ============================================================================

/// Operation tag carried on every write request to the dispatch endpoint
///
/// The dispatch collaborator forwards the payload to a CI workflow which
/// performs the actual mutation of the backing file asynchronously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchOperation {
    Create,
    Edit,
    Delete,
}

impl DispatchOperation {
    /// The wire name of this operation
    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchOperation::Create => "create",
            DispatchOperation::Edit => "edit",
            DispatchOperation::Delete => "delete",
        }
    }
}

impl fmt::Display for DispatchOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================
