//! The brand catalog record
//!
//! One brand entry of the remote `brands.json` file: a stable identifier
//! plus name, logo URL and description. JSON keys are camelCase to match
//! the file the CI pipeline maintains.

use console_core::{FieldDef, FieldKind, ManagedRecord, RecordDraft, RecordId};
use serde::{Deserialize, Serialize};

// ============================================================================
// Record Types
// ============================================================================

/// One brand entry of the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: RecordId,
    pub name: String,
    pub logo_url: String,
    pub description: String,
}

/// Edit buffer for a brand (identifier omitted)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandDraft {
    pub name: String,
    pub logo_url: String,
    pub description: String,
}

impl ManagedRecord for Brand {
    type Draft = BrandDraft;

    fn id(&self) -> RecordId {
        self.id.clone()
    }

    fn to_draft(&self) -> BrandDraft {
        BrandDraft {
            name: self.name.clone(),
            logo_url: self.logo_url.clone(),
            description: self.description.clone(),
        }
    }

    fn field_text(&self, field: &str) -> String {
        match field {
            "name" => self.name.clone(),
            "logoUrl" => self.logo_url.clone(),
            "description" => self.description.clone(),
            _ => String::new(),
        }
    }
}

impl RecordDraft for BrandDraft {
    fn field(&self, name: &str) -> String {
        match name {
            "name" => self.name.clone(),
            "logoUrl" => self.logo_url.clone(),
            "description" => self.description.clone(),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, name: &str, value: &str) {
        match name {
            "name" => self.name = value.to_string(),
            "logoUrl" => self.logo_url = value.to_string(),
            "description" => self.description = value.to_string(),
            _ => {}
        }
    }
}

// ============================================================================
// Field Schema
// ============================================================================

/// The brand field schema, shared by the form and the table
///
/// The identifier is deliberately absent; it is never directly editable.
pub fn brand_field_defs() -> Vec<FieldDef> {
    vec![
        FieldDef::new("name", "Name", FieldKind::Text)
            .required()
            .with_placeholder("e.g. Acme"),
        FieldDef::new("logoUrl", "Logo URL", FieldKind::Url)
            .required()
            .with_placeholder("https://example.com/logo.png"),
        FieldDef::new("description", "Description", FieldKind::Textarea).required(),
    ]
}

// ============================================================================
// Tests
// ============================================================================
