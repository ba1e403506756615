//! Draft validation against a field schema
//!
//! Validation runs in schema order and stops at the first failing field,
//! so the error message always points at the earliest offending input.
//! It happens entirely before any network call; a draft that fails here
//! never reaches the API adapter.

use crate::error::{ConsoleError, ConsoleResult};
use crate::traits::RecordDraft;
use crate::types::{FieldDef, FieldKind};
use url::Url;

/// Validate a draft against its field schema
///
/// Rules, applied per field in schema order:
/// - `Url` fields must hold a well-formed absolute URL; a required `Url`
///   field must additionally be non-empty. Either failure reports
///   "Valid {label} is required.".
/// - Any other required field must be non-empty after trimming, reported
///   as "{label} is required.".
///
/// Returns the first failure as a [`ConsoleError::FieldValidation`].
pub fn validate_draft<D: RecordDraft>(defs: &[FieldDef], draft: &D) -> ConsoleResult<()> {
    for def in defs {
        let value = draft.field(&def.name);
        let trimmed = value.trim();

        match def.kind {
            FieldKind::Url => {
                let missing = def.required && trimmed.is_empty();
                let malformed = !trimmed.is_empty() && Url::parse(trimmed).is_err();
                if missing || malformed {
                    return Err(ConsoleError::field_validation(
                        &def.name,
                        format!("Valid {} is required.", def.label),
                    ));
                }
            }
            _ => {
                if def.required && trimmed.is_empty() {
                    return Err(ConsoleError::field_validation(
                        &def.name,
                        format!("{} is required.", def.label),
                    ));
                }
            }
        }
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    #[derive(Debug, Clone, Default, PartialEq, Serialize)]
    struct TestDraft {
        name: String,
        #[serde(rename = "logoUrl")]
        logo_url: String,
        description: String,
    }

    impl RecordDraft for TestDraft {
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

    fn defs() -> Vec<FieldDef> {
        vec![
            FieldDef::new("name", "Name", FieldKind::Text).required(),
            FieldDef::new("logoUrl", "Logo URL", FieldKind::Url).required(),
            FieldDef::new("description", "Description", FieldKind::Textarea).required(),
        ]
    }

    fn valid_draft() -> TestDraft {
        TestDraft {
            name: "Acme".to_string(),
            logo_url: "https://x.test/a.png".to_string(),
            description: "desc".to_string(),
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(validate_draft(&defs(), &valid_draft()).is_ok());
    }

    #[test]
    fn test_missing_name_fails_first() {
        let draft = TestDraft {
            name: String::new(),
            ..valid_draft()
        };
        let err = validate_draft(&defs(), &draft).unwrap_err();
        assert_eq!(err.user_message("save"), "Name is required.");
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let draft = TestDraft {
            name: "   ".to_string(),
            ..valid_draft()
        };
        let err = validate_draft(&defs(), &draft).unwrap_err();
        assert_eq!(err.user_message("save"), "Name is required.");
    }

    #[test]
    fn test_malformed_url_fails() {
        let draft = TestDraft {
            logo_url: "not a url".to_string(),
            ..valid_draft()
        };
        let err = validate_draft(&defs(), &draft).unwrap_err();
        assert_eq!(err.user_message("save"), "Valid Logo URL is required.");
        assert!(matches!(
            err,
            ConsoleError::FieldValidation { ref field, .. } if field == "logoUrl"
        ));
    }

    #[test]
    fn test_relative_url_fails() {
        // URL fields require absolute URLs; a bare path does not parse.
        let draft = TestDraft {
            logo_url: "/logos/acme.png".to_string(),
            ..valid_draft()
        };
        assert!(validate_draft(&defs(), &draft).is_err());
    }

    #[test]
    fn test_empty_required_url_fails() {
        let draft = TestDraft {
            logo_url: String::new(),
            ..valid_draft()
        };
        let err = validate_draft(&defs(), &draft).unwrap_err();
        assert_eq!(err.user_message("save"), "Valid Logo URL is required.");
    }

    #[test]
    fn test_optional_empty_url_passes() {
        let optional = vec![FieldDef::new("logoUrl", "Logo URL", FieldKind::Url)];
        let draft = TestDraft::default();
        assert!(validate_draft(&optional, &draft).is_ok());
    }

    #[test]
    fn test_missing_description_reported_after_url() {
        let draft = TestDraft {
            description: "  ".to_string(),
            ..valid_draft()
        };
        let err = validate_draft(&defs(), &draft).unwrap_err();
        assert_eq!(err.user_message("save"), "Description is required.");
    }

    #[test]
    fn test_schema_order_determines_first_error() {
        let draft = TestDraft::default();
        let err = validate_draft(&defs(), &draft).unwrap_err();
        // Everything is empty; the first schema entry wins.
        assert_eq!(err.user_message("save"), "Name is required.");
    }
}
