//! # Data Form Component
//!
//! Schema-driven entry form for the generic data manager.
//!
//! Renders one input per field definition, a validation/transport error
//! banner, and Add/Save + Cancel actions. The form is pure rendering plus
//! event relay: it holds no persisted state and performs no validation —
//! the data manager validates on submit.

use console_core::{FieldDef, RecordDraft};
use dioxus::prelude::*;

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct DataFormProps<D: RecordDraft> {
    /// Snapshot of the current edit buffer
    pub draft: D,

    /// Field schema driving input order and kinds
    pub defs: Vec<FieldDef>,

    /// Whether an existing record is being edited
    pub editing: bool,

    /// Current error message (empty = none shown)
    pub error: String,

    /// Field change events, carrying (field name, new raw value)
    pub on_change: EventHandler<(String, String)>,

    /// Form submission (validation happens in the caller)
    pub on_submit: EventHandler<()>,

    /// Explicit cancel of an in-progress edit
    pub on_cancel: EventHandler<()>,
}

// ============================================================================
// Main Component
// ============================================================================

/// Schema-driven form for creating and editing records
pub fn DataForm<D: RecordDraft>(props: DataFormProps<D>) -> Element {
    let on_change = props.on_change;
    let on_submit = props.on_submit;
    let on_cancel = props.on_cancel;

    let title = if props.editing { "Edit" } else { "Add" };
    let submit_label = if props.editing { "Save" } else { "Add" };

    rsx! {
        form {
            class: "data-form",
            onsubmit: move |e| {
                e.prevent_default();
                on_submit.call(());
            },

            h2 { class: "data-form-title", "{title}" }

            // One input per schema entry, in schema order
            for def in props.defs.iter() {
                label {
                    key: "{def.name}",
                    class: "data-form-field",

                    span { class: "data-form-label",
                        "{def.label}"
                        if def.required {
                            span { class: "data-form-required", "*" }
                        }
                    }

                    if def.kind.is_multiline() {
                        textarea {
                            class: "data-form-input",
                            name: "{def.name}",
                            rows: "3",
                            value: "{props.draft.field(&def.name)}",
                            placeholder: def.placeholder.as_deref().unwrap_or(""),
                            oninput: {
                                let name = def.name.clone();
                                move |e: Event<FormData>| on_change.call((name.clone(), e.value()))
                            },
                        }
                    } else {
                        input {
                            class: "data-form-input",
                            name: "{def.name}",
                            r#type: "{def.kind.input_type()}",
                            value: "{props.draft.field(&def.name)}",
                            placeholder: def.placeholder.as_deref().unwrap_or(""),
                            oninput: {
                                let name = def.name.clone();
                                move |e: Event<FormData>| on_change.call((name.clone(), e.value()))
                            },
                        }
                    }
                }
            }

            // Error banner
            if !props.error.is_empty() {
                div { class: "data-form-error", "{props.error}" }
            }

            // Actions: Cancel only appears while editing
            div { class: "data-form-actions",
                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    "{submit_label}"
                }

                if props.editing {
                    button {
                        r#type: "button",
                        class: "btn btn-secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
