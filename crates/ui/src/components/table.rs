//! # Data Table Component
//!
//! Schema-driven listing of managed records with per-row actions.
//!
//! Columns come from the same field schema the form renders, prefixed by
//! an Id column and followed by an Actions column, so table and form stay
//! structurally in sync. A full-surface overlay covers the table while
//! the global loading flag is set; rows with an in-flight delete get
//! their action buttons disabled and a local spinner in place of the
//! Delete label. Pure rendering: no validation, no network access.

use console_core::{FieldDef, FieldKind, ManagedRecord, RecordId};
use dioxus::prelude::*;
use std::collections::HashSet;

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct DataTableProps<T: ManagedRecord> {
    /// Snapshot of the record list
    pub records: Vec<T>,

    /// Field schema driving the visible columns
    pub defs: Vec<FieldDef>,

    /// Global busy flag (initial fetch or any write)
    pub loading: bool,

    /// Identifiers with an in-flight delete request
    pub deleting_ids: HashSet<RecordId>,

    /// Edit request for a row
    pub on_edit: EventHandler<RecordId>,

    /// Delete request for a row
    pub on_delete: EventHandler<RecordId>,
}

// ============================================================================
// Main Component
// ============================================================================

/// Schema-driven record table with per-row edit/delete controls
pub fn DataTable<T: ManagedRecord>(props: DataTableProps<T>) -> Element {
    let on_edit = props.on_edit;
    let on_delete = props.on_delete;

    // Id + schema fields + actions
    let column_count = props.defs.len() + 2;

    // Alt text for image cells comes from the first schema field (the
    // record's display name by convention).
    let alt_field = props.defs.first().map(|d| d.name.clone()).unwrap_or_default();

    rsx! {
        div { class: "data-table-wrap",

            // Full-surface overlay while the manager is busy
            if props.loading {
                div { class: "data-table-overlay",
                    div { class: "spinner spinner-lg" }
                }
            }

            table { class: "data-table",
                thead {
                    tr {
                        th { "Id" }
                        for def in props.defs.iter() {
                            th { key: "{def.name}", "{def.label}" }
                        }
                        th { "Actions" }
                    }
                }

                tbody {
                    if props.records.is_empty() {
                        tr {
                            td {
                                class: "data-table-empty",
                                colspan: "{column_count}",
                                "No items yet."
                            }
                        }
                    } else {
                        for record in props.records.iter() {
                            tr {
                                key: "{record.id()}",

                                td { class: "data-table-id", "{record.id()}" }

                                for def in props.defs.iter() {
                                    td { key: "{def.name}",
                                        if def.kind == FieldKind::Url {
                                            img {
                                                class: "data-table-image",
                                                src: "{record.field_text(&def.name)}",
                                                alt: "{record.field_text(&alt_field)}",
                                            }
                                        } else {
                                            "{record.field_text(&def.name)}"
                                        }
                                    }
                                }

                                td { class: "data-table-actions",
                                    button {
                                        r#type: "button",
                                        class: "btn btn-edit",
                                        disabled: props.deleting_ids.contains(&record.id()),
                                        onclick: {
                                            let id = record.id();
                                            move |_| on_edit.call(id.clone())
                                        },
                                        "Edit"
                                    }

                                    button {
                                        r#type: "button",
                                        class: "btn btn-delete",
                                        disabled: props.deleting_ids.contains(&record.id()),
                                        onclick: {
                                            let id = record.id();
                                            move |_| on_delete.call(id.clone())
                                        },

                                        if props.deleting_ids.contains(&record.id()) {
                                            span { class: "spinner spinner-sm" }
                                        } else {
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
