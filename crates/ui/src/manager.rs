//! # Data Manager Component
//!
//! The generic form + table pair. `DataManager` owns the single
//! [`ManagerState`] record, wires the form and table to the reducer
//! methods, and drives the async flows against whatever adapter sits
//! behind the [`ApiHandle`]. Instantiate it once per record type:
//!
//! ```rust,ignore
//! rsx! {
//!     DataManager {
//!         api: ApiHandle::new(HttpEntityApi::new(read_url, dispatch_url)),
//!         defs: brand_field_defs(),
//!     }
//! }
//! ```

use crate::components::{DataForm, DataTable};
use crate::flows;
use crate::state::ManagerState;
use console_api::ApiHandle;
use console_core::{FieldDef, ManagedRecord, RecordId};
use dioxus::prelude::*;

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct DataManagerProps<T: ManagedRecord> {
    /// The persistence adapter this manager drives
    pub api: ApiHandle<T>,

    /// Field schema shared by the form and the table
    pub defs: Vec<FieldDef>,
}

// ============================================================================
// Main Component
// ============================================================================

/// Generic CRUD manager composing a form and a table over one adapter
pub fn DataManager<T: ManagedRecord>(props: DataManagerProps<T>) -> Element {
    let mut state = use_signal(ManagerState::<T>::new);

    // Initial load; failures leave the (empty) list and are only logged.
    let load_api = props.api.clone();
    use_future(move || {
        let api = load_api.clone();
        async move {
            flows::refresh(&state, api.inner()).await;
        }
    });

    let submit_api = props.api.clone();
    let submit_defs = props.defs.clone();
    let delete_api = props.api.clone();

    // Read-only snapshots handed to the child components
    let (draft, records, editing, error, loading, deleting_ids) = {
        let snapshot = state.read();
        (
            snapshot.draft.clone(),
            snapshot.records.clone(),
            snapshot.editing_id.is_some(),
            snapshot.error.clone(),
            snapshot.loading,
            snapshot.deleting_ids.clone(),
        )
    };

    rsx! {
        div { class: "data-manager",

            DataForm {
                draft,
                defs: props.defs.clone(),
                editing,
                error,
                on_change: move |(name, value): (String, String)| {
                    state.write().set_field(&name, &value);
                },
                on_submit: move |_| {
                    let api = submit_api.clone();
                    let defs = submit_defs.clone();
                    spawn(async move {
                        flows::submit(&state, api.inner(), &defs).await;
                    });
                },
                on_cancel: move |_| {
                    state.write().reset_form();
                },
            }

            DataTable {
                records,
                defs: props.defs.clone(),
                loading,
                deleting_ids,
                on_edit: move |id: RecordId| {
                    state.write().begin_edit(&id);
                },
                on_delete: move |id: RecordId| {
                    let api = delete_api.clone();
                    spawn(async move {
                        flows::remove(&state, api.inner(), id).await;
                    });
                },
            }
        }
    }
}
