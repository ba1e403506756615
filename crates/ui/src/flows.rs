//! Async flows of the data manager
//!
//! Each flow is one transition of the manager state machine: load,
//! submit (create or edit), delete. Flows talk to the adapter and apply
//! reducer methods on the shared state before and after the round trip.
//!
//! Flows are written against the small [`StateStore`] abstraction rather
//! than a Dioxus signal directly, so the exact same code paths run under
//! plain async tests with an in-memory store and a mock adapter. The store
//! is only ever borrowed inside the closure passed to `with`/`update`,
//! never across an await point.
//!
//! Every mutating flow ends in a confirmatory refetch rather than a local
//! splice: the backing store is written asynchronously by an external CI
//! pipeline, so the in-memory list must never diverge from whatever the
//! read endpoint currently reports.

use crate::state::ManagerState;
use chrono::Utc;
use console_api::EntityApi;
use console_core::{FieldDef, ManagedRecord, RecordId, validate_draft};
use dioxus::prelude::*;

// ============================================================================
// StateStore
// ============================================================================

/// Shared access to the manager state
///
/// Implemented for the Dioxus signal holding the state, and for plain
/// cell types in tests.
pub trait StateStore<T: ManagedRecord> {
    /// Read the state through a closure
    fn with<R>(&self, f: impl FnOnce(&ManagerState<T>) -> R) -> R;

    /// Mutate the state through a closure
    fn update<R>(&self, f: impl FnOnce(&mut ManagerState<T>) -> R) -> R;
}

impl<T: ManagedRecord> StateStore<T> for Signal<ManagerState<T>> {
    fn with<R>(&self, f: impl FnOnce(&ManagerState<T>) -> R) -> R {
        f(&self.read())
    }

    fn update<R>(&self, f: impl FnOnce(&mut ManagerState<T>) -> R) -> R {
        let mut signal = *self;
        let result = f(&mut signal.write());
        result
    }
}

// ============================================================================
// Flows
// ============================================================================

/// Fetch the record list and replace the in-memory copy
///
/// Used for the initial load and as the confirmatory refetch after every
/// successful write. On failure the current list stays as-is and the
/// failure is logged, never surfaced as a form error; an empty or stale
/// list is a tolerable degraded state for a read.
pub async fn refresh<T, S>(store: &S, api: &dyn EntityApi<T>)
where
    T: ManagedRecord,
    S: StateStore<T>,
{
    let token = store.update(|s| {
        s.loading = true;
        s.begin_fetch()
    });

    match api.fetch_all().await {
        Ok(records) => {
            store.update(|s| {
                if s.apply_fetch(token, records) {
                    tracing::debug!("record list refreshed");
                } else {
                    tracing::debug!("discarding stale fetch result");
                }
            });
        }
        Err(e) => {
            tracing::error!(error = %e, "fetch failed; keeping current record list");
        }
    }

    store.update(|s| s.loading = false);
}

/// Validate and persist the current draft, then refetch
///
/// Validation failures set the error message and issue zero adapter
/// calls. With an editing target set this dispatches an edit; otherwise a
/// create with a client-minted placeholder id (the authoritative id comes
/// from the refetch). On adapter failure the draft and editing target are
/// left intact so the user can retry without re-entering data.
pub async fn submit<T, S>(store: &S, api: &dyn EntityApi<T>, defs: &[FieldDef])
where
    T: ManagedRecord,
    S: StateStore<T>,
{
    // Every submission attempt starts with a clean error slate.
    store.update(|s| s.clear_error());

    let (draft, editing_id) = store.with(|s| (s.draft.clone(), s.editing_id.clone()));

    if let Err(e) = validate_draft(defs, &draft) {
        store.update(|s| s.set_error(e.user_message("save")));
        return;
    }

    store.update(|s| s.loading = true);

    let (result, operation) = match &editing_id {
        Some(id) => (api.update(id.clone(), &draft).await, "save changes"),
        None => {
            let placeholder = RecordId::Int(Utc::now().timestamp_millis());
            (api.create(placeholder, &draft).await, "create the record")
        }
    };

    match result {
        Ok(()) => {
            refresh(store, api).await;
            store.update(|s| s.reset_form());
        }
        Err(e) => {
            tracing::error!(error = %e, operation, "dispatch failed");
            store.update(|s| s.set_error(e.user_message(operation)));
        }
    }

    store.update(|s| s.loading = false);
}

/// Delete one record, tracked per row
///
/// The row's id sits in the deleting set for the duration of the round
/// trip (driving the per-row spinner) and leaves it on completion
/// regardless of outcome. Success refetches the list and resets the form
/// if the deleted row was being edited; failure sets the error message
/// and leaves the list untouched.
pub async fn remove<T, S>(store: &S, api: &dyn EntityApi<T>, id: RecordId)
where
    T: ManagedRecord,
    S: StateStore<T>,
{
    store.update(|s| {
        s.begin_delete(id.clone());
        s.clear_error();
    });

    match api.delete(id.clone()).await {
        Ok(()) => {
            refresh(store, api).await;
            store.update(|s| {
                if s.editing_id.as_ref() == Some(&id) {
                    s.reset_form();
                }
            });
        }
        Err(e) => {
            tracing::error!(error = %e, %id, "delete dispatch failed");
            store.update(|s| s.set_error(e.user_message("delete the record")));
        }
    }

    store.update(|s| s.finish_delete(&id));
}

// ============================================================================
// Tests
// ============================================================================
