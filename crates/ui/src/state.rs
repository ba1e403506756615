//! Data manager state
//!
//! This module models the manager's state as one explicit record with a
//! reducer method per UI event, instead of scattering it across implicit
//! component-local state. The async flows in [`crate::flows`] call these
//! reducers around their network round trips; the reducers themselves are
//! synchronous and never touch the network, which keeps every transition
//! directly testable.

use console_core::{ManagedRecord, RecordDraft, RecordId};
use std::collections::HashSet;

// ============================================================================
// Manager State
// ============================================================================

/// The authoritative state owned by the generic data manager
///
/// The record list, draft, editing target, error message and deleting set
/// are owned here exclusively; the form and table components receive
/// read-only snapshots plus event callbacks and own no persisted state.
#[derive(Clone)]
pub struct ManagerState<T: ManagedRecord> {
    /// In-memory record list; replaced wholesale on every successful fetch
    pub records: Vec<T>,
    /// The form's current edit buffer
    pub draft: T::Draft,
    /// Identifier of the record being edited, if any
    pub editing_id: Option<RecordId>,
    /// Current validation or transport failure message (empty = none)
    pub error: String,
    /// Identifiers with an in-flight delete request
    pub deleting_ids: HashSet<RecordId>,
    /// Global busy flag, set during the initial fetch and any write
    pub loading: bool,
    /// Monotonically increasing fetch sequence, guards refetch application
    fetch_seq: u64,
}

impl<T: ManagedRecord> Default for ManagerState<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            draft: T::Draft::default(),
            editing_id: None,
            error: String::new(),
            deleting_ids: HashSet::new(),
            loading: false,
            fetch_seq: 0,
        }
    }
}

impl<T: ManagedRecord> ManagerState<T> {
    /// Create the initial (empty, idle) state
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Draft events
    // ------------------------------------------------------------------

    /// Update a single draft field by schema name; no validation here
    pub fn set_field(&mut self, name: &str, value: &str) {
        self.draft.set_field(name, value);
    }

    /// Begin editing the record with the given id
    ///
    /// Copies the record's non-identifier fields into the draft, sets the
    /// editing target and clears the error. A stale id (row deleted by a
    /// concurrent flow) is a no-op; returns whether the record was found.
    pub fn begin_edit(&mut self, id: &RecordId) -> bool {
        let Some(record) = self.records.iter().find(|r| &r.id() == id) else {
            return false;
        };
        self.draft = record.to_draft();
        self.editing_id = Some(id.clone());
        self.error.clear();
        true
    }

    /// Reset draft, editing target and error unconditionally
    ///
    /// Used on cancel and after a successful submit; calling it twice is
    /// the same as calling it once.
    pub fn reset_form(&mut self) {
        self.draft = T::Draft::default();
        self.editing_id = None;
        self.error.clear();
    }

    // ------------------------------------------------------------------
    // Error events
    // ------------------------------------------------------------------

    /// Set the user-facing error message
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = message.into();
    }

    /// Clear the error message
    pub fn clear_error(&mut self) {
        self.error.clear();
    }

    // ------------------------------------------------------------------
    // Delete tracking
    // ------------------------------------------------------------------

    /// Mark a row's delete request as in flight
    pub fn begin_delete(&mut self, id: RecordId) {
        self.deleting_ids.insert(id);
    }

    /// Clear a row's in-flight marker, success or failure alike
    pub fn finish_delete(&mut self, id: &RecordId) {
        self.deleting_ids.remove(id);
    }

    /// Whether a row's delete is currently in flight
    pub fn is_deleting(&self, id: &RecordId) -> bool {
        self.deleting_ids.contains(id)
    }

    // ------------------------------------------------------------------
    // Fetch sequencing
    // ------------------------------------------------------------------

    /// Start a fetch, returning its sequence token
    ///
    /// Two rapid mutations can race their confirmatory refetches; only the
    /// fetch holding the newest token may replace the list.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.fetch_seq
    }

    /// Replace the record list if `token` is still the newest fetch
    ///
    /// Returns whether the result was applied. A stale token leaves the
    /// list untouched.
    pub fn apply_fetch(&mut self, token: u64, records: Vec<T>) -> bool {
        if token != self.fetch_seq {
            return false;
        }
        self.records = records;
        true
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{TestItem, item};
    use pretty_assertions::assert_eq;

    fn state_with(items: Vec<TestItem>) -> ManagerState<TestItem> {
        let mut state = ManagerState::new();
        let token = state.begin_fetch();
        state.apply_fetch(token, items);
        state
    }

    #[test]
    fn test_initial_state_is_empty_and_idle() {
        let state = ManagerState::<TestItem>::new();
        assert!(state.records.is_empty());
        assert!(state.editing_id.is_none());
        assert!(state.error.is_empty());
        assert!(state.deleting_ids.is_empty());
        assert!(!state.loading);
    }

    #[test]
    fn test_set_field_updates_single_draft_field() {
        let mut state = ManagerState::<TestItem>::new();
        state.set_field("name", "Acme");
        assert_eq!(state.draft.field("name"), "Acme");
        assert_eq!(state.draft.field("description"), "");
    }

    #[test]
    fn test_begin_edit_copies_fields_and_sets_target() {
        let mut state = state_with(vec![item(3, "Acme"), item(4, "Globex")]);
        state.set_error("old error");

        assert!(state.begin_edit(&RecordId::Int(3)));
        assert_eq!(state.editing_id, Some(RecordId::Int(3)));
        assert_eq!(state.draft.field("name"), "Acme");
        assert!(state.error.is_empty());
    }

    #[test]
    fn test_begin_edit_absent_id_is_noop() {
        let mut state = state_with(vec![item(1, "Acme")]);
        state.set_field("name", "typed");

        assert!(!state.begin_edit(&RecordId::Int(3)));
        assert!(state.editing_id.is_none());
        assert_eq!(state.draft.field("name"), "typed");
        assert!(state.error.is_empty());
    }

    #[test]
    fn test_reset_form_is_idempotent() {
        let mut state = state_with(vec![item(1, "Acme")]);
        state.begin_edit(&RecordId::Int(1));
        state.set_error("boom");

        state.reset_form();
        let after_once = (
            state.draft.clone(),
            state.editing_id.clone(),
            state.error.clone(),
        );
        state.reset_form();
        let after_twice = (
            state.draft.clone(),
            state.editing_id.clone(),
            state.error.clone(),
        );

        assert_eq!(after_once, after_twice);
        assert_eq!(state.draft.field("name"), "");
        assert!(state.editing_id.is_none());
    }

    #[test]
    fn test_delete_tracking_is_isolated_per_row() {
        let mut state = ManagerState::<TestItem>::new();
        state.begin_delete(RecordId::Int(7));
        state.begin_delete(RecordId::Int(5));
        assert!(state.is_deleting(&RecordId::Int(5)));
        assert!(state.is_deleting(&RecordId::Int(7)));

        state.finish_delete(&RecordId::Int(5));
        assert!(!state.is_deleting(&RecordId::Int(5)));
        assert!(state.is_deleting(&RecordId::Int(7)));
    }

    #[test]
    fn test_finish_delete_tolerates_unknown_id() {
        let mut state = ManagerState::<TestItem>::new();
        state.finish_delete(&RecordId::Int(99));
        assert!(state.deleting_ids.is_empty());
    }

    #[test]
    fn test_stale_fetch_token_cannot_overwrite_newer_list() {
        let mut state = ManagerState::<TestItem>::new();
        let stale = state.begin_fetch();
        let fresh = state.begin_fetch();

        assert!(state.apply_fetch(fresh, vec![item(2, "Fresh")]));
        assert!(!state.apply_fetch(stale, vec![item(1, "Stale")]));

        assert_eq!(state.records.len(), 1);
        assert_eq!(state.records[0].id(), RecordId::Int(2));
    }

    #[test]
    fn test_apply_fetch_replaces_wholesale() {
        let mut state = state_with(vec![item(1, "Acme"), item(2, "Globex")]);
        let token = state.begin_fetch();
        state.apply_fetch(token, vec![item(3, "Initech")]);
        assert_eq!(state.records.len(), 1);
        assert_eq!(state.records[0].field_text("name"), "Initech");
    }
}
