//! Shared fixtures for the state machine and flow tests
//!
//! Provides a small managed record type, an in-memory state store, and a
//! mock adapter that records every call and simulates the CI pipeline
//! landing writes instantly (so the confirmatory refetch observes them).

use crate::flows::StateStore;
use crate::state::ManagerState;
use async_trait::async_trait;
use console_api::EntityApi;
use console_core::{ConsoleError, ConsoleResult, ManagedRecord, RecordDraft, RecordId};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Mutex;

// ============================================================================
// Test Record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TestItem {
    pub id: RecordId,
    pub name: String,
    pub logo_url: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TestDraft {
    pub name: String,
    pub logo_url: String,
    pub description: String,
}

impl ManagedRecord for TestItem {
    type Draft = TestDraft;

    fn id(&self) -> RecordId {
        self.id.clone()
    }

    fn to_draft(&self) -> TestDraft {
        TestDraft {
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

/// Build a test record with derived logo and description
pub(crate) fn item(id: i64, name: &str) -> TestItem {
    TestItem {
        id: RecordId::Int(id),
        name: name.to_string(),
        logo_url: format!("https://x.test/{}.png", name.to_lowercase()),
        description: "desc".to_string(),
    }
}

// ============================================================================
// In-memory StateStore
// ============================================================================

/// Plain in-memory store standing in for the UI signal
#[derive(Clone)]
pub(crate) struct MemoryStore(Rc<RefCell<ManagerState<TestItem>>>);

impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self(Rc::new(RefCell::new(ManagerState::new())))
    }
}

impl StateStore<TestItem> for MemoryStore {
    fn with<R>(&self, f: impl FnOnce(&ManagerState<TestItem>) -> R) -> R {
        f(&self.0.borrow())
    }

    fn update<R>(&self, f: impl FnOnce(&mut ManagerState<TestItem>) -> R) -> R {
        f(&mut self.0.borrow_mut())
    }
}

// ============================================================================
// Mock Adapter
// ============================================================================

/// One recorded adapter call
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ApiCall {
    FetchAll,
    Create { id: RecordId, draft: TestDraft },
    Update { id: RecordId, draft: TestDraft },
    Delete(RecordId),
}

/// Mock adapter with an in-memory "remote" list
///
/// Writes land immediately, standing in for a CI pipeline that has
/// already finished by the time the confirmatory refetch arrives.
pub(crate) struct MockApi {
    remote: Mutex<Vec<TestItem>>,
    calls: Mutex<Vec<ApiCall>>,
    fail_fetch: Mutex<bool>,
    fail_write: Mutex<Option<u16>>,
}

impl MockApi {
    pub(crate) fn with_remote(remote: Vec<TestItem>) -> Self {
        Self {
            remote: Mutex::new(remote),
            calls: Mutex::new(Vec::new()),
            fail_fetch: Mutex::new(false),
            fail_write: Mutex::new(None),
        }
    }

    /// Make the next fetch fail with a transport error
    pub(crate) fn fail_next_fetch(&self) {
        *self.fail_fetch.lock().unwrap() = true;
    }

    /// Make the next write fail with the given HTTP status
    pub(crate) fn fail_next_write(&self, status: u16) {
        *self.fail_write.lock().unwrap() = Some(status);
    }

    /// Every call the manager has issued, in order
    pub(crate) fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    /// The current remote list
    pub(crate) fn remote(&self) -> Vec<TestItem> {
        self.remote.lock().unwrap().clone()
    }

    fn take_write_failure(&self) -> Option<ConsoleError> {
        self.fail_write
            .lock()
            .unwrap()
            .take()
            .map(|status| ConsoleError::http(status, "injected failure"))
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl EntityApi<TestItem> for MockApi {
    async fn fetch_all(&self) -> ConsoleResult<Vec<TestItem>> {
        self.record(ApiCall::FetchAll);
        if std::mem::take(&mut *self.fail_fetch.lock().unwrap()) {
            return Err(ConsoleError::transport("injected fetch failure"));
        }
        Ok(self.remote())
    }

    async fn create(&self, id: RecordId, draft: &TestDraft) -> ConsoleResult<()> {
        self.record(ApiCall::Create {
            id: id.clone(),
            draft: draft.clone(),
        });
        if let Some(err) = self.take_write_failure() {
            return Err(err);
        }
        self.remote.lock().unwrap().push(TestItem {
            id,
            name: draft.name.clone(),
            logo_url: draft.logo_url.clone(),
            description: draft.description.clone(),
        });
        Ok(())
    }

    async fn update(&self, id: RecordId, draft: &TestDraft) -> ConsoleResult<()> {
        self.record(ApiCall::Update {
            id: id.clone(),
            draft: draft.clone(),
        });
        if let Some(err) = self.take_write_failure() {
            return Err(err);
        }
        let mut remote = self.remote.lock().unwrap();
        if let Some(existing) = remote.iter_mut().find(|r| r.id == id) {
            existing.name = draft.name.clone();
            existing.logo_url = draft.logo_url.clone();
            existing.description = draft.description.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: RecordId) -> ConsoleResult<()> {
        self.record(ApiCall::Delete(id.clone()));
        if let Some(err) = self.take_write_failure() {
            return Err(err);
        }
        self.remote.lock().unwrap().retain(|r| r.id != id);
        Ok(())
    }
}
