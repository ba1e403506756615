//! # Console API
//!
//! The Entity API Adapter for Brand Console.
//!
//! The data manager never talks to the network directly; it calls the
//! [`EntityApi`] capability set (fetch-all, create, update, delete) and
//! treats whatever sits behind it as an opaque collaborator. The shipped
//! implementation, [`HttpEntityApi`], reads a JSON array from a proxy-read
//! endpoint and posts `{id, <fields>, operation}` payloads to a CI dispatch
//! endpoint.
//!
//! Writes are eventually consistent: the dispatch endpoint only reports
//! whether the dispatch was accepted, the actual file mutation happens later
//! in a CI pipeline. Adapter write operations therefore yield `()` and the
//! manager refetches the list for truth after every confirmed write.

// ============================================================================
// Modules
// ============================================================================

pub mod http;

// ============================================================================
// Re-exports
// ============================================================================

pub use http::{HttpEntityApi, dispatch_payload, records_from_value};

use async_trait::async_trait;
use console_core::{ConsoleResult, ManagedRecord, RecordId};
use std::sync::Arc;

// ============================================================================
// EntityApi Trait
// ============================================================================

/// The capability set the generic data manager drives its persistence with
///
/// All four operations are asynchronous round trips with no automatic
/// retry; retry, if any, is a user-initiated resubmission. Failures are
/// transport-class [`console_core::ConsoleError`] values carrying remote
/// status/detail.
#[async_trait]
pub trait EntityApi<T: ManagedRecord>: Send + Sync {
    /// Fetch the full record list from the read endpoint
    ///
    /// A response that is not a JSON array is a contract violation; there
    /// are no partial results on failure.
    async fn fetch_all(&self) -> ConsoleResult<Vec<T>>;

    /// Dispatch a create for the given draft
    ///
    /// `id` is a client-minted placeholder for the request payload only;
    /// the authoritative identifier comes from the subsequent refetch.
    async fn create(&self, id: RecordId, draft: &T::Draft) -> ConsoleResult<()>;

    /// Dispatch an edit of an existing record
    async fn update(&self, id: RecordId, draft: &T::Draft) -> ConsoleResult<()>;

    /// Dispatch a delete of an existing record
    async fn delete(&self, id: RecordId) -> ConsoleResult<()>;
}

// ============================================================================
// ApiHandle
// ============================================================================

/// Cheaply clonable handle to a shared adapter
///
/// UI component props must be `Clone + PartialEq`; trait objects are
/// neither, so the handle wraps the adapter in an `Arc` and compares by
/// pointer identity (two handles are equal iff they share the adapter).
pub struct ApiHandle<T: ManagedRecord>(Arc<dyn EntityApi<T>>);

impl<T: ManagedRecord> ApiHandle<T> {
    /// Wrap an adapter in a shareable handle
    pub fn new(api: impl EntityApi<T> + 'static) -> Self {
        Self(Arc::new(api))
    }

    /// Wrap an already-shared adapter
    pub fn from_arc(api: Arc<dyn EntityApi<T>>) -> Self {
        Self(api)
    }

    /// Borrow the underlying adapter
    pub fn inner(&self) -> &dyn EntityApi<T> {
        self.0.as_ref()
    }
}

impl<T: ManagedRecord> Clone for ApiHandle<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: ManagedRecord> PartialEq for ApiHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
