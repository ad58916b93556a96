//! Key-value persistence behind a narrow adapter trait.
//!
//! The store never touches the filesystem directly; everything goes through
//! [`StorageAdapter`] so tests can swap in an in-memory or failure-injecting
//! double.

mod file;
mod memory;

pub use file::FileStorageAdapter;
pub use memory::MemoryAdapter;

use thiserror::Error;

/// Fixed keys for the persisted records.
pub mod keys {
    pub const USER: &str = "@telehealth_user";
    pub const APPOINTMENTS: &str = "@telehealth_appointments";
    pub const HEALTH_METRICS: &str = "@telehealth_health_metrics";

    /// Per-email signup record, independent of the session key so logging
    /// out does not forget registered accounts.
    pub fn signup(email: &str) -> String {
        format!("@telehealth_signup_{email}")
    }
}

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Asynchronous key-value storage. Every operation may fail independently;
/// callers decide whether a failure is fatal.
pub trait StorageAdapter: Send + Sync {
    fn read(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, AdapterError>> + Send;

    fn write(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<(), AdapterError>> + Send;

    fn delete(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<(), AdapterError>> + Send;
}

// Lets a store and a test (or two stores simulating a restart) share one
// adapter instance.
impl<A: StorageAdapter> StorageAdapter for std::sync::Arc<A> {
    async fn read(&self, key: &str) -> Result<Option<String>, AdapterError> {
        (**self).read(key).await
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), AdapterError> {
        (**self).write(key, value).await
    }

    async fn delete(&self, key: &str) -> Result<(), AdapterError> {
        (**self).delete(key).await
    }
}
