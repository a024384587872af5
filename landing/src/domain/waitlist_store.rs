use async_trait::async_trait;

use crate::domain::waitlist_entry::NewWaitlistEntry;
use crate::utils::error_chain_fmt;

#[derive(thiserror::Error)]
pub enum WaitlistStoreError {
    #[error("{0}")]
    DuplicateEmail(String),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for WaitlistStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// The external persistence service holding waitlist entries. One logical
/// operation: insert a record into the "waitlist" collection.
#[async_trait]
pub trait WaitlistStore: Send + Sync {
    async fn insert_entry(&self, entry: &NewWaitlistEntry) -> Result<(), WaitlistStoreError>;
}
