//! Port abstraction for item persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Item, ItemDraft, ItemId};

/// Persistence errors raised by item repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemRepositoryError {
    /// Repository connection could not be established.
    #[error("item repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("item repository query failed: {message}")]
    Query { message: String },
}

impl ItemRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for item persistence.
///
/// Reads return `Option` or an empty collection when nothing matches;
/// mutations report whether a record was touched. Only infrastructure
/// failures surface as [`ItemRepositoryError`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Persist a draft and return the stored item with its assigned id.
    async fn insert(&self, draft: &ItemDraft) -> Result<Item, ItemRepositoryError>;

    /// Fetch every stored item in no particular order.
    async fn list_all(&self) -> Result<Vec<Item>, ItemRepositoryError>;

    /// Fetch an item by identifier.
    async fn get_by_id(&self, id: ItemId) -> Result<Option<Item>, ItemRepositoryError>;

    /// Replace both fields of an existing item, returning the stored
    /// result or `None` when the id is unknown.
    async fn update(
        &self,
        id: ItemId,
        draft: &ItemDraft,
    ) -> Result<Option<Item>, ItemRepositoryError>;

    /// Delete an item by identifier, reporting whether a row was removed.
    async fn delete_by_id(&self, id: ItemId) -> Result<bool, ItemRepositoryError>;
}
