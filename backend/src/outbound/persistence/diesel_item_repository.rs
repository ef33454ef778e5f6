//! SQLite-backed `ItemRepository` implementation using Diesel ORM.
//!
//! This adapter implements the domain's `ItemRepository` port, providing
//! durable storage for items in a local SQLite file. Identifiers are
//! assigned by the database on insert and returned via `RETURNING`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{ItemRepository, ItemRepositoryError};
use crate::domain::{Item, ItemDraft, ItemId, ItemName};

use super::models::{ItemChangeset, ItemRow, NewItemRow};
use super::pool::{DbPool, PoolError};
use super::schema::items;

/// Diesel-backed implementation of the `ItemRepository` port.
///
/// Each operation checks a connection out of the pool for its own
/// duration, so repository instances can be shared freely across
/// handlers and workers.
#[derive(Clone)]
pub struct DieselItemRepository {
    pool: DbPool,
}

impl DieselItemRepository {
    /// Wrap `pool` in a repository handle.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain item repository errors.
fn map_pool_error(error: PoolError) -> ItemRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            ItemRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to domain item repository errors.
fn map_diesel_error(error: diesel::result::Error) -> ItemRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "sqlite statement failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "sqlite statement failed"
        ),
    }

    match error {
        DieselError::NotFound => ItemRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => ItemRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            ItemRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(_, _) => ItemRepositoryError::query("database error"),
        _ => ItemRepositoryError::query("database error"),
    }
}

/// Convert a database row to a domain [`Item`].
///
/// Rows are validated on the way out so a record written by another
/// tool cannot smuggle an invalid name into the domain.
fn row_to_item(row: ItemRow) -> Result<Item, ItemRepositoryError> {
    let ItemRow {
        id,
        name,
        description,
    } = row;

    let name = ItemName::new(name)
        .map_err(|err| ItemRepositoryError::query(format!("stored item {id} is invalid: {err}")))?;

    Ok(Item::new(ItemId::new(id), name, description))
}

fn draft_to_new_row(draft: &ItemDraft) -> NewItemRow<'_> {
    NewItemRow {
        name: draft.name().as_ref(),
        description: draft.description(),
    }
}

fn draft_to_changeset(draft: &ItemDraft) -> ItemChangeset<'_> {
    ItemChangeset {
        name: draft.name().as_ref(),
        description: draft.description(),
    }
}

#[async_trait]
impl ItemRepository for DieselItemRepository {
    async fn insert(&self, draft: &ItemDraft) -> Result<Item, ItemRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: ItemRow = diesel::insert_into(items::table)
            .values(&draft_to_new_row(draft))
            .returning(ItemRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_item(row)
    }

    async fn list_all(&self) -> Result<Vec<Item>, ItemRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ItemRow> = items::table
            .select(ItemRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_item).collect()
    }

    async fn get_by_id(&self, id: ItemId) -> Result<Option<Item>, ItemRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ItemRow> = items::table
            .find(id.value())
            .select(ItemRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_item).transpose()
    }

    async fn update(
        &self,
        id: ItemId,
        draft: &ItemDraft,
    ) -> Result<Option<Item>, ItemRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Zero matched rows leave RETURNING empty, which surfaces here as
        // NotFound and becomes None via optional().
        let row: Option<ItemRow> = diesel::update(items::table.find(id.value()))
            .set(&draft_to_changeset(draft))
            .returning(ItemRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_item).transpose()
    }

    async fn delete_by_id(&self, id: ItemId) -> Result<bool, ItemRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(items::table.find(id.value()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}
