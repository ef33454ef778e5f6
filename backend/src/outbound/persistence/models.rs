//! Row structs the repository reads and writes through Diesel.
//!
//! Private to the persistence module: the repository converts each row to a
//! domain [`Item`](crate::domain::Item) before it crosses the port boundary,
//! so nothing outside ever sees these shapes.

use diesel::prelude::*;

use super::schema::items;

/// Row struct for reading from the items table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct ItemRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Insertable struct for creating new item records.
///
/// The id column is omitted so SQLite assigns the next rowid.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = items)]
pub(crate) struct NewItemRow<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
}

/// Changeset struct for replacing existing item records.
///
/// `treat_none_as_null` makes an absent description clear the stored
/// column instead of leaving it untouched. Replacement is whole-record,
/// never partial.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = items)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct ItemChangeset<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
}
