//! Diesel view of the SQLite schema.
//!
//! Keep this in lockstep with the migrations under `migrations/`; Diesel
//! type-checks queries against what is declared here, not against the
//! database file. `diesel print-schema` can regenerate it after a
//! migration changes the table.

diesel::table! {
    /// Item records table.
    ///
    /// The `id` column aliases the SQLite rowid, so the store assigns a
    /// fresh identifier on insert. Rowids are 64-bit, hence `BigInt`.
    items (id) {
        /// Primary key: store-assigned integer identifier.
        id -> BigInt,
        /// Required item name (max 128 characters, enforced in the domain).
        name -> Text,
        /// Optional free-form description.
        description -> Nullable<Text>,
    }
}
