//! Item data model.

use std::fmt;

/// Validation errors returned by [`ItemName::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    EmptyName,
    NameTooLong { max: usize },
}

impl fmt::Display for ItemValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::NameTooLong { max } => {
                write!(f, "name must be at most {max} characters")
            }
        }
    }
}

impl std::error::Error for ItemValidationError {}

/// Store-assigned item identifier.
///
/// Identifiers are allocated by the item store on insert; callers never
/// choose them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(i64);

impl ItemId {
    /// Wrap a raw identifier previously issued by the store.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Access the raw identifier value.
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ItemId> for i64 {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

/// Maximum allowed length for an item name, counted in characters.
pub const ITEM_NAME_MAX: usize = 128;

/// Human readable item name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemName(String);

impl ItemName {
    /// Validate and construct an [`ItemName`] from owned input.
    pub fn new(name: impl Into<String>) -> Result<Self, ItemValidationError> {
        Self::from_owned(name.into())
    }

    fn from_owned(name: String) -> Result<Self, ItemValidationError> {
        if name.trim().is_empty() {
            return Err(ItemValidationError::EmptyName);
        }

        // Counted in characters rather than bytes so multi-byte names are
        // not cut short of the documented limit.
        if name.chars().count() > ITEM_NAME_MAX {
            return Err(ItemValidationError::NameTooLong { max: ITEM_NAME_MAX });
        }

        Ok(Self(name))
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<ItemName> for String {
    fn from(value: ItemName) -> Self {
        value.0
    }
}

impl TryFrom<String> for ItemName {
    type Error = ItemValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Persisted item.
///
/// ## Invariants
/// - `id` was assigned by the item store.
/// - `name` is non-empty once trimmed and at most [`ITEM_NAME_MAX`]
///   characters long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    name: ItemName,
    description: Option<String>,
}

impl Item {
    /// Build an [`Item`] from validated components.
    pub fn new(id: ItemId, name: ItemName, description: Option<String>) -> Self {
        Self {
            id,
            name,
            description,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Validated item name.
    pub fn name(&self) -> &ItemName {
        &self.name
    }

    /// Optional free-form description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Validated payload for creating or replacing an item.
///
/// A draft carries everything except the identifier, which the store
/// assigns on insert. Replacing an item overwrites both fields, so a
/// draft without a description clears any stored one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    name: ItemName,
    description: Option<String>,
}

impl ItemDraft {
    /// Build a draft from validated components.
    pub fn new(name: ItemName, description: Option<String>) -> Self {
        Self { name, description }
    }

    /// Validated item name.
    pub fn name(&self) -> &ItemName {
        &self.name
    }

    /// Optional free-form description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
