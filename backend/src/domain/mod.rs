//! The item domain: entities, validation, errors, and ports.
//!
//! Types here are transport- and storage-agnostic. Invariants live on the
//! types themselves (see [`ItemName`]), so adapters cannot construct invalid
//! values. [`ports`] declares what the domain needs from the outside world;
//! the implementations live under `outbound`.

pub mod error;
pub mod item;
pub mod ports;

pub use self::error::{DomainError, ErrorCode};
pub use self::item::{ITEM_NAME_MAX, Item, ItemDraft, ItemId, ItemName, ItemValidationError};
