//! Traits the domain expects its adapters to implement.

mod item_repository;

#[cfg(test)]
pub use item_repository::MockItemRepository;
pub use item_repository::{ItemRepository, ItemRepositoryError};
