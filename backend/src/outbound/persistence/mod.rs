//! SQLite persistence adapter for the item repository port.
//!
//! [`DieselItemRepository`] implements the domain's `ItemRepository` trait
//! against a local SQLite file. Diesel provides the query layer, with
//! `diesel-async` and `bb8` keeping checkout and query execution off the
//! async runtime's worker threads. Row structs (`models.rs`) and the table
//! definition (`schema.rs`) stay private to this module; everything crossing
//! the port boundary is a domain type, and every database failure is mapped
//! onto the port's error type before it leaves.
//!
//! ```no_run
//! use backend::outbound::persistence::{DbPool, DieselItemRepository, PoolConfig};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("items.db")).await?;
//! let repo = DieselItemRepository::new(pool);
//! # Ok(())
//! # }
//! ```

mod diesel_item_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_item_repository::DieselItemRepository;
pub use migrations::{MIGRATIONS, apply_startup_migrations, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
