//! Concrete implementations of the domain's outbound ports.
//!
//! The domain names what it needs from the outside world as port traits;
//! the adapters here satisfy them against real infrastructure. Currently
//! that is `persistence`, the Diesel/SQLite item repository. Adapters
//! translate types at the boundary and hold no business rules of their own.

pub mod persistence;
