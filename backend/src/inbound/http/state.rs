//! State injected into the HTTP handlers.
//!
//! Handlers receive this through `actix_web::web::Data` and see only the
//! domain port, so tests can swap in stubs or mocks without touching I/O.

use std::sync::Arc;

use crate::domain::ports::ItemRepository;

/// Everything the item handlers need to do their work.
#[derive(Clone)]
pub struct HttpState {
    pub items: Arc<dyn ItemRepository>,
}

impl HttpState {
    /// Build state around an item repository implementation.
    pub fn new(items: Arc<dyn ItemRepository>) -> Self {
        Self { items }
    }
}
