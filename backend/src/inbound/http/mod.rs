//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod health;
pub mod items;
pub mod state;
pub mod status;
pub mod validation;

pub use error::ApiResult;
