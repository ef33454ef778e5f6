//! Middleware applied around every route.
//!
//! Currently just [`RequestSpan`], which gives each request a correlation
//! identifier and a tracing span.

pub mod request_span;

pub use request_span::RequestSpan;
