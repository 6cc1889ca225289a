//! Domain types and rules for the places service.
//!
//! This crate has no I/O. The storage layer (`places-db`) and the HTTP
//! layer (`places-api`) both build on the types and validation defined here.

pub mod error;
pub mod place;
pub mod types;
