//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept a SQLite executor as the first argument.

pub mod place_repo;

pub use place_repo::PlaceRepo;
