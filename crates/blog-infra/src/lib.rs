//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//! This crate contains the document store adapters.
//!
//! ## Feature Flags
//!
//! - `mongo` - MongoDB document store support
//!
//! Without features, only the in-memory store is available.

pub mod store;

// Re-exports - In-Memory
pub use store::InMemoryPostStore;

#[cfg(feature = "mongo")]
pub use store::MongoPostStore;
