//! # Blog API Server
//!
//! A four-route CRUD service over a document store. The library surface
//! exists so integration tests can assemble the same app the binary runs.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod state;
