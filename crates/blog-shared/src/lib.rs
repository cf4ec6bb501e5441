//! # Blog Shared
//!
//! Wire types shared between the API server and its test harness.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
