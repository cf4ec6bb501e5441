//! Document store adapters.

mod memory;

#[cfg(feature = "mongo")]
mod mongo;

pub use memory::InMemoryPostStore;

#[cfg(feature = "mongo")]
pub use mongo::MongoPostStore;
