//! The store: collection registry and its concurrency guard.

pub mod memory_store;

pub use memory_store::MemoryDb;
