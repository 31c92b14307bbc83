//! # memodb - Embedded In-Memory Document Store
//!
//! memodb is a lightweight, embedded, in-process document store written in
//! Rust. Callers insert schemaless documents into named collections, query
//! them with a flat equality/regex filter, and apply partial updates to
//! matching documents.
//!
//! ## Key Features
//!
//! - **Embedded**: No separate server process, no I/O; a linkable component
//! - **Schemaless**: Documents mix text, numbers, booleans, lists, and nested documents
//! - **Filters**: Flat key-value filters; text values are unanchored regex patterns
//! - **Bookkeeping**: `_id`, `_fields`, and `_in_sync` injected on insert and write-protected
//! - **Thread-safe**: A single read-write lock guards the collection registry;
//!   clones of the store share state and can be handed to worker threads
//!
//! ## Quick Start
//!
//! ```rust
//! use memodb::{doc, MemoryDb};
//!
//! # fn main() -> memodb::errors::MemoDbResult<()> {
//! // Create a store
//! let db = MemoryDb::new("example");
//!
//! // Insert documents into an implicitly created collection
//! db.insert("users", doc! { name: "John", age: 30 })?;
//! db.insert("users", doc! { name: "Jane", age: 28 })?;
//!
//! // Find documents; string filter values are regex patterns
//! let johns = db.find("users", &doc! { name: "Jo.*" })?;
//! assert_eq!(johns.len(), 1);
//!
//! // Apply a partial update to every matching document
//! let updated = db.update("users", &doc! { name: "John" }, &doc! { age: 31 })?;
//! assert_eq!(updated, 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`collection`] - Document model and the insert-time document pipeline
//! - [`common`] - Common types, the [Value](common::Value) variant, constants
//! - [`errors`] - Error types and result definitions
//! - [`filter`] - Filter compilation and document matching
//! - [`store`] - The store owning collections and their concurrency guard
//!
//! Persistence, networking, transactions, schema validation, and secondary
//! indexes are deliberately out of scope; a wrapping service owns those
//! concerns and consumes this crate's four operations.

pub mod collection;
pub mod common;
pub mod errors;
pub mod filter;
pub mod store;

pub use collection::Document;
pub use common::Value;
pub use store::MemoryDb;
