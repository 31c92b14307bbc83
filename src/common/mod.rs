//! Common types and utilities shared across the crate.

use parking_lot::RwLock;
use std::sync::Arc;

pub mod constants;
pub mod value;

pub use constants::*;
pub use value::Value;

/// A thread-safe shared mutable cell.
pub type Atomic<T> = Arc<RwLock<T>>;

/// Wraps a value in an [Atomic] cell.
pub fn atomic<T>(t: T) -> Atomic<T> {
    Arc::new(RwLock::new(t))
}
