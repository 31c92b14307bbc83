//! Filter compilation and document matching.

pub mod matcher;

pub use matcher::Matcher;
