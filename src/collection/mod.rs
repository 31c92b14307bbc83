//! Document model and the insert-time document pipeline.

pub mod document;
pub mod pipeline;

pub use document::{normalize, Document, FieldVec};
pub use pipeline::prepare_document;
