use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::collection::{prepare_document, Document};
use crate::common::RESERVED_FIELDS;
use crate::errors::MemoDbResult;
use crate::filter::Matcher;

/// An embedded, in-process document store.
///
/// `MemoryDb` owns a mapping from collection name to an insertion-ordered
/// sequence of documents. Collections are created implicitly on first insert
/// and never deleted. All data lives in memory; nothing is persisted.
///
/// # Concurrency
///
/// The collection mapping sits behind a single read-write lock. Reads
/// ([MemoryDb::find] and the collection inspection helpers) take the shared
/// lock; [MemoryDb::insert] and [MemoryDb::update] take the exclusive lock
/// over their full critical section, including implicit collection creation.
/// Filter compilation and document preparation happen before the lock is
/// acquired, and no lock scope ever nests another.
///
/// `MemoryDb` is cheap to clone; all clones share the same underlying state
/// through `Arc`, so a clone can be handed to each worker thread.
///
/// # Examples
///
/// ```rust
/// use memodb::{doc, MemoryDb};
///
/// # fn main() -> memodb::errors::MemoDbResult<()> {
/// let db = MemoryDb::new("example");
/// db.insert("users", doc! { name: "John", age: 30 })?;
///
/// let users = db.find("users", &doc! { name: "John" })?;
/// assert_eq!(users.len(), 1);
///
/// let updated = db.update("users", &doc! { name: "John" }, &doc! { age: 31 })?;
/// assert_eq!(updated, 1);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct MemoryDb {
    inner: Arc<MemoryDbInner>,
}

struct MemoryDbInner {
    name: String,
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryDb {
    /// Constructs an empty store with the given display name.
    ///
    /// The name is informational only; it does not affect any operation.
    pub fn new(name: &str) -> Self {
        MemoryDb {
            inner: Arc::new(MemoryDbInner {
                name: name.to_string(),
                collections: RwLock::new(HashMap::new()),
            }),
        }
    }

    /// Returns the display name of the store.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Inserts a document into the named collection.
    ///
    /// The document first passes through the insert pipeline, which assigns
    /// `_id`, captures `_fields`, and seeds `_in_sync`. The collection is
    /// created if it does not exist yet; creation and append happen under the
    /// same exclusive lock, so concurrent inserts into a new collection are
    /// safe.
    ///
    /// # Arguments
    ///
    /// * `collection_name` - The target collection, created on first use
    /// * `doc` - The caller-supplied document
    pub fn insert(&self, collection_name: &str, doc: Document) -> MemoDbResult<()> {
        let doc = prepare_document(doc)?;

        let mut collections = self.inner.collections.write();
        let collection = collections
            .entry(collection_name.to_string())
            .or_insert_with(|| {
                log::debug!("creating collection '{}'", collection_name);
                Vec::new()
            });
        collection.push(doc);
        Ok(())
    }

    /// Returns every document in the named collection that satisfies the
    /// filter, in insertion order.
    ///
    /// An unknown collection behaves as an empty one; the result is an empty
    /// vector, never an error. An empty filter matches every document.
    ///
    /// # Arguments
    ///
    /// * `collection_name` - The collection to scan
    /// * `filter` - Mapping from field name to expected value; text values
    ///   are regex patterns, other values are compared structurally
    ///
    /// # Errors
    ///
    /// Returns an error of kind [crate::errors::ErrorKind::FilterError] if
    /// the filter contains an invalid regex pattern.
    pub fn find(&self, collection_name: &str, filter: &Document) -> MemoDbResult<Vec<Document>> {
        let matcher = Matcher::compile(filter)?;

        let collections = self.inner.collections.read();
        let matched = collections
            .get(collection_name)
            .map(|collection| {
                collection
                    .iter()
                    .filter(|doc| matcher.matches(doc))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(matched)
    }

    /// Applies a partial update to every document in the named collection
    /// that satisfies the filter.
    ///
    /// Each key of the update payload is written into every matched document,
    /// except the reserved fields `_id`, `_fields` and `_in_sync`, which are
    /// silently dropped from the payload regardless of their values.
    ///
    /// # Returns
    ///
    /// The number of documents matched (and therefore touched), not the
    /// number of keys actually changed.
    ///
    /// # Errors
    ///
    /// Returns an error of kind [crate::errors::ErrorKind::FilterError] if
    /// the filter contains an invalid regex pattern.
    pub fn update(
        &self,
        collection_name: &str,
        filter: &Document,
        update: &Document,
    ) -> MemoDbResult<usize> {
        let matcher = Matcher::compile(filter)?;

        let mut collections = self.inner.collections.write();
        let Some(collection) = collections.get_mut(collection_name) else {
            return Ok(0);
        };

        let mut updated_count = 0;
        for doc in collection.iter_mut() {
            if !matcher.matches(doc) {
                continue;
            }

            for (key, value) in update.iter() {
                if RESERVED_FIELDS.contains(&key.as_str()) {
                    log::debug!("dropping reserved key '{}' from update payload", key);
                    continue;
                }
                doc.put(key, value.clone())?;
            }
            updated_count += 1;
        }

        Ok(updated_count)
    }

    /// Returns the names of all existing collections, sorted.
    pub fn collection_names(&self) -> Vec<String> {
        let collections = self.inner.collections.read();
        let mut names: Vec<String> = collections.keys().cloned().collect();
        names.sort();
        names
    }

    /// Checks whether the named collection has been created.
    pub fn has_collection(&self, collection_name: &str) -> bool {
        let collections = self.inner.collections.read();
        collections.contains_key(collection_name)
    }

    /// Returns the number of documents in the named collection.
    ///
    /// An unknown collection has size 0.
    pub fn size_of(&self, collection_name: &str) -> usize {
        let collections = self.inner.collections.read();
        collections
            .get(collection_name)
            .map(|collection| collection.len())
            .unwrap_or(0)
    }
}
