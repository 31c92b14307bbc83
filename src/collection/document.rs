use smallvec::SmallVec;

use crate::common::{Value, DOC_ID};
use crate::errors::{ErrorKind, MemoDbError, MemoDbResult};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Field name list returned by [Document::fields].
pub type FieldVec = SmallVec<[String; 8]>;

/// Represents a schemaless document in a memodb collection.
///
/// A document is composed of key-value pairs. The key is always a [String]
/// and the value is a [Value], so a single document can mix text, numbers,
/// booleans, lists, and nested documents. Key order is irrelevant.
///
/// Below fields are reserved and owned by the store. They are injected during
/// insertion and silently dropped from update payloads:
///
/// * `_id` - The unique identifier of the document, generated during insertion.
/// * `_fields` - The field names present in the document at creation time.
/// * `_in_sync` - A sync-status flag, seeded to `false` when the caller did
///   not supply one.
///
/// # Examples
///
/// ```rust
/// use memodb::doc;
///
/// let doc = doc! {
///     name: "Alice",
///     age: 30,
///     address: {
///         city: "New York",
///         zip: 10001,
///     },
///     tags: ["admin", "user"],
/// };
/// assert_eq!(doc.size(), 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    data: BTreeMap<String, Value>,
}

impl Document {
    /// Creates a new empty document.
    pub fn new() -> Self {
        Document {
            data: BTreeMap::new(),
        }
    }

    /// Checks if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of key-value pairs in the document.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Associates the specified [Value] with the specified key in this document.
    ///
    /// If the key already exists, its value is replaced.
    ///
    /// # Arguments
    ///
    /// * `key` - The key. Cannot be empty.
    /// * `value` - The value to associate with the key. Can be any type that
    ///   implements `Into<Value>`.
    ///
    /// # Errors
    ///
    /// Returns an error of kind [ErrorKind::InvalidFieldName] if the key is empty.
    pub fn put<T: Into<Value>>(&mut self, key: &str, value: T) -> MemoDbResult<()> {
        if key.is_empty() {
            log::error!("failed to put value in document: empty key");
            return Err(MemoDbError::new(
                "Document key cannot be empty",
                ErrorKind::InvalidFieldName,
            ));
        }
        self.data.insert(key.to_string(), value.into());
        Ok(())
    }

    /// Returns a reference to the value associated with the key, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Checks if the document contains the specified key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Removes the key from the document, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.data.remove(key)
    }

    /// Returns the field names present in the document, in sorted order.
    pub fn fields(&self) -> FieldVec {
        self.data.keys().cloned().collect()
    }

    /// Returns the unique identifier of the document.
    ///
    /// # Errors
    ///
    /// Returns an error of kind [ErrorKind::InvalidId] if the document has not
    /// been inserted yet, i.e. no `_id` has been assigned.
    pub fn id(&self) -> MemoDbResult<&str> {
        self.data
            .get(DOC_ID)
            .and_then(|v| v.as_string())
            .ok_or_else(|| MemoDbError::new("Document has no id", ErrorKind::InvalidId))
    }

    /// Checks whether the document has been assigned an `_id`.
    pub fn has_id(&self) -> bool {
        self.data
            .get(DOC_ID)
            .and_then(|v| v.as_string())
            .is_some()
    }

    /// Returns an iterator over the key-value pairs of the document.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.data.iter()
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "\"{}\": {}", key, value)?;
        }
        write!(f, "}}")
    }
}

/// Strips the surrounding quotes from a stringified `doc!` key.
pub fn normalize(value: &str) -> String {
    value.trim_matches('"').to_string()
}

/// A macro to create a [Document] from literal key-value syntax.
///
/// Keys may be bare identifiers or string literals. Values may be literals,
/// expressions in parentheses, arrays, or nested documents.
///
/// # Examples
///
/// ```rust
/// use memodb::doc;
///
/// let empty = doc!{};
///
/// let simple = doc!{
///     name: "Alice",
///     age: 30
/// };
///
/// // Nested documents and arrays
/// let complex = doc!{
///     user: {
///         name: "Charlie",
///         tags: ["admin", "user"]
///     },
///     values: [1, 2, 3]
/// };
/// ```
#[macro_export]
macro_rules! doc {
    // match an empty document
    () => {
        $crate::collection::Document::new()
    };

    // match a document with key value pairs
    ($($key:tt : $value:tt),* $(,)?) => {
        {
            #[allow(unused_imports)]
            use $crate::doc_value;

            let mut doc = $crate::collection::Document::new();
            $(
                doc.put(&$crate::collection::normalize(stringify!($key)), $crate::doc_value!($value))
                .expect(&format!("Failed to put value {} in document", stringify!($value)));
            )*
            doc
        }
    };
}

/// Helper macro to convert values for the doc! macro.
/// Handles nested documents, arrays, and expressions.
#[macro_export]
macro_rules! doc_value {
    // match a nested document
    ({ $($key:tt : $value:tt),* $(,)? }) => {
        {
            $crate::common::Value::Document($crate::doc!{ $($key : $value),* })
        }
    };

    // match an array of values
    ([ $($value:tt),* $(,)? ]) => {
        $crate::common::Value::Array(vec![$($crate::doc_value!($value)),*])
    };

    // match an expression (variable, function call, arithmetic in parens, literals, etc.)
    ($value:expr) => {
        $crate::common::Value::from($value)
    };
}
