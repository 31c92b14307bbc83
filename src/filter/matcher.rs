use regex::Regex;

use crate::collection::Document;
use crate::common::Value;
use crate::errors::{ErrorKind, MemoDbError, MemoDbResult};

/// A single compiled filter predicate.
#[derive(Debug)]
enum Predicate {
    /// Unanchored regular expression test against a text field.
    Pattern(Regex),
    /// Deep structural equality test.
    Equals(Value),
}

/// A compiled filter that decides whether a document satisfies it.
///
/// A filter is a [Document] mapping field names to expected values. An
/// expected text value is treated as a regular expression pattern; any other
/// value is compared for deep structural equality.
///
/// The matcher is compiled once per scan so regex patterns are parsed a
/// single time, not per document.
///
/// # Matching rules
///
/// * A filter entry whose field is absent from the document contributes
///   neither a pass nor a failure. Since a document only matches when every
///   entry passes, any absent filter key forces a non-match, except for the
///   degenerate empty filter which matches every document.
/// * A regex entry passes iff the document's field holds text containing a
///   match for the pattern anywhere in the string. A present non-text value
///   simply fails the test; it never aborts the scan.
/// * An equality entry passes iff the values are deeply structurally equal,
///   same kind and same contents, recursively for composite values.
///
/// # Examples
///
/// ```rust
/// use memodb::doc;
/// use memodb::filter::Matcher;
///
/// let matcher = Matcher::compile(&doc! { name: "Jo.*" }).unwrap();
/// assert!(matcher.matches(&doc! { name: "John", age: 30 }));
/// assert!(!matcher.matches(&doc! { name: "Jane" }));
/// ```
#[derive(Debug)]
pub struct Matcher {
    predicates: Vec<(String, Predicate)>,
}

impl Matcher {
    /// Compiles a filter document into a reusable matcher.
    ///
    /// # Arguments
    ///
    /// * `filter` - Mapping from field name to expected value. Text values
    ///   compile to regex predicates, all other values to equality predicates.
    ///
    /// # Errors
    ///
    /// Returns an error of kind [ErrorKind::FilterError] if a text value is
    /// not a valid regular expression.
    pub fn compile(filter: &Document) -> MemoDbResult<Matcher> {
        let mut predicates = Vec::with_capacity(filter.size());

        for (field, expected) in filter.iter() {
            let predicate = match expected {
                Value::String(pattern) => match Regex::new(pattern) {
                    Ok(regex) => Predicate::Pattern(regex),
                    Err(e) => {
                        log::error!(
                            "invalid regex pattern '{}' for field '{}': {}",
                            pattern,
                            field,
                            e
                        );
                        return Err(MemoDbError::new(
                            &format!("Invalid regex pattern: {}", e),
                            ErrorKind::FilterError,
                        ));
                    }
                },
                other => Predicate::Equals(other.clone()),
            };
            predicates.push((field.clone(), predicate));
        }

        Ok(Matcher { predicates })
    }

    /// Evaluates whether the document satisfies every filter entry.
    pub fn matches(&self, doc: &Document) -> bool {
        let mut passed = 0;

        for (field, predicate) in &self.predicates {
            let Some(value) = doc.get(field) else {
                continue;
            };

            let test_passed = match predicate {
                Predicate::Pattern(regex) => value
                    .as_string()
                    .map(|text| regex.is_match(text))
                    .unwrap_or(false),
                Predicate::Equals(expected) => value == expected,
            };

            if test_passed {
                passed += 1;
            }
        }

        passed == self.predicates.len()
    }

    /// Returns the number of compiled predicates.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Checks whether the filter was empty.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}
