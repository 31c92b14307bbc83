use uuid::Uuid;

use crate::collection::Document;
use crate::common::{Value, DOC_FIELDS, DOC_ID, DOC_IN_SYNC, RESERVED_FIELDS};
use crate::errors::MemoDbResult;

/// Transforms a caller-supplied document into a store-ready document.
///
/// Three reserved fields are injected before the document enters a collection:
///
/// 1. `_id` - a freshly generated UUID v4 string. Any caller-supplied `_id`
///    is overwritten.
/// 2. `_fields` - the caller's original field names, excluding the reserved
///    fields themselves, captured as a sorted array of strings. It is set
///    once here and never recomputed on update.
/// 3. `_in_sync` - seeded to `false` only when the key is absent. A
///    caller-supplied value of any type is preserved unchanged.
///
/// The capture in step 2 happens before any injection, so `_id`, `_fields`
/// and `_in_sync` never appear as members of `_fields`.
///
/// Cannot fail under normal operation; the `Result` only surfaces document
/// key validation, and the injected keys are non-empty constants.
pub fn prepare_document(mut doc: Document) -> MemoDbResult<Document> {
    let field_names = caller_fields(&doc);

    doc.put(DOC_ID, Uuid::new_v4().to_string())?;
    doc.put(DOC_FIELDS, Value::Array(field_names))?;
    if !doc.contains_key(DOC_IN_SYNC) {
        doc.put(DOC_IN_SYNC, false)?;
    }

    Ok(doc)
}

/// Collects the caller's own field names, excluding the reserved fields.
fn caller_fields(doc: &Document) -> Vec<Value> {
    doc.fields()
        .iter()
        .filter(|field| !RESERVED_FIELDS.contains(&field.as_str()))
        .map(|field| Value::String(field.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{doc, val};

    #[test]
    fn test_id_injected() {
        let doc = prepare_document(Document::new()).unwrap();
        assert!(doc.has_id());
        assert!(!doc.id().unwrap().is_empty());
    }

    #[test]
    fn test_id_unique_per_document() {
        let first = prepare_document(Document::new()).unwrap();
        let second = prepare_document(Document::new()).unwrap();
        assert_ne!(first.id().unwrap(), second.id().unwrap());
    }

    #[test]
    fn test_caller_supplied_id_overwritten() {
        let doc = prepare_document(doc! { "_id": "my-own-id" }).unwrap();
        assert_ne!(doc.id().unwrap(), "my-own-id");
    }

    #[test]
    fn test_fields_captured_from_caller_keys() {
        let doc = prepare_document(doc! {
            test1key: "test1value",
            test2key: "test2value",
        })
        .unwrap();

        let fields = doc.get(DOC_FIELDS).and_then(|v| v.as_array()).unwrap();
        assert_eq!(fields, [val!("test1key"), val!("test2key")]);
    }

    #[test]
    fn test_fields_excludes_reserved_fields() {
        let doc = prepare_document(doc! {
            "_id": "ignored",
            "_in_sync": true,
            name: "Alice",
        })
        .unwrap();

        let fields = doc.get(DOC_FIELDS).and_then(|v| v.as_array()).unwrap();
        assert_eq!(fields, [val!("name")]);
    }

    #[test]
    fn test_fields_overwrites_caller_supplied_fields() {
        let doc = prepare_document(doc! {
            "_fields": ["bogus"],
            name: "Alice",
        })
        .unwrap();

        let fields = doc.get(DOC_FIELDS).and_then(|v| v.as_array()).unwrap();
        assert_eq!(fields, [val!("name")]);
    }

    #[test]
    fn test_in_sync_defaults_to_false() {
        let doc = prepare_document(Document::new()).unwrap();
        assert_eq!(doc.get(DOC_IN_SYNC), Some(&val!(false)));
    }

    #[test]
    fn test_in_sync_preserved_when_supplied() {
        let doc = prepare_document(doc! { "_in_sync": true }).unwrap();
        assert_eq!(doc.get(DOC_IN_SYNC), Some(&val!(true)));
    }

    #[test]
    fn test_in_sync_preserved_even_when_not_boolean() {
        let doc = prepare_document(doc! { "_in_sync": "pending" }).unwrap();
        assert_eq!(doc.get(DOC_IN_SYNC), Some(&val!("pending")));
    }

    #[test]
    fn test_caller_values_untouched() {
        let doc = prepare_document(doc! { name: "John", age: 30 }).unwrap();
        assert_eq!(doc.get("name"), Some(&val!("John")));
        assert_eq!(doc.get("age"), Some(&val!(30)));
        // three injected fields plus the two caller fields
        assert_eq!(doc.size(), 5);
    }
}
