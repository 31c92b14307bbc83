use crate::collection::Document;
use std::fmt::{Display, Formatter};

/// Compare two floats for equality with proper NaN handling.
///
/// Two NaNs compare equal so that [Value] can implement `Eq`.
#[inline]
fn num_eq_float(a: f64, b: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        true
    } else {
        a == b
    }
}

/// Represents a [Document] value. It can be a simple value like [Value::I64],
/// [Value::String] or a complex value like [Value::Document] or [Value::Array].
///
/// # Purpose
/// Provides a unified representation for all value types that can be stored in
/// memodb documents: text, numbers, booleans, nested documents, and lists.
///
/// # Characteristics
/// - **Closed**: The set of supported kinds is fixed at compile time
/// - **Structurally comparable**: Equality is deep; same variant, same contents
/// - **Serializable**: Can be serialized/deserialized with serde (feature gated)
/// - **Default**: Defaults to Null
///
/// # Usage
/// Create values using the From trait or the `val!` macro:
/// ```text
/// let v1: Value = 42.into();           // From i32
/// let v2 = Value::from("hello");       // From &str
/// let v3 = val!(true);                 // Using macro
/// ```
///
/// Access values using as_* methods (returns Option if type matches):
/// ```text
/// if let Some(name) = doc.get("name").and_then(|v| v.as_string()) {
///     println!("Name: {}", name);
/// }
/// ```
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Represents a null value.
    #[default]
    Null,
    /// Represents a boolean value.
    Bool(bool),
    /// Represents an integer value.
    I64(i64),
    /// Represents a floating point value.
    F64(f64),
    /// Represents a string value.
    String(String),
    /// Represents an array value.
    Array(Vec<Value>),
    /// Represents a nested document value.
    Document(Document),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => *a == *b,
            (Value::I64(a), Value::I64(b)) => *a == *b,
            (Value::F64(a), Value::F64(b)) => num_eq_float(*a, *b),
            (Value::String(a), Value::String(b)) => *a == *b,
            (Value::Array(a), Value::Array(b)) => *a == *b,
            (Value::Document(a), Value::Document(b)) => *a == *b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Value {
    /// Checks if the value is [Value::Null].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the boolean value if this is a [Value::Bool], otherwise `None`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer value if this is a [Value::I64], otherwise `None`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::I64(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float value if this is a [Value::F64], otherwise `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::F64(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the string slice if this is a [Value::String], otherwise `None`.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the array slice if this is a [Value::Array], otherwise `None`.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a.as_slice()),
            _ => None,
        }
    }

    /// Returns the nested document if this is a [Value::Document], otherwise `None`.
    pub fn as_document(&self) -> Option<&Document> {
        match self {
            Value::Document(d) => Some(d),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::I64(i) => write!(f, "{}", i),
            Value::F64(v) => write!(f, "{}", v),
            Value::String(s) => write!(f, "\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\"")),
            Value::Array(a) => {
                write!(f, "[")?;
                for (i, value) in a.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, "]")
            }
            Value::Document(d) => write!(f, "{}", d),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::I64(value as i64)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::I64(value as i64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::I64(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::I64(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::I64(value as i64)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::I64(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::I64(value as i64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::F64(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::F64(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::String(value.to_string())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Document> for Value {
    fn from(value: Document) -> Self {
        Value::Document(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

/// A macro to create a `Value` from a given expression.
///
/// This macro simplifies the creation of `Value` instances by automatically
/// converting the provided expression into a `Value` using the `From` trait.
///
/// # Examples
///
/// ```rust
/// use memodb::common::Value;
/// use memodb::val;
///
/// let int_value = val!(42);
/// assert_eq!(int_value, Value::I64(42));
///
/// let string_value = val!("hello");
/// assert_eq!(string_value, Value::String("hello".to_string()));
///
/// let bool_value = val!(true);
/// assert_eq!(bool_value, Value::Bool(true));
/// ```
#[macro_export]
macro_rules! val {
    ($value:expr) => {
        $crate::common::Value::from($value)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc;

    #[test]
    fn test_structural_equality_same_variant() {
        assert_eq!(Value::I64(30), Value::I64(30));
        assert_eq!(Value::String("a".to_string()), Value::from("a"));
        assert_eq!(Value::Bool(true), Value::Bool(true));
        assert_eq!(Value::Null, Value::Null);
    }

    #[test]
    fn test_structural_equality_cross_variant_is_false() {
        // Deep equality requires the same kind, an integer never equals a float
        assert_ne!(Value::I64(30), Value::F64(30.0));
        assert_ne!(Value::Bool(true), Value::I64(1));
        assert_ne!(Value::String("1".to_string()), Value::I64(1));
        assert_ne!(Value::Null, Value::Bool(false));
    }

    #[test]
    fn test_float_nan_equality() {
        assert_eq!(Value::F64(f64::NAN), Value::F64(f64::NAN));
        assert_ne!(Value::F64(f64::NAN), Value::F64(0.0));
        assert_eq!(Value::F64(1.5), Value::F64(1.5));
    }

    #[test]
    fn test_deep_equality_composites() {
        let a = Value::Array(vec![val!(1), val!("x"), Value::Null]);
        let b = Value::Array(vec![val!(1), val!("x"), Value::Null]);
        assert_eq!(a, b);

        let c = Value::Array(vec![val!(1), val!("y"), Value::Null]);
        assert_ne!(a, c);

        let d1 = Value::Document(doc! { city: "NY", zip: 10001 });
        let d2 = Value::Document(doc! { city: "NY", zip: 10001 });
        let d3 = Value::Document(doc! { city: "NY", zip: 10002 });
        assert_eq!(d1, d2);
        assert_ne!(d1, d3);
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(42i32), Value::I64(42));
        assert_eq!(Value::from(42u8), Value::I64(42));
        assert_eq!(Value::from(42i64), Value::I64(42));
        assert_eq!(Value::from(2.5f64), Value::F64(2.5));
        assert_eq!(Value::from('c'), Value::String("c".to_string()));
        assert_eq!(Value::from(Some(1i32)), Value::I64(1));
        assert_eq!(Value::from(None::<i32>), Value::Null);
    }

    #[test]
    fn test_accessors() {
        assert_eq!(val!(true).as_bool(), Some(true));
        assert_eq!(val!(7).as_i64(), Some(7));
        assert_eq!(val!(7).as_f64(), None);
        assert_eq!(val!("hi").as_string(), Some("hi"));
        assert!(Value::Null.is_null());
        assert!(!val!(0).is_null());

        let array = Value::Array(vec![val!(1), val!(2)]);
        assert_eq!(array.as_array().map(|a| a.len()), Some(2));
        assert_eq!(val!(1).as_array(), None);
    }

    #[test]
    fn test_default_is_null() {
        assert_eq!(Value::default(), Value::Null);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Value::Null), "null");
        assert_eq!(format!("{}", val!(3)), "3");
        assert_eq!(format!("{}", val!("a\"b")), "\"a\\\"b\"");
        assert_eq!(
            format!("{}", Value::Array(vec![val!(1), val!(true)])),
            "[1, true]"
        );
    }
}
