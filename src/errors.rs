use backtrace::Backtrace;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::result::Result;

use crate::common::{atomic, Atomic};

/// Error kinds for memodb operations.
///
/// Each kind describes a category of failure, enabling precise error handling
/// without string matching on messages.
///
/// # Examples
///
/// ```rust,ignore
/// use memodb::errors::{MemoDbError, ErrorKind, MemoDbResult};
///
/// fn example() -> MemoDbResult<()> {
///     Err(MemoDbError::new("Invalid regex pattern", ErrorKind::FilterError))
/// }
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    /// Error during filter compilation or evaluation
    FilterError,
    /// The document has no valid identifier
    InvalidId,
    /// Invalid field name (e.g. empty key)
    InvalidFieldName,
    /// Invalid data type for operation
    InvalidDataType,
    /// The operation is not valid in the current context
    InvalidOperation,
    /// Internal error (usually indicates a bug)
    InternalError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::FilterError => write!(f, "Filter error"),
            ErrorKind::InvalidId => write!(f, "Invalid ID"),
            ErrorKind::InvalidFieldName => write!(f, "Invalid field name"),
            ErrorKind::InvalidDataType => write!(f, "Invalid data type"),
            ErrorKind::InvalidOperation => write!(f, "Invalid operation"),
            ErrorKind::InternalError => write!(f, "Internal error"),
        }
    }
}

/// Custom memodb error type.
///
/// `MemoDbError` encapsulates the error message, kind, and optional cause.
/// It supports error chaining and backtraces for debugging.
///
/// # Examples
///
/// ```rust,ignore
/// use memodb::errors::{MemoDbError, ErrorKind};
///
/// // Create a simple error
/// let err = MemoDbError::new("Invalid regex pattern", ErrorKind::FilterError);
///
/// // Create an error with a cause
/// let cause = MemoDbError::new("Empty field name", ErrorKind::InvalidFieldName);
/// let err = MemoDbError::new_with_cause("Insert failed", ErrorKind::InvalidOperation, cause);
/// ```
///
/// # Type alias
///
/// The `MemoDbResult<T>` type alias is equivalent to `Result<T, MemoDbError>`
/// and is used throughout the codebase for operations that can fail.
#[derive(Clone)]
pub struct MemoDbError {
    message: String,
    error_kind: ErrorKind,
    cause: Option<Box<MemoDbError>>,
    backtrace: Atomic<Backtrace>,
}

impl MemoDbError {
    /// Creates a new `MemoDbError` with the specified message and error kind.
    ///
    /// # Arguments
    ///
    /// * `message` - A description of the error
    /// * `error_kind` - The category of error
    ///
    /// # Returns
    ///
    /// A new `MemoDbError` instance.
    pub fn new(message: &str, error_kind: ErrorKind) -> Self {
        MemoDbError {
            message: message.to_string(),
            error_kind,
            cause: None,
            backtrace: atomic(Backtrace::new()),
        }
    }

    /// Creates a new `MemoDbError` with a cause error.
    ///
    /// This creates an error chain where the cause error is preserved for debugging.
    ///
    /// # Arguments
    ///
    /// * `message` - A description of the error
    /// * `error_kind` - The category of error
    /// * `cause` - The underlying error that caused this error
    ///
    /// # Returns
    ///
    /// A new `MemoDbError` instance with the cause error attached.
    pub fn new_with_cause(message: &str, error_kind: ErrorKind, cause: MemoDbError) -> Self {
        MemoDbError {
            message: message.to_string(),
            error_kind,
            cause: Some(Box::new(cause)),
            backtrace: atomic(Backtrace::new()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.error_kind
    }

    pub fn cause(&self) -> Option<&Box<MemoDbError>> {
        self.cause.as_ref()
    }
}

impl Display for MemoDbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for MemoDbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // print error message with stack trace followed by cause
        match &self.cause {
            Some(cause) => write!(f, "{}\nCaused by: {:?}", self.message, cause),
            None => write!(f, "{}\n{:?}", self.message, self.backtrace.read()),
        }
    }
}

impl Error for MemoDbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

/// A result type alias for memodb operations.
///
/// `MemoDbResult<T>` is shorthand for `Result<T, MemoDbError>`.
/// All fallible memodb operations return this type.
///
/// # Examples
///
/// ```rust,ignore
/// use memodb::errors::MemoDbResult;
///
/// fn collection_size(name: &str) -> MemoDbResult<usize> {
///     Ok(0)
/// }
/// ```
pub type MemoDbResult<T> = Result<T, MemoDbError>;

// From trait implementations for automatic error conversion
impl From<std::fmt::Error> for MemoDbError {
    fn from(err: std::fmt::Error) -> Self {
        MemoDbError::new(
            &format!("Formatting error: {}", err),
            ErrorKind::InternalError,
        )
    }
}

impl From<regex::Error> for MemoDbError {
    fn from(err: regex::Error) -> Self {
        MemoDbError::new(
            &format!("Invalid regex pattern: {}", err),
            ErrorKind::FilterError,
        )
    }
}

impl From<String> for MemoDbError {
    fn from(msg: String) -> Self {
        MemoDbError::new(&msg, ErrorKind::InternalError)
    }
}

impl From<&str> for MemoDbError {
    fn from(msg: &str) -> Self {
        MemoDbError::new(msg, ErrorKind::InternalError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memodb_error_new_creates_error() {
        let error = MemoDbError::new("An error occurred", ErrorKind::FilterError);
        assert_eq!(error.message, "An error occurred");
        assert_eq!(error.error_kind, ErrorKind::FilterError);
        assert!(error.cause.is_none());
    }

    #[test]
    fn memodb_error_new_with_cause_creates_error() {
        let cause = MemoDbError::new("Empty field name", ErrorKind::InvalidFieldName);
        let error =
            MemoDbError::new_with_cause("Insert failed", ErrorKind::InvalidOperation, cause);
        assert_eq!(error.message(), "Insert failed");
        assert_eq!(error.kind(), &ErrorKind::InvalidOperation);
        assert!(error.cause().is_some());
        assert_eq!(
            error.cause().map(|c| c.kind().clone()),
            Some(ErrorKind::InvalidFieldName)
        );
    }

    #[test]
    fn memodb_error_display_shows_message() {
        let error = MemoDbError::new("something broke", ErrorKind::InternalError);
        assert_eq!(format!("{}", error), "something broke");
    }

    #[test]
    fn memodb_error_source_chains_cause() {
        let cause = MemoDbError::new("root cause", ErrorKind::InvalidDataType);
        let error = MemoDbError::new_with_cause("outer", ErrorKind::InternalError, cause);
        let source = error.source();
        assert!(source.is_some());
        assert_eq!(format!("{}", source.unwrap()), "root cause");
    }

    #[test]
    fn memodb_error_from_regex_error() {
        let regex_err = regex::Regex::new("(?P<invalid>").unwrap_err();
        let error: MemoDbError = regex_err.into();
        assert_eq!(error.kind(), &ErrorKind::FilterError);
        assert!(error.message().contains("Invalid regex pattern"));
    }

    #[test]
    fn memodb_error_from_str() {
        let error: MemoDbError = "plain message".into();
        assert_eq!(error.kind(), &ErrorKind::InternalError);
        assert_eq!(error.message(), "plain message");
    }

    #[test]
    fn error_kind_display() {
        assert_eq!(format!("{}", ErrorKind::FilterError), "Filter error");
        assert_eq!(format!("{}", ErrorKind::InvalidId), "Invalid ID");
        assert_eq!(format!("{}", ErrorKind::InvalidFieldName), "Invalid field name");
    }
}
