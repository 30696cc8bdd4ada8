use std::{error::Error, fmt, io, sync::Arc};

/// Owned, thread-safe error accepted as a cause.
pub type BoxError = Box<dyn Error + Send + Sync>;

/// Signals that a file could not be located.
///
/// A value is built through exactly one of four constructors and is
/// immutable afterwards. Only [`FileNotFoundError::with_file_name`] records a
/// file name. A wrapped cause is shared between clones and is reported
/// through [`Error::source`].
///
/// # Examples
///
/// ```rust
/// use file_not_found::FileNotFoundError;
///
/// let err = FileNotFoundError::with_file_name("config.yaml not found", "config.yaml");
/// assert_eq!(err.message(), "config.yaml not found");
/// assert_eq!(err.file_name(), Some("config.yaml"));
/// assert!(err.cause().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct FileNotFoundError {
    message: String,
    file_name: Option<String>,
    cause: Option<Arc<dyn Error + Send + Sync>>,
}

impl FileNotFoundError {
    /// Creates an error carrying only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            file_name: None,
            cause: None,
        }
    }

    /// Creates an error naming the file that could not be found.
    pub fn with_file_name(message: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            file_name: Some(file_name.into()),
            cause: None,
        }
    }

    /// Wraps a lower-level error. The message is the cause's display text.
    ///
    /// ```rust
    /// use file_not_found::FileNotFoundError;
    ///
    /// let err = FileNotFoundError::from_cause("disk busy");
    /// assert_eq!(err.message(), "disk busy");
    /// assert!(err.cause().is_some());
    /// ```
    pub fn from_cause(cause: impl Into<BoxError>) -> Self {
        let cause: BoxError = cause.into();
        let cause: Arc<dyn Error + Send + Sync> = Arc::from(cause);
        Self {
            message: cause.to_string(),
            file_name: None,
            cause: Some(cause),
        }
    }

    /// Wraps a lower-level error under an explicit message.
    pub fn with_cause(message: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        let cause: BoxError = cause.into();
        Self {
            message: message.into(),
            file_name: None,
            cause: Some(Arc::from(cause)),
        }
    }

    /// Human-readable description given or derived at construction.
    pub fn message(&self) -> &str { &self.message }

    /// Name of the missing file, if one was given at construction.
    pub fn file_name(&self) -> Option<&str> { self.file_name.as_deref() }

    /// The wrapped cause, if any.
    ///
    /// Use `downcast_ref` on the result to recover the concrete type.
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> { self.cause.as_deref() }
}

impl fmt::Display for FileNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.message) }
}

impl Error for FileNotFoundError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn Error + 'static))
    }
}

impl From<io::Error> for FileNotFoundError {
    fn from(err: io::Error) -> Self { Self::from_cause(err) }
}
