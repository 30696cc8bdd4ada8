//! Printing an error together with its chain of causes.

use std::{error::Error, fmt};

use crate::{FileNotFoundError, snapshot::RemoteCause};

/// Iterator over an error and each of its sources, outermost first.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

/// Walks `error` and every error reachable through [`Error::source`].
pub fn chain<'a>(error: &'a (dyn Error + 'static)) -> Chain<'a> { Chain { next: Some(error) } }

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

/// Operator-facing rendering of an error.
///
/// The first line is the error's message. A file name, when the error is a
/// [`FileNotFoundError`] that carries one, follows on its own line. Nested
/// causes are listed under `Caused by:` with their depth, each followed by
/// its own file name when it has one.
///
/// ```rust
/// use file_not_found::{FileNotFoundError, report::Report};
///
/// let err = FileNotFoundError::with_file_name("config.yaml not found", "config.yaml");
/// assert_eq!(
///     Report::new(&err).to_string(),
///     "config.yaml not found\nFile name: 'config.yaml'"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    error: &'a (dyn Error + 'static),
}

impl<'a> Report<'a> {
    /// Wraps `error` for display.
    pub fn new(error: &'a (dyn Error + 'static)) -> Self { Self { error } }
}

/// File name carried by `error` itself, without looking at its sources.
pub(crate) fn file_name_of<'a>(error: &'a (dyn Error + 'static)) -> Option<&'a str> {
    if let Some(err) = error.downcast_ref::<FileNotFoundError>() {
        return err.file_name();
    }
    if let Some(cause) = error.downcast_ref::<RemoteCause>() {
        return cause.file_name();
    }
    error
        .downcast_ref::<crate::Error>()
        .and_then(crate::Error::as_not_found)
        .and_then(FileNotFoundError::file_name)
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(name) = file_name_of(self.error) {
            write!(f, "\nFile name: '{name}'")?;
        }

        let mut causes = chain(self.error).skip(1).enumerate().peekable();
        if causes.peek().is_some() {
            f.write_str("\n\nCaused by:")?;
            for (depth, cause) in causes {
                write!(f, "\n    {depth}: {cause}")?;
                if let Some(name) = file_name_of(cause) {
                    write!(f, " (file name: '{name}')")?;
                }
            }
        }

        Ok(())
    }
}

/// Logs the full report of `error` at error level.
pub fn log_report(error: &(dyn Error + 'static)) {
    log::error!(target: "file_not_found", "{}", Report::new(error));
}
