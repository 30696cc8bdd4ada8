//! A typed "file not found" error with optional file name and cause chaining.
//!
//! # Examples
//!
//! ```rust
//! use std::{fs, io};
//!
//! use file_not_found::{Error, FileNotFoundError, report::Report};
//!
//! fn load(path: &str) -> file_not_found::Result<String> {
//!     match fs::read_to_string(path) {
//!         Ok(text) => Ok(text),
//!         Err(err) if err.kind() == io::ErrorKind::NotFound => {
//!             Err(FileNotFoundError::with_file_name(format!("{path} not found"), path).into())
//!         }
//!         Err(err) => Err(err.into()),
//!     }
//! }
//!
//! let err = load("/definitely/missing/config.yaml").unwrap_err();
//! let not_found = err.as_not_found().unwrap();
//! assert_eq!(not_found.file_name(), Some("/definitely/missing/config.yaml"));
//! assert!(matches!(err, Error::FileNotFound(_)));
//! println!("{}", Report::new(&err));
//! ```

pub use error::Error;
pub use not_found::{BoxError, FileNotFoundError};

pub mod error;
mod not_found;
pub mod report;
pub mod snapshot;

/// Result of a file lookup.
pub type Result<T> = std::result::Result<T, Error>;
