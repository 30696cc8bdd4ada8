//! Serialized form of [`FileNotFoundError`].
//!
//! A cause is an arbitrary error and cannot be serialized as-is, so a
//! snapshot records the message of each error in the chain, plus the file
//! name of any link that carries one. Restoring a
//! snapshot rebuilds the chain out of [`RemoteCause`] values.

use std::{error::Error, fmt};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{FileNotFoundError, report};

/// Version written into every snapshot. Other versions are rejected.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serialized [`FileNotFoundError`] with its recorded cause chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub message: String,
    pub file_name: Option<String>,
    pub cause: Option<CauseSnapshot>,
}

/// One link of a recorded cause chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CauseSnapshot {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    pub cause: Option<Box<CauseSnapshot>>,
}

/// Reasons a snapshot cannot be restored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
    #[error("snapshot carries both a file name and a cause")]
    FileNameWithCause,
}

/// A restored cause. Keeps the message, the file name and the nested source
/// of the error it was recorded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteCause {
    message: String,
    file_name: Option<String>,
    source: Option<Box<RemoteCause>>,
}

impl RemoteCause {
    /// Display text of the recorded error.
    pub fn message(&self) -> &str { &self.message }

    /// File name of the recorded error, if it was a missing-file error.
    pub fn file_name(&self) -> Option<&str> { self.file_name.as_deref() }
}

impl fmt::Display for RemoteCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.message) }
}

impl Error for RemoteCause {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn Error + 'static))
    }
}

impl CauseSnapshot {
    /// Records `error` and all of its sources. Returns `None` only for an
    /// absent error.
    fn capture(error: Option<&(dyn Error + 'static)>) -> Option<Self> {
        let links: Vec<(String, Option<String>)> = error
            .into_iter()
            .flat_map(report::chain)
            .map(|e| (e.to_string(), report::file_name_of(e).map(str::to_string)))
            .collect();

        links
            .into_iter()
            .rev()
            .fold(None, |inner, (message, file_name)| {
                Some(CauseSnapshot {
                    message,
                    file_name,
                    cause: inner.map(Box::new),
                })
            })
    }

    fn into_remote(self) -> RemoteCause {
        RemoteCause {
            message: self.message,
            file_name: self.file_name,
            source: self.cause.map(|cause| Box::new(cause.into_remote())),
        }
    }
}

impl Snapshot {
    /// Records `err` and its whole cause chain.
    pub fn capture(err: &FileNotFoundError) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            message: err.message().to_string(),
            file_name: err.file_name().map(str::to_string),
            cause: CauseSnapshot::capture(err.source()),
        }
    }

    /// Rebuilds the error with the constructor matching the recorded fields.
    pub fn restore(self) -> Result<FileNotFoundError, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                expected: SNAPSHOT_VERSION,
            });
        }

        match (self.file_name, self.cause) {
            (Some(_), Some(_)) => Err(SnapshotError::FileNameWithCause),
            (Some(file_name), None) => {
                Ok(FileNotFoundError::with_file_name(self.message, file_name))
            }
            (None, Some(cause)) => {
                Ok(FileNotFoundError::with_cause(self.message, cause.into_remote()))
            }
            (None, None) => Ok(FileNotFoundError::new(self.message)),
        }
    }
}

impl Serialize for FileNotFoundError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Snapshot::capture(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FileNotFoundError {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Snapshot::deserialize(deserializer)?
            .restore()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("disk busy")]
    struct DiskBusy(#[source] std::io::Error);

    fn messages(err: &FileNotFoundError) -> Vec<String> {
        report::chain(err).map(|e| e.to_string()).collect()
    }

    #[test]
    fn test_round_trip_keeps_file_name() -> serde_json::Result<()> {
        let err = FileNotFoundError::with_file_name("config.yaml not found", "config.yaml");

        let json = serde_json::to_string(&err)?;
        let back: FileNotFoundError = serde_json::from_str(&json)?;

        assert_eq!(back.message(), "config.yaml not found");
        assert_eq!(back.file_name(), Some("config.yaml"));
        assert!(back.cause().is_none());
        Ok(())
    }

    #[test]
    fn test_round_trip_keeps_cause_chain() -> serde_json::Result<()> {
        let io_err = std::io::Error::new(std::io::ErrorKind::TimedOut, "sector unreadable");
        let err = FileNotFoundError::from_cause(DiskBusy(io_err));

        let json = serde_json::to_vec(&err)?;
        let back: FileNotFoundError = serde_json::from_slice(&json)?;

        assert_eq!(back.message(), "disk busy");
        assert_eq!(back.file_name(), None);
        assert_eq!(messages(&back), messages(&err));
        let cause = back.cause().and_then(|c| c.downcast_ref::<RemoteCause>());
        assert_eq!(cause.map(RemoteCause::message), Some("disk busy"));
        Ok(())
    }

    #[test]
    fn test_json_shape() -> serde_json::Result<()> {
        let err = FileNotFoundError::with_cause("lookup failed", "disk busy");

        let value = serde_json::to_value(&err)?;
        assert_eq!(
            value,
            json!({
                "version": 1,
                "message": "lookup failed",
                "file_name": null,
                "cause": { "message": "disk busy", "cause": null }
            })
        );
        Ok(())
    }

    #[test]
    fn test_message_only_round_trip() {
        let snapshot = Snapshot::capture(&FileNotFoundError::new("no such file"));
        assert_eq!(snapshot.cause, None);

        let back = snapshot.restore().unwrap();
        assert_eq!(back.message(), "no such file");
        assert_eq!(back.file_name(), None);
        assert!(back.cause().is_none());
    }

    #[test]
    fn test_rejects_other_versions() {
        let value = json!({ "version": 2, "message": "m", "file_name": null, "cause": null });

        let snapshot: Snapshot = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(
            snapshot.restore().unwrap_err(),
            SnapshotError::UnsupportedVersion { found: 2, expected: 1 }
        );
        assert!(serde_json::from_value::<FileNotFoundError>(value).is_err());
    }

    #[test]
    fn test_rejects_file_name_with_cause() {
        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            message: "m".to_string(),
            file_name: Some("f".to_string()),
            cause: Some(CauseSnapshot {
                message: "c".to_string(),
                file_name: None,
                cause: None,
            }),
        };

        assert_eq!(snapshot.restore().unwrap_err(), SnapshotError::FileNameWithCause);
    }

    #[test]
    fn test_round_trip_keeps_nested_file_name() -> serde_json::Result<()> {
        let inner = FileNotFoundError::with_file_name("inner", "a.txt");
        let err = FileNotFoundError::with_cause("outer", inner);

        let value = serde_json::to_value(&err)?;
        assert_eq!(
            value,
            json!({
                "version": 1,
                "message": "outer",
                "file_name": null,
                "cause": { "message": "inner", "file_name": "a.txt", "cause": null }
            })
        );

        let back: FileNotFoundError = serde_json::from_value(value)?;
        assert_eq!(back.message(), "outer");
        assert_eq!(back.file_name(), None);
        let cause = back.cause().and_then(|c| c.downcast_ref::<RemoteCause>());
        assert_eq!(cause.map(RemoteCause::message), Some("inner"));
        assert_eq!(cause.and_then(RemoteCause::file_name), Some("a.txt"));
        assert_eq!(
            report::Report::new(&back).to_string(),
            report::Report::new(&err).to_string()
        );
        Ok(())
    }
}
