//! The two kinds of failure the factory reports.
//!
//! Every environment-related problem is an [Error::Io](enum.Error.html),
//! whatever the underlying reason. The reason is kept in the carried
//! [Cause](enum.Cause.html) for diagnostics, but callers are not expected to
//! branch on it.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Shorthand for results of this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type of every fallible operation in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The caller asked for something that makes no sense, like a batch of
    /// zero files. Nothing was touched on disk.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The environment could not satisfy the request.
    #[error(transparent)]
    Io(#[from] IoFailure),
}

impl Error {
    /// Returns the I/O failure, if this is one.
    pub fn as_io(&self) -> Option<&IoFailure> {
        match self {
            Error::Io(failure) => Some(failure),
            Error::InvalidArgument(_) => None,
        }
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }
}

/// Why an I/O failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cause {
    /// The target directory does not exist.
    MissingDirectory,
    /// The target path exists, but it's not a directory.
    NotADirectory,
    /// The absolute form of the target directory could not be determined.
    Resolve,
    /// Every allowed attempt ran into an already existing name.
    RetriesExhausted {
        /// The number of attempts that were made.
        attempts: u32,
    },
    /// Creating the file or directory failed for a reason other than a name
    /// collision.
    Create,
    /// The default temporary directory could not be determined.
    TempDirectory,
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cause::MissingDirectory => write!(f, "Directory does not exist"),
            Cause::NotADirectory => write!(f, "Path is not a directory"),
            Cause::Resolve => write!(f, "Could not resolve the absolute path of"),
            Cause::RetriesExhausted { attempts } =>
                write!(f, "Could not find a unique name after {} attempt(s)", attempts),
            Cause::Create => write!(f, "Could not create"),
            Cause::TempDirectory => write!(f, "Could not determine the temporary directory"),
        }
    }
}

/// Describes a failed interaction with the filesystem.
#[derive(Debug, Error)]
#[error("{cause} '{}'", .path.display())]
pub struct IoFailure {
    cause: Cause,
    path: PathBuf,
    #[source]
    source: Option<io::Error>,
    created: Vec<PathBuf>,
}

impl IoFailure {
    pub(crate) fn new(cause: Cause, path: impl Into<PathBuf>) -> Self {
        Self { cause, path: path.into(), source: None, created: Vec::new() }
    }

    pub(crate) fn with_source(mut self, source: io::Error) -> Self {
        self.source = Some(source);
        self
    }

    pub(crate) fn with_created(mut self, created: Vec<PathBuf>) -> Self {
        self.created = created;
        self
    }

    /// The reason of the failure.
    pub fn cause(&self) -> Cause { self.cause }

    /// The path the failing operation was working on.
    pub fn path(&self) -> &Path { &self.path }

    /// Files that a batch operation had already created before it failed.
    /// They are left on disk, it's up to the caller to remove them.
    ///
    /// Always empty for single-file operations.
    pub fn created(&self) -> &[PathBuf] { &self.created }
}

impl From<IoFailure> for io::Error {
    fn from(failure: IoFailure) -> Self {
        let kind = match (&failure.source, failure.cause) {
            (Some(source), _) => source.kind(),
            (None, Cause::MissingDirectory) => io::ErrorKind::NotFound,
            (None, _) => io::ErrorKind::Other,
        };
        io::Error::new(kind, failure)
    }
}

impl From<Error> for io::Error {
    fn from(error: Error) -> Self {
        match error {
            Error::Io(failure) => failure.into(),
            Error::InvalidArgument(_) => io::Error::new(io::ErrorKind::InvalidInput, error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhaustion_message() {
        let failure = IoFailure::new(Cause::RetriesExhausted { attempts: 3 }, "/tmp/foo");
        assert_eq!(
            failure.to_string(),
            "Could not find a unique name after 3 attempt(s) '/tmp/foo'"
        );
        assert!(failure.created().is_empty());
    }

    #[test]
    fn test_into_io_error() {
        let missing: io::Error = IoFailure::new(Cause::MissingDirectory, "nope").into();
        assert_eq!(missing.kind(), io::ErrorKind::NotFound);

        let denied = IoFailure::new(Cause::Create, "x")
            .with_source(io::Error::from(io::ErrorKind::PermissionDenied));
        let denied: io::Error = denied.into();
        assert_eq!(denied.kind(), io::ErrorKind::PermissionDenied);

        let invalid: io::Error = Error::invalid_argument("zero").into();
        assert_eq!(invalid.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_as_io() {
        let error = Error::from(IoFailure::new(Cause::NotADirectory, "file.txt"));
        assert_eq!(error.as_io().map(IoFailure::cause), Some(Cause::NotADirectory));
        assert!(Error::invalid_argument("zero").as_io().is_none());
    }
}
