//! Cross-platform utility for creating empty temporary files and directories
//! under unique, randomized names.
//!
//! Names are built from an optional prefix, a short random token, an optional
//! suffix and an optional extension. Files are created exclusively, so a name
//! that's already taken - even by another process racing for it - just costs
//! one attempt, and a new name is drawn. Every operation has a bounded number
//! of attempts.
//!
//! The library consists of a handful of functions and a single factory type:
//!  * [empty_file_in](fn.empty_file_in.html): Creates an empty file in the
//! given directory.
//!  * [temporary_files](fn.temporary_files.html): Creates a batch of empty
//! files in the default temporary directory.
//!  * [temporary_file](fn.temporary_file.html): Creates a single empty file in
//! the default temporary directory.
//!  * [temporary_directory](fn.temporary_directory.html): Creates an empty
//! directory in the default temporary directory.
//!  * [TempFileFactory](struct.TempFileFactory.html): The type behind the
//! functions above, with a configurable filesystem and randomness.
//!
//! Nothing created here is ever deleted by the library, cleaning up is the
//! caller's job.
//!
//! # Usage
//!
//! ```no_run
//! use fs_tempfile::{NameSpec, DEFAULT_MAX_TRY};
//!
//! # fn main() -> fs_tempfile::Result<()> {
//! let name = NameSpec::new().prefix("romain").suffix("neutron").extension("io");
//! let path = fs_tempfile::empty_file_in("/var/tmp", &name, DEFAULT_MAX_TRY)?;
//! // Something like /var/tmp/romainQ3xZ9neutron.io, zero bytes long
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! There are two kinds of errors, see [Error](enum.Error.html). Asking for
//! something meaningless is an `InvalidArgument`, everything the environment
//! can't satisfy is an `Io` failure. Both convert into `std::io::Error`.

/// The error types of the library.
pub mod error;
/// The filesystem primitives the library relies on.
pub mod filesystem;
/// The factory that does the actual work.
pub mod factory;
/// Name assembly and random tokens.
pub mod name;

pub use error::{Cause, Error, IoFailure, Result};
pub use factory::{
    TempFileFactory,
    DEFAULT_DIRECTORY_MAX_TRY, DEFAULT_DIRECTORY_MODE, DEFAULT_MAX_TRY,
};
pub use filesystem::{Filesystem, OsFilesystem};
pub use name::{NameSpec, RandomTokens, TokenSource, DEFAULT_RANDOM_LENGTH};

use std::path::{Path, PathBuf};

// ////////////////////////////////////////////////////////////////////////// //
//                                    API                                     //
// ////////////////////////////////////////////////////////////////////////// //

/// Creates an empty file directly inside the given directory, trying at most
/// `max_try` random names. Returns the absolute path of the file.
///
/// # Examples
///
/// Creating an empty CSV file inside `/var/tmp`, assuming it exists:
///
/// ```no_run
/// use fs_tempfile::NameSpec;
///
/// # fn main() -> std::io::Result<()> {
/// let path = fs_tempfile::empty_file_in("/var/tmp", &NameSpec::new().extension("csv"), 10)?;
/// std::fs::write(&path, "a,b\n1,2\n")?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Fails with an I/O error if the directory is missing or isn't a directory,
/// or if no unique name was found in `max_try` attempts.
pub fn empty_file_in(
    directory: impl AsRef<Path>,
    name: &NameSpec,
    max_try: u32,
) -> Result<PathBuf> {
    TempFileFactory::new().create_empty_file(directory, name, max_try)
}

/// Creates `quantity` empty files in the default temporary directory. Every
/// file gets its own `max_try` attempts.
///
/// # Examples
///
/// ```no_run
/// use fs_tempfile::{NameSpec, DEFAULT_MAX_TRY};
///
/// # fn main() -> fs_tempfile::Result<()> {
/// let paths = fs_tempfile::temporary_files(3, &NameSpec::new().prefix("part-"), DEFAULT_MAX_TRY)?;
/// assert_eq!(paths.len(), 3);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Fails with an invalid argument error for a zero `quantity`. Otherwise the
/// first failing file fails the batch, the files created before it are left
/// behind and listed in the error.
pub fn temporary_files(quantity: usize, name: &NameSpec, max_try: u32) -> Result<Vec<PathBuf>> {
    TempFileFactory::new().create_temporary_files(quantity, name, max_try)
}

/// Creates one empty file in the default temporary directory.
///
/// # Errors
///
/// Same as [empty_file_in](fn.empty_file_in.html).
pub fn temporary_file(name: &NameSpec, max_try: u32) -> Result<PathBuf> {
    TempFileFactory::new().create_temporary_file(name, max_try)
}

/// Creates an empty directory in the default temporary directory, with the
/// default permission bits and attempt count.
///
/// # Examples
///
/// ```no_run
/// # fn main() -> fs_tempfile::Result<()> {
/// let dir = fs_tempfile::temporary_directory(Some("build-"))?;
/// // We can work inside the directory now, it won't be deleted!
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Fails with an I/O error if no unique name was found, or the directory
/// couldn't be created.
pub fn temporary_directory(prefix: Option<&str>) -> Result<PathBuf> {
    TempFileFactory::new()
        .create_temporary_directory(prefix, DEFAULT_DIRECTORY_MODE, DEFAULT_DIRECTORY_MAX_TRY)
}
