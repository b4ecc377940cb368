//! The factory that finds unique names and creates the files.

use crate::error::{Cause, Error, IoFailure, Result};
use crate::filesystem::{Filesystem, OsFilesystem};
use crate::name::{NameSpec, RandomTokens, TokenSource, DEFAULT_RANDOM_LENGTH};
use log::{debug, trace, warn};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

/// The number of attempts a file creation gets by default.
pub const DEFAULT_MAX_TRY: u32 = 10;
/// The number of attempts a directory creation gets by default.
pub const DEFAULT_DIRECTORY_MAX_TRY: u32 = 65536;
/// Permission bits of temporary directories by default, before the umask.
pub const DEFAULT_DIRECTORY_MODE: u32 = 0o777;

/// Creates empty files and directories under unique, randomized names.
///
/// Uniqueness relies on exclusive creation: a name is only ever claimed by
/// creating it, so racing threads or processes can't end up with the same
/// file. A taken name costs one attempt and a new random name is drawn.
///
/// The created files belong to the caller, the factory forgets about them.
#[derive(Debug, Clone)]
pub struct TempFileFactory<F = OsFilesystem, T = RandomTokens> {
    filesystem: F,
    tokens: T,
    random_length: usize,
}

impl TempFileFactory {
    /// A factory over the real filesystem, using thread-local randomness.
    pub fn new() -> Self {
        Self {
            filesystem: OsFilesystem,
            tokens: RandomTokens,
            random_length: DEFAULT_RANDOM_LENGTH,
        }
    }
}

impl Default for TempFileFactory {
    fn default() -> Self { Self::new() }
}

impl<F: Filesystem, T: TokenSource> TempFileFactory<F, T> {
    /// Replaces the filesystem the factory works on.
    pub fn with_filesystem<G: Filesystem>(self, filesystem: G) -> TempFileFactory<G, T> {
        TempFileFactory { filesystem, tokens: self.tokens, random_length: self.random_length }
    }

    /// Replaces the source of the random name parts.
    pub fn with_tokens<U: TokenSource>(self, tokens: U) -> TempFileFactory<F, U> {
        TempFileFactory { filesystem: self.filesystem, tokens, random_length: self.random_length }
    }

    /// Sets the number of random characters in generated names.
    pub fn random_length(self, random_length: usize) -> Self {
        Self { random_length, ..self }
    }

    /// Creates an empty file directly inside `directory`, named after `name`,
    /// and returns its absolute path.
    ///
    /// At most `max_try` names are tried. Zero attempts are allowed, in which
    /// case the call always fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fs_tempfile::{NameSpec, TempFileFactory, DEFAULT_MAX_TRY};
    ///
    /// # fn main() -> fs_tempfile::Result<()> {
    /// let name = NameSpec::new().prefix("report-").extension("csv");
    /// let path = TempFileFactory::new().create_empty_file("/var/tmp", &name, DEFAULT_MAX_TRY)?;
    /// // Something like /var/tmp/report-x7Qa2.csv
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// An [Error::InvalidArgument](enum.Error.html) is returned if a part of
    /// `name` contains a path separator. An [Error::Io](enum.Error.html) is
    /// returned if the directory doesn't exist or isn't a directory (without
    /// making any attempts), if every attempt hit an existing name, or if the
    /// creation itself fails.
    pub fn create_empty_file(
        &self,
        directory: impl AsRef<Path>,
        name: &NameSpec,
        max_try: u32,
    ) -> Result<PathBuf> {
        check_name(name)?;
        let directory = self.checked_directory(directory.as_ref())?;
        self.claim_unique(&directory, name, max_try, |path| self.filesystem.create_new(path))
    }

    /// Creates `quantity` empty files in the default temporary directory.
    /// Every file gets its own budget of `max_try` attempts.
    ///
    /// The paths are returned in creation order.
    ///
    /// # Errors
    ///
    /// Asking for zero files is an [Error::InvalidArgument](enum.Error.html).
    /// Otherwise the first failing file fails the whole batch with its
    /// [Error::Io](enum.Error.html). Files created up to that point stay on
    /// disk, and are listed by [IoFailure::created](struct.IoFailure.html#method.created).
    pub fn create_temporary_files(
        &self,
        quantity: usize,
        name: &NameSpec,
        max_try: u32,
    ) -> Result<Vec<PathBuf>> {
        if quantity == 0 {
            return Err(Error::invalid_argument("The quantity of files must be positive"));
        }
        check_name(name)?;
        let directory = self.temp_dir()?;

        let mut created = Vec::new();
        for _ in 0..quantity {
            match self.create_empty_file(&directory, name, max_try) {
                Ok(path) => created.push(path),
                Err(Error::Io(failure)) => {
                    debug!("Batch failed after creating {} of {} files", created.len(), quantity);
                    return Err(failure.with_created(created).into());
                }
                Err(err) => return Err(err),
            }
        }
        Ok(created)
    }

    /// Creates a single empty file in the default temporary directory.
    ///
    /// # Errors
    ///
    /// See [create_empty_file](#method.create_empty_file).
    pub fn create_temporary_file(&self, name: &NameSpec, max_try: u32) -> Result<PathBuf> {
        let directory = self.temp_dir()?;
        self.create_empty_file(directory, name, max_try)
    }

    /// Creates an empty directory named `prefix` followed by a random token in
    /// the default temporary directory, and returns its absolute path. The
    /// `mode` only matters on platforms with permission bits.
    ///
    /// # Errors
    ///
    /// An [Error::Io](enum.Error.html) is returned if every attempt hit an
    /// existing name, or if the creation fails for another reason.
    pub fn create_temporary_directory(
        &self,
        prefix: Option<&str>,
        mode: u32,
        max_try: u32,
    ) -> Result<PathBuf> {
        let name = match prefix {
            Some(prefix) => NameSpec::new().prefix(prefix),
            None => NameSpec::new(),
        };
        check_name(&name)?;
        let directory = self.temp_dir()?;
        let directory = self.checked_directory(&directory)?;
        self.claim_unique(&directory, &name, max_try, |path| self.filesystem.create_dir(path, mode))
    }

    fn temp_dir(&self) -> Result<PathBuf> {
        self.filesystem.temp_dir()
            .map_err(|e| IoFailure::new(Cause::TempDirectory, PathBuf::new()).with_source(e).into())
    }

    /// Makes sure the path is an existing directory, and makes it absolute.
    fn checked_directory(&self, directory: &Path) -> Result<PathBuf> {
        if !self.filesystem.exists(directory) {
            return Err(IoFailure::new(Cause::MissingDirectory, directory).into());
        }
        if !self.filesystem.is_dir(directory) {
            return Err(IoFailure::new(Cause::NotADirectory, directory).into());
        }
        self.filesystem.absolute(directory)
            .map_err(|e| IoFailure::new(Cause::Resolve, directory).with_source(e).into())
    }

    /// The retry loop. `create` must fail with `ErrorKind::AlreadyExists` when
    /// the name is taken, any other error aborts.
    fn claim_unique<C>(
        &self,
        directory: &Path,
        name: &NameSpec,
        max_try: u32,
        create: C,
    ) -> Result<PathBuf>
        where C: Fn(&Path) -> io::Result<()> {

        for attempt in 1..=max_try {
            // A fresh token each time, a taken name tells nothing about the next
            let token = self.tokens.token(self.random_length);
            let path = directory.join(name.file_name(&token));
            trace!("Attempt {}/{}: {:?}", attempt, max_try, path);

            match create(&path) {
                Ok(()) => {
                    debug!("Created {:?}", path);
                    return Ok(path);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    debug!("Name collision at {:?}", path);
                }
                Err(e) => return Err(IoFailure::new(Cause::Create, path).with_source(e).into()),
            }
        }

        warn!("No unique name found in {:?} after {} attempt(s)", directory, max_try);
        Err(IoFailure::new(Cause::RetriesExhausted { attempts: max_try }, directory).into())
    }
}

// Names with separators would land outside the target directory
fn check_name(name: &NameSpec) -> Result<()> {
    if name.has_separator() {
        return Err(Error::invalid_argument(
            format!("Name parts must not contain path separators: {:?}", name)));
    }
    Ok(())
}
