//! The filesystem primitives the factory is built on.
//!
//! The factory never touches `std::fs` directly, everything goes through the
//! [Filesystem](trait.Filesystem.html) `trait`. [OsFilesystem](struct.OsFilesystem.html)
//! is the real implementation, tests can substitute their own.
//!
//! # Porting to other platforms
//!
//! Only applying the permission bits of a new directory is platform specific.
//! A platform needs a `create_dir_with_mode` function in the `platform` module:
//!
//! ```no_run
//! # use std::io::Result;
//! # use std::path::Path;
//! #[cfg(target_os = "new_platform")]
//! mod platform {
//!     pub fn create_dir_with_mode(path: &Path, mode: u32) -> Result<()> {
//!         // ...
//! # unimplemented!()
//!     }
//! }
//! ```

use std::fs;
use std::io::Result;
use std::path::{Path, PathBuf};

/// The functionality the factory needs from a filesystem.
pub trait Filesystem {
    /// Checks, if anything exists at the path.
    fn exists(&self, path: &Path) -> bool;

    /// Checks, if the path points to a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Creates an empty file, failing with `ErrorKind::AlreadyExists` if
    /// something is already at the path. The check and the creation must be a
    /// single atomic step.
    fn create_new(&self, path: &Path) -> Result<()>;

    /// Creates a directory, failing with `ErrorKind::AlreadyExists` if
    /// something is already at the path. The `mode` is a hint for platforms
    /// with permission bits.
    fn create_dir(&self, path: &Path, mode: u32) -> Result<()>;

    /// Makes the path absolute, without touching the filesystem.
    fn absolute(&self, path: &Path) -> Result<PathBuf>;

    /// Returns the default directory for temporaries.
    fn temp_dir(&self) -> Result<PathBuf>;
}

impl<F: Filesystem + ?Sized> Filesystem for &F {
    fn exists(&self, path: &Path) -> bool { (**self).exists(path) }
    fn is_dir(&self, path: &Path) -> bool { (**self).is_dir(path) }
    fn create_new(&self, path: &Path) -> Result<()> { (**self).create_new(path) }
    fn create_dir(&self, path: &Path, mode: u32) -> Result<()> { (**self).create_dir(path, mode) }
    fn absolute(&self, path: &Path) -> Result<PathBuf> { (**self).absolute(path) }
    fn temp_dir(&self) -> Result<PathBuf> { (**self).temp_dir() }
}

/// The filesystem of the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_new(&self, path: &Path) -> Result<()> {
        // Dropping the handle closes it, the file stays
        fs::OpenOptions::new()
            .create_new(true)
            .read(true).write(true)
            .open(path)?;
        Ok(())
    }

    fn create_dir(&self, path: &Path, mode: u32) -> Result<()> {
        platform::create_dir_with_mode(path, mode)
    }

    fn absolute(&self, path: &Path) -> Result<PathBuf> {
        std::path::absolute(path)
    }

    fn temp_dir(&self) -> Result<PathBuf> {
        Ok(std::env::temp_dir())
    }
}

// Unix implementation /////////////////////////////////////////////////////////

#[cfg(target_family = "unix")]
mod platform {
    use std::fs::DirBuilder;
    use std::io::Result;
    use std::os::unix::fs::DirBuilderExt;
    use std::path::Path;

    pub fn create_dir_with_mode(path: &Path, mode: u32) -> Result<()> {
        DirBuilder::new().mode(mode).create(path)
    }
}

// Everything else /////////////////////////////////////////////////////////////

#[cfg(not(target_family = "unix"))]
mod platform {
    use std::fs;
    use std::io::Result;
    use std::path::Path;

    // No permission bits to apply
    pub fn create_dir_with_mode(path: &Path, _mode: u32) -> Result<()> {
        fs::create_dir(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_create_new_is_exclusive() -> Result<()> {
        let workspace = TempDir::new()?;
        let path = workspace.path().join("book.txt");

        OsFilesystem.create_new(&path)?;
        assert!(OsFilesystem.exists(&path));
        assert!(!OsFilesystem.is_dir(&path));
        assert_eq!(fs::metadata(&path)?.len(), 0);

        let again = OsFilesystem.create_new(&path).unwrap_err();
        assert_eq!(again.kind(), ErrorKind::AlreadyExists);
        Ok(())
    }

    #[test]
    fn test_create_dir_is_exclusive() -> Result<()> {
        let workspace = TempDir::new()?;
        let path = workspace.path().join("book-dir");

        OsFilesystem.create_dir(&path, 0o700)?;
        assert!(OsFilesystem.is_dir(&path));

        let again = OsFilesystem.create_dir(&path, 0o700).unwrap_err();
        assert_eq!(again.kind(), ErrorKind::AlreadyExists);
        Ok(())
    }

    #[cfg(target_family = "unix")]
    #[test]
    fn test_create_dir_applies_mode() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let workspace = TempDir::new()?;
        let path = workspace.path().join("private");
        // The umask can only remove bits, 0o700 survives any sane umask
        OsFilesystem.create_dir(&path, 0o700)?;
        assert_eq!(fs::metadata(&path)?.permissions().mode() & 0o777, 0o700);
        Ok(())
    }

    #[test]
    fn test_absolute() -> Result<()> {
        let path = OsFilesystem.absolute(Path::new("foo"))?;
        assert!(path.is_absolute());
        assert!(path.ends_with("foo"));
        Ok(())
    }

    #[test]
    fn test_temp_dir_exists() -> Result<()> {
        let dir = OsFilesystem.temp_dir()?;
        assert!(OsFilesystem.is_dir(&dir));
        Ok(())
    }
}
