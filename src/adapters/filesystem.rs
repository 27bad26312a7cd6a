use std::fs::{self, DirBuilder};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::ScaffoldStore;

/// Permission bits for generated directories (before umask).
pub const DIR_MODE: u32 = 0o775;

/// Filesystem-based scaffold store.
///
/// Relative paths resolve against `root`; absolute paths are used as given.
#[derive(Debug, Clone)]
pub struct FilesystemScaffoldStore {
    root: PathBuf,
}

impl FilesystemScaffoldStore {
    /// Create a store for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a store for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl ScaffoldStore for FilesystemScaffoldStore {
    fn create_dir_all(&self, path: &str) -> io::Result<()> {
        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(DIR_MODE);
        }
        builder.create(self.resolve(path))
    }

    fn create_file(&self, path: &str) -> io::Result<Box<dyn Write + '_>> {
        let file = fs::File::create(self.resolve(path))?;
        Ok(Box::new(file))
    }
}
