use std::io::{self, Write};

/// Filesystem operations the generator needs to realize a project layout.
pub trait ScaffoldStore {
    /// Create `path` and all missing ancestors. Existing directories are not an error.
    fn create_dir_all(&self, path: &str) -> io::Result<()>;

    /// Create `path`, truncating any existing file, and return a writer for it.
    fn create_file(&self, path: &str) -> io::Result<Box<dyn Write + '_>>;
}
