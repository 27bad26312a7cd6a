use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io::{self, Write};

use crate::ports::ScaffoldStore;

/// In-memory scaffold store for testing.
#[derive(Default)]
pub struct MockScaffoldStore {
    pub dirs: RefCell<BTreeSet<String>>,
    pub files: RefCell<BTreeMap<String, Vec<u8>>>,
    pub failing_paths: RefCell<BTreeSet<String>>,
}

impl MockScaffoldStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make any create call on `path` fail with `PermissionDenied`.
    pub fn fail_on(self, path: &str) -> Self {
        self.failing_paths.borrow_mut().insert(path.to_string());
        self
    }

    pub fn has_dir(&self, path: &str) -> bool {
        self.dirs.borrow().contains(path)
    }

    pub fn file(&self, path: &str) -> Option<String> {
        self.files.borrow().get(path).map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    fn check(&self, path: &str) -> io::Result<()> {
        if self.failing_paths.borrow().contains(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, format!("denied: {}", path)));
        }
        Ok(())
    }
}

impl ScaffoldStore for MockScaffoldStore {
    fn create_dir_all(&self, path: &str) -> io::Result<()> {
        self.check(path)?;
        let mut dirs = self.dirs.borrow_mut();
        let mut current = String::new();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            if !current.is_empty() {
                current.push('/');
            }
            current.push_str(segment);
            dirs.insert(current.clone());
        }
        Ok(())
    }

    fn create_file(&self, path: &str) -> io::Result<Box<dyn Write + '_>> {
        self.check(path)?;
        self.files.borrow_mut().insert(path.to_string(), Vec::new());
        Ok(Box::new(MemoryFile { store: self, path: path.to_string() }))
    }
}

struct MemoryFile<'a> {
    store: &'a MockScaffoldStore,
    path: String,
}

impl Write for MemoryFile<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.store.files.borrow_mut().entry(self.path.clone()).or_default().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
