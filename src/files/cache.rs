use std::{
    collections::HashMap,
    fs,
    path::Path,
    sync::{Arc, Mutex, PoisonError},
};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// File contents keyed by path.
///
/// Entries are written at most once per key and read many times.
pub trait FileCache: Send + Sync {
    fn get(&self, path: &str) -> Option<Arc<str>>;

    /// Stores `contents` unless `path` already has an entry. Returns the cached value.
    fn put(&self, path: &str, contents: Arc<str>) -> Arc<str>;

    /// 1-based line of a cached file, without its line terminator.
    fn get_line(&self, path: &str, line: usize) -> Option<String> {
        let contents = self.get(path)?;
        let index = line.checked_sub(1)?;

        let text = contents.lines().nth(index)?.trim_end_matches('\r').to_string();
        Some(text)
    }
}

/// Process-wide cache guarded by a single mutex.
#[derive(Debug, Default)]
pub struct SharedFileCache {
    files: Mutex<HashMap<String, Arc<str>>>,
}

impl SharedFileCache {
    pub fn new() -> Self {
        SharedFileCache::default()
    }

    pub fn len(&self) -> usize {
        self.files.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FileCache for SharedFileCache {
    fn get(&self, path: &str) -> Option<Arc<str>> {
        let files = self.files.lock().unwrap_or_else(PoisonError::into_inner);
        files.get(path).cloned()
    }

    fn put(&self, path: &str, contents: Arc<str>) -> Arc<str> {
        let mut files = self.files.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(files.entry(path.to_string()).or_insert(contents))
    }
}

/// Reads `path` through `cache`, hitting the file system only on a miss.
pub fn read_file(cache: &dyn FileCache, path: &Path) -> Result<Arc<str>, Error> {
    let key = path.to_string_lossy();

    if let Some(contents) = cache.get(&key) {
        return Ok(contents);
    }

    let contents = fs::read_to_string(path).map_err(|err| {
        Error::new(
            ErrorImpl::FileRead {
                path: key.to_string(),
                reason: err.to_string(),
            },
            Position::new(0, 0, 0, Arc::from(&*key)),
        )
    })?;

    tracing::debug!(path = %key, bytes = contents.len(), "cached source file");

    Ok(cache.put(&key, Arc::from(contents)))
}

pub fn get_line(cache: &dyn FileCache, path: &str, line: usize) -> Option<String> {
    cache.get_line(path, line)
}
