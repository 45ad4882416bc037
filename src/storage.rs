// Persists the generated documents.
use anyhow::{Context, Result};
use fs2::FileExt;
use std::fs;
use std::path::{Path, PathBuf};

/// Something that can store a named document, e.g. `all.json`.
pub trait DocumentSink {
    fn persist(&self, name: &str, contents: &str) -> Result<()>;
}

pub const LOCK_FILE_NAME: &str = "sciopero.lock";

/// Writes documents into one directory.
///
/// Writers are serialised through a single lock file kept outside `root`, so
/// the directory only ever holds the published documents.
#[derive(Debug, Clone)]
pub struct OutputDir {
    pub root: PathBuf,
    lock_path: PathBuf,
}

impl OutputDir {
    /// Locks in the system temp directory until [`OutputDir::with_lock_dir`]
    /// says otherwise.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            lock_path: std::env::temp_dir().join(LOCK_FILE_NAME),
        }
    }

    pub fn with_lock_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.lock_path = dir.as_ref().join(LOCK_FILE_NAME);
        self
    }

    pub fn lock_path(&self) -> &Path {
        &self.lock_path
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl DocumentSink for OutputDir {
    fn persist(&self, name: &str, contents: &str) -> Result<()> {
        for dir in [Some(self.root.as_path()), self.lock_path.parent()]
            .into_iter()
            .flatten()
        {
            if !dir.exists() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create directory: {:?}", dir))?;
            }
        }

        let path = self.path_for(name);
        log::debug!("writing {}", path.display());

        LocalStorage::with_lock(&self.lock_path, || LocalStorage::atomic_write(&path, contents))
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}

pub struct LocalStorage;

impl LocalStorage {
    /// Runs `f` while holding an exclusive lock on `lock_path`.
    pub fn with_lock<F, T>(lock_path: &Path, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(lock_path)
            .with_context(|| format!("Failed to open lock file {}", lock_path.display()))?;

        file.lock_exclusive()?;
        let result = f();
        file.unlock()?;
        result
    }

    /// Atomic write: Write to .tmp file then rename
    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        // all.json and all.ical must not share a temp file
        let mut tmp_name = path.as_os_str().to_os_string();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }
}
