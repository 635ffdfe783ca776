use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// How long writers wait for the lock before giving up.
const LOCK_TIMEOUT: Duration = Duration::from_secs(5);

/// Advisory lock serializing writes to the store directory, so a CLI
/// invocation and a running TUI never interleave their writes.
///
/// Backed by platform flock on Unix; released on drop.
pub struct StoreLock {
    _file: File,
    path: PathBuf,
}

/// Error type for lock operations
#[derive(Debug, thiserror::Error)]
pub enum LockError {
    #[error("could not create lock file at {path}: {source}")]
    CreateError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("store is busy: another tick process holds {path}")]
    Timeout { path: PathBuf },
}

impl StoreLock {
    /// Acquire the store lock, waiting up to the default timeout.
    pub fn acquire(store_dir: &Path) -> Result<Self, LockError> {
        Self::acquire_timeout(store_dir, LOCK_TIMEOUT)
    }

    /// Acquire the store lock, waiting up to `timeout`.
    pub fn acquire_timeout(store_dir: &Path, timeout: Duration) -> Result<Self, LockError> {
        let path = store_dir.join(".lock");
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&path)
            .map_err(|source| LockError::CreateError {
                path: path.clone(),
                source,
            })?;

        let deadline = Instant::now() + timeout;
        while try_flock(&file).is_err() {
            if Instant::now() >= deadline {
                return Err(LockError::Timeout { path });
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        Ok(StoreLock { _file: file, path })
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        // flock releases with the fd; the file itself is just a marker
        let _ = fs::remove_file(&self.path);
    }
}

#[cfg(unix)]
fn try_flock(file: &File) -> Result<(), std::io::Error> {
    use std::os::unix::io::AsRawFd;
    if unsafe { libc::flock(file.as_raw_fd(), libc::LOCK_EX | libc::LOCK_NB) } == 0 {
        Ok(())
    } else {
        Err(std::io::Error::last_os_error())
    }
}

#[cfg(not(unix))]
fn try_flock(_file: &File) -> Result<(), std::io::Error> {
    // No advisory locking off Unix; single-process use still works
    Ok(())
}
