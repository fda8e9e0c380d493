//! Cross-process exclusive lock on a snapshot file
//!
//! The lock lives on a sibling `<snapshot>.lock` file and is released when
//! the handle is dropped (the descriptor closes). Only one process can own a
//! snapshot at a time, so every write it makes starts from what the previous
//! owner left on disk.

use reviewng_application::StoreError;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Held for as long as a store owns its snapshot
#[derive(Debug)]
pub struct SnapshotLock {
    _file: File,
    path: PathBuf,
}

impl SnapshotLock {
    /// Lock file path for a snapshot
    pub fn path_for(snapshot: &Path) -> PathBuf {
        let mut path = snapshot.as_os_str().to_owned();
        path.push(".lock");
        PathBuf::from(path)
    }

    /// Acquire the lock, waiting for another owner to release it
    pub async fn acquire(snapshot: &Path) -> Result<Self, StoreError> {
        let path = Self::path_for(snapshot);
        let file = open_lock_file(&path).map_err(|e| backend(&path, e))?;

        match try_lock_exclusive(&file) {
            Ok(()) => return Ok(Self { _file: file, path }),
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => {}
            Err(e) => return Err(backend(&path, e)),
        }

        info!(
            "Review store {} is in use by another process, waiting",
            snapshot.display()
        );
        let waited = path.clone();
        let file = tokio::task::spawn_blocking(move || lock_exclusive(&file).map(|()| file))
            .await
            .map_err(|e| StoreError::Backend(format!("lock task failed: {e}")))?
            .map_err(|e| backend(&waited, e))?;

        Ok(Self { _file: file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn backend(path: &Path, e: io::Error) -> StoreError {
    StoreError::Backend(format!("failed to lock {}: {}", path.display(), e))
}

fn open_lock_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(path)
}

#[cfg(unix)]
fn flock(file: &File, operation: libc::c_int) -> io::Result<()> {
    use std::os::unix::io::AsRawFd;

    // SAFETY: the descriptor is owned by `file` and open for the whole call
    let rc = unsafe { libc::flock(file.as_raw_fd(), operation) };
    if rc == 0 {
        Ok(())
    } else {
        Err(io::Error::last_os_error())
    }
}

#[cfg(unix)]
fn try_lock_exclusive(file: &File) -> io::Result<()> {
    flock(file, libc::LOCK_EX | libc::LOCK_NB)
}

#[cfg(unix)]
fn lock_exclusive(file: &File) -> io::Result<()> {
    flock(file, libc::LOCK_EX)
}

#[cfg(not(unix))]
fn try_lock_exclusive(_file: &File) -> io::Result<()> {
    tracing::warn!("Snapshot locking is not supported on this platform");
    Ok(())
}

#[cfg(not(unix))]
fn lock_exclusive(_file: &File) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_lock_path_is_a_sibling() {
        assert_eq!(
            SnapshotLock::path_for(Path::new("/data/store.json")),
            PathBuf::from("/data/store.json.lock")
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_second_owner_waits_for_release() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = dir.path().join("store.json");

        let first = SnapshotLock::acquire(&snapshot).await.unwrap();
        assert!(first.path().exists());

        let pending = tokio::spawn({
            let snapshot = snapshot.clone();
            async move { SnapshotLock::acquire(&snapshot).await }
        });
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(!pending.is_finished());

        drop(first);
        let second = tokio::time::timeout(Duration::from_secs(5), pending)
            .await
            .unwrap()
            .unwrap();
        assert!(second.is_ok());
    }
}
