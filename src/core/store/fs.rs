//! Filesystem-based key storage.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::KeyStore;
use crate::core::key::Key;
use crate::error::{Result, StoreError};

/// Stores the key as a single file, by default `~/.dbtr.key`.
#[derive(Debug, Clone)]
pub struct FileKeyStore {
    path: PathBuf,
}

impl FileKeyStore {
    /// Key store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the key file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Key> {
        debug!(path = %self.path.display(), "reading key");

        #[cfg(unix)]
        warn_if_readable_by_others(&self.path);

        let bytes = fs::read(&self.path).map_err(|source| StoreError::ReadFailed {
            path: self.path.clone(),
            source,
        })?;
        Ok(Key::from_bytes(bytes))
    }

    /// Create the key file. Returns `Ok(None)` if another process created it
    /// first, in which case the caller reads theirs.
    fn create(&self) -> Result<Option<Key>> {
        let write_err = |source| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let mut options = fs::OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = match options.open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(None),
            Err(e) => return Err(write_err(e).into()),
        };

        let key = Key::generate();
        file.write_all(key.as_bytes()).map_err(write_err)?;
        file.sync_all().map_err(write_err)?;

        info!(path = %self.path.display(), "created secret key");
        Ok(Some(key))
    }
}

impl KeyStore for FileKeyStore {
    fn get_or_create_key(&self) -> Result<Key> {
        if self.path.exists() {
            return self.read();
        }
        match self.create()? {
            Some(key) => Ok(key),
            None => self.read(),
        }
    }

    fn has_key(&self) -> bool {
        self.path.exists()
    }
}

#[cfg(unix)]
fn warn_if_readable_by_others(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    if let Ok(metadata) = fs::metadata(path) {
        let mode = metadata.permissions().mode() & 0o777;
        if mode & 0o077 != 0 {
            warn!(
                path = %path.display(),
                mode = %format!("{:o}", mode),
                "insecure key file permissions"
            );
        }
    }
}
