//! Durable session storage.
//!
//! A session vault holds at most one serialized [`User`] record under a
//! single logical key, with no schema versioning. The abstraction exists so
//! the same [`SessionStore`](super::SessionStore) logic runs against memory
//! in tests and a JSON file on disk in the desktop build.

use std::fs;
use std::io;
use std::path::PathBuf;

use wishflick_core::User;

/// Errors raised by a session vault.
#[derive(thiserror::Error, Debug)]
pub enum VaultError {
    /// Backing storage could not be read or written.
    #[error("session storage i/o error: {0}")]
    Io(#[from] io::Error),

    /// The stored record could not be (de)serialized.
    #[error("session record serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Key-value persistence for the current session.
///
/// One record, written on every successful login/registration/profile
/// update, deleted on logout, read once at startup.
pub trait SessionVault {
    /// Read the saved session record, if any.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError`] if the backing storage is unreadable or the
    /// record is corrupt.
    fn load(&self) -> Result<Option<User>, VaultError>;

    /// Persist the session record, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError`] if the write fails.
    fn save(&mut self, user: &User) -> Result<(), VaultError>;

    /// Delete the session record. Deleting an absent record is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError`] if the delete fails.
    fn clear(&mut self) -> Result<(), VaultError>;
}

/// In-memory vault for tests and guest-grade sessions.
///
/// Stores the serialized form rather than the `User` itself, so the
/// round-trip matches what a durable backend would do.
#[derive(Debug, Default)]
pub struct MemoryVault {
    record: Option<String>,
}

impl MemoryVault {
    /// Create an empty vault.
    #[must_use]
    pub const fn new() -> Self {
        Self { record: None }
    }
}

impl SessionVault for MemoryVault {
    fn load(&self) -> Result<Option<User>, VaultError> {
        self.record
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
            .map_err(VaultError::from)
    }

    fn save(&mut self, user: &User) -> Result<(), VaultError> {
        self.record = Some(serde_json::to_string(user)?);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), VaultError> {
        self.record = None;
        Ok(())
    }
}

/// File-backed vault: one pretty-printed JSON document on disk.
#[derive(Debug, Clone)]
pub struct FileVault {
    path: PathBuf,
}

impl FileVault {
    /// Create a vault backed by `path`. The file is created lazily on the
    /// first save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this vault reads and writes.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SessionVault for FileVault {
    fn load(&self) -> Result<Option<User>, VaultError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(serde_json::from_str(&contents)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(VaultError::Io(e)),
        }
    }

    fn save(&mut self, user: &User) -> Result<(), VaultError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(user)?)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), VaultError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(VaultError::Io(e)),
        }
    }
}
