//! Filesystem-backed store.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use folio_core::error::StoreError;
use folio_core::identity::Account;
use folio_core::portfolio::Portfolio;
use folio_core::traits::{AccountStore, RecordStore};

/// Filesystem-backed store.
///
/// Each collection lives as one JSON array document under the root
/// directory. Writes go through a temp file and rename, under an advisory
/// lock, so a reader never observes a half-written document.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a file store rooted at the given directory.
    ///
    /// The directory (and documents) are created lazily on first save; a
    /// store that has never been written loads as empty collections.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the root directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn portfolios_path(&self) -> PathBuf {
        self.root.join("portfolios.json")
    }

    fn accounts_path(&self) -> PathBuf {
        self.root.join("accounts.json")
    }

    fn lock_path(&self) -> PathBuf {
        self.root.join("store.lock")
    }

    fn load_collection<T: DeserializeOwned>(&self, path: &Path) -> Result<Vec<T>, StoreError> {
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| StoreError::Corrupt {
            message: format!("{}: {}", path.display(), e),
        })
    }

    fn save_collection<T: Serialize>(&self, path: &Path, items: &[T]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root)?;

        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(self.lock_path())?;
        lock_file.lock_exclusive()?;

        let content =
            serde_json::to_string_pretty(items).map_err(|e| StoreError::Corrupt {
                message: e.to_string(),
            })?;

        let temp_path = path.with_extension("tmp");
        let result = fs::write(&temp_path, &content)
            .and_then(|()| fs::rename(&temp_path, path))
            .map_err(StoreError::from);

        lock_file.unlock()?;

        result
    }
}

impl RecordStore for FileStore {
    #[instrument(skip(self))]
    fn load(&self) -> Result<Vec<Portfolio>, StoreError> {
        self.load_collection(&self.portfolios_path())
    }

    #[instrument(skip(self, portfolios))]
    fn save(&self, portfolios: &[Portfolio]) -> Result<(), StoreError> {
        self.save_collection(&self.portfolios_path(), portfolios)?;
        debug!(count = portfolios.len(), "Saved portfolio collection");
        Ok(())
    }
}

impl AccountStore for FileStore {
    #[instrument(skip(self))]
    fn load_accounts(&self) -> Result<Vec<Account>, StoreError> {
        self.load_collection(&self.accounts_path())
    }

    #[instrument(skip(self, accounts))]
    fn save_accounts(&self, accounts: &[Account]) -> Result<(), StoreError> {
        self.save_collection(&self.accounts_path(), accounts)?;
        debug!(count = accounts.len(), "Saved account collection");
        Ok(())
    }
}
